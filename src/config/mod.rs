/*!
Configuration of a session.

All configuration for a session is contained within [Config].
Each option notes the last [state](crate::context::SessionState) of a session at which the option may be revised.
*/

mod config_option;
pub use config_option::ConfigOption;

mod mode;
pub use mode::InterpolationMode;

use crate::context::SessionState;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The system used to construct an interpolant.
    pub mode: ConfigOption<InterpolationMode>,

    /// Require the literals obtained by resolving the antecedents of a derived clause to be contained in the clause.
    pub check_derivations: ConfigOption<bool>,

    /// Require each antecedent of a derived clause to be used in the derivation.
    ///
    /// Otherwise, antecedents which do not clash with the resolvent are skipped.
    pub strict_chains: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: ConfigOption {
                name: "mode",
                min: InterpolationMode::MIN,
                max: InterpolationMode::MAX,
                max_state: SessionState::Unsatisfiable,
                value: InterpolationMode::Asymmetric,
            },

            check_derivations: ConfigOption {
                name: "check_derivations",
                min: false,
                max: true,
                max_state: SessionState::Unsatisfiable,
                value: true,
            },

            strict_chains: ConfigOption {
                name: "strict_chains",
                min: false,
                max: true,
                max_state: SessionState::Unsatisfiable,
                value: false,
            },
        }
    }
}
