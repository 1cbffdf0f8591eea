/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when diagnosing a proof, a labelling, or an interpolant.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [proof database](crate::db::proof)
    pub const PROOF: &str = "proof";

    /// Logs related to the [label database](crate::db::label)
    pub const LABEL: &str = "label";

    /// Logs related to forwarding events to a registered consumer
    pub const FORWARD: &str = "forward";

    /// Logs related to tracers attached to a solver
    pub const ATTACHMENT: &str = "attachment";

    /// Logs related to [interpolant construction](crate::interpolant)
    pub const INTERPOLANT: &str = "interpolant";

    /// Logs related to the [Tseitin transformation](crate::interpolant::tseitin)
    pub const TSEITIN: &str = "tseitin";

    /// Logs related to the [session](crate::context)
    pub const SESSION: &str = "session";
}
