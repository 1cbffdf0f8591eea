/*!
Reports for a session.
*/

use crate::context::SessionState;

/// High-level reports regarding the most recent solve noted by a session.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula is satisfiable.
    Satisfiable,

    /// The formula is unsatisfiable, possibly relative to assumptions.
    Unsatisfiable,

    /// Satisfiability of the formula is unknown, for some reason.
    Unknown,
}

impl From<SessionState> for Report {
    fn from(value: SessionState) -> Self {
        match value {
            SessionState::Configuration | SessionState::Input | SessionState::Solving => {
                Self::Unknown
            }
            SessionState::Satisfiable => Self::Satisfiable,
            SessionState::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
