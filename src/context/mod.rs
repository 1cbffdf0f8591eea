/*!
The session, within which a proof is recorded and labelled, and from which an interpolant is constructed.

Strictly, a [Craig] session, and the [state](SessionState) of a session.

A session is a [bridge](crate::tracer::ProofBridge) together with a [label database](crate::db::label) and a [configuration](crate::config).
As a session is a [Tracer](crate::tracer::Tracer), a session is attached to a solver in the same way as any other tracer.

Each session is independent of any other session, and sessions should not be shared between solvers.

# Lifecycle

- A session is created with some configuration, and attached to a solver.
- Labels are set for variables and clauses, before or after the relevant clauses are added.
- The solver notes each step of a proof to the session.
- On a refutation, an interpolant is constructed. Construction does not revise the session, and so may be repeated (e.g. after revising labels).
- The session is [reset](Craig::reset) or dropped, releasing all records.
*/

mod craig;
pub use craig::Craig;

/// The state of a session.
///
/// These broadly follow the states of a solver, as observed from events noted by the solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No event has been noted.
    #[default]
    Configuration,

    /// Clauses have been noted.
    Input,

    /// A solve is in progress.
    Solving,

    /// The most recent solve concluded the formula is satisfiable.
    Satisfiable,

    /// The most recent solve concluded the formula is unsatisfiable (possibly relative to assumptions).
    Unsatisfiable,
}

impl SessionState {
    /// The stage of a session in the state, with states which may be revised by a further solve sharing the last stage.
    pub fn stage(&self) -> u8 {
        match self {
            Self::Configuration => 0,
            Self::Input => 1,
            Self::Solving => 2,
            Self::Satisfiable | Self::Unsatisfiable => 3,
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}
