//! Error types used in the library.
//!
//! - Errors when recording a proof are returned to the caller of the relevant event, e.g. the solver.
//!   These are never retried, as proof events are not idempotent.
//! - Errors during construction of an interpolant leave the recorded proof untouched, so labels may be revised and construction attempted again.
//! - Errors from a consumer to which events are forwarded are returned after the local record has been updated.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{
    config::InterpolationMode,
    db::keys::ClauseId,
    structures::{atom::Atom, proof::Conclusion},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    ProofDB(ProofDBError),
    Label(LabelError),
    Interpolation(InterpolationError),
    Forward(ForwardError),
    State(StateError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProofDB(e) => write!(f, "ProofDB({e:?})"),
            Self::Label(e) => write!(f, "Label({e:?})"),
            Self::Interpolation(e) => write!(f, "Interpolation({e:?})"),
            Self::Forward(e) => write!(f, "Forward({e:?})"),
            Self::State(e) => write!(f, "State({e:?})"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when recording a proof.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProofDBError {
    /// No active clause has the identifier.
    UnknownClause(ClauseId),

    /// An antecedent of a derived clause is not an active clause.
    DanglingAntecedent {
        clause: ClauseId,
        antecedent: ClauseId,
    },

    /// An identifier was used for a fresh clause while some clause with the identifier is active.
    DuplicateClause(ClauseId),

    /// The start of a proof was noted more than once.
    ProofAlreadyBegun,

    /// The proof has concluded with a refutation, and no further clauses may be recorded.
    SessionConcluded,

    /// The literal `0` was found within a clause.
    ZeroLiteral(ClauseId),

    /// A literal within a clause has an atom greater than the largest atom.
    LiteralOutOfBounds(ClauseId),

    /// All possible keys have been used for records.
    StorageExhausted,
}

impl From<ProofDBError> for ErrorKind {
    fn from(e: ProofDBError) -> Self {
        ErrorKind::ProofDB(e)
    }
}

/// Errors in the label database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelError {
    /// No clause with the identifier has been recorded.
    UnknownClause(ClauseId),

    /// A clause has not been labelled.
    UnlabeledClause(ClauseId),
}

impl From<LabelError> for ErrorKind {
    fn from(e: LabelError) -> Self {
        ErrorKind::Label(e)
    }
}

/// Errors during construction of an interpolant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InterpolationError {
    /// The proof has not concluded with a refutation.
    NoRefutation,

    /// The refutation is relative to assumptions or constraints, and so is not a refutation of the formula.
    UnsupportedConclusion(Conclusion),

    /// The requested construction is not supported.
    UnsupportedMode(InterpolationMode),

    /// An original clause used in the refutation has no label.
    UnknownLabel(ClauseId),

    /// The antecedents of the clause do not resolve to the clause.
    MalformedProof(ClauseId),

    /// The antecedents given at the conclusion of the proof do not resolve to the empty clause.
    MalformedRefutation,

    /// A variable local to one part of the partition appears in a clause of the other part.
    MislabeledVariable { clause: ClauseId, atom: Atom },

    /// There are no more fresh variables.
    AtomsExhausted,

    /// The first fresh variable is zero, or not greater than some variable of the interpolant.
    InvalidFreshVariable(Atom),
}

impl From<InterpolationError> for ErrorKind {
    fn from(e: InterpolationError) -> Self {
        ErrorKind::Interpolation(e)
    }
}

/// Errors from a consumer to which events are forwarded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ForwardError {
    /// The receiving end of a channel has been dropped.
    Disconnected,

    /// The consumer rejected an event, for the noted reason.
    Rejected(String),

    /// The consumer returned some other error.
    Consumer(Box<ErrorKind>),

    /// An attached tracer was borrowed elsewhere when an event was noted.
    TracerInUse,
}

impl From<ForwardError> for ErrorKind {
    fn from(e: ForwardError) -> Self {
        ErrorKind::Forward(e)
    }
}

/// Errors regarding the state of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// An option was set after the last state at which the option may be set.
    ConfigurationLocked(&'static str),

    /// A value outside the bounds of an option.
    OutOfBounds(&'static str),
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
