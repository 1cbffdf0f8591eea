/// The identifier of a clause, as assigned by a solver.
///
/// Identifiers are unique among active clauses, and may be reused only after the clause with the identifier has been deleted.
pub type ClauseId = u64;

/// The index of a record in the proof database.
pub type RecordIndex = u32;

/// A key to access a record stored in the proof database.
///
/// Unlike a [ClauseId], a key is never reused within a session.
/// So, keys may be stored as references to antecedents without concern for later deletion of the referenced clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey(pub(crate) RecordIndex);

impl RecordKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Record({})", self.0)
    }
}
