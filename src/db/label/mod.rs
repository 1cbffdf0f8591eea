/*!
A database of labels, relative to some partition of a formula into parts *A* and *B*.

- Each original clause belongs to exactly one part, noted by a [ClauseLabel].
- Each variable is either shared by both parts, or local to one part, noted by a [VariableLabel].
  Variables without a label are shared ([Global](VariableLabel::Global)).

Labels of clauses are attached to the [record](crate::db::proof::ClauseRecord) of the clause rather than the identifier of the clause.
So, a label survives deletion and restoration of a clause, and a reused identifier does not inherit the label of some earlier clause.

Labels may be revised at any time before construction of an interpolant, and construction does not revise labels.

```rust
# use otter_craig::db::label::{ClauseLabel, LabelDB, VariableLabel};
# use otter_craig::db::proof::ProofDB;
# use otter_craig::types::err;
let mut proof_db = ProofDB::default();
let mut label_db = LabelDB::default();

assert_eq!(label_db.lookup_variable(3), VariableLabel::Global);
assert!(label_db.label_variable(3, VariableLabel::ALocal));
assert!(!label_db.label_variable(3, VariableLabel::ALocal));

assert_eq!(
    label_db.label_clause(&proof_db, 1, ClauseLabel::A),
    Err(err::LabelError::UnknownClause(1))
);

proof_db.add_original(1, false, &[3, -4], false).unwrap();
assert!(label_db.label_clause(&proof_db, 1, ClauseLabel::A).is_ok());
assert_eq!(label_db.lookup_clause(&proof_db, 1), Ok(ClauseLabel::A));
```
*/

use std::collections::HashMap;

use crate::{
    db::{
        keys::{ClauseId, RecordKey},
        proof::ProofDB,
    },
    misc::log::targets::{self},
    structures::{atom::Atom, clause::ClauseSource},
    types::err::{self},
};

/// The label of a variable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VariableLabel {
    /// The variable may appear in clauses of either part.
    #[default]
    Global,

    /// The variable appears only in clauses of part *A*.
    ALocal,

    /// The variable appears only in clauses of part *B*.
    BLocal,
}

/// The label of an original clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClauseLabel {
    A,
    B,
}

impl std::fmt::Display for VariableLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "Global"),
            Self::ALocal => write!(f, "ALocal"),
            Self::BLocal => write!(f, "BLocal"),
        }
    }
}

impl std::fmt::Display for ClauseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// A database of labels.
#[derive(Default)]
pub struct LabelDB {
    /// Labels set for variables.
    atoms: HashMap<Atom, VariableLabel>,

    /// Labels set for records of original clauses.
    clauses: HashMap<RecordKey, ClauseLabel>,

    /// A label to be set for the next (fresh) original clause.
    pending: Option<ClauseLabel>,
}

impl LabelDB {
    /// Sets the label of `atom`, and returns whether this revised the database.
    ///
    /// Setting the label a variable already has does nothing.
    pub fn label_variable(&mut self, atom: Atom, label: VariableLabel) -> bool {
        match self.atoms.insert(atom, label) {
            Some(previous) if previous == label => false,

            Some(previous) => {
                log::debug!(target: targets::LABEL, "Variable {atom} relabelled from {previous} to {label}");
                true
            }

            None => {
                log::trace!(target: targets::LABEL, "Variable {atom} labelled {label}");
                true
            }
        }
    }

    /// Sets the label of the most recent clause with identifier `id`.
    ///
    /// The clause may have been deleted, so long as the identifier has not been reused.
    /// Returns an error if no clause with the identifier has been recorded.
    pub fn label_clause(
        &mut self,
        proof_db: &ProofDB,
        id: ClauseId,
        label: ClauseLabel,
    ) -> Result<(), err::LabelError> {
        let Some((key, record)) = proof_db
            .latest_key(id)
            .and_then(|key| Some((key, proof_db.record(key)?)))
        else {
            log::error!(target: targets::LABEL, "Label {label} for unknown clause {id}");
            return Err(err::LabelError::UnknownClause(id));
        };

        if record.source() == ClauseSource::Derived {
            log::warn!(target: targets::LABEL, "Label {label} for derived clause {id} will not be used");
        }

        self.label_record(key, label);
        Ok(())
    }

    /// Sets the label of the record at `key`.
    pub fn label_record(&mut self, key: RecordKey, label: ClauseLabel) {
        if let Some(previous) = self.clauses.insert(key, label) {
            if previous != label {
                log::debug!(target: targets::LABEL, "{key} relabelled from {previous} to {label}");
            }
        }
    }

    /// Sets a label to be used for the next original clause recorded, which is not a restored clause.
    pub fn label_next_clause(&mut self, label: ClauseLabel) {
        if let Some(previous) = self.pending.replace(label) {
            log::warn!(target: targets::LABEL, "Pending label {previous} replaced by {label} before use");
        }
    }

    /// Sets the pending label (if any) for the record at `key`, and returns the label.
    pub fn apply_pending(&mut self, key: RecordKey) -> Option<ClauseLabel> {
        let label = self.pending.take()?;
        self.label_record(key, label);
        Some(label)
    }

    /// The label of `atom`, with variables not explicitly labelled taken to be [Global](VariableLabel::Global).
    pub fn lookup_variable(&self, atom: Atom) -> VariableLabel {
        self.atoms.get(&atom).copied().unwrap_or_default()
    }

    /// The label of the most recent clause with identifier `id`.
    pub fn lookup_clause(
        &self,
        proof_db: &ProofDB,
        id: ClauseId,
    ) -> Result<ClauseLabel, err::LabelError> {
        let Some(key) = proof_db.latest_key(id) else {
            return Err(err::LabelError::UnknownClause(id));
        };
        self.lookup_record(key)
            .ok_or(err::LabelError::UnlabeledClause(id))
    }

    /// The label of the record at `key`, if set.
    pub fn lookup_record(&self, key: RecordKey) -> Option<ClauseLabel> {
        self.clauses.get(&key).copied()
    }

    /// An iterator over all explicitly labelled variables.
    pub fn labelled_variables(&self) -> impl Iterator<Item = (Atom, VariableLabel)> + '_ {
        self.atoms.iter().map(|(atom, label)| (*atom, *label))
    }

    /// A count of labelled clause records.
    pub fn labelled_clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Clears all labels.
    pub fn reset(&mut self) {
        self.atoms.clear();
        self.clauses.clear();
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relabelling_is_idempotent() {
        let mut labels = LabelDB::default();

        assert!(labels.label_variable(1, VariableLabel::BLocal));
        let before = labels.labelled_variables().collect::<Vec<_>>();

        assert!(!labels.label_variable(1, VariableLabel::BLocal));
        let after = labels.labelled_variables().collect::<Vec<_>>();

        assert_eq!(before, after);
    }

    #[test]
    fn unlabelled_clause() {
        let mut proof_db = ProofDB::default();
        let labels = LabelDB::default();

        assert!(proof_db.add_original(4, false, &[1], false).is_ok());
        assert_eq!(
            labels.lookup_clause(&proof_db, 4),
            Err(err::LabelError::UnlabeledClause(4))
        );
    }

    #[test]
    fn label_survives_restore() {
        let mut proof_db = ProofDB::default();
        let mut labels = LabelDB::default();

        assert!(proof_db.add_original(1, false, &[1, 2], false).is_ok());
        assert!(labels.label_clause(&proof_db, 1, ClauseLabel::B).is_ok());

        assert!(proof_db.delete(1, &[1, 2]).is_ok());
        assert_eq!(labels.lookup_clause(&proof_db, 1), Ok(ClauseLabel::B));

        assert!(proof_db.add_original(1, false, &[1, 2], true).is_ok());
        assert_eq!(labels.lookup_clause(&proof_db, 1), Ok(ClauseLabel::B));

        // Restored with other literals, so a fresh clause.
        assert!(proof_db.delete(1, &[1, 2]).is_ok());
        assert!(proof_db.add_original(1, false, &[-1, 2], true).is_ok());
        assert_eq!(
            labels.lookup_clause(&proof_db, 1),
            Err(err::LabelError::UnlabeledClause(1))
        );
    }

    #[test]
    fn label_after_delete() {
        let mut proof_db = ProofDB::default();
        let mut labels = LabelDB::default();

        let key = proof_db.add_original(1, false, &[1, 2], false).unwrap();
        assert!(proof_db.delete(1, &[1, 2]).is_ok());

        assert!(labels.label_clause(&proof_db, 1, ClauseLabel::A).is_ok());
        assert_eq!(labels.lookup_record(key), Some(ClauseLabel::A));
        assert_eq!(
            labels.label_clause(&proof_db, 2, ClauseLabel::A),
            Err(err::LabelError::UnknownClause(2))
        );
    }

    #[test]
    fn pending_label() {
        let mut proof_db = ProofDB::default();
        let mut labels = LabelDB::default();

        labels.label_next_clause(ClauseLabel::A);
        let key = proof_db.add_original(1, false, &[1], false).unwrap();
        assert_eq!(labels.apply_pending(key), Some(ClauseLabel::A));

        let key = proof_db.add_original(2, false, &[2], false).unwrap();
        assert_eq!(labels.apply_pending(key), None);
        assert_eq!(labels.lookup_record(key), None);
    }
}
