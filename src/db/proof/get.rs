use crate::{
    db::keys::{ClauseId, RecordKey},
    structures::literal::CLiteral,
};

use super::{ClauseRecord, ProofDB, Refutation};

impl ProofDB {
    /// The key to the record of the active clause with identifier `id`, if one exists.
    pub fn key_of(&self, id: ClauseId) -> Option<RecordKey> {
        self.active.get(&id).copied()
    }

    /// The key to the most recent record with identifier `id`, active or deleted, if one exists.
    pub fn latest_key(&self, id: ClauseId) -> Option<RecordKey> {
        self.key_of(id).or_else(|| self.deleted.get(&id).copied())
    }

    /// Whether some active clause has identifier `id`.
    pub fn contains(&self, id: ClauseId) -> bool {
        self.active.contains_key(&id)
    }

    /// The record of the active clause with identifier `id`, if one exists.
    pub fn get(&self, id: ClauseId) -> Option<&ClauseRecord> {
        self.key_of(id).and_then(|key| self.record(key))
    }

    /// The literals of the active clause with identifier `id`, if one exists.
    pub fn clause(&self, id: ClauseId) -> Option<&[CLiteral]> {
        self.get(id).map(|record| record.clause())
    }

    /// The record stored at `key`, if one exists.
    pub fn record(&self, key: RecordKey) -> Option<&ClauseRecord> {
        self.records.get(key.index())
    }

    /// An iterator over all records, active or not, in the order recorded.
    pub fn records(&self) -> impl Iterator<Item = (RecordKey, &ClauseRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (RecordKey(index as u32), record))
    }

    /// A count of all records, active or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A count of active clauses.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// The first identifier the solver noted it would use, if noted.
    pub fn first_id(&self) -> Option<ClauseId> {
        self.first_id
    }

    /// The conclusion of a proof of unsatisfiability, if any.
    pub fn refutation(&self) -> Option<&Refutation> {
        self.refutation.as_ref()
    }
}
