use crate::{
    db::keys::{ClauseId, RecordIndex, RecordKey},
    misc::log::targets::{self},
    structures::{
        atom::ATOM_MAX,
        clause::Clause,
        literal::{CLiteral, Literal},
        proof::{Conclusion, ProofChain},
    },
    types::err::{self},
};

use super::{ClauseRecord, ProofDB, Refutation};

impl ProofDB {
    /// Notes the first identifier the solver will use.
    ///
    /// May be noted at most once in a session.
    pub fn begin_proof(&mut self, first_id: ClauseId) -> Result<(), err::ProofDBError> {
        if let Some(noted) = self.first_id {
            log::error!(target: targets::PROOF, "Proof already begun with {noted}");
            return Err(err::ProofDBError::ProofAlreadyBegun);
        }
        log::trace!(target: targets::PROOF, "Proof begins at {first_id}");
        self.first_id = Some(first_id);
        Ok(())
    }

    /// Records an original clause, and returns the key to the record.
    ///
    /// If `restored` is set, the clause is a clause previously deleted and now restored to the formula.
    /// In this case, reuse of an identifier is expected:
    /// - If the most recent record with the identifier has the same literals, the record is reactivated.
    /// - If the identifier is active the existing record is kept.
    /// - Otherwise, a fresh record is made.
    pub fn add_original(
        &mut self,
        id: ClauseId,
        redundant: bool,
        clause: &[CLiteral],
        restored: bool,
    ) -> Result<RecordKey, err::ProofDBError> {
        self.check_open()?;
        Self::check_literals(id, clause)?;

        if restored {
            if let Some(key) = self.key_of(id) {
                log::debug!(target: targets::PROOF, "Restore of active clause {id}");
                return Ok(key);
            }

            if let Some(key) = self.deleted.get(&id).copied() {
                let record = &mut self.records[key.index()];
                if record.matches(clause) {
                    record.set_active(true);
                    self.deleted.remove(&id);
                    self.active.insert(id, key);
                    log::trace!(target: targets::PROOF, "Restored {id} to {key}");
                    return Ok(key);
                }
            }
        } else if self.active.contains_key(&id) {
            log::error!(target: targets::PROOF, "Original clause {id} duplicates an active clause");
            return Err(err::ProofDBError::DuplicateClause(id));
        }

        self.deleted.remove(&id);
        let key = self.store(ClauseRecord::original(id, redundant, clause))?;
        self.active.insert(id, key);
        log::trace!(target: targets::PROOF, "Original {id}: {}", clause.as_dimacs(true));
        Ok(key)
    }

    /// Records a clause derived from the clauses with identifiers `antecedents`, and returns the key to the record.
    ///
    /// Each antecedent must be active.
    pub fn add_derived(
        &mut self,
        id: ClauseId,
        redundant: bool,
        clause: &[CLiteral],
        antecedents: &[ClauseId],
    ) -> Result<RecordKey, err::ProofDBError> {
        self.check_open()?;
        Self::check_literals(id, clause)?;

        if self.active.contains_key(&id) {
            log::error!(target: targets::PROOF, "Derived clause {id} duplicates an active clause");
            return Err(err::ProofDBError::DuplicateClause(id));
        }

        let mut keys = Vec::with_capacity(antecedents.len());
        for antecedent in antecedents {
            match self.key_of(*antecedent) {
                Some(key) => keys.push(key),
                None => {
                    log::error!(target: targets::PROOF, "Derived clause {id} uses unknown clause {antecedent}");
                    return Err(err::ProofDBError::DanglingAntecedent {
                        clause: id,
                        antecedent: *antecedent,
                    });
                }
            }
        }

        if keys.is_empty() {
            log::warn!(target: targets::PROOF, "Derived clause {id} has no antecedents");
        }

        self.deleted.remove(&id);
        let key = self.store(ClauseRecord::derived(id, redundant, clause, keys))?;
        self.active.insert(id, key);
        log::trace!(target: targets::PROOF, "Derived {id}: {} from {antecedents:?}", clause.as_dimacs(true));
        Ok(key)
    }

    /// Marks the clause with identifier `id` as deleted, and returns the key to the record of the clause.
    ///
    /// The record is kept, so any derivation which used the clause remains intact.
    pub fn delete(&mut self, id: ClauseId, clause: &[CLiteral]) -> Result<RecordKey, err::ProofDBError> {
        let Some(key) = self.active.remove(&id) else {
            log::error!(target: targets::PROOF, "Deletion of unknown clause {id}");
            return Err(err::ProofDBError::UnknownClause(id));
        };

        let record = &mut self.records[key.index()];
        if !record.matches(clause) {
            log::warn!(target: targets::PROOF, "Deletion of {id} with {} differs from the record {record}", clause.as_dimacs(true));
        }
        record.set_active(false);
        self.deleted.insert(id, key);

        log::trace!(target: targets::PROOF, "Deleted {id}");
        Ok(key)
    }

    /// Records the conclusion of a proof of unsatisfiability.
    ///
    /// For a refutation of the formula, the empty clause is identified by either:
    /// - A chain with a single identifier, of an empty clause.
    /// - The chain from which the empty clause is derived.
    ///
    /// In the latter case a record of the empty clause is made, though the record has no identifier and is never active.
    pub fn conclude_unsat(
        &mut self,
        conclusion: Conclusion,
        chain: &[ClauseId],
    ) -> Result<(), err::ProofDBError> {
        self.check_open()?;

        let mut keys = Vec::with_capacity(chain.len());
        for id in chain {
            match self.key_of(*id) {
                Some(key) => keys.push(key),
                None => {
                    log::error!(target: targets::PROOF, "Conclusion uses unknown clause {id}");
                    return Err(err::ProofDBError::UnknownClause(*id));
                }
            }
        }

        let witness = match conclusion {
            Conclusion::Conflict => {
                if keys.is_empty() {
                    log::warn!(target: targets::PROOF, "Refutation without a chain");
                    None
                } else if keys.len() == 1 && self.records[keys[0].index()].clause().is_empty() {
                    Some(keys[0])
                } else {
                    Some(self.store(ClauseRecord::refutation(keys))?)
                }
            }

            Conclusion::Assumptions | Conclusion::Constraint => None,
        };

        log::info!(target: targets::PROOF, "Unsatisfiable by {conclusion} with {chain:?}");
        self.refutation = Some(Refutation {
            conclusion,
            chain: ProofChain::from(chain),
            witness,
        });
        Ok(())
    }

    /// Clears a refutation relative to assumptions or constraints, e.g. as the formula was found satisfiable on a later solve.
    pub fn clear_refutation(&mut self) -> Result<(), err::ProofDBError> {
        self.check_open()?;
        self.refutation = None;
        Ok(())
    }

    /// Ok, unless the formula has been refuted.
    fn check_open(&self) -> Result<(), err::ProofDBError> {
        match &self.refutation {
            Some(refutation) if refutation.conclusion == Conclusion::Conflict => {
                log::error!(target: targets::PROOF, "Event after refutation");
                Err(err::ProofDBError::SessionConcluded)
            }
            _ => Ok(()),
        }
    }

    fn check_literals(id: ClauseId, clause: &[CLiteral]) -> Result<(), err::ProofDBError> {
        for literal in clause {
            if *literal == 0 {
                log::error!(target: targets::PROOF, "Clause {id} contains 0");
                return Err(err::ProofDBError::ZeroLiteral(id));
            }
            if literal.atom() > ATOM_MAX {
                log::error!(target: targets::PROOF, "Clause {id} contains {literal}");
                return Err(err::ProofDBError::LiteralOutOfBounds(id));
            }
        }
        Ok(())
    }

    fn store(&mut self, record: ClauseRecord) -> Result<RecordKey, err::ProofDBError> {
        let Ok(index) = RecordIndex::try_from(self.records.len()) else {
            return Err(err::ProofDBError::StorageExhausted);
        };
        self.records.push(record);
        Ok(RecordKey(index))
    }
}
