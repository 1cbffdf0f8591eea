/*!
A database of the steps of a proof.

The database is an arena of [clause records](ClauseRecord).
- Each record is stored at a [RecordKey], which is never reused.
- Active clauses are accessible by the [ClauseId] assigned by the solver.
- A derived clause stores the keys of its antecedents, and so the proof is a directed acyclic graph over keys: an antecedent is always recorded before any clause derived from it.

On deletion of a clause the record of the clause is kept (though inactive), as some derivation may have used the clause.
If a deleted clause is restored, the record is reactivated.

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.
*/

mod get;
mod record;
mod store;

use std::collections::HashMap;

pub use record::ClauseRecord;

use crate::{
    db::keys::{ClauseId, RecordKey},
    structures::proof::{Conclusion, ProofChain},
};

/// The conclusion of a proof of unsatisfiability.
#[derive(Clone, Debug)]
pub struct Refutation {
    /// How the proof concluded.
    conclusion: Conclusion,

    /// The identifiers given with the conclusion.
    chain: ProofChain,

    /// The key to the record of the empty clause, for a refutation of the formula.
    witness: Option<RecordKey>,
}

impl Refutation {
    pub fn conclusion(&self) -> Conclusion {
        self.conclusion
    }

    pub fn chain(&self) -> &[ClauseId] {
        &self.chain
    }

    pub fn witness(&self) -> Option<RecordKey> {
        self.witness
    }
}

/// A database of the steps of a proof.
#[derive(Default)]
pub struct ProofDB {
    /// Every record made during the session.
    records: Vec<ClauseRecord>,

    /// A map from the identifiers of active clauses to their records.
    active: HashMap<ClauseId, RecordKey>,

    /// A map from the identifiers of deleted clauses to their most recent record.
    deleted: HashMap<ClauseId, RecordKey>,

    /// The first identifier the solver noted it will use.
    first_id: Option<ClauseId>,

    /// The conclusion of the proof, if unsatisfiability has been established.
    refutation: Option<Refutation>,
}

impl ProofDB {
    /// Clears the database, releasing all records.
    pub fn reset(&mut self) {
        self.records.clear();
        self.active.clear();
        self.deleted.clear();
        self.first_id = None;
        self.refutation = None;
    }
}
