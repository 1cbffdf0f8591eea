use crate::{
    db::keys::{ClauseId, RecordKey},
    structures::{clause::ClauseSource, literal::CLiteral},
};

/// A record of a clause in the proof database.
///
/// Records are never removed during a session.
/// Instead, on deletion of a clause the record is marked inactive, and the record remains available to any derivation which used the clause.
#[derive(Clone, Debug)]
pub struct ClauseRecord {
    /// The identifier assigned by the solver, if any.
    /// Only the record of an empty clause synthesised from the conclusion of a proof lacks an identifier.
    id: Option<ClauseId>,

    /// A copy of the literals of the clause, in the order given.
    clause: Box<[CLiteral]>,

    redundant: bool,

    source: ClauseSource,

    /// Keys to the records of the antecedents of a derived clause, in the order given.
    antecedents: Box<[RecordKey]>,

    /// Whether the clause is active (has not been deleted).
    active: bool,
}

impl ClauseRecord {
    pub(super) fn original(id: ClauseId, redundant: bool, clause: &[CLiteral]) -> Self {
        ClauseRecord {
            id: Some(id),
            clause: clause.into(),
            redundant,
            source: ClauseSource::Original,
            antecedents: Box::default(),
            active: true,
        }
    }

    pub(super) fn derived(
        id: ClauseId,
        redundant: bool,
        clause: &[CLiteral],
        antecedents: Vec<RecordKey>,
    ) -> Self {
        ClauseRecord {
            id: Some(id),
            clause: clause.into(),
            redundant,
            source: ClauseSource::Derived,
            antecedents: antecedents.into_boxed_slice(),
            active: true,
        }
    }

    /// The empty clause, derived from the chain given at the conclusion of a proof.
    pub(super) fn refutation(antecedents: Vec<RecordKey>) -> Self {
        ClauseRecord {
            id: None,
            clause: Box::default(),
            redundant: true,
            source: ClauseSource::Derived,
            antecedents: antecedents.into_boxed_slice(),
            active: false,
        }
    }

    pub fn id(&self) -> Option<ClauseId> {
        self.id
    }

    pub fn clause(&self) -> &[CLiteral] {
        &self.clause
    }

    pub fn is_redundant(&self) -> bool {
        self.redundant
    }

    pub fn source(&self) -> ClauseSource {
        self.source
    }

    pub fn antecedents(&self) -> &[RecordKey] {
        &self.antecedents
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(super) fn set_active(&mut self, active: bool) {
        self.active = active
    }

    /// Whether the record has the same literals as `clause`, ignoring order.
    pub(super) fn matches(&self, clause: &[CLiteral]) -> bool {
        if self.clause.len() != clause.len() {
            return false;
        }
        let mut ours = self.clause.to_vec();
        let mut theirs = clause.to_vec();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }
}

impl std::fmt::Display for ClauseRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::structures::clause::Clause;
        match self.id {
            Some(id) => write!(f, "{id}: {}", self.clause.as_dimacs(true)),
            None => write!(f, "refutation: 0"),
        }
    }
}
