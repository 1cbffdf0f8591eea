/*!
Events of a proof as owned values.

A [ProofStep] holds a copy of every buffer given with an event, and so may outlive the call in which the event was noted.
Steps may be [replayed](ProofStep::replay) to any tracer.
*/

use crate::{
    db::keys::ClauseId,
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
        proof::{Conclusion, ProofChain},
    },
    types::err::ErrorKind,
};

use super::Tracer;

/// An event of a proof, with an owned copy of any buffer given with the event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProofStep {
    Begin {
        first_id: ClauseId,
    },

    Original {
        id: ClauseId,
        redundant: bool,
        clause: CClause,
        restored: bool,
    },

    Derived {
        id: ClauseId,
        redundant: bool,
        clause: CClause,
        antecedents: ProofChain,
    },

    Delete {
        id: ClauseId,
        redundant: bool,
        clause: CClause,
    },

    WeakenMinus {
        id: ClauseId,
        clause: CClause,
    },

    Strengthen {
        id: ClauseId,
    },

    Finalize {
        id: ClauseId,
        clause: CClause,
    },

    Assumption(CLiteral),

    Constraint(CClause),

    ResetAssumptions,

    AssumptionClause {
        id: ClauseId,
        clause: CClause,
        antecedents: ProofChain,
    },

    Unsat {
        conclusion: Conclusion,
        chain: ProofChain,
    },

    Sat {
        model: CClause,
    },

    Unknown {
        trail: CClause,
    },

    SolveQuery,

    Status {
        status: i32,
        id: ClauseId,
    },
}

impl ProofStep {
    /// Notes the step to `tracer`, as the solver would have.
    pub fn replay(&self, tracer: &mut dyn Tracer) -> Result<(), ErrorKind> {
        match self {
            Self::Begin { first_id } => tracer.begin_proof(*first_id),

            Self::Original {
                id,
                redundant,
                clause,
                restored,
            } => tracer.add_original_clause(*id, *redundant, clause, *restored),

            Self::Derived {
                id,
                redundant,
                clause,
                antecedents,
            } => tracer.add_derived_clause(*id, *redundant, clause, antecedents),

            Self::Delete {
                id,
                redundant,
                clause,
            } => tracer.delete_clause(*id, *redundant, clause),

            Self::WeakenMinus { id, clause } => tracer.weaken_minus(*id, clause),

            Self::Strengthen { id } => tracer.strengthen(*id),

            Self::Finalize { id, clause } => tracer.finalize_clause(*id, clause),

            Self::Assumption(literal) => tracer.add_assumption(*literal),

            Self::Constraint(clause) => tracer.add_constraint(clause),

            Self::ResetAssumptions => tracer.reset_assumptions(),

            Self::AssumptionClause {
                id,
                clause,
                antecedents,
            } => tracer.add_assumption_clause(*id, clause, antecedents),

            Self::Unsat { conclusion, chain } => tracer.conclude_unsat(*conclusion, chain),

            Self::Sat { model } => tracer.conclude_sat(model),

            Self::Unknown { trail } => tracer.conclude_unknown(trail),

            Self::SolveQuery => tracer.solve_query(),

            Self::Status { status, id } => tracer.report_status(*status, *id),
        }
    }
}

impl std::fmt::Display for ProofStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Begin { first_id } => write!(f, "begin {first_id}"),
            Self::Original { id, clause, .. } => write!(f, "o {id} {}", clause.as_dimacs(true)),
            Self::Derived {
                id,
                clause,
                antecedents,
                ..
            } => write!(f, "a {id} {} {antecedents:?}", clause.as_dimacs(true)),
            Self::Delete { id, clause, .. } => write!(f, "d {id} {}", clause.as_dimacs(true)),
            Self::WeakenMinus { id, .. } => write!(f, "w {id}"),
            Self::Strengthen { id } => write!(f, "s {id}"),
            Self::Finalize { id, .. } => write!(f, "f {id}"),
            Self::Assumption(literal) => write!(f, "assume {literal}"),
            Self::Constraint(clause) => write!(f, "constrain {}", clause.as_dimacs(true)),
            Self::ResetAssumptions => write!(f, "reset"),
            Self::AssumptionClause { id, clause, .. } => {
                write!(f, "assumption clause {id} {}", clause.as_dimacs(true))
            }
            Self::Unsat { conclusion, chain } => write!(f, "unsat {conclusion} {chain:?}"),
            Self::Sat { .. } => write!(f, "sat"),
            Self::Unknown { .. } => write!(f, "unknown"),
            Self::SolveQuery => write!(f, "solve"),
            Self::Status { status, .. } => write!(f, "status {status}"),
        }
    }
}

/// Implements [Tracer] for a type with a method `accept(&mut self, step: ProofStep) -> Result<(), ErrorKind>`, by making a step of each event.
macro_rules! tracer_by_steps {
    ($tracer:ty) => {
        impl $crate::tracer::Tracer for $tracer {
            fn begin_proof(&mut self, first_id: ClauseId) -> Result<(), ErrorKind> {
                self.accept(ProofStep::Begin { first_id })
            }

            fn add_original_clause(
                &mut self,
                id: ClauseId,
                redundant: bool,
                clause: &[CLiteral],
                restored: bool,
            ) -> Result<(), ErrorKind> {
                self.accept(ProofStep::Original {
                    id,
                    redundant,
                    clause: clause.to_vec(),
                    restored,
                })
            }

            fn add_derived_clause(
                &mut self,
                id: ClauseId,
                redundant: bool,
                clause: &[CLiteral],
                antecedents: &[ClauseId],
            ) -> Result<(), ErrorKind> {
                self.accept(ProofStep::Derived {
                    id,
                    redundant,
                    clause: clause.to_vec(),
                    antecedents: antecedents.to_vec(),
                })
            }

            fn delete_clause(
                &mut self,
                id: ClauseId,
                redundant: bool,
                clause: &[CLiteral],
            ) -> Result<(), ErrorKind> {
                self.accept(ProofStep::Delete {
                    id,
                    redundant,
                    clause: clause.to_vec(),
                })
            }

            fn weaken_minus(&mut self, id: ClauseId, clause: &[CLiteral]) -> Result<(), ErrorKind> {
                self.accept(ProofStep::WeakenMinus {
                    id,
                    clause: clause.to_vec(),
                })
            }

            fn strengthen(&mut self, id: ClauseId) -> Result<(), ErrorKind> {
                self.accept(ProofStep::Strengthen { id })
            }

            fn finalize_clause(&mut self, id: ClauseId, clause: &[CLiteral]) -> Result<(), ErrorKind> {
                self.accept(ProofStep::Finalize {
                    id,
                    clause: clause.to_vec(),
                })
            }

            fn add_assumption(&mut self, literal: CLiteral) -> Result<(), ErrorKind> {
                self.accept(ProofStep::Assumption(literal))
            }

            fn add_constraint(&mut self, clause: &[CLiteral]) -> Result<(), ErrorKind> {
                self.accept(ProofStep::Constraint(clause.to_vec()))
            }

            fn reset_assumptions(&mut self) -> Result<(), ErrorKind> {
                self.accept(ProofStep::ResetAssumptions)
            }

            fn add_assumption_clause(
                &mut self,
                id: ClauseId,
                clause: &[CLiteral],
                antecedents: &[ClauseId],
            ) -> Result<(), ErrorKind> {
                self.accept(ProofStep::AssumptionClause {
                    id,
                    clause: clause.to_vec(),
                    antecedents: antecedents.to_vec(),
                })
            }

            fn conclude_unsat(
                &mut self,
                conclusion: Conclusion,
                proof_chain: &[ClauseId],
            ) -> Result<(), ErrorKind> {
                self.accept(ProofStep::Unsat {
                    conclusion,
                    chain: proof_chain.to_vec(),
                })
            }

            fn conclude_sat(&mut self, model: &[CLiteral]) -> Result<(), ErrorKind> {
                self.accept(ProofStep::Sat {
                    model: model.to_vec(),
                })
            }

            fn conclude_unknown(&mut self, trail: &[CLiteral]) -> Result<(), ErrorKind> {
                self.accept(ProofStep::Unknown {
                    trail: trail.to_vec(),
                })
            }

            fn solve_query(&mut self) -> Result<(), ErrorKind> {
                self.accept(ProofStep::SolveQuery)
            }

            fn report_status(&mut self, status: i32, id: ClauseId) -> Result<(), ErrorKind> {
                self.accept(ProofStep::Status { status, id })
            }
        }
    };
}

pub(super) use tracer_by_steps;

/// A tracer which records each event as a [ProofStep].
#[derive(Default)]
pub struct ProofRecorder {
    steps: Vec<ProofStep>,
}

impl ProofRecorder {
    fn accept(&mut self, step: ProofStep) -> Result<(), ErrorKind> {
        self.steps.push(step);
        Ok(())
    }

    /// The steps recorded, in the order noted.
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Takes the steps recorded, leaving the recorder empty.
    pub fn take_steps(&mut self) -> Vec<ProofStep> {
        std::mem::take(&mut self.steps)
    }

    /// Replays each recorded step to `tracer`, stopping at the first error.
    pub fn replay(&self, tracer: &mut dyn Tracer) -> Result<(), ErrorKind> {
        for step in &self.steps {
            step.replay(tracer)?;
        }
        Ok(())
    }
}

tracer_by_steps!(ProofRecorder);
