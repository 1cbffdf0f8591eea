/*!
A bridge from the events of a solver to a record of the proof and an external consumer.

On each event the bridge:
1. Updates the [proof database](crate::db::proof), returning any error to the solver without forwarding the event.
2. Forwards the event to the registered consumer (if any), with slices of buffers owned by the bridge rather than the solver.
3. Returns any error from the consumer to the solver.

The record made in the first step is authoritative, and is kept regardless of any error from the consumer.

# Example

```rust
# use otter_craig::tracer::{ProofBridge, Tracer};
# use otter_craig::structures::proof::Conclusion;
let mut bridge = ProofBridge::default();

let (tx, rx) = crossbeam::channel::unbounded();
bridge.register_consumer(Box::new(otter_craig::tracer::ChannelTracer::new(tx)));

assert!(bridge.add_original_clause(1, false, &[1], false).is_ok());
assert!(bridge.add_original_clause(2, false, &[-1], false).is_ok());
assert!(bridge.add_derived_clause(3, true, &[], &[2, 1]).is_ok());
assert!(bridge.conclude_unsat(Conclusion::Conflict, &[3]).is_ok());

assert_eq!(rx.try_iter().count(), 4);
assert!(bridge.proof_db().refutation().is_some());
```
*/

use crate::{
    context::SessionState,
    db::{keys::ClauseId, proof::ProofDB},
    misc::log::targets::{self},
    structures::{literal::CLiteral, proof::Conclusion},
    types::err::{self, ErrorKind},
};

use super::Tracer;

/// Counts of events noted by a bridge.
#[derive(Clone, Debug, Default)]
pub struct BridgeCounters {
    pub original: usize,
    pub derived: usize,
    pub deleted: usize,
    pub forwarded: usize,
    pub forward_errors: usize,
}

/// A bridge from the events of a solver to a record of the proof and an external consumer.
#[derive(Default)]
pub struct ProofBridge {
    /// The record of the proof.
    proof_db: ProofDB,

    /// The state of the session, as observed from events.
    state: SessionState,

    /// The consumer to which events are forwarded.
    consumer: Option<Box<dyn Tracer>>,

    counters: BridgeCounters,
}

impl ProofBridge {
    /// Registers a consumer to receive each subsequent event, and returns any consumer previously registered.
    pub fn register_consumer(&mut self, consumer: Box<dyn Tracer>) -> Option<Box<dyn Tracer>> {
        log::debug!(target: targets::FORWARD, "Consumer registered");
        self.consumer.replace(consumer)
    }

    /// Removes and returns the registered consumer, if any.
    pub fn unregister_consumer(&mut self) -> Option<Box<dyn Tracer>> {
        self.consumer.take()
    }

    pub fn has_consumer(&self) -> bool {
        self.consumer.is_some()
    }

    pub fn proof_db(&self) -> &ProofDB {
        &self.proof_db
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn counters(&self) -> &BridgeCounters {
        &self.counters
    }

    /// Releases the record of the proof and resets the state of the session.
    ///
    /// The registered consumer (if any) is kept.
    pub fn reset(&mut self) {
        self.proof_db.reset();
        self.state = SessionState::default();
        self.counters = BridgeCounters::default();
    }

    /// Forwards some event to the consumer, if registered.
    ///
    /// A method on fields, rather than the bridge, so the event may borrow from the proof database.
    fn forward(
        consumer: &mut Option<Box<dyn Tracer>>,
        counters: &mut BridgeCounters,
        event: impl FnOnce(&mut dyn Tracer) -> Result<(), ErrorKind>,
    ) -> Result<(), ErrorKind> {
        let Some(consumer) = consumer.as_mut() else {
            return Ok(());
        };

        counters.forwarded += 1;
        match event(consumer.as_mut()) {
            Ok(()) => Ok(()),

            Err(e) => {
                counters.forward_errors += 1;
                log::error!(target: targets::FORWARD, "Consumer returned {e}");
                match e {
                    ErrorKind::Forward(_) => Err(e),
                    other => Err(err::ForwardError::Consumer(Box::new(other)).into()),
                }
            }
        }
    }

    fn note_input(&mut self) {
        if self.state == SessionState::Configuration {
            self.state = SessionState::Input;
        }
    }
}

impl Tracer for ProofBridge {
    fn begin_proof(&mut self, first_id: ClauseId) -> Result<(), ErrorKind> {
        self.proof_db.begin_proof(first_id)?;
        self.note_input();
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.begin_proof(first_id)
        })
    }

    fn add_original_clause(
        &mut self,
        id: ClauseId,
        redundant: bool,
        clause: &[CLiteral],
        restored: bool,
    ) -> Result<(), ErrorKind> {
        self.proof_db.add_original(id, redundant, clause, restored)?;
        self.note_input();
        self.counters.original += 1;

        // The literals as given, which may differ from the record of a restored clause.
        let copy = clause.to_vec();
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.add_original_clause(id, redundant, &copy, restored)
        })
    }

    fn add_derived_clause(
        &mut self,
        id: ClauseId,
        redundant: bool,
        clause: &[CLiteral],
        antecedents: &[ClauseId],
    ) -> Result<(), ErrorKind> {
        let key = self
            .proof_db
            .add_derived(id, redundant, clause, antecedents)?;
        self.note_input();
        self.counters.derived += 1;

        let copy = match self.proof_db.record(key) {
            Some(record) => record.clause(),
            None => return Err(err::ProofDBError::UnknownClause(id).into()),
        };
        let antecedents = antecedents.to_vec();
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.add_derived_clause(id, redundant, copy, &antecedents)
        })
    }

    fn delete_clause(
        &mut self,
        id: ClauseId,
        redundant: bool,
        clause: &[CLiteral],
    ) -> Result<(), ErrorKind> {
        self.proof_db.delete(id, clause)?;
        self.counters.deleted += 1;

        let copy = clause.to_vec();
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.delete_clause(id, redundant, &copy)
        })
    }

    fn weaken_minus(&mut self, id: ClauseId, clause: &[CLiteral]) -> Result<(), ErrorKind> {
        let copy = clause.to_vec();
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.weaken_minus(id, &copy)
        })
    }

    fn strengthen(&mut self, id: ClauseId) -> Result<(), ErrorKind> {
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.strengthen(id)
        })
    }

    fn finalize_clause(&mut self, id: ClauseId, clause: &[CLiteral]) -> Result<(), ErrorKind> {
        let copy = clause.to_vec();
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.finalize_clause(id, &copy)
        })
    }

    fn add_assumption(&mut self, literal: CLiteral) -> Result<(), ErrorKind> {
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.add_assumption(literal)
        })
    }

    fn add_constraint(&mut self, clause: &[CLiteral]) -> Result<(), ErrorKind> {
        let copy = clause.to_vec();
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.add_constraint(&copy)
        })
    }

    fn reset_assumptions(&mut self) -> Result<(), ErrorKind> {
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.reset_assumptions()
        })
    }

    fn add_assumption_clause(
        &mut self,
        id: ClauseId,
        clause: &[CLiteral],
        antecedents: &[ClauseId],
    ) -> Result<(), ErrorKind> {
        let copy = clause.to_vec();
        let antecedents = antecedents.to_vec();
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.add_assumption_clause(id, &copy, &antecedents)
        })
    }

    fn conclude_unsat(
        &mut self,
        conclusion: Conclusion,
        proof_chain: &[ClauseId],
    ) -> Result<(), ErrorKind> {
        self.proof_db.conclude_unsat(conclusion, proof_chain)?;
        self.state = SessionState::Unsatisfiable;
        log::info!(target: targets::SESSION, "Unsatisfiable");

        let chain = proof_chain.to_vec();
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.conclude_unsat(conclusion, &chain)
        })
    }

    fn conclude_sat(&mut self, model: &[CLiteral]) -> Result<(), ErrorKind> {
        self.proof_db.clear_refutation()?;
        self.state = SessionState::Satisfiable;
        log::info!(target: targets::SESSION, "Satisfiable");

        let copy = model.to_vec();
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.conclude_sat(&copy)
        })
    }

    fn conclude_unknown(&mut self, trail: &[CLiteral]) -> Result<(), ErrorKind> {
        if self.state == SessionState::Solving {
            self.state = SessionState::Input;
        }

        let copy = trail.to_vec();
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.conclude_unknown(&copy)
        })
    }

    fn solve_query(&mut self) -> Result<(), ErrorKind> {
        if self.proof_db.refutation().is_none() {
            self.state = SessionState::Solving;
        }
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.solve_query()
        })
    }

    fn report_status(&mut self, status: i32, id: ClauseId) -> Result<(), ErrorKind> {
        Self::forward(&mut self.consumer, &mut self.counters, |consumer| {
            consumer.report_status(status, id)
        })
    }
}
