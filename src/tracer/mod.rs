/*!
The contract between a solver and anything which observes the proof of a solve.

A solver calls the methods of a [Tracer] on each step of a proof, in the order the steps are taken, and on the thread used for the solve.
Each call returns before the solver proceeds.

# The contract

Every method has a default implementation which does nothing, and so an implementation need only note the events of interest.
Still, a solver calls every method, whether or not the method is of interest.

- [begin_proof](Tracer::begin_proof) notes the first identifier the solver will use.
- [add_original_clause](Tracer::add_original_clause) notes a clause of the formula, or a clause restored to the formula.
- [add_derived_clause](Tracer::add_derived_clause) notes a clause derived from the clauses given by a [proof chain](crate::structures::proof).
- [delete_clause](Tracer::delete_clause) notes a clause is no longer active.
- [conclude_unsat](Tracer::conclude_unsat) and [conclude_sat](Tracer::conclude_sat) note the conclusion of a solve.

The remaining methods note steps of no interest to the construction of an interpolant.

# Buffers

Literals and identifiers are passed as slices which are valid only for the duration of the call.
Any implementation which keeps the contents of a slice must make a copy.

# Implementations

- [ProofBridge] records a proof and forwards each event to a registered consumer.
- [ProofRecorder] records each event as an owned [ProofStep].
- [ChannelTracer] sends each event as an owned [ProofStep] through a channel.
- The [session](crate::context::Craig) of the library, which is a bridge together with labels.

A solver holds attached tracers through [Attachments].
*/

mod attachments;
pub use attachments::{Attachments, SharedTracer, TracerKey};

mod bridge;
pub use bridge::ProofBridge;

mod channel;
pub use channel::ChannelTracer;

mod step;
pub use step::{ProofRecorder, ProofStep};

use crate::{
    db::keys::ClauseId,
    structures::{literal::CLiteral, proof::Conclusion},
    types::err::ErrorKind,
};

/// The events of a proof, as observed by a tracer.
#[allow(unused_variables)]
pub trait Tracer {
    /// The proof begins, with `first_id` the first identifier the solver will use.
    fn begin_proof(&mut self, first_id: ClauseId) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// A clause of the formula.
    ///
    /// If `restored` is set, the clause was deleted and is now restored, possibly with the same identifier.
    fn add_original_clause(
        &mut self,
        id: ClauseId,
        redundant: bool,
        clause: &[CLiteral],
        restored: bool,
    ) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// A clause derived from the clauses identified by `antecedents`.
    fn add_derived_clause(
        &mut self,
        id: ClauseId,
        redundant: bool,
        clause: &[CLiteral],
        antecedents: &[ClauseId],
    ) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// A clause is no longer active.
    fn delete_clause(
        &mut self,
        id: ClauseId,
        redundant: bool,
        clause: &[CLiteral],
    ) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// A clause is moved aside, e.g. during variable elimination, and may later be restored.
    fn weaken_minus(&mut self, id: ClauseId, clause: &[CLiteral]) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// A clause previously weakened is strengthened.
    fn strengthen(&mut self, id: ClauseId) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// A clause remains active at the end of the proof.
    fn finalize_clause(&mut self, id: ClauseId, clause: &[CLiteral]) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// A literal is assumed for the next solve.
    fn add_assumption(&mut self, literal: CLiteral) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// A constraint (a clause which holds only for the next solve).
    fn add_constraint(&mut self, clause: &[CLiteral]) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// Assumptions (and any constraint) are cleared.
    fn reset_assumptions(&mut self) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// A clause over negated assumptions, derived from the clauses identified by `antecedents`.
    fn add_assumption_clause(
        &mut self,
        id: ClauseId,
        clause: &[CLiteral],
        antecedents: &[ClauseId],
    ) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// The formula is unsatisfiable, as witnessed by the clauses identified by `proof_chain`.
    fn conclude_unsat(
        &mut self,
        conclusion: Conclusion,
        proof_chain: &[ClauseId],
    ) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// The formula is satisfiable, with `model` a satisfying assignment.
    fn conclude_sat(&mut self, model: &[CLiteral]) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// The solve ended without a conclusion, with `trail` the assignment at the end of the solve.
    fn conclude_unknown(&mut self, trail: &[CLiteral]) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// A solve begins.
    fn solve_query(&mut self) -> Result<(), ErrorKind> {
        Ok(())
    }

    /// The status of the solver after a solve, e.g. `10` for satisfiable, `20` for unsatisfiable.
    fn report_status(&mut self, status: i32, id: ClauseId) -> Result<(), ErrorKind> {
        Ok(())
    }
}
