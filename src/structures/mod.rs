//! Key structures, such as literals, clauses, and the parts of a proof.
//!
//! As in most solvers, literals are represented as signed integers, with the sign of the integer indicating the polarity of the literal.
//! The [Literal](literal::Literal) trait gives names to the operations on this representation.
//!
//! ## Formulas
//!
//! A formula is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//! An [interpolant](crate::interpolant::Interpolant) is returned as a formula.
//!
//! ## Proofs
//!
//! A (resolution) proof is a directed acyclic graph of clauses, each clause either original or derived from earlier clauses.
//! The [proof] module defines the parts of a proof exchanged with a solver.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod proof;
