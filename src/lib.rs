//! A bridge from the proof events of a conflict-driven clause-learning solver to Craig interpolants.
//!
//! otter_craig sits between a solver and a consumer which requires more than a verdict on satisfiability.
//! During a solve the solver reports each step of a (resolution) proof: the addition of original clauses, the derivation of clauses from antecedents, the deletion of clauses, and the conclusion of the proof.
//! These steps are recorded, forwarded to an optional external observer, and on refutation compiled into an interpolant.
//!
//! # Orientation
//!
//! - The [structures] define literals, clauses and the parts of a proof.
//! - The [proof database](db::proof) is an arena of clause records keyed by the identifiers the solver assigns, with antecedents stored as indices into the arena.
//! - The [label database](db::label) records which side of a partition each clause belongs to, and whether a variable is shared or local to one side.
//! - The [tracer] module holds the event contract a solver calls (the [Tracer](tracer::Tracer) trait), the [bridge](tracer::ProofBridge) which records and forwards events, and consumers which receive forwarded events.
//! - The [interpolant] module replays the refutation and builds an interpolant as a circuit, then as a formula in conjunctive normal form.
//! - A [context](context::Craig) bundles the above for a single proof session.
//!
//! # Interpolants
//!
//! Given an unsatisfiable formula split into parts *A* and *B*, an interpolant *I* is a formula such that:
//! - *A* implies *I*.
//! - *I* and *B* are jointly unsatisfiable.
//! - Every variable of *I* is shared between *A* and *B*.
//!
//! Interpolants are built with the asymmetric system of McMillan (*Interpolation and SAT-based model checking*, 2003).
//! As the interpolant is returned as a formula in conjunctive normal form, fresh variables (one for each gate of the circuit) are also permitted.
//!
//! # Example
//!
//! ```rust
//! # use otter_craig::context::Craig;
//! # use otter_craig::config::Config;
//! # use otter_craig::db::label::{ClauseLabel, VariableLabel};
//! # use otter_craig::structures::proof::Conclusion;
//! # use otter_craig::tracer::Tracer;
//! let mut craig = Craig::from_config(Config::default());
//!
//! craig.label_variable(1, VariableLabel::ALocal);
//! craig.label_variable(2, VariableLabel::Global);
//!
//! // A: (1 ∨ 2) ∧ ¬1,  B: ¬2
//! craig.add_original_clause(1, false, &[1, 2], false).unwrap();
//! craig.add_original_clause(2, false, &[-1], false).unwrap();
//! craig.add_original_clause(3, false, &[-2], false).unwrap();
//!
//! craig.label_clause(1, ClauseLabel::A).unwrap();
//! craig.label_clause(2, ClauseLabel::A).unwrap();
//! craig.label_clause(3, ClauseLabel::B).unwrap();
//!
//! craig.add_derived_clause(4, true, &[], &[2, 1, 3]).unwrap();
//! craig.conclude_unsat(Conclusion::Conflict, &[4]).unwrap();
//!
//! let interpolant = craig.construct_interpolant(3).unwrap();
//! assert_eq!(interpolant.clauses(), &[vec![2]]);
//! assert_eq!(interpolant.next_free_variable(), 3);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, to targets listed in [misc::log].
//! No log implementation is provided.

pub mod config;
pub mod context;
pub mod db;
pub mod interpolant;
pub mod misc;
pub mod reports;
pub mod structures;
pub mod tracer;
pub mod types;
