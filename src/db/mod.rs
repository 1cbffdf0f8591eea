//! Databases for holding information relevant to a proof session.
//!
//!   - [The proof database](crate::db::proof)
//!     + An arena of clause records, each stored at some [RecordKey] and (while active) accessible by the [ClauseId] assigned by the solver. \
//!       From an external perspective there are two important kinds of clause:
//!       * Original clauses \
//!         Original clauses are clauses of the formula given to the solver.
//!       * Derived clauses \
//!         Clauses derived by the solver, together with the (records of the) clauses from which they were derived.
//!
//!   - [The label database](crate::db::label)
//!     + Labels of variables and original clauses, relative to some partition of the formula.

pub mod keys;
pub use keys::*;
pub mod label;
pub mod proof;
