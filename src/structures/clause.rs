//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//! Order of the literals in a clause is preserved, though the order is irrelevant to the interpretation of the clause.
//!
//! ```rust
//! # use otter_craig::structures::clause::{CClause, Clause};
//! let clause: CClause = vec![23, -41, 3];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "23 -41 3 0");
//! assert!(clause.satisfied_by(|atom| atom == 41 || atom == 3));
//! assert!(!clause.satisfied_by(|atom| atom == 41));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in the order given to the clause.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in the order given to the clause.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether some literal of the clause is true on the valuation given by `value_of`.
    fn satisfied_by(&self, value_of: impl Fn(Atom) -> bool) -> bool;

    /// Whether the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }

        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_by(&self, value_of: impl Fn(Atom) -> bool) -> bool {
        self.iter()
            .any(|literal| value_of(literal.atom()) == literal.polarity())
    }

    fn is_tautology(&self) -> bool {
        self.iter()
            .any(|literal| self.contains(&literal.negate()))
    }
}

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause of the formula given to the solver, or a clause restored to the formula.
    Original,

    /// A clause derived from other clauses.
    Derived,
}
