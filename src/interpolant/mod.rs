/*!
Interpolants, and their construction from a refutation.

An [Interpolant] is built in two stages:
1. The refutation is replayed, and a [circuit](circuit::Circuit) is built with a partial interpolant for each clause used ([construct]).
2. The circuit is encoded as a formula in conjunctive normal form, with a fresh variable for each conjunction ([tseitin]).

An interpolant keeps the circuit, so an interpolant may be evaluated without the fresh variables of the encoding.
*/

pub mod circuit;
pub mod construct;
pub mod tseitin;

use std::collections::BTreeSet;

pub use construct::construct_interpolant;

use crate::structures::{
    atom::Atom,
    clause::{CClause, Clause},
};

use circuit::{Circuit, Edge};

/// An interpolant, as a formula in conjunctive normal form together with the circuit from which the formula was encoded.
#[derive(Clone, Debug)]
pub struct Interpolant {
    clauses: Vec<CClause>,

    /// The first variable which could have been used as a fresh variable.
    first_free_variable: Atom,

    /// The least variable not used as a fresh variable.
    next_free_variable: Atom,

    circuit: Circuit,

    output: Edge,
}

impl Interpolant {
    /// The clauses of the interpolant.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The clauses of the interpolant, taken from the interpolant.
    pub fn into_clauses(self) -> Vec<CClause> {
        self.clauses
    }

    /// The least variable not used as a fresh variable, to be used for any further fresh variables.
    pub fn next_free_variable(&self) -> Atom {
        self.next_free_variable
    }

    /// The fresh variables of the interpolant.
    pub fn fresh_variables(&self) -> std::ops::Range<Atom> {
        self.first_free_variable..self.next_free_variable
    }

    /// The circuit from which the clauses were encoded.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The edge to the output of the circuit.
    pub fn output(&self) -> Edge {
        self.output
    }

    /// The value of the interpolant on the valuation of (shared) variables given by `value_of`.
    pub fn evaluate(&self, value_of: impl Fn(Atom) -> bool) -> bool {
        self.circuit.evaluate(self.output, value_of)
    }

    /// The variables of the clauses of the interpolant, including fresh variables.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        self.clauses.iter().flat_map(|clause| clause.atoms()).collect()
    }

    /// The clauses of the interpolant in DIMACS form, one clause per line.
    pub fn as_dimacs(&self) -> String {
        self.clauses
            .iter()
            .map(|clause| clause.as_dimacs(true))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
