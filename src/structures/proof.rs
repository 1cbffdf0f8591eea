/*!
The parts of a proof exchanged with a solver.

- Clauses are identified by a [ClauseId], assigned by the solver.
- A derived clause is accompanied by a [ProofChain], the identifiers of the clauses from which the clause was derived.
- A proof of unsatisfiability is concluded with some [Conclusion] and a chain identifying the empty clause (or the clauses from which the empty clause is derived).

# Proof chains

A proof chain is read in the manner of LRAT hints.
On the valuation which falsifies each literal of the derived clause, each clause of the chain but the last asserts a literal, and the last clause of the chain is falsified.
Equivalently, the derived clause (or a subset of the derived clause) is obtained by resolving the last clause of the chain with each earlier clause in reverse order.
*/

pub use crate::db::keys::ClauseId;

/// The identifiers of clauses used to derive some clause, in the order used.
pub type ProofChain = Vec<ClauseId>;

/// The ways a proof of unsatisfiability may conclude.
///
/// The discriminants follow the codes used by CaDiCaL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Conclusion {
    /// The empty clause was derived from the formula.
    Conflict = 1,

    /// The formula is unsatisfiable with the current assumptions.
    Assumptions = 2,

    /// The formula is unsatisfiable with the current constraint.
    Constraint = 4,
}

impl TryFrom<i32> for Conclusion {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Conflict),
            2 => Ok(Self::Assumptions),
            4 => Ok(Self::Constraint),
            unknown_code => Err(unknown_code),
        }
    }
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conflict => write!(f, "Conflict"),
            Self::Assumptions => write!(f, "Assumptions"),
            Self::Constraint => write!(f, "Constraint"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conclusion_codes() {
        assert_eq!(Conclusion::try_from(1), Ok(Conclusion::Conflict));
        assert_eq!(Conclusion::try_from(2), Ok(Conclusion::Assumptions));
        assert_eq!(Conclusion::try_from(4), Ok(Conclusion::Constraint));
        assert_eq!(Conclusion::try_from(3), Err(3));
    }
}
