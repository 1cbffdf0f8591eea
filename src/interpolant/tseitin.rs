/*!
Encoding of a circuit as a formula in conjunctive normal form.

A fresh variable *g* is allocated for each conjunction *g* ↔ *x* ∧ *y* reachable from the output, and the conjunction is encoded with the clauses:
- ¬*g* ∨ *x*
- ¬*g* ∨ *y*
- *g* ∨ ¬*x* ∨ ¬*y*

The literal for the output is then asserted as a unit clause.

Fresh variables are allocated in the order of nodes of the circuit, and so children are named before parents.
An input is named by its variable, and so a circuit which is a single (possibly negated) input is encoded as a unit clause without any fresh variable.

Constant outputs are encoded without clauses (true) or with the empty clause (false).
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

use super::circuit::{Circuit, Edge, Node};

/// The literal of an edge, or the value of a constant edge.
#[derive(Clone, Copy)]
enum Named {
    Literal(CLiteral),
    Constant(bool),
}

/// Encodes the circuit below `output`, with fresh variables from `next_free_variable`.
///
/// Returns the clauses and the least variable not used as a fresh variable.
pub fn encode(
    circuit: &Circuit,
    output: Edge,
    next_free_variable: Atom,
) -> Result<(Vec<CClause>, Atom), err::InterpolationError> {
    if output.is_constant() {
        let clauses = match output == Edge::TRUE {
            true => Vec::default(),
            false => vec![CClause::default()],
        };
        return Ok((clauses, next_free_variable));
    }

    if next_free_variable == 0 || next_free_variable > ATOM_MAX {
        log::error!(target: targets::TSEITIN, "Fresh variables from {next_free_variable}");
        return Err(err::InterpolationError::InvalidFreshVariable(next_free_variable));
    }

    if let Some(max) = circuit.atoms(output).last() {
        if *max >= next_free_variable {
            log::error!(target: targets::TSEITIN, "Fresh variables from {next_free_variable} clash with variable {max}");
            return Err(err::InterpolationError::InvalidFreshVariable(next_free_variable));
        }
    }

    let mut names: Vec<Option<CLiteral>> = vec![None; circuit.len()];
    let name_of = |names: &[Option<CLiteral>], edge: Edge| -> Named {
        match names[edge.node()] {
            None => Named::Constant(edge.is_negated()),
            Some(literal) => match edge.is_negated() {
                true => Named::Literal(literal.negate()),
                false => Named::Literal(literal),
            },
        }
    };

    let mut clauses: Vec<CClause> = Vec::default();
    let mut next = next_free_variable;

    for index in circuit.cone(output) {
        match circuit.node(index) {
            None | Some(Node::False) => {}

            Some(Node::Input(atom)) => names[index] = Some(CLiteral::new(*atom, true)),

            Some(Node::And(a, b)) => {
                if next > ATOM_MAX {
                    log::error!(target: targets::TSEITIN, "Fresh variables exhausted");
                    return Err(err::InterpolationError::AtomsExhausted);
                }
                let gate = CLiteral::new(next, true);
                next += 1;
                names[index] = Some(gate);

                let x = name_of(&names, *a);
                let y = name_of(&names, *b);
                encode_and(&mut clauses, gate, x, y);
            }
        }
    }

    match name_of(&names, output) {
        Named::Literal(literal) => clauses.push(vec![literal]),
        Named::Constant(true) => {}
        Named::Constant(false) => clauses.push(CClause::default()),
    }

    log::debug!(target: targets::TSEITIN, "{} clauses with fresh variables {next_free_variable}..{next}", clauses.len());
    Ok((clauses, next))
}

/// Pushes the clauses for `gate` ↔ `x` ∧ `y` to `clauses`, simplified if either conjunct is a constant.
fn encode_and(clauses: &mut Vec<CClause>, gate: CLiteral, x: Named, y: Named) {
    let mut long = vec![gate];

    for conjunct in [x, y] {
        match conjunct {
            Named::Literal(literal) => {
                clauses.push(vec![gate.negate(), literal]);
                long.push(literal.negate());
            }
            Named::Constant(true) => {}
            Named::Constant(false) => clauses.push(vec![gate.negate()]),
        }
    }

    clauses.push(long);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::clause::Clause;

    fn satisfies(clauses: &[CClause], value_of: impl Fn(Atom) -> bool) -> bool {
        clauses.iter().all(|clause| clause.satisfied_by(&value_of))
    }

    #[test]
    fn constants() {
        let circuit = Circuit::default();

        assert_eq!(encode(&circuit, Edge::TRUE, 5), Ok((vec![], 5)));
        assert_eq!(encode(&circuit, Edge::FALSE, 5), Ok((vec![vec![]], 5)));
    }

    #[test]
    fn single_input() {
        let mut circuit = Circuit::default();
        let p = circuit.input(3);

        assert_eq!(encode(&circuit, !p, 4), Ok((vec![vec![-3]], 4)));
    }

    #[test]
    fn fresh_variables() {
        let mut circuit = Circuit::default();
        let p = circuit.input(1);
        let q = circuit.input(2);
        let p_and_q = circuit.and(p, q);
        let output = circuit.or(p_and_q, !q);

        let (clauses, next) = encode(&circuit, output, 10).unwrap();
        assert_eq!(next, 12);
        assert_eq!(clauses.len(), 7);
        assert_eq!(clauses.last(), Some(&vec![-11]));

        // Each valuation of the inputs extends to a model of the encoding just if the circuit is true.
        for bits in 0..4_u32 {
            let value_of_input = |atom: Atom| bits & (1 << (atom - 1)) != 0;
            let p_and_q = value_of_input(1) && value_of_input(2);
            let inner = !p_and_q && value_of_input(2);
            let extended = |atom: Atom| match atom {
                10 => p_and_q,
                11 => inner,
                _ => value_of_input(atom),
            };
            assert_eq!(
                satisfies(&clauses, extended),
                circuit.evaluate(output, value_of_input)
            );
        }
    }

    #[test]
    fn fresh_variables_must_be_fresh() {
        let mut circuit = Circuit::default();
        let p = circuit.input(1);
        let q = circuit.input(7);
        let output = circuit.and(p, q);

        assert_eq!(
            encode(&circuit, output, 7),
            Err(err::InterpolationError::InvalidFreshVariable(7))
        );
        assert_eq!(
            encode(&circuit, output, 0),
            Err(err::InterpolationError::InvalidFreshVariable(0))
        );
    }

    #[test]
    fn exhausted() {
        let mut circuit = Circuit::default();
        let p = circuit.input(1);
        let q = circuit.input(2);
        let r = circuit.input(3);
        let p_and_q = circuit.and(p, q);
        let output = circuit.and(p_and_q, r);

        assert_eq!(
            encode(&circuit, output, ATOM_MAX),
            Err(err::InterpolationError::AtomsExhausted)
        );
    }
}
