/*!
Construction of an interpolant from a refutation, with the asymmetric system of McMillan.

Each record used to derive the empty clause is given a partial interpolant, as an edge of a [Circuit].
Records are visited in order of their keys, and as an antecedent is always recorded before any clause derived from it every antecedent of a record has a partial interpolant when the record is visited.

# Original clauses

- An *A* clause has the disjunction of its shared literals as a partial interpolant.
  Literals of variables local to *A* are dropped.
- A *B* clause has true as a partial interpolant.

A variable local to one part in a clause of the other part is an error, as the labels do not describe a partition.

# Derived clauses

The antecedents of a derived clause are read as a chain of resolutions, from the last antecedent to the first.
At each step the resolvent is resolved with the next antecedent on the unique literal of the antecedent whose negation is in the resolvent, and the partial interpolants are combined:
- With a disjunction, if the pivot variable is local to *A*.
- With a conjunction, otherwise.

An antecedent without a clashing literal is skipped, unless [strict chains](crate::config::Config::strict_chains) are required.
An antecedent with more than one clashing literal is an error, as the resolvent would be a tautology.
*/

use std::collections::{HashMap, HashSet};

use crate::{
    config::{Config, InterpolationMode},
    db::{
        keys::RecordKey,
        label::{ClauseLabel, LabelDB, VariableLabel},
        proof::{ClauseRecord, ProofDB},
    },
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, ClauseSource},
        literal::{CLiteral, Literal},
        proof::Conclusion,
    },
    types::err::{self},
};

use super::{
    circuit::{Circuit, Edge},
    tseitin, Interpolant,
};

/// Constructs an interpolant from the refutation recorded in `proof_db`, with fresh variables from `next_free_variable`.
pub fn construct_interpolant(
    proof_db: &ProofDB,
    label_db: &LabelDB,
    config: &Config,
    next_free_variable: Atom,
) -> Result<Interpolant, err::InterpolationError> {
    match config.mode.value {
        InterpolationMode::Asymmetric => {}
        unsupported => {
            log::error!(target: targets::INTERPOLANT, "Unsupported mode {unsupported}");
            return Err(err::InterpolationError::UnsupportedMode(unsupported));
        }
    }

    let Some(refutation) = proof_db.refutation() else {
        log::error!(target: targets::INTERPOLANT, "No refutation");
        return Err(err::InterpolationError::NoRefutation);
    };

    if refutation.conclusion() != Conclusion::Conflict {
        log::error!(target: targets::INTERPOLANT, "Refutation by {}", refutation.conclusion());
        return Err(err::InterpolationError::UnsupportedConclusion(
            refutation.conclusion(),
        ));
    }

    let Some(witness) = refutation.witness() else {
        log::error!(target: targets::INTERPOLANT, "Refutation without an empty clause");
        return Err(err::InterpolationError::MalformedRefutation);
    };

    // Every original clause belongs to some part, whether or not it is used by the refutation.
    for (key, record) in proof_db.records() {
        if record.source() == ClauseSource::Original && label_db.lookup_record(key).is_none() {
            let id = record.id().unwrap_or_default();
            log::error!(target: targets::INTERPOLANT, "Clause {id} has no label");
            return Err(err::InterpolationError::UnknownLabel(id));
        }
    }

    let mut circuit = Circuit::default();
    let mut partials: HashMap<RecordKey, Edge> = HashMap::default();

    for key in cone(proof_db, witness) {
        let Some(record) = proof_db.record(key) else {
            return Err(err::InterpolationError::MalformedRefutation);
        };

        let partial = match record.source() {
            ClauseSource::Original => base_partial(&mut circuit, label_db, key, record)?,
            ClauseSource::Derived => {
                resolve_chain(&mut circuit, proof_db, label_db, config, &partials, record)?
            }
        };
        log::trace!(target: targets::INTERPOLANT, "{key} has partial interpolant {partial}");
        partials.insert(key, partial);
    }

    let Some(output) = partials.get(&witness).copied() else {
        return Err(err::InterpolationError::MalformedRefutation);
    };

    let (circuit, output) = circuit.extract(output);
    let (clauses, next) = tseitin::encode(&circuit, output, next_free_variable)?;

    log::info!(target: targets::INTERPOLANT, "Interpolant with {} clauses over {} nodes", clauses.len(), circuit.len());

    Ok(Interpolant {
        clauses,
        first_free_variable: next_free_variable,
        next_free_variable: next,
        circuit,
        output,
    })
}

/// The keys of the records reachable from `witness`, in ascending order.
fn cone(proof_db: &ProofDB, witness: RecordKey) -> Vec<RecordKey> {
    let mut seen: HashSet<RecordKey> = HashSet::default();
    let mut stack = vec![witness];

    while let Some(key) = stack.pop() {
        if !seen.insert(key) {
            continue;
        }
        if let Some(record) = proof_db.record(key) {
            stack.extend(record.antecedents().iter().filter(|a| !seen.contains(*a)));
        }
    }

    let mut keys = seen.into_iter().collect::<Vec<_>>();
    keys.sort_unstable();
    keys
}

/// The partial interpolant of an original clause.
fn base_partial(
    circuit: &mut Circuit,
    label_db: &LabelDB,
    key: RecordKey,
    record: &ClauseRecord,
) -> Result<Edge, err::InterpolationError> {
    let id = record.id().unwrap_or_default();

    let Some(label) = label_db.lookup_record(key) else {
        log::error!(target: targets::INTERPOLANT, "Clause {id} has no label");
        return Err(err::InterpolationError::UnknownLabel(id));
    };

    let mut partial = match label {
        ClauseLabel::A => Edge::FALSE,
        ClauseLabel::B => Edge::TRUE,
    };

    for literal in record.clause() {
        let atom = literal.atom();
        match (label, label_db.lookup_variable(atom)) {
            (ClauseLabel::A, VariableLabel::Global) => {
                let edge = circuit.literal(*literal);
                partial = circuit.or(partial, edge);
            }

            (ClauseLabel::A, VariableLabel::ALocal)
            | (ClauseLabel::B, VariableLabel::Global)
            | (ClauseLabel::B, VariableLabel::BLocal) => {}

            (ClauseLabel::A, VariableLabel::BLocal) | (ClauseLabel::B, VariableLabel::ALocal) => {
                log::error!(target: targets::INTERPOLANT, "Variable {atom} is local to the other part of {label} clause {id}");
                return Err(err::InterpolationError::MislabeledVariable { clause: id, atom });
            }
        }
    }

    Ok(partial)
}

/// The partial interpolant of a derived clause, from the partial interpolants of its antecedents.
fn resolve_chain(
    circuit: &mut Circuit,
    proof_db: &ProofDB,
    label_db: &LabelDB,
    config: &Config,
    partials: &HashMap<RecordKey, Edge>,
    record: &ClauseRecord,
) -> Result<Edge, err::InterpolationError> {
    let malformed = || match record.id() {
        Some(id) => err::InterpolationError::MalformedProof(id),
        None => err::InterpolationError::MalformedRefutation,
    };

    let Some((last, rest)) = record.antecedents().split_last() else {
        log::error!(target: targets::INTERPOLANT, "Derivation without antecedents");
        return Err(malformed());
    };

    let (Some(last_record), Some(mut partial)) =
        (proof_db.record(*last), partials.get(last).copied())
    else {
        return Err(malformed());
    };
    let mut resolvent: HashSet<CLiteral> = last_record.clause().iter().copied().collect();

    for key in rest.iter().rev() {
        let (Some(antecedent), Some(other)) = (proof_db.record(*key), partials.get(key).copied())
        else {
            return Err(malformed());
        };

        let mut clashes: CClause = antecedent
            .clause()
            .iter()
            .filter(|literal| resolvent.contains(&literal.negate()))
            .copied()
            .collect();
        clashes.sort_unstable();
        clashes.dedup();

        let pivot = match clashes.as_slice() {
            [] => {
                if config.strict_chains.value {
                    log::error!(target: targets::INTERPOLANT, "{key} does not resolve with the resolvent");
                    return Err(malformed());
                }
                log::debug!(target: targets::INTERPOLANT, "{key} skipped in chain");
                continue;
            }
            [pivot] => *pivot,
            _ => {
                log::error!(target: targets::INTERPOLANT, "{key} clashes with the resolvent on {clashes:?}");
                return Err(malformed());
            }
        };

        resolvent.remove(&pivot.negate());
        resolvent.extend(
            antecedent
                .clause()
                .iter()
                .filter(|literal| **literal != pivot),
        );

        partial = match label_db.lookup_variable(pivot.atom()) {
            VariableLabel::ALocal => circuit.or(partial, other),
            VariableLabel::Global | VariableLabel::BLocal => circuit.and(partial, other),
        };
    }

    if config.check_derivations.value || record.clause().is_empty() {
        if let Some(extra) = resolvent
            .iter()
            .find(|literal| !record.clause().contains(*literal))
        {
            log::error!(target: targets::INTERPOLANT, "Resolvent literal {extra} is not in the derived clause");
            return Err(malformed());
        }
    }

    Ok(partial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::keys::ClauseId;

    struct Setup {
        proof_db: ProofDB,
        label_db: LabelDB,
    }

    impl Setup {
        fn new() -> Self {
            Setup {
                proof_db: ProofDB::default(),
                label_db: LabelDB::default(),
            }
        }

        fn original(&mut self, id: ClauseId, clause: &[CLiteral], label: ClauseLabel) {
            let key = self.proof_db.add_original(id, false, clause, false).unwrap();
            self.label_db.label_record(key, label);
        }

        fn construct(&self) -> Result<Interpolant, err::InterpolationError> {
            construct_interpolant(&self.proof_db, &self.label_db, &Config::default(), 10)
        }
    }

    #[test]
    fn no_refutation() {
        let mut setup = Setup::new();
        setup.original(1, &[1], ClauseLabel::A);

        assert_eq!(
            setup.construct().map(|_| ()),
            Err(err::InterpolationError::NoRefutation)
        );
    }

    #[test]
    fn empty_a_clause() {
        let mut setup = Setup::new();
        setup.original(1, &[], ClauseLabel::A);
        assert!(setup.proof_db.conclude_unsat(Conclusion::Conflict, &[1]).is_ok());

        let interpolant = setup.construct().unwrap();
        assert_eq!(interpolant.clauses(), &[CClause::default()]);
    }

    #[test]
    fn empty_b_clause() {
        let mut setup = Setup::new();
        setup.original(1, &[2], ClauseLabel::A);
        setup.original(2, &[], ClauseLabel::B);
        assert!(setup.proof_db.conclude_unsat(Conclusion::Conflict, &[2]).is_ok());

        let interpolant = setup.construct().unwrap();
        assert!(interpolant.clauses().is_empty());
        assert_eq!(interpolant.next_free_variable(), 10);
    }

    #[test]
    fn a_local_pivot() {
        let mut setup = Setup::new();
        setup.label_db.label_variable(1, VariableLabel::ALocal);

        // A: (1 ∨ 2) ∧ (¬1 ∨ 3),  B: ¬2 ∧ ¬3
        setup.original(1, &[1, 2], ClauseLabel::A);
        setup.original(2, &[-1, 3], ClauseLabel::A);
        setup.original(3, &[-2], ClauseLabel::B);
        setup.original(4, &[-3], ClauseLabel::B);
        assert!(setup.proof_db.add_derived(5, true, &[2, 3], &[1, 2]).is_ok());
        assert!(setup
            .proof_db
            .conclude_unsat(Conclusion::Conflict, &[4, 3, 5])
            .is_ok());

        // The interpolant is 2 ∨ 3.
        let interpolant = setup.construct().unwrap();
        for (two, three) in [(false, false), (true, false), (false, true), (true, true)] {
            let value_of = |atom: Atom| match atom {
                2 => two,
                3 => three,
                _ => false,
            };
            assert_eq!(interpolant.evaluate(value_of), two || three);
        }
        assert!(interpolant.atoms().iter().all(|atom| *atom == 2 || *atom == 3 || *atom >= 10));
    }

    #[test]
    fn mislabeled_variable() {
        let mut setup = Setup::new();
        setup.label_db.label_variable(1, VariableLabel::BLocal);

        setup.original(1, &[1], ClauseLabel::A);
        setup.original(2, &[-1], ClauseLabel::B);
        assert!(setup
            .proof_db
            .conclude_unsat(Conclusion::Conflict, &[1, 2])
            .is_ok());

        assert_eq!(
            setup.construct().map(|_| ()),
            Err(err::InterpolationError::MislabeledVariable { clause: 1, atom: 1 })
        );
    }

    #[test]
    fn unlabelled_clause() {
        let mut setup = Setup::new();
        setup.original(1, &[1], ClauseLabel::A);
        assert!(setup.proof_db.add_original(2, false, &[-1], false).is_ok());
        assert!(setup
            .proof_db
            .conclude_unsat(Conclusion::Conflict, &[1, 2])
            .is_ok());

        assert_eq!(
            setup.construct().map(|_| ()),
            Err(err::InterpolationError::UnknownLabel(2))
        );
    }

    #[test]
    fn unlabelled_clause_outside_refutation() {
        let mut setup = Setup::new();
        setup.original(1, &[1], ClauseLabel::A);
        setup.original(2, &[-1], ClauseLabel::B);
        assert!(setup.proof_db.add_original(3, false, &[5, 6], false).is_ok());
        assert!(setup.proof_db.add_derived(4, true, &[], &[1, 2]).is_ok());
        assert!(setup
            .proof_db
            .conclude_unsat(Conclusion::Conflict, &[4])
            .is_ok());

        assert_eq!(
            setup.construct().map(|_| ()),
            Err(err::InterpolationError::UnknownLabel(3))
        );

        let key = setup.proof_db.latest_key(3).unwrap();
        setup.label_db.label_record(key, ClauseLabel::B);
        let interpolant = setup.construct().unwrap();
        assert_eq!(interpolant.clauses(), &[vec![1]]);
    }

    #[test]
    fn unused_antecedent() {
        let mut setup = Setup::new();
        setup.original(1, &[1], ClauseLabel::A);
        setup.original(2, &[3], ClauseLabel::A);
        setup.original(3, &[-1], ClauseLabel::B);
        assert!(setup.proof_db.add_derived(4, true, &[], &[2, 1, 3]).is_ok());
        assert!(setup.proof_db.conclude_unsat(Conclusion::Conflict, &[4]).is_ok());

        let interpolant = setup.construct().unwrap();
        assert_eq!(interpolant.clauses(), &[vec![1]]);

        let strict = {
            let mut config = Config::default();
            config.strict_chains.value = true;
            config
        };
        assert_eq!(
            construct_interpolant(&setup.proof_db, &setup.label_db, &strict, 10).map(|_| ()),
            Err(err::InterpolationError::MalformedProof(4))
        );
    }

    #[test]
    fn tautological_resolution() {
        let mut setup = Setup::new();
        setup.original(1, &[1, 2], ClauseLabel::A);
        setup.original(2, &[-1, -2], ClauseLabel::B);
        assert!(setup.proof_db.add_derived(3, true, &[], &[1, 2]).is_ok());
        assert!(setup.proof_db.conclude_unsat(Conclusion::Conflict, &[3]).is_ok());

        assert_eq!(
            setup.construct().map(|_| ()),
            Err(err::InterpolationError::MalformedProof(3))
        );
    }

    #[test]
    fn refutation_must_be_empty() {
        let mut setup = Setup::new();
        setup.original(1, &[1, 2], ClauseLabel::A);
        setup.original(2, &[-1], ClauseLabel::B);
        assert!(setup
            .proof_db
            .conclude_unsat(Conclusion::Conflict, &[1, 2])
            .is_ok());

        assert_eq!(
            setup.construct().map(|_| ()),
            Err(err::InterpolationError::MalformedRefutation)
        );
    }

    #[test]
    fn derivation_is_checked() {
        let mut setup = Setup::new();
        setup.original(1, &[1, 2], ClauseLabel::A);
        setup.original(2, &[-1], ClauseLabel::A);
        setup.original(3, &[-2], ClauseLabel::B);
        // The resolvent of 1 and 2 is (2), not (3).
        assert!(setup.proof_db.add_derived(4, true, &[3], &[2, 1]).is_ok());
        assert!(setup
            .proof_db
            .conclude_unsat(Conclusion::Conflict, &[3, 4])
            .is_ok());

        assert_eq!(
            setup.construct().map(|_| ()),
            Err(err::InterpolationError::MalformedProof(4))
        );
    }

    #[test]
    fn assumptions() {
        let mut setup = Setup::new();
        setup.original(1, &[1], ClauseLabel::A);
        assert!(setup
            .proof_db
            .conclude_unsat(Conclusion::Assumptions, &[])
            .is_ok());

        assert_eq!(
            setup.construct().map(|_| ()),
            Err(err::InterpolationError::UnsupportedConclusion(
                Conclusion::Assumptions
            ))
        );
    }

    #[test]
    fn symmetric_mode() {
        let mut setup = Setup::new();
        setup.original(1, &[], ClauseLabel::A);
        assert!(setup.proof_db.conclude_unsat(Conclusion::Conflict, &[1]).is_ok());

        let mut config = Config::default();
        config.mode.value = InterpolationMode::Symmetric;
        assert_eq!(
            construct_interpolant(&setup.proof_db, &setup.label_db, &config, 10).map(|_| ()),
            Err(err::InterpolationError::UnsupportedMode(
                InterpolationMode::Symmetric
            ))
        );
    }
}
