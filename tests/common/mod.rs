#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, HashSet};

use otter_craig::{
    db::keys::ClauseId,
    interpolant::Interpolant,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        proof::Conclusion,
    },
    tracer::{Attachments, SharedTracer, TracerKey},
    types::err::ErrorKind,
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The outcome of a solve.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Satisfiable(CClause),
    Unsatisfiable,
}

enum Search {
    Model(CClause),

    /// The identifier of a clause falsified by the decisions of the search.
    Falsified(ClauseId),
}

/// A small solver which notes each step of a resolution proof to attached tracers.
///
/// The search branches on variables in order, with unit propagation at each node.
/// Conflicts are analysed by resolving the conflict clause with the reasons of propagated literals, and the two branches on a variable are combined by resolving on the variable.
///
/// Every event is noted with a single buffer, which is overwritten by the next event.
pub struct Engine {
    clauses: BTreeMap<ClauseId, CClause>,
    originals: HashSet<ClauseId>,
    next_id: ClauseId,
    max_atom: Atom,
    attachments: Attachments,
    buffer: CClause,
    begun: bool,

    /// Delete the clauses resolved when combining branches.
    pub delete_used: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Engine {
            clauses: BTreeMap::default(),
            originals: HashSet::default(),
            next_id: 1,
            max_atom: 0,
            attachments: Attachments::default(),
            buffer: CClause::default(),
            begun: false,
            delete_used: false,
        }
    }
}

impl Engine {
    pub fn attach(&mut self, tracer: SharedTracer) -> TracerKey {
        self.attachments.attach(tracer)
    }

    pub fn detach(&mut self, key: TracerKey) -> bool {
        self.attachments.detach(key)
    }

    fn begin(&mut self) -> Result<(), ErrorKind> {
        if !self.begun {
            self.begun = true;
            let first_id = self.next_id;
            self.attachments
                .dispatch(|tracer| tracer.begin_proof(first_id))?;
        }
        Ok(())
    }

    /// Adds an original clause, and returns the identifier of the clause.
    pub fn add_clause(&mut self, clause: &[CLiteral]) -> Result<ClauseId, ErrorKind> {
        self.begin()?;

        let id = self.next_id;
        self.next_id += 1;
        for literal in clause {
            self.max_atom = self.max_atom.max(literal.atom());
        }

        self.buffer.clear();
        self.buffer.extend_from_slice(clause);
        let result = self
            .attachments
            .dispatch(|tracer| tracer.add_original_clause(id, false, &self.buffer, false));

        self.clauses.insert(id, clause.to_vec());
        self.originals.insert(id);
        result.map(|_| id)
    }

    pub fn solve(&mut self) -> Result<Outcome, ErrorKind> {
        self.begin()?;
        self.attachments.dispatch(|tracer| tracer.solve_query())?;

        match self.search(&mut Vec::default())? {
            Search::Model(model) => {
                self.buffer.clear();
                self.buffer.extend_from_slice(&model);
                self.attachments
                    .dispatch(|tracer| tracer.conclude_sat(&self.buffer))?;
                Ok(Outcome::Satisfiable(model))
            }

            Search::Falsified(id) => {
                self.attachments
                    .dispatch(|tracer| tracer.conclude_unsat(Conclusion::Conflict, &[id]))?;
                Ok(Outcome::Unsatisfiable)
            }
        }
    }

    fn contains(&self, id: ClauseId, literal: CLiteral) -> bool {
        self.clauses
            .get(&id)
            .is_some_and(|clause| clause.contains(&literal))
    }

    /// Propagates from `decisions`, returning the trail with reasons and the identifier of a falsified clause, if any.
    fn propagate(
        &self,
        decisions: &[CLiteral],
    ) -> (Vec<(CLiteral, Option<ClauseId>)>, Option<ClauseId>) {
        let mut trail: Vec<(CLiteral, Option<ClauseId>)> =
            decisions.iter().map(|literal| (*literal, None)).collect();
        let mut values: BTreeMap<Atom, bool> = decisions
            .iter()
            .map(|literal| (literal.atom(), literal.polarity()))
            .collect();

        loop {
            let mut changed = false;

            for (id, clause) in &self.clauses {
                let mut satisfied = false;
                let mut unassigned = Vec::default();
                for literal in clause {
                    match values.get(&literal.atom()) {
                        Some(value) if *value == literal.polarity() => {
                            satisfied = true;
                            break;
                        }
                        Some(_) => {}
                        None => unassigned.push(*literal),
                    }
                }

                if satisfied {
                    continue;
                }
                match unassigned.as_slice() {
                    [] => return (trail, Some(*id)),
                    [unit] => {
                        values.insert(unit.atom(), unit.polarity());
                        trail.push((*unit, Some(*id)));
                        changed = true;
                    }
                    _ => {}
                }
            }

            if !changed {
                return (trail, None);
            }
        }
    }

    fn derive(&mut self, clause: CClause, antecedents: &[ClauseId]) -> Result<ClauseId, ErrorKind> {
        let id = self.next_id;
        self.next_id += 1;

        self.buffer.clear();
        self.buffer.extend_from_slice(&clause);
        let result = self
            .attachments
            .dispatch(|tracer| tracer.add_derived_clause(id, true, &self.buffer, antecedents));

        self.clauses.insert(id, clause);
        result.map(|_| id)
    }

    fn delete(&mut self, id: ClauseId) -> Result<(), ErrorKind> {
        if self.originals.contains(&id) {
            return Ok(());
        }
        let Some(clause) = self.clauses.remove(&id) else {
            return Ok(());
        };
        self.attachments
            .dispatch(|tracer| tracer.delete_clause(id, true, &clause))
    }

    /// Resolves the conflict clause with the reasons of propagated literals, until only negations of decisions remain.
    fn analyse(
        &mut self,
        trail: &[(CLiteral, Option<ClauseId>)],
        conflict: ClauseId,
    ) -> Result<ClauseId, ErrorKind> {
        let mut resolvent: BTreeSet<CLiteral> = self.clauses[&conflict].iter().copied().collect();
        let mut chain = vec![conflict];

        for (literal, reason) in trail.iter().rev() {
            let Some(reason) = reason else {
                continue;
            };
            if resolvent.remove(&literal.negate()) {
                resolvent.extend(self.clauses[reason].iter().filter(|l| *l != literal));
                chain.push(*reason);
            }
        }

        if chain.len() == 1 {
            return Ok(conflict);
        }
        chain.reverse();
        self.derive(resolvent.into_iter().collect(), &chain)
    }

    fn search(&mut self, decisions: &mut Vec<CLiteral>) -> Result<Search, ErrorKind> {
        let (trail, conflict) = self.propagate(decisions);
        if let Some(conflict) = conflict {
            return Ok(Search::Falsified(self.analyse(&trail, conflict)?));
        }

        let assigned: HashSet<Atom> = trail.iter().map(|(literal, _)| literal.atom()).collect();
        let Some(atom) = (1..=self.max_atom).find(|atom| !assigned.contains(atom)) else {
            let mut model: CClause = trail.iter().map(|(literal, _)| *literal).collect();
            model.sort_by_key(|literal| literal.atom());
            return Ok(Search::Model(model));
        };

        let positive = CLiteral::new(atom, true);
        let mut falsified = Vec::with_capacity(2);

        for decision in [positive, positive.negate()] {
            decisions.push(decision);
            let result = self.search(decisions)?;
            decisions.pop();

            match result {
                Search::Model(model) => return Ok(Search::Model(model)),
                Search::Falsified(id) => {
                    if !self.contains(id, decision.negate()) {
                        return Ok(Search::Falsified(id));
                    }
                    falsified.push(id);
                }
            }
        }

        let (first, second) = (falsified[0], falsified[1]);
        let resolvent: BTreeSet<CLiteral> = self.clauses[&first]
            .iter()
            .filter(|literal| **literal != positive.negate())
            .chain(self.clauses[&second].iter().filter(|literal| **literal != positive))
            .copied()
            .collect();

        let id = self.derive(resolvent.into_iter().collect(), &[first, second])?;
        if self.delete_used {
            self.delete(first)?;
            self.delete(second)?;
        }
        Ok(Search::Falsified(id))
    }
}

/// The value of `atom` on the valuation given by the bits of `bits`.
pub fn value(bits: u64, atom: Atom) -> bool {
    (bits >> (atom - 1)) & 1 == 1
}

pub fn satisfies(clauses: &[CClause], bits: u64) -> bool {
    clauses
        .iter()
        .all(|clause| clause.satisfied_by(|atom| value(bits, atom)))
}

/// Checks, by enumeration of valuations to variables `1..=atoms`, that:
/// - Every model of `a` is a model of the interpolant.
/// - No model of the interpolant is a model of `b`.
/// - The clauses of the interpolant agree with the circuit of the interpolant, if there are few fresh variables.
pub fn check_interpolant(
    a: &[CClause],
    b: &[CClause],
    interpolant: &Interpolant,
    atoms: Atom,
) -> Result<(), String> {
    let fresh = interpolant.fresh_variables();
    let fresh_count = fresh.end - fresh.start;

    for bits in 0..(1_u64 << atoms) {
        let holds = interpolant.evaluate(|atom| value(bits, atom));

        if satisfies(a, bits) && !holds {
            return Err(format!("A does not imply the interpolant on {bits:b}"));
        }
        if holds && satisfies(b, bits) {
            return Err(format!("B and the interpolant hold on {bits:b}"));
        }

        if fresh_count <= 10 {
            let extends = (0..(1_u64 << fresh_count))
                .any(|extension| satisfies(interpolant.clauses(), bits | (extension << (fresh.start - 1))));
            if extends != holds {
                return Err(format!("The clauses and the circuit differ on {bits:b}"));
            }
        }
    }

    Ok(())
}

/// Checks every variable of the interpolant is either shared or fresh.
pub fn check_variables(
    interpolant: &Interpolant,
    shared: &BTreeSet<Atom>,
    next_free_variable: Atom,
) -> Result<(), String> {
    let fresh = interpolant.fresh_variables();
    if fresh.start != next_free_variable {
        return Err(format!("Fresh variables from {}", fresh.start));
    }

    for atom in interpolant.atoms() {
        if !shared.contains(&atom) && !fresh.contains(&atom) {
            return Err(format!("Variable {atom} is neither shared nor fresh"));
        }
    }

    // One fresh variable for each conjunction, without gaps.
    let gates = interpolant
        .circuit()
        .cone(interpolant.output())
        .into_iter()
        .filter(|index| {
            matches!(
                interpolant.circuit().node(*index),
                Some(otter_craig::interpolant::circuit::Node::And(_, _))
            )
        })
        .count();
    if gates != fresh.len() {
        return Err(format!("{gates} conjunctions with fresh variables {fresh:?}"));
    }

    Ok(())
}
