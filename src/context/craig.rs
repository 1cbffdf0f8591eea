use crate::{
    config::{Config, InterpolationMode},
    db::{
        keys::ClauseId,
        label::{ClauseLabel, LabelDB, VariableLabel},
        proof::ProofDB,
    },
    interpolant::{construct_interpolant, Interpolant},
    misc::log::targets::{self},
    reports::Report,
    structures::{atom::Atom, literal::CLiteral, proof::Conclusion},
    tracer::{ProofBridge, Tracer},
    types::err::ErrorKind,
};

use super::SessionState;

/// A session: a record of a proof, labels for the proof, and a configuration.
pub struct Craig {
    /// The bridge through which events are recorded and forwarded.
    bridge: ProofBridge,

    /// Labels of variables and clauses.
    labels: LabelDB,

    /// The configuration of the session.
    config: Config,
}

impl Default for Craig {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Craig {
    /// A session with the given configuration.
    pub fn from_config(config: Config) -> Self {
        Craig {
            bridge: ProofBridge::default(),
            labels: LabelDB::default(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.bridge.state()
    }

    pub fn report(&self) -> Report {
        Report::from(self.state())
    }

    pub fn proof_db(&self) -> &ProofDB {
        self.bridge.proof_db()
    }

    pub fn labels(&self) -> &LabelDB {
        &self.labels
    }

    pub fn bridge(&self) -> &ProofBridge {
        &self.bridge
    }

    /// Sets the system used to construct an interpolant.
    pub fn set_mode(&mut self, mode: InterpolationMode) -> Result<(), ErrorKind> {
        let state = self.state();
        self.config.mode.set(mode, state)?;
        Ok(())
    }

    /// Sets whether the resolvent of the antecedents of a derived clause must be contained in the clause.
    pub fn set_check_derivations(&mut self, value: bool) -> Result<(), ErrorKind> {
        let state = self.state();
        self.config.check_derivations.set(value, state)?;
        Ok(())
    }

    /// Sets whether every antecedent of a derived clause must be used in the derivation.
    pub fn set_strict_chains(&mut self, value: bool) -> Result<(), ErrorKind> {
        let state = self.state();
        self.config.strict_chains.set(value, state)?;
        Ok(())
    }

    /// Sets the label of `atom`, and returns whether this revised the labels of the session.
    pub fn label_variable(&mut self, atom: Atom, label: VariableLabel) -> bool {
        self.labels.label_variable(atom, label)
    }

    /// Sets the label of the active clause with identifier `id`.
    pub fn label_clause(&mut self, id: ClauseId, label: ClauseLabel) -> Result<(), ErrorKind> {
        self.labels
            .label_clause(self.bridge.proof_db(), id, label)?;
        Ok(())
    }

    /// Sets a label for the next (fresh) original clause noted.
    pub fn label_next_clause(&mut self, label: ClauseLabel) {
        self.labels.label_next_clause(label)
    }

    /// Registers a consumer to receive each subsequent event, and returns any consumer previously registered.
    pub fn register_consumer(&mut self, consumer: Box<dyn Tracer>) -> Option<Box<dyn Tracer>> {
        self.bridge.register_consumer(consumer)
    }

    /// Removes and returns the registered consumer, if any.
    pub fn unregister_consumer(&mut self) -> Option<Box<dyn Tracer>> {
        self.bridge.unregister_consumer()
    }

    /// Constructs an interpolant from the refutation of the session, with fresh variables from `next_free_variable`.
    ///
    /// The session is not revised, and so construction may be repeated.
    pub fn construct_interpolant(
        &self,
        next_free_variable: Atom,
    ) -> Result<Interpolant, ErrorKind> {
        log::info!(target: targets::SESSION, "Interpolant requested in state {}", self.state());
        let interpolant = construct_interpolant(
            self.bridge.proof_db(),
            &self.labels,
            &self.config,
            next_free_variable,
        )?;
        Ok(interpolant)
    }

    /// Releases all records and labels, keeping the configuration and any registered consumer.
    pub fn reset(&mut self) {
        log::info!(target: targets::SESSION, "Reset");
        self.bridge.reset();
        self.labels.reset();
    }
}

impl Tracer for Craig {
    fn begin_proof(&mut self, first_id: ClauseId) -> Result<(), ErrorKind> {
        self.bridge.begin_proof(first_id)
    }

    fn add_original_clause(
        &mut self,
        id: ClauseId,
        redundant: bool,
        clause: &[CLiteral],
        restored: bool,
    ) -> Result<(), ErrorKind> {
        let result = self
            .bridge
            .add_original_clause(id, redundant, clause, restored);

        // A clause is recorded unless the bridge returned an error of its own.
        if !restored && matches!(result, Ok(()) | Err(ErrorKind::Forward(_))) {
            if let Some(key) = self.bridge.proof_db().key_of(id) {
                if let Some(label) = self.labels.apply_pending(key) {
                    log::trace!(target: targets::LABEL, "Clause {id} labelled {label}");
                }
            }
        }

        result
    }

    fn add_derived_clause(
        &mut self,
        id: ClauseId,
        redundant: bool,
        clause: &[CLiteral],
        antecedents: &[ClauseId],
    ) -> Result<(), ErrorKind> {
        self.bridge
            .add_derived_clause(id, redundant, clause, antecedents)
    }

    fn delete_clause(
        &mut self,
        id: ClauseId,
        redundant: bool,
        clause: &[CLiteral],
    ) -> Result<(), ErrorKind> {
        self.bridge.delete_clause(id, redundant, clause)
    }

    fn weaken_minus(&mut self, id: ClauseId, clause: &[CLiteral]) -> Result<(), ErrorKind> {
        self.bridge.weaken_minus(id, clause)
    }

    fn strengthen(&mut self, id: ClauseId) -> Result<(), ErrorKind> {
        self.bridge.strengthen(id)
    }

    fn finalize_clause(&mut self, id: ClauseId, clause: &[CLiteral]) -> Result<(), ErrorKind> {
        self.bridge.finalize_clause(id, clause)
    }

    fn add_assumption(&mut self, literal: CLiteral) -> Result<(), ErrorKind> {
        self.bridge.add_assumption(literal)
    }

    fn add_constraint(&mut self, clause: &[CLiteral]) -> Result<(), ErrorKind> {
        self.bridge.add_constraint(clause)
    }

    fn reset_assumptions(&mut self) -> Result<(), ErrorKind> {
        self.bridge.reset_assumptions()
    }

    fn add_assumption_clause(
        &mut self,
        id: ClauseId,
        clause: &[CLiteral],
        antecedents: &[ClauseId],
    ) -> Result<(), ErrorKind> {
        self.bridge.add_assumption_clause(id, clause, antecedents)
    }

    fn conclude_unsat(
        &mut self,
        conclusion: Conclusion,
        proof_chain: &[ClauseId],
    ) -> Result<(), ErrorKind> {
        self.bridge.conclude_unsat(conclusion, proof_chain)
    }

    fn conclude_sat(&mut self, model: &[CLiteral]) -> Result<(), ErrorKind> {
        self.bridge.conclude_sat(model)
    }

    fn conclude_unknown(&mut self, trail: &[CLiteral]) -> Result<(), ErrorKind> {
        self.bridge.conclude_unknown(trail)
    }

    fn solve_query(&mut self) -> Result<(), ErrorKind> {
        self.bridge.solve_query()
    }

    fn report_status(&mut self, status: i32, id: ClauseId) -> Result<(), ErrorKind> {
        self.bridge.report_status(status, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::err;

    #[test]
    fn pending_labels() {
        let mut craig = Craig::default();

        craig.label_next_clause(ClauseLabel::B);
        assert!(craig.add_original_clause(1, false, &[1, 2], false).is_ok());
        assert!(craig.add_original_clause(2, false, &[-1], false).is_ok());

        assert_eq!(
            craig.labels().lookup_clause(craig.proof_db(), 1),
            Ok(ClauseLabel::B)
        );
        assert_eq!(
            craig.labels().lookup_clause(craig.proof_db(), 2),
            Err(err::LabelError::UnlabeledClause(2))
        );
    }

    #[test]
    fn pending_label_skips_restored() {
        let mut craig = Craig::default();

        assert!(craig.add_original_clause(1, false, &[1], false).is_ok());
        assert!(craig.label_clause(1, ClauseLabel::A).is_ok());
        assert!(craig.delete_clause(1, false, &[1]).is_ok());

        craig.label_next_clause(ClauseLabel::B);
        assert!(craig.add_original_clause(1, false, &[1], true).is_ok());
        assert!(craig.add_original_clause(2, false, &[2], false).is_ok());

        assert_eq!(
            craig.labels().lookup_clause(craig.proof_db(), 1),
            Ok(ClauseLabel::A)
        );
        assert_eq!(
            craig.labels().lookup_clause(craig.proof_db(), 2),
            Ok(ClauseLabel::B)
        );
    }

    #[test]
    fn label_unknown_clause() {
        let mut craig = Craig::default();

        assert_eq!(
            craig.label_clause(7, ClauseLabel::A),
            Err(ErrorKind::Label(err::LabelError::UnknownClause(7)))
        );
    }

    #[test]
    fn report_and_reset() {
        let mut craig = Craig::default();
        assert_eq!(craig.report(), Report::Unknown);

        assert!(craig.add_original_clause(1, false, &[], false).is_ok());
        assert!(craig.label_clause(1, ClauseLabel::A).is_ok());
        assert!(craig.solve_query().is_ok());
        assert!(craig.conclude_unsat(Conclusion::Conflict, &[1]).is_ok());
        assert_eq!(craig.report(), Report::Unsatisfiable);

        let first = craig.construct_interpolant(1).unwrap();
        let second = craig.construct_interpolant(1).unwrap();
        assert_eq!(first.clauses(), second.clauses());

        assert_eq!(
            craig.add_original_clause(2, false, &[1], false),
            Err(ErrorKind::ProofDB(err::ProofDBError::SessionConcluded))
        );

        craig.reset();
        assert_eq!(craig.state(), SessionState::Configuration);
        assert!(craig.proof_db().is_empty());
        assert_eq!(craig.labels().labelled_clause_count(), 0);
        assert!(craig.add_original_clause(1, false, &[1], false).is_ok());
    }

    #[test]
    fn configuration() {
        let mut craig = Craig::default();

        assert!(craig.set_mode(InterpolationMode::Symmetric).is_ok());
        assert!(craig.set_strict_chains(true).is_ok());
        assert!(craig.config().strict_chains.value);

        assert!(craig.add_original_clause(1, false, &[], false).is_ok());
        assert!(craig.label_clause(1, ClauseLabel::B).is_ok());
        assert!(craig.conclude_unsat(Conclusion::Conflict, &[1]).is_ok());

        assert!(matches!(
            craig.construct_interpolant(1),
            Err(ErrorKind::Interpolation(
                err::InterpolationError::UnsupportedMode(InterpolationMode::Symmetric)
            ))
        ));
    }
}
