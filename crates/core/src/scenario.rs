//! Scenario state and the full-output evaluation path.
//!
//! A [`Scenario`] holds the working state for one contract selection: lever
//! values, inflation tier, the draft clause decisions, and the last-applied
//! decision snapshot. Every mutation is synchronous; callers re-run
//! [`Scenario::evaluate`] after each edit and there is no stale intermediate
//! state in between.
//!
//! Lifecycle: a fresh scenario starts at catalog defaults with every clause
//! on its status-quo wording. Edits touch the draft only. `apply` publishes
//! the draft as the applied snapshot; `reset` and contract switches discard
//! everything and return to defaults.

use std::collections::BTreeMap;

use serde::Serialize;

use cse_catalog::{ContractSpec, LeverSpec};
use cse_types::{ClauseOption, ContractType, InflationTier, RiskLevel};

use crate::impact::{aggregate_monthly_impact, annual_impact};
use crate::projection::{project, Jitter, ProjectionPoint, SeededJitter};
use crate::risk::classify_risk;

/// Errors that can occur when mutating a scenario with caller input.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// The lever index does not exist on the active contract.
    #[error("no lever at index {0} for this contract")]
    UnknownLever(usize),
    /// The lever value violated its catalogued bounds.
    #[error("invalid lever value: {0}")]
    InvalidLever(#[from] cse_catalog::CatalogError),
    /// The clause id does not exist on the active contract.
    #[error("unknown clause id '{0}' for this contract")]
    UnknownClause(String),
}

pub type ScenarioResult<T> = std::result::Result<T, ScenarioError>;

/// Full engine output for one input combination.
#[derive(Clone, Debug, Serialize)]
pub struct Outcome {
    /// Twelve monthly points, `Jan` through `Dec`.
    pub projection: Vec<ProjectionPoint>,
    /// Sum of proposed spend across the year, thousands.
    pub total_proposed_k: i64,
    /// Sum of market benchmark spend across the year, thousands.
    pub total_market_k: i64,
    /// `total_proposed_k − total_market_k`.
    pub variance_k: i64,
    /// Aggregate risk classification of the draft decisions.
    pub risk: RiskLevel,
    /// Annualized dollar impact of each clause's draft decision, by clause id.
    pub clause_impacts: BTreeMap<String, f64>,
}

/// Per-clause input for a document view: original wording, the wording the
/// applied decision selects, and whether the rendered contract changed.
#[derive(Clone, Debug, Serialize)]
pub struct ClauseRendering {
    pub clause_id: String,
    pub title: String,
    pub original_text: String,
    pub applied_text: String,
    /// True only when the applied wording differs from the original *and*
    /// the scenario has been published.
    pub changed: bool,
}

/// Working state for a what-if scenario on one contract.
#[derive(Clone, Debug)]
pub struct Scenario {
    spec: &'static ContractSpec,
    lever_values: Vec<f64>,
    inflation: InflationTier,
    draft: BTreeMap<String, ClauseOption>,
    applied: BTreeMap<String, ClauseOption>,
    published: bool,
}

impl Scenario {
    /// A fresh scenario for `contract_type`: levers at catalog defaults,
    /// inflation at `Med`, every clause on its status-quo wording,
    /// unpublished.
    pub fn new(contract_type: ContractType) -> Self {
        let spec = cse_catalog::contract(contract_type);
        let status_quo: BTreeMap<String, ClauseOption> = spec
            .clauses
            .iter()
            .map(|c| (c.id.to_owned(), ClauseOption::ProviderFav))
            .collect();
        Self {
            spec,
            lever_values: spec.default_lever_values(),
            inflation: InflationTier::default(),
            draft: status_quo.clone(),
            applied: status_quo,
            published: false,
        }
    }

    /// Switches the active contract, fully discarding the previous state.
    pub fn select_contract(&mut self, contract_type: ContractType) {
        *self = Self::new(contract_type);
    }

    /// Returns to the state of a fresh scenario for the current contract.
    pub fn reset(&mut self) {
        *self = Self::new(self.spec.contract_type);
    }

    pub fn spec(&self) -> &'static ContractSpec {
        self.spec
    }

    pub fn lever_values(&self) -> &[f64] {
        &self.lever_values
    }

    pub fn inflation(&self) -> InflationTier {
        self.inflation
    }

    pub fn draft_decisions(&self) -> &BTreeMap<String, ClauseOption> {
        &self.draft
    }

    pub fn applied_decisions(&self) -> &BTreeMap<String, ClauseOption> {
        &self.applied
    }

    pub fn is_published(&self) -> bool {
        self.published
    }

    /// Sets one lever to a bounds-checked value.
    ///
    /// # Errors
    ///
    /// `UnknownLever` if the index is out of range for the active contract,
    /// `InvalidLever` if the value violates the lever's catalogued bounds.
    pub fn set_lever(&mut self, index: usize, value: f64) -> ScenarioResult<()> {
        let lever: &LeverSpec = self
            .spec
            .levers
            .get(index)
            .ok_or(ScenarioError::UnknownLever(index))?;
        lever.validate(value)?;
        self.lever_values[index] = value;
        Ok(())
    }

    /// Sets the inflation outlook for the projection.
    pub fn set_inflation(&mut self, tier: InflationTier) {
        self.inflation = tier;
    }

    /// Records a draft wording decision for one clause.
    ///
    /// Touches the draft only; the applied snapshot and the published flag
    /// are unaffected until the next `apply`.
    ///
    /// # Errors
    ///
    /// `UnknownClause` if the id does not belong to the active contract.
    pub fn set_decision(&mut self, clause_id: &str, option: ClauseOption) -> ScenarioResult<()> {
        if self.spec.clause(clause_id).is_none() {
            return Err(ScenarioError::UnknownClause(clause_id.to_owned()));
        }
        self.draft.insert(clause_id.to_owned(), option);
        Ok(())
    }

    /// Publishes the draft decisions as the applied contract.
    ///
    /// Idempotent: applying again with an unchanged draft leaves the applied
    /// snapshot identical.
    pub fn apply(&mut self) {
        self.applied = self.draft.clone();
        self.published = true;
        tracing::debug!(
            contract = %self.spec.contract_type,
            "published draft decisions"
        );
    }

    /// Recomputes the full engine output for the current draft state.
    ///
    /// Deterministic: the market jitter is seeded from the scenario inputs,
    /// so unchanged inputs reproduce the same outcome.
    pub fn evaluate(&self) -> Outcome {
        let monthly_impact_k = aggregate_monthly_impact(self.spec, &self.draft);
        let mut jitter = SeededJitter::for_inputs(
            self.spec,
            &self.lever_values,
            self.inflation,
            monthly_impact_k,
        );
        self.evaluate_with(&mut jitter)
    }

    /// Recomputes the full engine output with an explicit jitter source.
    pub fn evaluate_with(&self, jitter: &mut dyn Jitter) -> Outcome {
        let monthly_impact_k = aggregate_monthly_impact(self.spec, &self.draft);
        let projection = project(
            self.spec,
            &self.lever_values,
            self.inflation,
            monthly_impact_k,
            jitter,
        );

        let total_proposed_k: i64 = projection.iter().map(|p| p.proposed_k).sum();
        let total_market_k: i64 = projection.iter().map(|p| p.market_k).sum();

        let clause_impacts = self
            .spec
            .clauses
            .iter()
            .map(|clause| {
                let option = self
                    .draft
                    .get(clause.id)
                    .copied()
                    .unwrap_or(ClauseOption::ProviderFav);
                (clause.id.to_owned(), annual_impact(self.spec, clause, option))
            })
            .collect();

        Outcome {
            total_proposed_k,
            total_market_k,
            variance_k: total_proposed_k - total_market_k,
            risk: classify_risk(self.spec, monthly_impact_k),
            clause_impacts,
            projection,
        }
    }

    /// Renders the per-clause document view from the applied snapshot.
    ///
    /// A clause counts as changed only once the scenario has been published
    /// and the applied wording differs from the original text.
    pub fn document_view(&self) -> Vec<ClauseRendering> {
        self.spec
            .clauses
            .iter()
            .map(|clause| {
                let option = self
                    .applied
                    .get(clause.id)
                    .copied()
                    .unwrap_or(ClauseOption::ProviderFav);
                let applied_text = clause.option(option).legal_text;
                ClauseRendering {
                    clause_id: clause.id.to_owned(),
                    title: clause.title.to_owned(),
                    original_text: clause.legal_text.to_owned(),
                    applied_text: applied_text.to_owned(),
                    changed: self.published && applied_text != clause.legal_text,
                }
            })
            .collect()
    }
}
