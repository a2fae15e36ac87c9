//! Clause impact resolution.
//!
//! Two related figures derive from a clause decision:
//! - the *annualized dollar impact* of one clause's wording choice, shown
//!   alongside each option, and
//! - the *aggregate monthly impact* of all decisions in a scenario, in
//!   thousands, which perturbs every month of the trend projection.
//!
//! Both read the weight table the catalog carries on each clause, scaled by
//! the contract's per-type impact scaler.

use std::collections::BTreeMap;

use cse_catalog::{ClauseSpec, ContractSpec};
use cse_types::ClauseOption;

/// Annualized dollar impact of choosing `option` for `clause`.
///
/// `weight × scaler × 1000 × 12`: the clause's monthly weight under that
/// wording, in thousands, annualized and converted to raw dollars.
pub fn annual_impact(spec: &ContractSpec, clause: &ClauseSpec, option: ClauseOption) -> f64 {
    clause.weight(option) * spec.impact_scaler_k * 1000.0 * 12.0
}

/// Combined monthly impact of a full decision set, in thousands of dollars.
///
/// Sums each clause's weight under its chosen wording, scaled by the
/// contract's impact scaler. The scenario state machine guarantees the
/// decision map covers every clause of the active contract; a missing entry
/// is a programming error and falls back to the status-quo wording.
pub fn aggregate_monthly_impact(
    spec: &ContractSpec,
    decisions: &BTreeMap<String, ClauseOption>,
) -> f64 {
    spec.clauses
        .iter()
        .map(|clause| {
            let decision = decisions.get(clause.id);
            debug_assert!(decision.is_some(), "no decision for clause '{}'", clause.id);
            let option = decision.copied().unwrap_or(ClauseOption::ProviderFav);
            clause.weight(option) * spec.impact_scaler_k
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cse_types::ContractType;

    fn decisions(pairs: &[(&str, ClauseOption)]) -> BTreeMap<String, ClauseOption> {
        pairs.iter().map(|(id, o)| (id.to_string(), *o)).collect()
    }

    #[test]
    fn test_hospital_implant_provider_fav_is_1_8m_annually() {
        let spec = cse_catalog::contract(ContractType::Hospital);
        let clause = spec.clause("implant").expect("implant clause");
        let impact = annual_impact(spec, clause, ClauseOption::ProviderFav);
        assert_eq!(impact, 1_800_000.0);
    }

    #[test]
    fn test_anesthesia_afterhours_balanced_is_120k_annually() {
        let spec = cse_catalog::contract(ContractType::Anesthesia);
        let clause = spec.clause("afterhours").expect("afterhours clause");
        let impact = annual_impact(spec, clause, ClauseOption::Balanced);
        assert_eq!(impact, 120_000.0);
    }

    #[test]
    fn test_aggressive_wording_costs_nothing() {
        for spec in cse_catalog::catalog() {
            for clause in &spec.clauses {
                assert_eq!(annual_impact(spec, clause, ClauseOption::Aggressive), 0.0);
            }
        }
    }

    #[test]
    fn test_second_clause_uses_its_own_weight_table() {
        let spec = cse_catalog::contract(ContractType::Hospital);
        let stoploss = spec.clause("stoploss").expect("stoploss clause");
        assert_eq!(
            annual_impact(spec, stoploss, ClauseOption::ProviderFav),
            1_200_000.0
        );
        assert_eq!(
            annual_impact(spec, stoploss, ClauseOption::Balanced),
            300_000.0
        );
    }

    #[test]
    fn test_hospital_status_quo_aggregates_to_250_monthly() {
        let spec = cse_catalog::contract(ContractType::Hospital);
        let all_status_quo = decisions(&[
            ("implant", ClauseOption::ProviderFav),
            ("stoploss", ClauseOption::ProviderFav),
        ]);
        // (3 + 2) × 50
        assert_eq!(aggregate_monthly_impact(spec, &all_status_quo), 250.0);
    }

    #[test]
    fn test_mixed_decisions_aggregate_per_clause() {
        let spec = cse_catalog::contract(ContractType::Hospital);
        let mixed = decisions(&[
            ("implant", ClauseOption::Balanced),
            ("stoploss", ClauseOption::Balanced),
        ]);
        // (1 + 0.5) × 50
        assert_eq!(aggregate_monthly_impact(spec, &mixed), 75.0);
    }

    #[test]
    fn test_all_aggressive_aggregates_to_zero() {
        let spec = cse_catalog::contract(ContractType::HomeHealth);
        let all_aggressive = decisions(&[
            ("mileage", ClauseOption::Aggressive),
            ("supplies", ClauseOption::Aggressive),
        ]);
        assert_eq!(aggregate_monthly_impact(spec, &all_aggressive), 0.0);
    }
}
