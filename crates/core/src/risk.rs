//! Scenario risk classification.

use cse_catalog::ContractSpec;
use cse_types::RiskLevel;

/// Classifies a scenario from its aggregate monthly clause impact.
///
/// `High` if the impact is strictly above the contract's catalogued
/// threshold, otherwise `Medium`. [`RiskLevel::Low`] exists on the type but
/// the current thresholds never yield it; see the note on that variant.
pub fn classify_risk(spec: &ContractSpec, aggregate_monthly_impact_k: f64) -> RiskLevel {
    if aggregate_monthly_impact_k > spec.risk_threshold_k {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cse_types::ContractType;

    #[test]
    fn test_hospital_threshold_boundary() {
        let spec = cse_catalog::contract(ContractType::Hospital);
        assert_eq!(classify_risk(spec, 100.0), RiskLevel::Medium);
        assert_eq!(classify_risk(spec, 100.01), RiskLevel::High);
    }

    #[test]
    fn test_non_hospital_threshold_is_20() {
        for ct in [ContractType::Anesthesia, ContractType::HomeHealth] {
            let spec = cse_catalog::contract(ct);
            assert_eq!(classify_risk(spec, 20.0), RiskLevel::Medium, "{ct}");
            assert_eq!(classify_risk(spec, 20.5), RiskLevel::High, "{ct}");
        }
    }

    #[test]
    fn test_zero_impact_still_classifies_medium() {
        // Low is never produced by the current thresholds.
        let spec = cse_catalog::contract(ContractType::Hospital);
        assert_eq!(classify_risk(spec, 0.0), RiskLevel::Medium);
    }
}
