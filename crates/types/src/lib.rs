//! Shared enumerated domain types for the Contract Scenario Explorer.
//!
//! Every value crossing the engine boundary is one of the closed enumerations
//! defined here. Malformed input (an option id outside the three-variant set,
//! an unknown contract type) is rejected at parse time by `FromStr`, never
//! silently coerced downstream.

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing wire-format strings into domain enums.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// The string did not name a known contract type.
    #[error("unknown contract type '{0}' (expected hospital, anesthesia or home_health)")]
    UnknownContractType(String),
    /// The string did not name a known clause option.
    #[error("unknown clause option '{0}' (expected aggressive, balanced or provider_fav)")]
    UnknownClauseOption(String),
    /// The string did not name a known inflation tier.
    #[error("unknown inflation tier '{0}' (expected low, med or high)")]
    UnknownInflationTier(String),
}

/// The kind of service contract under negotiation.
///
/// Selects which catalog entry, baseline monthly spend and per-clause impact
/// scaler apply. Switching the active contract type discards all derived
/// scenario state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Inpatient facility agreement.
    Hospital,
    /// Professional anesthesia services agreement.
    Anesthesia,
    /// Post-acute home health agreement.
    HomeHealth,
}

impl ContractType {
    /// All contract types, in catalog order.
    pub const ALL: [ContractType; 3] = [
        ContractType::Hospital,
        ContractType::Anesthesia,
        ContractType::HomeHealth,
    ];

    /// Convert to the wire format string.
    pub fn as_str(self) -> &'static str {
        match self {
            ContractType::Hospital => "hospital",
            ContractType::Anesthesia => "anesthesia",
            ContractType::HomeHealth => "home_health",
        }
    }
}

impl std::str::FromStr for ContractType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hospital" => Ok(ContractType::Hospital),
            "anesthesia" => Ok(ContractType::Anesthesia),
            "home_health" => Ok(ContractType::HomeHealth),
            other => Err(TypeError::UnknownContractType(other.to_owned())),
        }
    }
}

impl std::fmt::Display for ContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the three mutually exclusive wordings a negotiable clause can take.
///
/// Ordered payer-favourable to provider-favourable. `ProviderFav` is always
/// the contractual status quo: its legal text equals the clause's original
/// wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseOption {
    /// Maximum payer savings, hardest to get signed.
    Aggressive,
    /// Market-standard middle ground.
    Balanced,
    /// The original wording; no savings.
    ProviderFav,
}

impl ClauseOption {
    /// All options, payer-favourable first.
    pub const ALL: [ClauseOption; 3] = [
        ClauseOption::Aggressive,
        ClauseOption::Balanced,
        ClauseOption::ProviderFav,
    ];

    /// Convert to the wire format string.
    pub fn as_str(self) -> &'static str {
        match self {
            ClauseOption::Aggressive => "aggressive",
            ClauseOption::Balanced => "balanced",
            ClauseOption::ProviderFav => "provider_fav",
        }
    }
}

impl std::str::FromStr for ClauseOption {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aggressive" => Ok(ClauseOption::Aggressive),
            "balanced" => Ok(ClauseOption::Balanced),
            "provider_fav" => Ok(ClauseOption::ProviderFav),
            other => Err(TypeError::UnknownClauseOption(other.to_owned())),
        }
    }
}

impl std::fmt::Display for ClauseOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The inflation outlook applied across the 12-month projection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InflationTier {
    /// 1% annual trend.
    Low,
    /// 3% annual trend.
    #[default]
    Med,
    /// 6% annual trend.
    High,
}

impl InflationTier {
    /// The multiplier the projection ramps towards by month 12.
    pub fn trend_factor(self) -> f64 {
        match self {
            InflationTier::Low => 1.01,
            InflationTier::Med => 1.03,
            InflationTier::High => 1.06,
        }
    }

    /// Convert to the wire format string.
    pub fn as_str(self) -> &'static str {
        match self {
            InflationTier::Low => "low",
            InflationTier::Med => "med",
            InflationTier::High => "high",
        }
    }
}

impl std::str::FromStr for InflationTier {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(InflationTier::Low),
            "med" => Ok(InflationTier::Med),
            "high" => Ok(InflationTier::High),
            other => Err(TypeError::UnknownInflationTier(other.to_owned())),
        }
    }
}

impl std::fmt::Display for InflationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate risk classification for a scenario.
///
/// `Low` is declared for completeness but the current thresholds never
/// produce it: the lowest aggregate clause impact still classifies as
/// `Medium`. Recalibrating is a catalog data change, not a code change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-clause risk banding carried as catalog metadata.
///
/// Distinct from [`RiskLevel`]: this describes how exposed a single clause's
/// current wording is, not the scenario-wide classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Critical,
    High,
    Med,
    Low,
}

impl RiskTier {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Critical => "Critical",
            RiskTier::High => "High",
            RiskTier::Med => "Med",
            RiskTier::Low => "Low",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_contract_type_round_trips_wire_strings() {
        for ct in ContractType::ALL {
            assert_eq!(ContractType::from_str(ct.as_str()).expect("parse"), ct);
        }
    }

    #[test]
    fn test_contract_type_rejects_unknown_string() {
        let err = ContractType::from_str("dental").expect_err("should reject");
        assert!(matches!(err, TypeError::UnknownContractType(s) if s == "dental"));
    }

    #[test]
    fn test_clause_option_round_trips_wire_strings() {
        for opt in ClauseOption::ALL {
            assert_eq!(ClauseOption::from_str(opt.as_str()).expect("parse"), opt);
        }
    }

    #[test]
    fn test_inflation_tier_defaults_to_med() {
        assert_eq!(InflationTier::default(), InflationTier::Med);
    }

    #[test]
    fn test_inflation_trend_factors() {
        assert_eq!(InflationTier::Low.trend_factor(), 1.01);
        assert_eq!(InflationTier::Med.trend_factor(), 1.03);
        assert_eq!(InflationTier::High.trend_factor(), 1.06);
    }

    #[test]
    fn test_serde_uses_snake_case_wire_spellings() {
        let json = serde_json::to_string(&ContractType::HomeHealth).expect("serialize");
        assert_eq!(json, "\"home_health\"");
        let json = serde_json::to_string(&ClauseOption::ProviderFav).expect("serialize");
        assert_eq!(json, "\"provider_fav\"");
    }
}
