//! # CSE Catalog
//!
//! Static reference data for the Contract Scenario Explorer: one entry per
//! contract type, each carrying its rate-lever specifications, negotiable
//! clauses with alternative wordings, and the financial constants the engine
//! reads (baseline spend, impact scaler, risk threshold).
//!
//! The catalog is read-only. The engine never mutates it, and every weight or
//! threshold the simulation needs lives here as data rather than in code, so
//! recalibration is a catalog edit.
//!
//! **No presentation concerns beyond [`ContractDisplay`]**: colours and
//! labels are segregated into that one struct so the engine-relevant fields
//! stay free of display metadata.

use serde::Serialize;
use std::sync::LazyLock;

use cse_types::{ClauseOption, ContractType, RiskTier};

mod data;

/// Errors that can occur when validating caller input against the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A lever value fell outside the catalogued `[min, max]` range.
    #[error("lever '{lever}' value {value} is outside the allowed range [{min}, {max}]")]
    LeverOutOfRange {
        lever: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Specification of one bounded numeric rate lever.
///
/// Purely descriptive bounds for the presentation layer to enforce before a
/// value reaches the engine; a value outside `[min, max]` is a caller error,
/// not a runtime state the engine handles. `step` is a UI increment hint and
/// is not enforced.
#[derive(Clone, Debug, Serialize)]
pub struct LeverSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: &'static str,
    pub default_value: f64,
}

impl LeverSpec {
    /// Validates a candidate value against this lever's bounds.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::LeverOutOfRange` if `value` is outside
    /// `[min, max]`.
    pub fn validate(&self, value: f64) -> CatalogResult<()> {
        if value < self.min || value > self.max {
            return Err(CatalogError::LeverOutOfRange {
                lever: self.id.to_owned(),
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Monthly impact multipliers for one clause, one weight per wording.
///
/// Multiplied by the contract's `impact_scaler_k` to get the clause's
/// monthly contribution in thousands of dollars. Each clause carries its own
/// table; the weights are not shared across clauses.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ClauseWeights {
    pub provider_fav: f64,
    pub balanced: f64,
    pub aggressive: f64,
}

impl ClauseWeights {
    /// The weight for a given wording choice.
    pub fn weight(&self, option: ClauseOption) -> f64 {
        match option {
            ClauseOption::Aggressive => self.aggressive,
            ClauseOption::Balanced => self.balanced,
            ClauseOption::ProviderFav => self.provider_fav,
        }
    }
}

/// One alternative wording for a clause.
#[derive(Clone, Debug, Serialize)]
pub struct ClauseOptionSpec {
    pub option: ClauseOption,
    pub label: &'static str,
    pub impact_note: &'static str,
    pub legal_text: &'static str,
}

/// A negotiable clause: original wording plus exactly three alternatives.
///
/// Invariant: `options` holds one entry per [`ClauseOption`] variant in
/// `ClauseOption::ALL` order, and the `ProviderFav` entry's `legal_text`
/// equals this clause's own `legal_text` (the original is the
/// provider-favourable alternative by construction).
#[derive(Clone, Debug, Serialize)]
pub struct ClauseSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub risk_tier: RiskTier,
    pub current_summary: &'static str,
    pub legal_text: &'static str,
    pub market_note: &'static str,
    pub weights: ClauseWeights,
    pub options: [ClauseOptionSpec; 3],
}

impl ClauseSpec {
    /// The detail record for a given wording choice.
    ///
    /// Infallible: `options` is stored in `ClauseOption::ALL` order.
    pub fn option(&self, option: ClauseOption) -> &ClauseOptionSpec {
        let index = match option {
            ClauseOption::Aggressive => 0,
            ClauseOption::Balanced => 1,
            ClauseOption::ProviderFav => 2,
        };
        &self.options[index]
    }

    /// Shorthand for this clause's monthly weight under a wording choice.
    pub fn weight(&self, option: ClauseOption) -> f64 {
        self.weights.weight(option)
    }
}

/// How a contract's raw monthly spend derives from its lever values.
#[derive(Clone, Copy, Debug, Serialize)]
pub enum SpendModel {
    /// Lever 1 is a percentage uplift on the monthly baseline; lever 2 is a
    /// carve-out percentage applied to `baseline × carve_out_share`.
    BaselineIncrease { carve_out_share: f64 },
    /// Lever 1 is a dollar rate per unit across a fixed monthly volume;
    /// lever 2 is a percentage add-on to that unit spend.
    UnitVolume { monthly_units: f64 },
}

/// Display metadata, owned by the presentation layer.
#[derive(Clone, Debug, Serialize)]
pub struct ContractDisplay {
    pub name: &'static str,
    pub category: &'static str,
    pub accent_color: &'static str,
}

/// One catalog entry: everything the engine and presentation layer need to
/// know about a contract type.
#[derive(Clone, Debug, Serialize)]
pub struct ContractSpec {
    pub contract_type: ContractType,
    pub display: ContractDisplay,
    /// Reference monthly spend in thousands of dollars.
    pub baseline_monthly_k: f64,
    /// Thousands of dollars per clause weight unit per month.
    pub impact_scaler_k: f64,
    /// Aggregate monthly impact (thousands) above which a scenario is High risk.
    pub risk_threshold_k: f64,
    pub levers: Vec<LeverSpec>,
    pub clauses: Vec<ClauseSpec>,
    pub spend_model: SpendModel,
}

impl ContractSpec {
    /// Looks up a lever's position by its catalog id.
    pub fn lever_index(&self, id: &str) -> Option<usize> {
        self.levers.iter().position(|l| l.id == id)
    }

    /// Looks up a clause by its catalog id.
    pub fn clause(&self, id: &str) -> Option<&ClauseSpec> {
        self.clauses.iter().find(|c| c.id == id)
    }

    /// Default lever values in lever order.
    pub fn default_lever_values(&self) -> Vec<f64> {
        self.levers.iter().map(|l| l.default_value).collect()
    }
}

static CATALOG: LazyLock<[ContractSpec; 3]> = LazyLock::new(|| {
    [data::hospital(), data::anesthesia(), data::home_health()]
});

/// All catalog entries, in `ContractType::ALL` order.
pub fn catalog() -> &'static [ContractSpec] {
    &*CATALOG
}

/// The catalog entry for a contract type.
pub fn contract(contract_type: ContractType) -> &'static ContractSpec {
    match contract_type {
        ContractType::Hospital => &CATALOG[0],
        ContractType::Anesthesia => &CATALOG[1],
        ContractType::HomeHealth => &CATALOG[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_one_entry_per_contract_type() {
        assert_eq!(catalog().len(), 3);
        for ct in ContractType::ALL {
            assert_eq!(contract(ct).contract_type, ct);
        }
    }

    #[test]
    fn test_every_contract_carries_two_levers_and_two_clauses() {
        for spec in catalog() {
            assert_eq!(spec.levers.len(), 2, "{}", spec.contract_type);
            assert_eq!(spec.clauses.len(), 2, "{}", spec.contract_type);
        }
    }

    #[test]
    fn test_options_are_stored_in_variant_order() {
        for spec in catalog() {
            for clause in &spec.clauses {
                for (i, expected) in ClauseOption::ALL.iter().enumerate() {
                    assert_eq!(clause.options[i].option, *expected, "{}", clause.id);
                }
                for opt in ClauseOption::ALL {
                    assert_eq!(clause.option(opt).option, opt);
                }
            }
        }
    }

    #[test]
    fn test_provider_fav_option_text_matches_original_wording() {
        for spec in catalog() {
            for clause in &spec.clauses {
                let status_quo = clause.option(ClauseOption::ProviderFav);
                assert_eq!(status_quo.legal_text, clause.legal_text, "{}", clause.id);
            }
        }
    }

    #[test]
    fn test_aggressive_weight_is_always_zero() {
        for spec in catalog() {
            for clause in &spec.clauses {
                assert_eq!(clause.weight(ClauseOption::Aggressive), 0.0, "{}", clause.id);
            }
        }
    }

    #[test]
    fn test_financial_constants_per_contract_type() {
        let hospital = contract(ContractType::Hospital);
        assert_eq!(hospital.baseline_monthly_k, 2000.0);
        assert_eq!(hospital.impact_scaler_k, 50.0);
        assert_eq!(hospital.risk_threshold_k, 100.0);

        let anesthesia = contract(ContractType::Anesthesia);
        assert_eq!(anesthesia.baseline_monthly_k, 450.0);
        assert_eq!(anesthesia.impact_scaler_k, 10.0);
        assert_eq!(anesthesia.risk_threshold_k, 20.0);

        let home_health = contract(ContractType::HomeHealth);
        assert_eq!(home_health.baseline_monthly_k, 180.0);
        assert_eq!(home_health.impact_scaler_k, 10.0);
        assert_eq!(home_health.risk_threshold_k, 20.0);
    }

    #[test]
    fn test_lever_validate_accepts_in_range_rejects_out_of_range() {
        let lever = &contract(ContractType::Hospital).levers[0];
        assert!(lever.validate(lever.default_value).is_ok());
        assert!(lever.validate(lever.min).is_ok());
        assert!(lever.validate(lever.max).is_ok());

        let err = lever.validate(lever.max + 0.5).expect_err("should reject");
        assert!(matches!(err, CatalogError::LeverOutOfRange { .. }));
    }

    #[test]
    fn test_hospital_carve_out_allows_negative_values() {
        let carve_out = &contract(ContractType::Hospital).levers[1];
        assert!(carve_out.validate(-5.0).is_ok());
        assert!(carve_out.validate(-5.5).is_err());
    }
}
