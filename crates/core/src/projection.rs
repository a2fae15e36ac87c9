//! 12-month trend projection.
//!
//! The numeric heart of the engine: maps a contract's spend model, its lever
//! values, an inflation tier and the aggregate clause impact to twelve
//! monthly data points of proposed versus market-average spend, in thousands
//! of dollars.
//!
//! The market benchmark carries a small uniform jitter in `[0, 10)`. The
//! jitter source is an injectable trait: the default seeds a PRNG from the
//! scenario inputs so identical inputs reproduce identical output, while
//! [`ThreadJitter`] keeps the original wall-clock nondeterminism for callers
//! that want fresh benchmark noise on every run.

use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use cse_catalog::{ContractSpec, SpendModel};
use cse_types::InflationTier;

/// Projection month labels, in output order.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Amplitude of the cyclical seasonality wave.
const SEASONALITY_AMPLITUDE: f64 = 0.08;

/// Market benchmark as a share of proposed spend.
const MARKET_DISCOUNT: f64 = 0.95;

/// Upper bound (exclusive) of the market benchmark jitter, in thousands.
const JITTER_SPAN_K: f64 = 10.0;

/// One projected month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectionPoint {
    /// Month label, `Jan` through `Dec`.
    pub month: &'static str,
    /// Proposed spend in thousands of dollars, rounded.
    pub proposed_k: i64,
    /// Market-average benchmark in thousands of dollars, rounded.
    pub market_k: i64,
}

/// Source of the market benchmark jitter.
pub trait Jitter {
    /// Draws the next jitter value in `[0, 10)` thousands.
    fn sample(&mut self) -> f64;
}

/// Deterministic jitter seeded from the scenario inputs.
///
/// Two projections with identical inputs draw identical jitter sequences,
/// which makes benchmark values reproducible across runs and testable.
pub struct SeededJitter(StdRng);

impl SeededJitter {
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seeds from the full input tuple of a projection.
    pub fn for_inputs(
        spec: &ContractSpec,
        lever_values: &[f64],
        inflation: InflationTier,
        monthly_impact_k: f64,
    ) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        spec.contract_type.as_str().hash(&mut hasher);
        for value in lever_values {
            value.to_bits().hash(&mut hasher);
        }
        inflation.as_str().hash(&mut hasher);
        monthly_impact_k.to_bits().hash(&mut hasher);
        Self::from_seed(hasher.finish())
    }
}

impl Jitter for SeededJitter {
    fn sample(&mut self) -> f64 {
        self.0.gen_range(0.0..JITTER_SPAN_K)
    }
}

/// Wall-clock random jitter; every invocation yields different benchmarks.
pub struct ThreadJitter;

impl Jitter for ThreadJitter {
    fn sample(&mut self) -> f64 {
        rand::thread_rng().gen_range(0.0..JITTER_SPAN_K)
    }
}

/// Raw monthly spend in thousands before seasonality, trend and clause
/// impact, derived from the contract's spend model and lever values.
fn raw_monthly_spend(spec: &ContractSpec, lever_values: &[f64]) -> f64 {
    let lever1 = lever_values.first().copied().unwrap_or_default();
    let lever2 = lever_values.get(1).copied().unwrap_or_default();
    match spec.spend_model {
        SpendModel::BaselineIncrease { carve_out_share } => {
            let base_spend = spec.baseline_monthly_k * (1.0 + lever1 / 100.0);
            let carve_out = spec.baseline_monthly_k * carve_out_share * (lever2 / 100.0);
            base_spend + carve_out
        }
        SpendModel::UnitVolume { monthly_units } => {
            let unit_spend = monthly_units * lever1 / 1000.0;
            unit_spend + unit_spend * (lever2 / 100.0)
        }
    }
}

/// Generates the 12-month projection for a scenario.
///
/// For month index `i`:
/// - `time_decay(i) = 1 + i × (trend − 1) / 12`, a linear ramp reaching the
///   inflation tier's trend factor by month 12 (not compounding);
/// - `seasonality(i) = 1 + 0.08 × sin(i / 2)`, a fixed-shape wave with no
///   calendar semantics;
/// - `proposed = round(raw × seasonality × time_decay + impact × seasonality)`;
/// - `market = round(proposed × 0.95 + jitter)`.
///
/// Lever values are pre-validated by the caller; this function never range
/// checks. Output is always exactly 12 points, `Jan` through `Dec`.
pub fn project(
    spec: &ContractSpec,
    lever_values: &[f64],
    inflation: InflationTier,
    monthly_impact_k: f64,
    jitter: &mut dyn Jitter,
) -> Vec<ProjectionPoint> {
    debug_assert_eq!(lever_values.len(), spec.levers.len());
    let trend_factor = inflation.trend_factor();
    let raw = raw_monthly_spend(spec, lever_values);

    MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let time_decay = 1.0 + i as f64 * (trend_factor - 1.0) / 12.0;
            let seasonality = 1.0 + SEASONALITY_AMPLITUDE * (i as f64 / 2.0).sin();
            let proposed =
                (raw * seasonality * time_decay + monthly_impact_k * seasonality).round();
            let market = (proposed * MARKET_DISCOUNT + jitter.sample()).round();
            ProjectionPoint {
                month,
                proposed_k: proposed as i64,
                market_k: market as i64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cse_types::ContractType;

    /// Test double pinning the jitter to zero.
    struct ZeroJitter;

    impl Jitter for ZeroJitter {
        fn sample(&mut self) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_projection_always_has_12_months_in_order() {
        for spec in cse_catalog::catalog() {
            for inflation in [InflationTier::Low, InflationTier::Med, InflationTier::High] {
                let levers = spec.default_lever_values();
                let points = project(spec, &levers, inflation, 0.0, &mut ZeroJitter);
                assert_eq!(points.len(), 12);
                for (point, month) in points.iter().zip(MONTHS) {
                    assert_eq!(point.month, month);
                    assert!(point.proposed_k >= 0, "{month}: {}", point.proposed_k);
                }
            }
        }
    }

    #[test]
    fn test_month_zero_matches_hand_computed_hospital_scenario() {
        // lever1 3.5%, lever2 0, status-quo clause impact (3 + 2) × 50 = 250:
        // raw = 2000 × 1.035 = 2070, decay = 1, seasonality = 1 at i = 0,
        // proposed = round(2070 + 250) = 2320.
        let spec = cse_catalog::contract(ContractType::Hospital);
        let points = project(spec, &[3.5, 0.0], InflationTier::Med, 250.0, &mut ZeroJitter);
        assert_eq!(points[0].proposed_k, 2320);
        assert_eq!(points[0].market_k, (2320.0_f64 * 0.95).round() as i64);
    }

    #[test]
    fn test_hospital_proposed_spend_is_monotone_in_lever1() {
        let spec = cse_catalog::contract(ContractType::Hospital);
        let low = project(spec, &[3.0, 2.0], InflationTier::Med, 250.0, &mut ZeroJitter);
        let high = project(spec, &[4.0, 2.0], InflationTier::Med, 250.0, &mut ZeroJitter);
        for (lo, hi) in low.iter().zip(&high) {
            assert!(hi.proposed_k > lo.proposed_k, "{}", lo.month);
        }
    }

    #[test]
    fn test_higher_inflation_never_lowers_later_months() {
        let spec = cse_catalog::contract(ContractType::Anesthesia);
        let levers = spec.default_lever_values();
        let med = project(spec, &levers, InflationTier::Med, 50.0, &mut ZeroJitter);
        let high = project(spec, &levers, InflationTier::High, 50.0, &mut ZeroJitter);
        // Month 0 has decay 1 under every tier; later months ramp.
        assert_eq!(med[0].proposed_k, high[0].proposed_k);
        for i in 1..12 {
            assert!(high[i].proposed_k >= med[i].proposed_k, "month {i}");
        }
    }

    #[test]
    fn test_seeded_jitter_reproduces_identical_projections() {
        let spec = cse_catalog::contract(ContractType::HomeHealth);
        let levers = spec.default_lever_values();
        let mut first = SeededJitter::for_inputs(spec, &levers, InflationTier::Med, 35.0);
        let mut second = SeededJitter::for_inputs(spec, &levers, InflationTier::Med, 35.0);
        let a = project(spec, &levers, InflationTier::Med, 35.0, &mut first);
        let b = project(spec, &levers, InflationTier::Med, 35.0, &mut second);
        assert_eq!(a, b);
    }

    #[test]
    fn test_jitter_samples_stay_in_bounds() {
        let mut jitter = SeededJitter::from_seed(7);
        for _ in 0..100 {
            let v = jitter.sample();
            assert!((0.0..10.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_market_tracks_proposed_at_95_percent_plus_jitter() {
        let spec = cse_catalog::contract(ContractType::Anesthesia);
        let levers = spec.default_lever_values();
        let mut jitter = SeededJitter::from_seed(42);
        let points = project(spec, &levers, InflationTier::Low, 0.0, &mut jitter);
        for point in &points {
            let floor = (point.proposed_k as f64 * 0.95).round() as i64;
            assert!(point.market_k >= floor - 1, "{}", point.month);
            assert!(point.market_k <= floor + 10, "{}", point.month);
        }
    }
}
