//! # CSE Core
//!
//! Scenario simulation and financial projection engine for the Contract
//! Scenario Explorer.
//!
//! This crate contains the pure computational core:
//! - Clause impact resolution (annualized and aggregate monthly figures)
//! - The 12-month trend projection with seasonality and inflation ramp
//! - Risk classification of a decision set
//! - The scenario state machine (draft vs applied decisions, publish, reset)
//!
//! **No presentation concerns**: rendering, formatting, and input widgets
//! belong to callers such as `cse-cli`. The engine is single-threaded and
//! synchronous; every mutation is followed by an explicit
//! [`Scenario::evaluate`] and there is no queued or partial recompute. The
//! only nondeterminism in the source model, the market benchmark jitter, is
//! isolated behind the [`Jitter`] trait with a scenario-seeded default.

pub mod impact;
pub mod projection;
pub mod risk;
pub mod scenario;

pub use impact::{aggregate_monthly_impact, annual_impact};
pub use projection::{project, Jitter, ProjectionPoint, SeededJitter, ThreadJitter, MONTHS};
pub use risk::classify_risk;
pub use scenario::{ClauseRendering, Outcome, Scenario, ScenarioError, ScenarioResult};
