//! # payoff-sim: Expiry Payoff Profiles for Option Spreads
//!
//! A Rust library for computing the profit/loss profile of multi-leg option
//! strategies at expiry over a grid of hypothetical underlying prices.
//!
//! ## Key Features
//!
//! - **Single-Leg Payoffs**: call/put, long/short, net of premium, element-wise over `ndarray` grids
//! - **Strategies**: bull spread, bear spread and box spread with fixed leg templates
//! - **Scenarios**: immutable, serde-loadable inputs with validation
//! - **Batch Evaluation**: independent scenarios evaluated in parallel with Rayon
//! - **Summaries**: max profit, max loss and breakeven prices
//!
//! ## Quick Start
//!
//! ```rust
//! use payoff_sim::payoff::{OptionType, PriceGrid};
//! use payoff_sim::strategy::compute_bull_spread;
//!
//! let grid = PriceGrid::new(100.0).expect("positive spot");
//! let payoff = compute_bull_spread(grid.prices(), 95.0, 105.0, 2.0, 1.0, OptionType::Call);
//!
//! assert_eq!(payoff.cost, 1.0);
//! let net = payoff.net();
//! assert_eq!(net.len(), grid.len());
//! ```
//!
//! ## Conventions
//!
//! Each leg's payoff already includes its own premium. The gross curve is the
//! sum of leg payoffs and the net curve is `gross - cost`, where the cost is
//! the strategy's net premium outlay.

pub mod error;
pub mod output;
pub mod payoff;
pub mod scenario;
pub mod strategy;
pub mod telemetry;

// Re-export commonly used types for convenience
pub use error::{PayoffError, PayoffResult};
pub use payoff::{OptionLeg, OptionType, Position, PriceGrid};
pub use scenario::{evaluate, evaluate_batch, ScenarioConfig, ScenarioReport, StrategyParams};
pub use strategy::{Strategy, StrategyPayoff};
