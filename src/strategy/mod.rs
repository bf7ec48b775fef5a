//! Multi-leg strategies built from single-leg payoffs.

pub mod spreads;
pub mod summary;

pub use spreads::{
    compute_bear_spread, compute_box_spread, compute_bull_spread, Strategy, StrategyPayoff,
};
pub use summary::PayoffSummary;
