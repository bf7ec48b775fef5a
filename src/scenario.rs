//! Scenario Configuration and Evaluation
//!
//! A [`ScenarioConfig`] is the immutable input a presentation layer hands to
//! the engine: spot price, market context, and one strategy with its
//! strikes and premiums. [`evaluate`] turns it into a [`ScenarioReport`]
//! holding the price grid, gross and net payoff curves, cost, and a summary.
//!
//! Scenarios can be loaded from JSON:
//!
//! ```json
//! {
//!   "spot": 100.0,
//!   "annual_volatility_pct": 30.0,
//!   "days_to_maturity": 30,
//!   "strategy": {
//!     "kind": "bull_spread",
//!     "strike1": 95.0,
//!     "strike2": 105.0,
//!     "premium1": 2.0,
//!     "premium2": 1.0,
//!     "option_type": "call"
//!   }
//! }
//! ```

use crate::error::{validation::*, PayoffError, PayoffResult};
use crate::payoff::grid::PriceGrid;
use crate::payoff::option::{OptionLeg, OptionType};
use crate::strategy::spreads::{self, Strategy, StrategyPayoff};
use crate::strategy::summary::PayoffSummary;
use ndarray::{Array1, ArrayView1};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Calendar days used to scale annual volatility to a daily figure
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Strikes, premiums and option type of a two-leg spread
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreadParams {
    /// Lower strike
    pub strike1: f64,
    /// Higher strike
    pub strike2: f64,
    /// Premium of the lower-strike option
    pub premium1: f64,
    /// Premium of the higher-strike option
    pub premium2: f64,
    pub option_type: OptionType,
}

impl Default for SpreadParams {
    fn default() -> Self {
        SpreadParams {
            strike1: 95.0,
            strike2: 105.0,
            premium1: 2.0,
            premium2: 1.0,
            option_type: OptionType::Call,
        }
    }
}

/// Strikes and the four premiums of a box spread
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParams {
    pub strike1: f64,
    pub strike2: f64,
    /// Call at the lower strike
    pub premium1: f64,
    /// Call at the higher strike
    pub premium2: f64,
    /// Put at the lower strike
    pub premium3: f64,
    /// Put at the higher strike
    pub premium4: f64,
}

impl Default for BoxParams {
    fn default() -> Self {
        BoxParams {
            strike1: 95.0,
            strike2: 105.0,
            premium1: 2.0,
            premium2: 1.0,
            premium3: 1.5,
            premium4: 0.5,
        }
    }
}

/// Strategy selection together with its inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyParams {
    BullSpread(SpreadParams),
    BearSpread(SpreadParams),
    BoxSpread(BoxParams),
}

impl Default for StrategyParams {
    fn default() -> Self {
        StrategyParams::BullSpread(SpreadParams::default())
    }
}

impl StrategyParams {
    /// Default inputs for `strategy`
    pub fn defaults_for(strategy: Strategy) -> Self {
        match strategy {
            Strategy::BullSpread => StrategyParams::BullSpread(SpreadParams::default()),
            Strategy::BearSpread => StrategyParams::BearSpread(SpreadParams::default()),
            Strategy::BoxSpread => StrategyParams::BoxSpread(BoxParams::default()),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            StrategyParams::BullSpread(_) => Strategy::BullSpread,
            StrategyParams::BearSpread(_) => Strategy::BearSpread,
            StrategyParams::BoxSpread(_) => Strategy::BoxSpread,
        }
    }

    /// The option contracts this strategy holds
    pub fn legs(&self) -> Vec<OptionLeg> {
        match *self {
            StrategyParams::BullSpread(p) => {
                spreads::bull_spread_legs(p.strike1, p.strike2, p.premium1, p.premium2, p.option_type).to_vec()
            }
            StrategyParams::BearSpread(p) => {
                spreads::bear_spread_legs(p.strike1, p.strike2, p.premium1, p.premium2, p.option_type).to_vec()
            }
            StrategyParams::BoxSpread(p) => spreads::box_spread_legs(
                p.strike1, p.strike2, p.premium1, p.premium2, p.premium3, p.premium4,
            )
            .to_vec(),
        }
    }

    /// Gross payoff and cost over `prices`
    pub fn compute(&self, prices: ArrayView1<'_, f64>) -> StrategyPayoff {
        match *self {
            StrategyParams::BullSpread(p) => spreads::compute_bull_spread(
                prices, p.strike1, p.strike2, p.premium1, p.premium2, p.option_type,
            ),
            StrategyParams::BearSpread(p) => spreads::compute_bear_spread(
                prices, p.strike1, p.strike2, p.premium1, p.premium2, p.option_type,
            ),
            StrategyParams::BoxSpread(p) => spreads::compute_box_spread(
                prices, p.strike1, p.strike2, p.premium1, p.premium2, p.premium3, p.premium4,
            ),
        }
    }

    fn validate(&self) -> PayoffResult<()> {
        match self {
            StrategyParams::BullSpread(p) | StrategyParams::BearSpread(p) => {
                validate_positive("strike1", p.strike1)?;
                validate_positive("strike2", p.strike2)?;
                validate_non_negative("premium1", p.premium1)?;
                validate_non_negative("premium2", p.premium2)?;
            }
            StrategyParams::BoxSpread(p) => {
                validate_positive("strike1", p.strike1)?;
                validate_positive("strike2", p.strike2)?;
                validate_non_negative("premium1", p.premium1)?;
                validate_non_negative("premium2", p.premium2)?;
                validate_non_negative("premium3", p.premium3)?;
                validate_non_negative("premium4", p.premium4)?;
            }
        }
        Ok(())
    }
}

/// Immutable input to one payoff evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub spot: f64,
    /// Annual volatility in percent (30.0 means 30 %)
    pub annual_volatility_pct: f64,
    pub days_to_maturity: u32,
    pub strategy: StrategyParams,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            spot: 100.0,
            annual_volatility_pct: 30.0,
            days_to_maturity: 30,
            strategy: StrategyParams::default(),
        }
    }
}

impl ScenarioConfig {
    /// Validate the scenario inputs
    pub fn validate(&self) -> PayoffResult<()> {
        validate_positive("spot", self.spot)?;
        validate_non_negative("annual_volatility_pct", self.annual_volatility_pct)?;

        if self.days_to_maturity == 0 {
            return Err(PayoffError::InvalidConfiguration {
                field: "days_to_maturity".to_string(),
                reason: "must be at least one day".to_string(),
            });
        }

        self.strategy.validate()
    }

    pub fn from_json_str(json: &str) -> PayoffResult<Self> {
        serde_json::from_str(json).map_err(|e| PayoffError::ScenarioLoad {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> PayoffResult<Self> {
        let path = path.as_ref();
        let load_err = |reason: String| PayoffError::ScenarioLoad {
            path: path.display().to_string(),
            reason,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        serde_json::from_str(&contents).map_err(|e| load_err(e.to_string()))
    }

    pub fn market_context(&self) -> MarketContext {
        MarketContext::new(self.annual_volatility_pct, self.days_to_maturity)
    }
}

/// Volatility figures shown alongside the payoff
///
/// Informational only; no pricing model consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketContext {
    pub annual_volatility_pct: f64,
    pub days_to_maturity: u32,
    /// `annual / sqrt(365)`
    pub daily_volatility_pct: f64,
    /// `daily * sqrt(days_to_maturity)`
    pub horizon_volatility_pct: f64,
}

impl MarketContext {
    pub fn new(annual_volatility_pct: f64, days_to_maturity: u32) -> Self {
        let daily = annual_volatility_pct / DAYS_PER_YEAR.sqrt();
        MarketContext {
            annual_volatility_pct,
            days_to_maturity,
            daily_volatility_pct: daily,
            horizon_volatility_pct: daily * f64::from(days_to_maturity).sqrt(),
        }
    }
}

/// Everything a presentation layer needs to display one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub strategy: Strategy,
    pub legs: Vec<OptionLeg>,
    pub grid: PriceGrid,
    pub gross: Array1<f64>,
    pub net: Array1<f64>,
    pub cost: f64,
    pub context: MarketContext,
    pub summary: PayoffSummary,
}

/// Evaluate one scenario
///
/// # Errors
///
/// Returns `PayoffError` if the configuration fails validation.
pub fn evaluate(cfg: &ScenarioConfig) -> PayoffResult<ScenarioReport> {
    cfg.validate()?;

    let strategy = cfg.strategy.strategy();
    let grid = PriceGrid::new(cfg.spot)?;
    let (gross, cost) = cfg.strategy.compute(grid.prices()).into_parts();
    let net = &gross - cost;
    let summary = PayoffSummary::from_curve(grid.prices(), net.view())?;

    debug!(
        strategy = %strategy,
        spot = cfg.spot,
        cost,
        max_profit = summary.max_profit,
        max_loss = summary.max_loss,
        "evaluated scenario"
    );

    Ok(ScenarioReport {
        strategy,
        legs: cfg.strategy.legs(),
        grid,
        gross,
        net,
        cost,
        context: cfg.market_context(),
        summary,
    })
}

/// Evaluate independent scenarios in parallel
///
/// Results are returned in input order; one failing scenario does not
/// affect the others.
pub fn evaluate_batch(cfgs: &[ScenarioConfig]) -> Vec<PayoffResult<ScenarioReport>> {
    info!(scenarios = cfgs.len(), "evaluating scenario batch");
    cfgs.par_iter().map(evaluate).collect()
}
