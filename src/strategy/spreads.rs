//! Multi-Leg Strategy Composer
//!
//! # Leg Templates
//!
//! | Strategy    | Legs                                                          | Cost              |
//! |-------------|---------------------------------------------------------------|-------------------|
//! | Bull spread | long T @ K1 (p1), short T @ K2 (p2)                           | p1 - p2           |
//! | Bear spread | short T @ K1 (p1), long T @ K2 (p2)                           | p2 - p1           |
//! | Box spread  | call bull spread @ K1/K2 (p1, p2) + put bear spread @ K1/K2 (p3, p4) | p1 - p2 + p3 - p4 |
//!
//! Every leg payoff is already net of its own premium (see
//! [`OptionLeg::payoff_at`]). The gross curve is the plain sum of leg
//! payoffs, and the caller derives the net curve as `gross - cost`.
//!
//! Bull and bear costs are negations of each other for the same premium
//! pair; both are derived from [`bull_spread_cost`] so the sign convention
//! lives in one place.
//!
//! # Box Spread
//!
//! For K1 < K2 the four intrinsic values sum to `K2 - K1` at every expiry
//! price, so the gross curve is flat at `(K2 - K1) - p1 + p2 + p3 - p4`.

use crate::error::{PayoffError, PayoffResult};
use crate::payoff::option::{OptionLeg, OptionType, Position};
use ndarray::{Array1, ArrayView1, Zip};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Supported multi-leg strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    BullSpread,
    BearSpread,
    BoxSpread,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::BullSpread, Strategy::BearSpread, Strategy::BoxSpread];

    pub fn display_name(self) -> &'static str {
        match self {
            Strategy::BullSpread => "Bull Spread",
            Strategy::BearSpread => "Bear Spread",
            Strategy::BoxSpread => "Box Spread",
        }
    }

    /// Number of option contracts in the strategy
    pub fn leg_count(self) -> usize {
        match self {
            Strategy::BullSpread | Strategy::BearSpread => 2,
            Strategy::BoxSpread => 4,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

impl FromStr for Strategy {
    type Err = PayoffError;

    /// Accepts display names ("Bull Spread"), snake case ("bull_spread"),
    /// kebab case and the short forms "bull", "bear", "box".
    fn from_str(s: &str) -> PayoffResult<Self> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();

        match normalized.as_str() {
            "bull_spread" | "bull" => Ok(Strategy::BullSpread),
            "bear_spread" | "bear" => Ok(Strategy::BearSpread),
            "box_spread" | "box" => Ok(Strategy::BoxSpread),
            _ => Err(PayoffError::InvalidStrategy {
                value: s.to_string(),
            }),
        }
    }
}

/// Gross payoff curve and entry cost of one strategy evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyPayoff {
    /// Sum of leg payoffs, parallel to the price grid
    pub gross: Array1<f64>,
    /// Net premium paid (positive) or received (negative)
    pub cost: f64,
}

impl StrategyPayoff {
    /// Net payoff: `gross - cost` at every grid point
    pub fn net(&self) -> Array1<f64> {
        &self.gross - self.cost
    }

    pub fn len(&self) -> usize {
        self.gross.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gross.is_empty()
    }

    pub fn into_parts(self) -> (Array1<f64>, f64) {
        (self.gross, self.cost)
    }
}

/// Long the lower strike, short the higher strike
pub fn bull_spread_legs(
    strike1: f64,
    strike2: f64,
    premium1: f64,
    premium2: f64,
    option_type: OptionType,
) -> [OptionLeg; 2] {
    [
        OptionLeg::new(strike1, option_type, Position::Long, premium1),
        OptionLeg::new(strike2, option_type, Position::Short, premium2),
    ]
}

/// Short the lower strike, long the higher strike
pub fn bear_spread_legs(
    strike1: f64,
    strike2: f64,
    premium1: f64,
    premium2: f64,
    option_type: OptionType,
) -> [OptionLeg; 2] {
    [
        OptionLeg::new(strike1, option_type, Position::Short, premium1),
        OptionLeg::new(strike2, option_type, Position::Long, premium2),
    ]
}

/// Call bull spread followed by put bear spread on the same strikes
pub fn box_spread_legs(
    strike1: f64,
    strike2: f64,
    premium1: f64,
    premium2: f64,
    premium3: f64,
    premium4: f64,
) -> [OptionLeg; 4] {
    let [call_long, call_short] = bull_spread_legs(strike1, strike2, premium1, premium2, OptionType::Call);
    let [put_short, put_long] = bear_spread_legs(strike1, strike2, premium3, premium4, OptionType::Put);
    [call_long, call_short, put_short, put_long]
}

pub fn bull_spread_cost(premium1: f64, premium2: f64) -> f64 {
    premium1 - premium2
}

pub fn bear_spread_cost(premium1: f64, premium2: f64) -> f64 {
    -bull_spread_cost(premium1, premium2)
}

pub fn box_spread_cost(premium1: f64, premium2: f64, premium3: f64, premium4: f64) -> f64 {
    premium1 - premium2 + premium3 - premium4
}

/// Sum of leg payoffs over `prices` in a single pass per leg
fn sum_legs(prices: ArrayView1<'_, f64>, legs: &[OptionLeg]) -> Array1<f64> {
    let mut total = Array1::<f64>::zeros(prices.len());
    for leg in legs {
        Zip::from(&mut total)
            .and(&prices)
            .for_each(|acc, &s| *acc += leg.payoff_at(s));
    }
    total
}

fn warn_if_inverted(strategy: Strategy, strike1: f64, strike2: f64) {
    if strike1 >= strike2 {
        warn!(
            strategy = %strategy,
            strike1,
            strike2,
            "strike1 is not below strike2; payoff profile will not have the usual shape"
        );
    }
}

/// Bull spread payoff over `prices`
///
/// Leg A is long `option_type` at `strike1` for `premium1`, leg B is short
/// `option_type` at `strike2` for `premium2`. Cost is `premium1 - premium2`.
pub fn compute_bull_spread(
    prices: ArrayView1<'_, f64>,
    strike1: f64,
    strike2: f64,
    premium1: f64,
    premium2: f64,
    option_type: OptionType,
) -> StrategyPayoff {
    warn_if_inverted(Strategy::BullSpread, strike1, strike2);
    let legs = bull_spread_legs(strike1, strike2, premium1, premium2, option_type);
    StrategyPayoff {
        gross: sum_legs(prices, &legs),
        cost: bull_spread_cost(premium1, premium2),
    }
}

/// Bear spread payoff over `prices`
///
/// Leg A is short `option_type` at `strike1` for `premium1`, leg B is long
/// `option_type` at `strike2` for `premium2`. Cost is `premium2 - premium1`.
pub fn compute_bear_spread(
    prices: ArrayView1<'_, f64>,
    strike1: f64,
    strike2: f64,
    premium1: f64,
    premium2: f64,
    option_type: OptionType,
) -> StrategyPayoff {
    warn_if_inverted(Strategy::BearSpread, strike1, strike2);
    let legs = bear_spread_legs(strike1, strike2, premium1, premium2, option_type);
    StrategyPayoff {
        gross: sum_legs(prices, &legs),
        cost: bear_spread_cost(premium1, premium2),
    }
}

/// Box spread payoff over `prices`
///
/// The legs are a call bull spread (`premium1`, `premium2`) plus a put bear
/// spread (`premium3`, `premium4`) on the same two strikes. Cost is
/// `premium1 - premium2 + premium3 - premium4`.
pub fn compute_box_spread(
    prices: ArrayView1<'_, f64>,
    strike1: f64,
    strike2: f64,
    premium1: f64,
    premium2: f64,
    premium3: f64,
    premium4: f64,
) -> StrategyPayoff {
    warn_if_inverted(Strategy::BoxSpread, strike1, strike2);
    let legs = box_spread_legs(strike1, strike2, premium1, premium2, premium3, premium4);
    StrategyPayoff {
        gross: sum_legs(prices, &legs),
        cost: box_spread_cost(premium1, premium2, premium3, premium4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn with_captured_log<T>(f: impl FnOnce() -> T) -> (T, String) {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let out = tracing::subscriber::with_default(subscriber, f);
        (out, log.text())
    }

    #[test]
    fn test_bull_call_reference_point() {
        let prices = array![100.0];
        let payoff = compute_bull_spread(prices.view(), 95.0, 105.0, 2.0, 1.0, OptionType::Call);

        assert_eq!(payoff.cost, 1.0);
        assert_eq!(payoff.gross[0], 4.0);
        assert_eq!(payoff.net()[0], 3.0);
    }

    #[test]
    fn test_bear_cost_sign() {
        assert_eq!(bear_spread_cost(2.0, 1.0), -1.0);
        assert_eq!(bull_spread_cost(2.0, 1.0), 1.0);
        assert_eq!(bear_spread_cost(1.0, 2.0), bull_spread_cost(2.0, 1.0));
    }

    #[test]
    fn test_box_legs_order() {
        let legs = box_spread_legs(95.0, 105.0, 2.0, 1.0, 1.5, 0.5);

        assert_eq!(legs[0], OptionLeg::new(95.0, OptionType::Call, Position::Long, 2.0));
        assert_eq!(legs[1], OptionLeg::new(105.0, OptionType::Call, Position::Short, 1.0));
        assert_eq!(legs[2], OptionLeg::new(95.0, OptionType::Put, Position::Short, 1.5));
        assert_eq!(legs[3], OptionLeg::new(105.0, OptionType::Put, Position::Long, 0.5));
    }

    #[test]
    fn test_box_matches_direct_four_leg_sum() {
        let prices = Array1::linspace(50.0, 150.0, 41);
        let composed = compute_box_spread(prices.view(), 95.0, 105.0, 2.0, 1.0, 1.5, 0.5);
        let direct = sum_legs(prices.view(), &box_spread_legs(95.0, 105.0, 2.0, 1.0, 1.5, 0.5));

        for (a, b) in composed.gross.iter().zip(direct.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_inverted_box_warns_once() {
        let prices = Array1::linspace(50.0, 150.0, 11);
        let (payoff, log) = with_captured_log(|| {
            compute_box_spread(prices.view(), 105.0, 95.0, 2.0, 1.0, 1.5, 0.5)
        });

        assert_eq!(log.matches("strike1 is not below strike2").count(), 1, "{}", log);
        assert!(log.contains("Box Spread"));
        assert_eq!(payoff.len(), prices.len());

        // Still the plain four-leg sum
        let direct = sum_legs(prices.view(), &box_spread_legs(105.0, 95.0, 2.0, 1.0, 1.5, 0.5));
        assert_eq!(payoff.gross, direct);
    }

    #[test]
    fn test_ordered_strikes_do_not_warn() {
        let prices = Array1::linspace(50.0, 150.0, 11);
        let (_, log) = with_captured_log(|| {
            compute_box_spread(prices.view(), 95.0, 105.0, 2.0, 1.0, 1.5, 0.5);
            compute_bull_spread(prices.view(), 95.0, 105.0, 2.0, 1.0, OptionType::Put)
        });

        assert!(!log.contains("strike1 is not below strike2"), "{}", log);
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("Bull Spread".parse::<Strategy>(), Ok(Strategy::BullSpread));
        assert_eq!("bear_spread".parse::<Strategy>(), Ok(Strategy::BearSpread));
        assert_eq!("box-spread".parse::<Strategy>(), Ok(Strategy::BoxSpread));
        assert_eq!("BOX".parse::<Strategy>(), Ok(Strategy::BoxSpread));
        assert!(matches!(
            "iron condor".parse::<Strategy>(),
            Err(PayoffError::InvalidStrategy { .. })
        ));
    }

    #[test]
    fn test_leg_counts() {
        assert_eq!(Strategy::BullSpread.leg_count(), 2);
        assert_eq!(Strategy::BoxSpread.leg_count(), 4);
        assert_eq!(Strategy::ALL.len(), 3);
    }
}
