//! Single-Leg Option Payoffs
//!
//! # Mathematical Definitions
//!
//! Intrinsic value at expiry for underlying price S and strike K:
//! - **Call**: max(S - K, 0) - right to buy at strike K
//! - **Put**: max(K - S, 0) - right to sell at strike K
//!
//! Position adjustment for premium p:
//! - **Long**: intrinsic - p (buyer pays the premium up front)
//! - **Short**: -intrinsic + p (writer collects the premium)
//!
//! Both collapse to `sign * (intrinsic - p)` with sign = +1 for long and
//! -1 for short, so long and short legs on the same contract always mirror
//! each other exactly.

use crate::error::{PayoffError, PayoffResult};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Option type (call or put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OptionType {
    /// Right to buy the underlying at the strike
    Call,
    /// Right to sell the underlying at the strike
    Put,
}

impl OptionType {
    /// Intrinsic value at expiry for underlying price `s` and strike `k`
    #[inline]
    pub fn intrinsic(self, s: f64, k: f64) -> f64 {
        match self {
            OptionType::Call => (s - k).max(0.0),
            OptionType::Put => (k - s).max(0.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PayoffError;

    fn from_str(s: &str) -> PayoffResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PayoffError::InvalidOptionType {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OptionType {
    type Error = PayoffError;

    fn try_from(value: String) -> PayoffResult<Self> {
        value.parse()
    }
}

/// Buyer or writer side of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Long,
    Short,
}

impl Position {
    /// +1 for long, -1 for short
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Position::Long => 1.0,
            Position::Short => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Long => "long",
            Position::Short => "short",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Position {
    type Err = PayoffError;

    fn from_str(s: &str) -> PayoffResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Position::Long),
            "short" => Ok(Position::Short),
            _ => Err(PayoffError::InvalidPosition {
                value: s.to_string(),
            }),
        }
    }
}

/// One option contract held in a strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionLeg {
    pub strike_price: f64,
    pub option_type: OptionType,
    pub position: Position,
    pub premium: f64,
}

impl OptionLeg {
    pub fn new(strike_price: f64, option_type: OptionType, position: Position, premium: f64) -> Self {
        Self {
            strike_price,
            option_type,
            position,
            premium,
        }
    }

    /// Payoff per unit at a single expiry price, net of premium
    #[inline]
    pub fn payoff_at(&self, s: f64) -> f64 {
        self.position.sign() * (self.option_type.intrinsic(s, self.strike_price) - self.premium)
    }

    /// Element-wise payoff over a sequence of expiry prices
    ///
    /// The returned array has the same length as `prices`.
    pub fn payoff(&self, prices: ArrayView1<'_, f64>) -> Array1<f64> {
        prices.mapv(|s| self.payoff_at(s))
    }
}

/// Payoff of a single contract over `prices`
///
/// Free-function form of [`OptionLeg::payoff`].
pub fn option_payoff(
    prices: ArrayView1<'_, f64>,
    strike_price: f64,
    option_type: OptionType,
    position: Position,
    premium: f64,
) -> Array1<f64> {
    OptionLeg::new(strike_price, option_type, position, premium).payoff(prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_call_long_and_short() {
        let long = OptionLeg::new(95.0, OptionType::Call, Position::Long, 2.0);
        let short = OptionLeg::new(95.0, OptionType::Call, Position::Short, 2.0);

        assert_eq!(long.payoff_at(100.0), 3.0);
        assert_eq!(short.payoff_at(100.0), -3.0);
        assert_eq!(long.payoff_at(90.0), -2.0);
        assert_eq!(short.payoff_at(90.0), 2.0);
    }

    #[test]
    fn test_put_long_and_short() {
        let long = OptionLeg::new(105.0, OptionType::Put, Position::Long, 0.5);
        let short = OptionLeg::new(105.0, OptionType::Put, Position::Short, 0.5);

        assert_eq!(long.payoff_at(100.0), 4.5);
        assert_eq!(short.payoff_at(100.0), -4.5);
        assert_eq!(long.payoff_at(110.0), -0.5);
        assert_eq!(short.payoff_at(110.0), 0.5);
    }

    #[test]
    fn test_payoff_preserves_shape() {
        let prices = array![80.0, 95.0, 110.0];
        let curve = option_payoff(prices.view(), 95.0, OptionType::Call, Position::Long, 1.0);

        assert_eq!(curve.len(), prices.len());
        assert_eq!(curve, array![-1.0, -1.0, 14.0]);
    }

    #[test]
    fn test_parse_option_type() {
        assert_eq!("call".parse::<OptionType>(), Ok(OptionType::Call));
        assert_eq!(" PUT ".parse::<OptionType>(), Ok(OptionType::Put));

        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert_eq!(
            err,
            PayoffError::InvalidOptionType {
                value: "straddle".to_string()
            }
        );
    }

    #[test]
    fn test_parse_position() {
        assert_eq!("Long".parse::<Position>(), Ok(Position::Long));
        assert_eq!("short".parse::<Position>(), Ok(Position::Short));
        assert!(matches!(
            "flat".parse::<Position>(),
            Err(PayoffError::InvalidPosition { .. })
        ));
    }

    #[test]
    fn test_option_type_serde_rejects_unknown() {
        let parsed: OptionType = serde_json::from_str("\"put\"").unwrap();
        assert_eq!(parsed, OptionType::Put);
        assert_eq!(serde_json::to_string(&OptionType::Call).unwrap(), "\"call\"");

        let err = serde_json::from_str::<OptionType>("\"straddle\"").unwrap_err();
        assert!(err.to_string().contains("Invalid option type 'straddle'"));
    }
}
