// src/strategy/summary.rs
use crate::error::{PayoffError, PayoffResult};
use ndarray::ArrayView1;
use serde::Serialize;

/// Extremes and breakevens of a net payoff curve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoffSummary {
    pub max_profit: f64,
    pub max_profit_price: f64,
    /// Lowest net payoff on the grid (positive if the curve never dips below zero)
    pub max_loss: f64,
    pub max_loss_price: f64,
    /// Expiry prices where the net curve crosses or touches zero; a flat
    /// stretch at zero contributes only its lowest price
    pub breakevens: Vec<f64>,
}

impl PayoffSummary {
    /// Summarise `net` sampled at `prices`
    ///
    /// Breakevens between two grid points are located by linear
    /// interpolation, which is exact while both points sit on the same
    /// linear segment of the payoff.
    ///
    /// # Errors
    ///
    /// Returns `PayoffError::InvalidConfiguration` when the curves are empty
    /// or have different lengths.
    pub fn from_curve(prices: ArrayView1<'_, f64>, net: ArrayView1<'_, f64>) -> PayoffResult<Self> {
        if prices.len() != net.len() {
            return Err(PayoffError::InvalidConfiguration {
                field: "net".to_string(),
                reason: format!(
                    "curve has {} points but the price grid has {}",
                    net.len(),
                    prices.len()
                ),
            });
        }
        if prices.is_empty() {
            return Err(PayoffError::InvalidConfiguration {
                field: "prices".to_string(),
                reason: "cannot summarise an empty curve".to_string(),
            });
        }

        let mut max_idx = 0;
        let mut min_idx = 0;
        for (i, &value) in net.iter().enumerate() {
            if value > net[max_idx] {
                max_idx = i;
            }
            if value < net[min_idx] {
                min_idx = i;
            }
        }

        let mut breakevens = Vec::new();
        for i in 0..net.len() {
            let (p0, v0) = (prices[i], net[i]);
            if v0 == 0.0 {
                // a run of zeros is reported once, at its first point
                if i == 0 || net[i - 1] != 0.0 {
                    breakevens.push(p0);
                }
                continue;
            }
            if i + 1 < net.len() {
                let (p1, v1) = (prices[i + 1], net[i + 1]);
                if v0 * v1 < 0.0 {
                    breakevens.push(p0 + (p1 - p0) * v0 / (v0 - v1));
                }
            }
        }

        Ok(Self {
            max_profit: net[max_idx],
            max_profit_price: prices[max_idx],
            max_loss: net[min_idx],
            max_loss_price: prices[min_idx],
            breakevens,
        })
    }

    /// True when the curve never changes value across the grid
    pub fn is_flat(&self, tolerance: f64) -> bool {
        (self.max_profit - self.max_loss).abs() <= tolerance
    }
}
