// src/payoff/grid.rs
use crate::error::{validation::validate_positive, PayoffError, PayoffResult};
use ndarray::{Array1, ArrayView1};
use serde::Serialize;

/// Number of expiry prices on every grid
pub const GRID_POINTS: usize = 100;

/// Lowest grid price as a multiple of spot
pub const GRID_LOWER_FACTOR: f64 = 0.5;

/// Highest grid price as a multiple of spot
pub const GRID_UPPER_FACTOR: f64 = 1.5;

/// Hypothetical underlying prices at expiry
///
/// Linearly spaced from `spot * 0.5` to `spot * 1.5` inclusive with
/// [`GRID_POINTS`] points, strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceGrid {
    spot: f64,
    prices: Array1<f64>,
}

impl PriceGrid {
    /// Build the grid around a spot price
    ///
    /// # Errors
    ///
    /// Returns `PayoffError::InvalidParameters` if `spot` is not a finite,
    /// strictly positive number, or if `spot * 1.5` overflows.
    pub fn new(spot: f64) -> PayoffResult<Self> {
        validate_positive("spot", spot)?;

        let lower = spot * GRID_LOWER_FACTOR;
        let upper = spot * GRID_UPPER_FACTOR;
        if !upper.is_finite() {
            return Err(PayoffError::InvalidParameters {
                parameter: "spot".to_string(),
                value: spot,
                constraint: format!("upper grid bound spot * {} must be finite", GRID_UPPER_FACTOR),
            });
        }
        let mut prices = Array1::linspace(lower, upper, GRID_POINTS);
        // linspace accumulates rounding in the last step; pin the endpoint
        prices[GRID_POINTS - 1] = upper;

        Ok(Self { spot, prices })
    }

    pub fn spot(&self) -> f64 {
        self.spot
    }

    pub fn prices(&self) -> ArrayView1<'_, f64> {
        self.prices.view()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn lower(&self) -> f64 {
        self.prices[0]
    }

    pub fn upper(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }

    pub fn into_inner(self) -> Array1<f64> {
        self.prices
    }
}
