//! Single-leg payoffs and the expiry price grid they are evaluated on.

pub mod grid;
pub mod option;

pub use grid::{PriceGrid, GRID_POINTS};
pub use option::{option_payoff, OptionLeg, OptionType, Position};
