//! Pricing Module
//!
//! Addon unit prices and line/order totals. Everything is computed on
//! in-memory rows; no rounding happens here.

mod addon_price;
mod line_calculator;

pub use addon_price::*;
pub use line_calculator::*;
