//! Money helpers
//!
//! Prices stay exact `Decimal` through every calculation. Rounding happens
//! only here, when an amount is shown to a person.

use rust_decimal::prelude::*;

/// Rounding strategy for displayed amounts (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Round to 2 decimal places, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format as złoty with a comma decimal separator, e.g. `136,00 zł`
pub fn format_pln(value: Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(DECIMAL_PLACES);
    format!("{} zł", rounded.to_string().replace('.', ","))
}
