//! Money calculation utilities using rust_decimal for precision
//!
//! Order totals are recomputed server-side before persistence. All arithmetic
//! is done using `Decimal` internally, then converted back to `f64` for
//! storage/serialization, so repeated line-item sums do not accumulate binary
//! floating point drift.

use rust_decimal::prelude::*;

use crate::models::OrderLine;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for comparing a submitted total against the recomputed one (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for precise calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// price × quantity for a single line item
pub fn line_total(price: f64, quantity: i64) -> Decimal {
    to_decimal(price) * Decimal::from(quantity)
}

/// Sum of price × quantity across all line items
pub fn order_total(items: &[OrderLine]) -> Decimal {
    items
        .iter()
        .map(|item| line_total(item.price, item.quantity))
        .sum()
}

/// Whether a client-submitted total matches the recomputed one.
///
/// A difference of exactly [`MONEY_TOLERANCE`] still matches; only a strictly
/// greater difference is a mismatch.
pub fn totals_match(submitted: f64, computed: Decimal) -> bool {
    (computed - to_decimal(submitted)).abs() <= MONEY_TOLERANCE
}
