//! Money calculation utilities using rust_decimal for precision
//!
//! All arithmetic is done in `Decimal`, then converted to `f64` (2 dp,
//! half away from zero) for storage and serialization.

use rust_decimal::prelude::*;
use shared::models::CartItem;

const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal; non-finite input becomes zero
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Menu price plus selected modifier adjustments, for one unit
pub fn unit_price(item: &CartItem) -> Decimal {
    item.selected_modifiers
        .iter()
        .fold(to_decimal(item.menu_item.price), |acc, m| {
            acc + to_decimal(m.price_adjustment)
        })
}

pub fn line_total(item: &CartItem) -> Decimal {
    unit_price(item) * Decimal::from(item.quantity)
}

/// Sum of all line totals
pub fn cart_total(items: &[CartItem]) -> f64 {
    let total: Decimal = items.iter().map(line_total).sum();
    to_f64(total)
}
