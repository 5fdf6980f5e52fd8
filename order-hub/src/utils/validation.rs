//! Input validation helpers
//!
//! Centralized text length constants and validation functions shared by the
//! command handlers.

use crate::orders::traits::OrderError;

// ── Text length limits ──────────────────────────────────────────────

/// Customer names, meal names
pub const MAX_NAME_LEN: usize = 200;

/// Phone numbers, pickup slot labels
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Descriptions, review comments
pub const MAX_NOTE_LEN: usize = 500;

/// Largest accepted price for a menu item or planned meal
pub const MAX_PRICE: f64 = 100_000.0;

/// Largest quantity a single cart line may reach
pub const MAX_QUANTITY: i32 = 999;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty (after trimming) and within
/// the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), OrderError> {
    if value.trim().is_empty() {
        return Err(OrderError::Validation(format!("{field} must not be empty")));
    }
    validate_text_len(value, field, max_len)
}

/// Validate only the length limit; empty strings are accepted.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), OrderError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(OrderError::Validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Validate that a price is finite, non-negative and below [`MAX_PRICE`].
pub fn validate_price(value: f64, field: &str) -> Result<(), OrderError> {
    if !value.is_finite() {
        return Err(OrderError::Validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(OrderError::Validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    if value > MAX_PRICE {
        return Err(OrderError::Validation(format!(
            "{field} exceeds maximum allowed ({MAX_PRICE}), got {value}"
        )));
    }
    Ok(())
}

/// Quantity of a cart line after adding `delta`; rejects results above
/// [`MAX_QUANTITY`]. Results at or below zero are returned as-is.
pub fn validate_quantity_change(current: i32, delta: i32) -> Result<i32, OrderError> {
    current
        .checked_add(delta)
        .filter(|&quantity| quantity <= MAX_QUANTITY)
        .ok_or_else(|| {
            OrderError::Validation(format!(
                "Quantity cannot exceed {MAX_QUANTITY} (currently {current}, change {delta})"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_blank() {
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Ravi", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_text_len_counts_chars() {
        let long = "क".repeat(MAX_SHORT_TEXT_LEN);
        assert!(validate_text_len(&long, "phone", MAX_SHORT_TEXT_LEN).is_ok());

        let too_long = "x".repeat(MAX_SHORT_TEXT_LEN + 1);
        let err = validate_text_len(&too_long, "phone", MAX_SHORT_TEXT_LEN).unwrap_err();
        assert!(err.to_string().contains("phone is too long"));
    }

    #[test]
    fn test_price_bounds() {
        assert!(validate_price(0.0, "price").is_ok());
        assert!(validate_price(12.5, "price").is_ok());
        assert!(validate_price(-0.01, "price").is_err());
        assert!(validate_price(f64::NAN, "price").is_err());
        assert!(validate_price(f64::INFINITY, "price").is_err());
        assert!(validate_price(MAX_PRICE + 1.0, "price").is_err());
    }

    #[test]
    fn test_quantity_change_bounds() {
        assert_eq!(validate_quantity_change(2, 3), Ok(5));
        assert_eq!(validate_quantity_change(2, -5), Ok(-3));
        assert_eq!(validate_quantity_change(MAX_QUANTITY - 1, 1), Ok(MAX_QUANTITY));
        assert!(validate_quantity_change(MAX_QUANTITY, 1).is_err());
        assert!(validate_quantity_change(1, i32::MAX).is_err());
    }
}
