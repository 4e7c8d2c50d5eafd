//! # Validation Module
//!
//! Input-layer validation for Botica POS.
//!
//! ## Division of Labor
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     Validation Layers                            │
//! │                                                                  │
//! │  Layer 1: Frontend (TypeScript)                                  │
//! │  └── Basic format checks, immediate user feedback                │
//! │           │                                                      │
//! │           ▼                                                      │
//! │  Layer 2: THIS MODULE (request/input boundary)                   │
//! │  └── Range and format rules before anything touches the engine   │
//! │           │                                                      │
//! │           ▼                                                      │
//! │  Layer 3: Pricing engine                                         │
//! │  └── NO validation - uses whatever it is handed, by contract     │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pricing engine deliberately performs no validation of its own
//! (out-of-range input degrades silently), so the boundary that accepts
//! cart data is responsible for calling these first.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free/sample items)
pub fn validate_price(price: Decimal) -> ValidationResult<()> {
    if price < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a custom discount percent.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
///
/// The engine itself accepts any percent (150 produces a negative total),
/// so any boundary that takes a cashier-entered percent must call this
/// before building `DiscountType::Custom`.
pub fn validate_custom_discount(percent: Decimal) -> ValidationResult<()> {
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(ValidationError::OutOfRange {
            field: "discount percent".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a barcode.
///
/// ## Rules
/// - Must not be empty
/// - Digits only, at most 14 characters (covers EAN-8/13, UPC-A, GTIN-14)
pub fn validate_barcode(barcode: &str) -> ValidationResult<()> {
    let barcode = barcode.trim();

    if barcode.is_empty() {
        return Err(ValidationError::Required {
            field: "barcode".to_string(),
        });
    }

    if barcode.len() > 14 {
        return Err(ValidationError::TooLong {
            field: "barcode".to_string(),
            max: 14,
        });
    }

    if !barcode.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "barcode".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates cart size (number of unique line items).
///
/// ## Rules
/// - Must not exceed MAX_CART_ITEMS (100)
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn validate_price_rejects_negative() {
        assert!(validate_price(dec!(10.50)).is_ok());
        assert!(validate_price(Decimal::ZERO).is_ok()); // free items allowed
        assert!(validate_price(dec!(-0.01)).is_err());
    }

    #[test]
    fn validate_quantity_bounds() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn validate_custom_discount_bounds() {
        assert!(validate_custom_discount(dec!(0)).is_ok());
        assert!(validate_custom_discount(dec!(20)).is_ok());
        assert!(validate_custom_discount(dec!(100)).is_ok());

        assert!(validate_custom_discount(dec!(-1)).is_err());
        assert!(validate_custom_discount(dec!(100.01)).is_err());
        assert!(validate_custom_discount(dec!(150)).is_err());
    }

    #[test]
    fn validate_product_name_rules() {
        assert!(validate_product_name("Paracetamol 500mg").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn validate_barcode_rules() {
        assert!(validate_barcode("4800016644931").is_ok());
        assert!(validate_barcode("").is_err());
        assert!(validate_barcode("48000-16644").is_err());
        assert!(validate_barcode("480001664493100").is_err());
    }

    #[test]
    fn validate_cart_size_limit() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(99).is_ok());
        assert!(validate_cart_size(100).is_err());
    }
}
