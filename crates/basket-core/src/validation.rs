//! # Validation Module
//!
//! Input validation for cart operations and catalog seeding.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP request DTOs (basket-api)                               │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── Range checks mirroring the rules below                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart rules (basket-core)                                     │
//! │  └── THIS MODULE: re-checked for every caller, HTTP or not             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name accepted by the catalog.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity to add.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ## Example
/// ```rust
/// use basket_core::validation::validate_quantity;
///
/// assert!(validate_quantity(1).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-3).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    require_positive("Quantity", qty)
}

/// Validates a quantity to remove. Same rule as [`validate_quantity`],
/// reported against its own field name.
pub fn validate_quantity_to_remove(qty: i64) -> ValidationResult<()> {
    require_positive("Quantity to remove", qty)
}

fn require_positive(field: &str, value: i64) -> ValidationResult<()> {
    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a catalog price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
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
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
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

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1_000_000).is_ok());

        assert_eq!(
            validate_quantity(0),
            Err(ValidationError::MustBePositive {
                field: "Quantity".to_string()
            })
        );
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_quantity_to_remove() {
        assert!(validate_quantity_to_remove(5).is_ok());

        let err = validate_quantity_to_remove(0).unwrap_err();
        assert_eq!(err.to_string(), "Quantity to remove must be positive.");
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(120_000).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Keyboard").is_ok());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }
}
