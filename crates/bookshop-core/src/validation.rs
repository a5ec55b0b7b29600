//! # Validation Module
//!
//! Input validation rules shared by the domain types.
//!
//! ## Where Each Rule Applies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                        Used by                                    │
//! │  ──────────────────────────  ─────────────────────────────────────────  │
//! │  validate_price_cents        Book::set_price_cents, buy_book            │
//! │  validate_discount_percent   Book::set_discount_percent                 │
//! │  validate_id                 Order::new, Order::add_books, buy_book     │
//! │  validate_uuid               identifiers produced by new_id             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Category codes are validated by `Category::from_code`.

use crate::error::{ValidationError, ValidationResult};

/// Largest discount a book can carry, in percent.
pub const MAX_DISCOUNT_PERCENT: i64 = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that an identifier is present.
///
/// Any non-empty string is accepted; the core never depends on the
/// identifier's format.
///
/// ## Example
/// ```rust
/// use bookshop_core::validation::validate_id;
///
/// assert!(validate_id("order id", "42").is_ok());
/// assert!(validate_id("order id", "").is_err());
/// ```
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::required(field));
    }

    Ok(())
}

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use bookshop_core::validation::validate_uuid;
///
/// assert!(validate_uuid("1912bbf7-3f26-4196-b062-071b81b855e9").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::required("id"));
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// Zero is allowed (free books); negative prices are not.
///
/// ## Example
/// ```rust
/// use bookshop_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1999).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-5).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::out_of_range("price", 0, i64::MAX));
    }

    Ok(())
}

/// Validates a discount and narrows it to a whole percentage.
///
/// ## Rules
/// - 0 and 100 are both allowed (full price, free)
/// - Anything outside `0..=100` is rejected
pub fn validate_discount_percent(percent: i64) -> ValidationResult<u8> {
    if !(0..=MAX_DISCOUNT_PERCENT).contains(&percent) {
        return Err(ValidationError::out_of_range(
            "discount",
            0,
            MAX_DISCOUNT_PERCENT,
        ));
    }

    Ok(percent as u8)
}

// =============================================================================
// Unit Tests
// =============================================================================
