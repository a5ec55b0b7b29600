//! # Payment
//!
//! The single plug-in point of the shop: whatever actually charges the
//! customer.
//!
//! ## Buy Flow
//! ```text
//! buy_book(book_id, price, processor)
//!      │
//!      ├── book_id empty?  → Err(InvalidInput)
//!      ├── price < 0?      → Err(InvalidInput)
//!      │
//!      ▼
//! processor.pay(book_id, price) ──► returned as is (Ok or Err)
//! ```
//!
//! Any `Fn(&str, i64) -> CoreResult<bool>` is a processor, so tests and
//! callers can pass closures; [`pay`] is the always-succeeding default.

use tracing::debug;

use crate::error::CoreResult;
use crate::validation::{validate_id, validate_price_cents};

/// Something that can charge for a book.
///
/// `Ok(true)` means the charge went through. Processors report declines
/// either as `Ok(false)` or as `CoreError::PaymentFailed`, whichever fits
/// the backend.
pub trait PaymentProcessor {
    fn pay(&self, book_id: &str, price_cents: i64) -> CoreResult<bool>;
}

impl<F> PaymentProcessor for F
where
    F: Fn(&str, i64) -> CoreResult<bool>,
{
    fn pay(&self, book_id: &str, price_cents: i64) -> CoreResult<bool> {
        self(book_id, price_cents)
    }
}

/// Stub processor: every payment succeeds.
pub fn pay(_book_id: &str, _price_cents: i64) -> CoreResult<bool> {
    Ok(true)
}

/// Validates the purchase and hands it to `processor`.
///
/// ## Example
/// ```rust
/// use bookshop_core::payment::{buy_book, pay};
///
/// assert!(buy_book("1912bbf7-3f26-4196-b062-071b81b855e9", 1600, &pay).unwrap());
/// assert!(buy_book("", 1600, &pay).is_err());
/// ```
pub fn buy_book<P>(book_id: &str, price_cents: i64, processor: &P) -> CoreResult<bool>
where
    P: PaymentProcessor + ?Sized,
{
    validate_id("book id", book_id)?;
    validate_price_cents(price_cents)?;

    debug!(book_id, price_cents, "charging for book");
    processor.pay(book_id, price_cents)
}

// =============================================================================
// Unit Tests
// =============================================================================
