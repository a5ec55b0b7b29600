//! # Order
//!
//! A named list of book IDs a customer wants to buy, before payment.
//!
//! ## Adding Books
//! ```text
//! add_books(["1", "", "2", ""])
//!      │
//!      ├── "1", "2"  ──► appended to book_ids, in order
//!      │
//!      └── "", ""    ──► never stored
//!                          │
//!                          ▼
//!              Err(Rejected { field: "book id", count: 2 })
//! ```
//! The valid IDs stay on the order even when an error is returned, so a
//! caller can report the rejection and carry on with what was accepted.

use serde::Serialize;
use tracing::warn;

use crate::error::{CoreResult, ValidationError};
use crate::validation::validate_id;

/// A purchase request grouping book IDs under one order ID.
///
/// Serialize-only: an order is always built through `Order::new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: String,
    book_ids: Vec<String>,
}

impl Order {
    /// Creates an empty order.
    ///
    /// ## Example
    /// ```rust
    /// use bookshop_core::Order;
    ///
    /// let mut order = Order::new("42").unwrap();
    /// order.add_books(["1", "2"]).unwrap();
    /// assert_eq!(order.book_ids(), ["1", "2"]);
    ///
    /// assert!(Order::new("").is_err());
    /// ```
    pub fn new(order_id: impl Into<String>) -> CoreResult<Self> {
        let id = order_id.into();
        validate_id("order id", &id)?;

        Ok(Order {
            id,
            book_ids: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Appends every non-empty ID, then fails if any empty ones were given.
    pub fn add_books<I, S>(&mut self, ids: I) -> CoreResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (valid, rejected): (Vec<String>, Vec<String>) =
            ids.into_iter().map(Into::<String>::into).partition(|id| !id.is_empty());

        self.book_ids.extend(valid);

        if !rejected.is_empty() {
            warn!(order_id = %self.id, rejected = rejected.len(), "empty book ids rejected");
            return Err(ValidationError::Rejected {
                field: "book id".to_string(),
                count: rejected.len(),
            }
            .into());
        }

        Ok(())
    }

    /// Book IDs on the order, in the order they were added.
    pub fn book_ids(&self) -> &[String] {
        &self.book_ids
    }

    pub fn len(&self) -> usize {
        self.book_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.book_ids.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_new() {
        let order = Order::new("12282").unwrap();
        assert_eq!(order.id(), "12282");
        assert!(order.is_empty());
    }

    #[test]
    fn test_new_rejects_empty_id() {
        let err = Order::new("").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_add_single_book() {
        let mut order = Order::new("123").unwrap();
        order.add_books(["123"]).unwrap();
        assert_eq!(order.book_ids(), ["123"]);
    }

    #[test]
    fn test_add_multiple_books() {
        let mut order = Order::new("234").unwrap();
        order.add_books(["123", "456", "789"]).unwrap();
        assert_eq!(order.book_ids(), ["123", "456", "789"]);
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_add_books_accumulates_across_calls() {
        let mut order = Order::new("42").unwrap();
        order.add_books(vec!["1".to_string()]).unwrap();
        order.add_books(["2"]).unwrap();
        assert_eq!(order.book_ids(), ["1", "2"]);
    }

    #[test]
    fn test_add_books_with_no_ids() {
        let mut order = Order::new("42").unwrap();
        order.add_books(Vec::<String>::new()).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_add_only_empty_id() {
        let mut order = Order::new("345").unwrap();
        let err = order.add_books([""]).unwrap_err();

        assert!(err.is_invalid_input());
        assert!(order.book_ids().is_empty());
    }

    #[test]
    fn test_add_empty_id_among_valid_ones() {
        let mut order = Order::new("456").unwrap();
        let err = order.add_books(["123", "456", "", "789", ""]).unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Rejected { count: 2, .. })
        ));
        assert_eq!(order.book_ids(), ["123", "456", "789"]);
    }
}
