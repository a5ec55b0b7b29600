//! # Error Types
//!
//! Domain-specific error types for bookshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookshop-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the terminal sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr + exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers that only care about the broad category use [`CoreError::kind`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Book cannot be found in the supplied book map.
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// A payment processor declined or failed to charge for a book.
    ///
    /// The core never produces this itself; processors return it and
    /// `buy_book` passes it through untouched.
    #[error("Payment failed for book {book_id}: {reason}")]
    PaymentFailed { book_id: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Broad error category, independent of the specific variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller supplied a value that breaks a domain rule.
    InvalidInput,
    /// Lookup by an unknown identifier.
    NotFound,
    /// Reported by a payment processor.
    Payment,
}

impl CoreError {
    /// Creates a PaymentFailed error.
    pub fn payment_failed(book_id: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::PaymentFailed {
            book_id: book_id.into(),
            reason: reason.into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::BookNotFound(_) => ErrorKind::NotFound,
            CoreError::PaymentFailed { .. } => ErrorKind::Payment,
            CoreError::Validation(_) => ErrorKind::InvalidInput,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// Used for early validation before any state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Some values of a batch were rejected while the rest were accepted.
    #[error("{count} empty {field} value(s) rejected")]
    Rejected { field: String, count: usize },
}

impl ValidationError {
    pub(crate) fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }

    pub(crate) fn out_of_range(field: &str, min: i64, max: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.to_string(),
            min,
            max,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::BookNotFound("abc".to_string());
        assert_eq!(err.to_string(), "Book not found: abc");

        let err = CoreError::payment_failed("abc", "card declined");
        assert_eq!(err.to_string(), "Payment failed for book abc: card declined");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::required("order id").to_string(), "order id is required");
        assert_eq!(
            ValidationError::out_of_range("discount", 0, 100).to_string(),
            "discount must be between 0 and 100"
        );

        let err = ValidationError::Rejected {
            field: "book id".to_string(),
            count: 2,
        };
        assert_eq!(err.to_string(), "2 empty book id value(s) rejected");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("book id").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(core_err.is_invalid_input());
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(CoreError::BookNotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(CoreError::payment_failed("x", "no").kind(), ErrorKind::Payment);
        assert!(CoreError::BookNotFound("x".into()).is_not_found());
    }
}
