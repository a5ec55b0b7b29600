//! # Domain Types
//!
//! Small shared types used throughout the bookshop.
//!
//! ## Category Codes
//! ```text
//! ┌───────────────────────────────────────┐
//! │  Code │ Category                      │
//! │  ─────┼────────────────────────────── │
//! │    0  │ Autobiography (default)       │
//! │    1  │ Tech                          │
//! │    2  │ Romance                       │
//! │    3  │ Programming                   │
//! └───────────────────────────────────────┘
//! ```
//! The numeric codes are stable: they are what callers pass to
//! `Book::set_category` and what older catalog records store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::book::Book;
use crate::error::ValidationError;

// =============================================================================
// Category
// =============================================================================

/// The shelf a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Autobiography,
    Tech,
    Romance,
    Programming,
}

impl Category {
    /// Every category, in code order.
    pub const ALL: [Category; 4] = [
        Category::Autobiography,
        Category::Tech,
        Category::Romance,
        Category::Programming,
    ];

    /// Returns the stable numeric code.
    pub const fn code(&self) -> i64 {
        match self {
            Category::Autobiography => 0,
            Category::Tech => 1,
            Category::Romance => 2,
            Category::Programming => 3,
        }
    }

    /// Looks up a category by numeric code.
    pub fn from_code(code: i64) -> Result<Self, ValidationError> {
        Category::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.code().to_string()).collect(),
            })
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Autobiography => "autobiography",
            Category::Tech => "tech",
            Category::Romance => "romance",
            Category::Programming => "programming",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            })
    }
}

impl TryFrom<i64> for Category {
    type Error = ValidationError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Category::from_code(code)
    }
}

// =============================================================================
// Book Map
// =============================================================================

/// Books keyed by ID.
///
/// This is the shape of the reference catalog that the lookup helpers in
/// [`crate::catalog`] read from. Build one with [`crate::seed::seed_books`]
/// or by hand in tests.
pub type BookMap = HashMap<String, Book>;

// =============================================================================
// Identifiers
// =============================================================================

/// Generates a new random identifier (UUID v4, hyphenated lowercase).
///
/// ## Example
/// ```rust
/// use bookshop_core::types::new_id;
/// use bookshop_core::validation::validate_uuid;
///
/// let id = new_id();
/// assert_eq!(id.len(), 36);
/// assert!(validate_uuid(&id).is_ok());
/// ```
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes() {
        assert_eq!(Category::Autobiography.code(), 0);
        assert_eq!(Category::Tech.code(), 1);
        assert_eq!(Category::Romance.code(), 2);
        assert_eq!(Category::Programming.code(), 3);

        for c in Category::ALL {
            assert_eq!(Category::from_code(c.code()).unwrap(), c);
        }
    }

    #[test]
    fn test_category_rejects_unknown_codes() {
        assert!(Category::from_code(-1).is_err());
        assert!(Category::from_code(4).is_err());
        assert!(Category::try_from(10).is_err());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("tech".parse::<Category>().unwrap(), Category::Tech);
        assert_eq!(Category::Programming.to_string(), "programming");
        assert!("poetry".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_default() {
        assert_eq!(Category::default(), Category::Autobiography);
    }

    #[test]
    fn test_new_id_is_unique_uuid() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        let parsed = uuid::Uuid::parse_str(&a).unwrap();
        assert_eq!(parsed.to_string(), a);
    }
}
