//! # Book
//!
//! A single title on sale in the shop.
//!
//! ## Field Access
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Public (assign directly)           Private (validated setters only)    │
//! │  ─────────────────────────────      ─────────────────────────────────   │
//! │  id, edition, title, authors        discount_percent  0..=100           │
//! │  description, release_year          category          Category          │
//! │  series_number, price_cents                                             │
//! │  pick_of_the_month                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `price_cents` is public so records can be built field by field, but
//! [`Book::set_price_cents`] is the checked way to change it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Category;
use crate::validation::{validate_discount_percent, validate_price_cents};

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookRecord")]
pub struct Book {
    /// Identifier, expected to be unique across the shop.
    pub id: String,

    pub edition: u32,

    pub title: String,

    /// Author names in the order they appear on the cover.
    pub authors: Vec<String>,

    pub description: String,

    pub release_year: i32,

    /// Position within a series (1 for standalone titles).
    pub series_number: u32,

    /// List price in cents, before discount.
    pub price_cents: i64,

    /// Promotional flag; carries no pricing behaviour.
    pub pick_of_the_month: bool,

    pub(crate) discount_percent: u8,

    pub(crate) category: Category,
}

impl Book {
    /// Creates a first-edition book with no price, no discount and the
    /// default category.
    ///
    /// ## Example
    /// ```rust
    /// use bookshop_core::Book;
    ///
    /// let mut book = Book::new("42", "Fox", vec!["Gizmo".to_string()]);
    /// book.release_year = 2019;
    /// book.set_price_cents(2000).unwrap();
    /// book.set_discount_percent(25).unwrap();
    /// assert_eq!(book.sale_price(), 1500);
    /// ```
    pub fn new(id: impl Into<String>, title: impl Into<String>, authors: Vec<String>) -> Self {
        Book {
            id: id.into(),
            edition: 1,
            title: title.into(),
            authors,
            description: String::new(),
            release_year: 0,
            series_number: 1,
            price_cents: 0,
            pick_of_the_month: false,
            discount_percent: 0,
            category: Category::default(),
        }
    }

    /// Returns the list price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Sets the list price.
    ///
    /// Negative prices are rejected and the current price is left as is.
    /// Returns the new price on success.
    pub fn set_price_cents(&mut self, cents: i64) -> CoreResult<i64> {
        validate_price_cents(cents)?;
        self.price_cents = cents;
        Ok(self.price_cents)
    }

    #[inline]
    pub fn discount_percent(&self) -> u8 {
        self.discount_percent
    }

    /// Sets the discount percentage (0 to 100 inclusive).
    pub fn set_discount_percent(&mut self, percent: i64) -> CoreResult<()> {
        self.discount_percent = validate_discount_percent(percent)?;
        Ok(())
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Sets the category from its numeric code.
    ///
    /// Codes outside the four known categories are rejected.
    pub fn set_category(&mut self, code: i64) -> CoreResult<Category> {
        self.category = Category::from_code(code)?;
        Ok(self.category)
    }

    /// Price after discount, in cents.
    ///
    /// `price - price * discount / 100` with the discount amount truncated.
    #[inline]
    pub fn sale_price(&self) -> i64 {
        self.price()
            .apply_discount_percent(self.discount_percent)
            .cents()
    }

    pub fn has_single_author(&self) -> bool {
        self.authors.len() <= 1
    }
}

/// One-line summary, e.g.
/// `Title: Tytus, Author: Gienek, Year: 2017, ID: 1912abf7-...`.
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.has_single_author() { "Author" } else { "Authors" };
        write!(
            f,
            "Title: {}, {}: {}, Year: {}, ID: {}",
            self.title,
            label,
            self.authors.join(", "),
            self.release_year,
            self.id
        )
    }
}

// =============================================================================
// Deserialization
// =============================================================================

/// Wire shape of a book. Every record read from JSON passes through the
/// same checks as the setters before it becomes a `Book`.
#[derive(Deserialize)]
struct BookRecord {
    id: String,
    #[serde(default = "first")]
    edition: u32,
    title: String,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    release_year: i32,
    #[serde(default = "first")]
    series_number: u32,
    #[serde(default)]
    price_cents: i64,
    #[serde(default)]
    pick_of_the_month: bool,
    #[serde(default)]
    discount_percent: i64,
    #[serde(default)]
    category: Category,
}

fn first() -> u32 {
    1
}

impl TryFrom<BookRecord> for Book {
    type Error = ValidationError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        validate_price_cents(record.price_cents)?;
        let discount_percent = validate_discount_percent(record.discount_percent)?;

        Ok(Book {
            id: record.id,
            edition: record.edition,
            title: record.title,
            authors: record.authors,
            description: record.description,
            release_year: record.release_year,
            series_number: record.series_number,
            price_cents: record.price_cents,
            pick_of_the_month: record.pick_of_the_month,
            discount_percent,
            category: record.category,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn fox() -> Book {
        let mut book = Book::new("fox-1", "Fox", vec!["Gizmo".to_string()]);
        book.price_cents = 5000;
        book
    }

    #[test]
    fn test_sale_price() {
        let mut book = Book::new("", "", vec![]);
        book.price_cents = 2000;
        book.set_discount_percent(20).unwrap();
        assert_eq!(book.sale_price(), 1600);
    }

    #[test]
    fn test_sale_price_without_discount() {
        assert_eq!(fox().sale_price(), 5000);
    }

    #[test]
    fn test_sale_price_truncates() {
        let mut book = fox();
        book.set_price_cents(1000).unwrap();
        book.set_discount_percent(5).unwrap();
        assert_eq!(book.sale_price(), 950);

        book.set_price_cents(999).unwrap();
        book.set_discount_percent(33).unwrap();
        // 999 * 33 / 100 = 329.67 → 329
        assert_eq!(book.sale_price(), 670);
    }

    #[test]
    fn test_set_price_cents() {
        let mut book = fox();
        assert_eq!(book.set_price_cents(2000).unwrap(), 2000);
        assert_eq!(book.price_cents, 2000);
        assert_eq!(book.set_price_cents(0).unwrap(), 0);
    }

    #[test]
    fn test_set_price_cents_rejects_negative() {
        let mut book = fox();
        let err = book.set_price_cents(-1000).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(book.price_cents, 5000);
    }

    #[test]
    fn test_set_discount_percent() {
        let mut book = fox();
        for d in [0, 50, 100] {
            book.set_discount_percent(d).unwrap();
            assert_eq!(book.discount_percent() as i64, d);
        }
    }

    #[test]
    fn test_set_discount_percent_rejects_out_of_range() {
        let mut book = fox();
        book.set_discount_percent(30).unwrap();

        for d in [-10, -1, 101, 110] {
            let err = book.set_discount_percent(d).unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::OutOfRange { .. })
            ));
        }
        assert_eq!(book.discount_percent(), 30);
    }

    #[test]
    fn test_set_category() {
        let mut book = fox();
        book.set_category(3).unwrap();
        assert_eq!(book.set_category(0).unwrap(), Category::Autobiography);
        assert_eq!(book.category(), Category::Autobiography);
        assert_eq!(book.set_category(1).unwrap(), Category::Tech);
        assert_eq!(book.set_category(2).unwrap(), Category::Romance);
        assert_eq!(book.category(), Category::Romance);
    }

    #[test]
    fn test_set_category_rejects_unknown_code() {
        let mut book = fox();
        book.set_category(3).unwrap();

        assert!(book.set_category(10).unwrap_err().is_invalid_input());
        assert!(book.set_category(-1).is_err());
        assert_eq!(book.category(), Category::Programming);
    }

    #[test]
    fn test_display_single_author() {
        let mut book = Book::new(
            "1912bbf7-3f26-4196-b062-071b81b855e9",
            "Bolek i Lolek",
            vec!["Bolek".to_string()],
        );
        book.release_year = 1997;
        assert_eq!(
            book.to_string(),
            "Title: Bolek i Lolek, Author: Bolek, Year: 1997, ID: 1912bbf7-3f26-4196-b062-071b81b855e9"
        );
    }

    #[test]
    fn test_display_multiple_authors() {
        let mut book = Book::new(
            "1923bbf9-3f36-4196-b062-171b81b855e9",
            "Zosia Samosia",
            vec!["Papcio Chmiel".to_string(), "Zigmas Laurin".to_string()],
        );
        book.release_year = 2011;
        assert_eq!(
            book.to_string(),
            "Title: Zosia Samosia, Authors: Papcio Chmiel, Zigmas Laurin, Year: 2011, ID: 1923bbf9-3f36-4196-b062-171b81b855e9"
        );
    }

    #[test]
    fn test_display_no_authors() {
        let book = Book::new("x", "Anonymous", vec![]);
        assert_eq!(book.to_string(), "Title: Anonymous, Author: , Year: 0, ID: x");
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"id":"1","title":"Fox","authors":["Gizmo"],"price_cents":2000,
                       "discount_percent":10,"category":"tech"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.sale_price(), 1800);
        assert_eq!(book.category(), Category::Tech);
        assert_eq!(book.edition, 1);

        let bad_discount = r#"{"id":"1","title":"Fox","discount_percent":150}"#;
        assert!(serde_json::from_str::<Book>(bad_discount).is_err());

        let bad_price = r#"{"id":"1","title":"Fox","price_cents":-2}"#;
        assert!(serde_json::from_str::<Book>(bad_price).is_err());
    }

    #[test]
    fn test_serialize_keeps_private_fields() {
        let mut book = fox();
        book.set_discount_percent(15).unwrap();
        book.set_category(3).unwrap();

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["discount_percent"], 15);
        assert_eq!(value["category"], "programming");

        let back: Book = serde_json::from_value(value).unwrap();
        assert_eq!(back, book);
    }
}
