//! # Seed Data
//!
//! The reference set of five books the shop opens with.
//!
//! ## Usage
//! ```rust
//! use bookshop_core::catalog::get_book_details;
//! use bookshop_core::seed::{seed_books, TYTUS};
//!
//! let books = seed_books();
//! assert!(get_book_details(TYTUS, &books).is_ok());
//! ```
//!
//! Every call builds a fresh map, so tests can mutate their copy freely.

use crate::book::Book;
use crate::types::{BookMap, Category};

pub const BOLEK_I_LOLEK: &str = "1912bbf7-3f26-4196-b062-071b81b855e9";
pub const TYTUS: &str = "1912abf7-3f26-4196-b062-011b81b255e9";
pub const KOZIOLEK_MATOLEK: &str = "2922bbf7-3g26-4196-b062-071b81b855e9";
pub const ZOSIA_SAMOSIA: &str = "1923bbf9-3f36-4196-b062-171b81b855e9";
pub const PAN_SAMOCHODZIK: &str = "1923bbf9-4f36-4196-b062-171b81b855e9";

/// (id, edition, title, authors, year, series, price, pick, discount, category)
type SeedRow = (
    &'static str,
    u32,
    &'static str,
    &'static [&'static str],
    i32,
    u32,
    i64,
    bool,
    u8,
    Category,
);

const SEED: &[SeedRow] = &[
    (BOLEK_I_LOLEK, 1, "Bolek i Lolek", &["Bolek"], 1997, 1, 2000, true, 20, Category::Tech),
    (TYTUS, 1, "Tytus", &["Gienek"], 2017, 2, 3000, false, 10, Category::Autobiography),
    (KOZIOLEK_MATOLEK, 3, "Koziolek Matolek", &["Bolek"], 1967, 2, 2500, false, 8, Category::Autobiography),
    (
        ZOSIA_SAMOSIA,
        1,
        "Zosia Samosia",
        &["Papcio Chmiel", "Zigmas Laurin"],
        2011,
        1,
        1000,
        true,
        5,
        Category::Romance,
    ),
    (
        PAN_SAMOCHODZIK,
        1,
        "Pan Samochodzik",
        &["Papcio Chmiel", "Zigmas Laurin", "Gizmo"],
        2011,
        1,
        1000,
        true,
        5,
        Category::Tech,
    ),
];

fn build(row: &SeedRow) -> Book {
    let (id, edition, title, authors, year, series, price, pick, discount, category) = *row;
    Book {
        id: id.to_string(),
        edition,
        title: title.to_string(),
        authors: authors.iter().map(|a| a.to_string()).collect(),
        description: "description".to_string(),
        release_year: year,
        series_number: series,
        price_cents: price,
        pick_of_the_month: pick,
        discount_percent: discount,
        category,
    }
}

/// Builds the reference book map, keyed by book ID.
pub fn seed_books() -> BookMap {
    SEED.iter()
        .map(build)
        .map(|b| (b.id.clone(), b))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
