//! # Catalog
//!
//! The ordered list of books on sale, plus lookup helpers over a
//! [`BookMap`].
//!
//! ## Two Shapes of the Same Data
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog (Vec<Book>)                 BookMap (HashMap<id, Book>)        │
//! │  ───────────────────────────────     ─────────────────────────────────  │
//! │  insertion order kept                keyed by book id                   │
//! │  duplicates allowed                  one book per id                    │
//! │  append-only                         passed in to every helper          │
//! │                                                                         │
//! │  titles, unique authors, len         details, by author, net price      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::book::Book;
use crate::error::{CoreError, CoreResult};
use crate::types::BookMap;

// =============================================================================
// Catalog
// =============================================================================

/// Books available for sale, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog { books: Vec::new() }
    }

    /// Returns every book in catalog order.
    pub fn get_all_books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns the titles in catalog order (not sorted).
    pub fn get_all_titles(&self) -> Vec<String> {
        self.books.iter().map(|b| b.title.clone()).collect()
    }

    /// Returns every author across the catalog, deduplicated and sorted.
    ///
    /// ## Example
    /// ```rust
    /// use bookshop_core::{Book, Catalog};
    ///
    /// let catalog: Catalog = vec![
    ///     Book::new("1", "A", vec!["Bolek".into()]),
    ///     Book::new("2", "B", vec!["Bolek".into(), "Gizmo".into()]),
    /// ]
    /// .into();
    /// assert_eq!(catalog.get_unique_authors(), vec!["Bolek", "Gizmo"]);
    /// ```
    pub fn get_unique_authors(&self) -> Vec<String> {
        self.books
            .iter()
            .flat_map(|b| b.authors.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Appends a book. Duplicate IDs are not checked.
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Catalog { books }
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Catalog {
            books: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

// =============================================================================
// Lookup Helpers
// =============================================================================

/// Returns the one-line summary of the book with the given ID.
pub fn get_book_details(book_id: &str, books: &BookMap) -> CoreResult<String> {
    books
        .get(book_id)
        .map(|b| b.to_string())
        .ok_or_else(|| CoreError::BookNotFound(book_id.to_string()))
}

/// Returns the sorted IDs of every book listing `author` (exact match).
pub fn get_all_by_author(author: &str, books: &BookMap) -> Vec<String> {
    let mut ids: Vec<String> = books
        .iter()
        .filter(|(_, b)| b.authors.iter().any(|a| a == author))
        .map(|(id, _)| id.clone())
        .collect();
    ids.sort();
    ids
}

/// Sale price of `book` as recorded in `books`.
///
/// Only `book.id` is read from the argument; price and discount come from
/// the stored record so a stale copy cannot change what is charged.
pub fn net_price(book: &Book, books: &BookMap) -> CoreResult<i64> {
    books
        .get(&book.id)
        .map(Book::sale_price)
        .ok_or_else(|| CoreError::BookNotFound(book.id.clone()))
}

/// Summaries of every book, sorted by title, one per line.
///
/// Each line, including the last, ends with `\n`.
pub fn get_all_book_details(books: &BookMap) -> String {
    let mut sorted: Vec<&Book> = books.values().collect();
    sorted.sort_by(|a, b| a.title.cmp(&b.title));

    sorted.iter().map(|b| format!("{b}\n")).collect()
}

/// Every book in the map, ordered by ID.
pub fn get_all_books(books: &BookMap) -> Vec<Book> {
    let mut all: Vec<Book> = books.values().cloned().collect();
    all.sort_by(|a, b| a.id.cmp(&b.id));
    all
}

// =============================================================================
// Unit Tests
// =============================================================================
