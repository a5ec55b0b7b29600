//! # bookshop-core: Pure Business Logic for the Bookshop
//!
//! All of the shop's rules live here as plain functions and value types
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bookshop Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    bookshop-cli                                 │   │
//! │  │    config ──► logging ──► list / details / buy commands         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bookshop-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │   book   │  │ catalog  │  │  order   │  │   payment    │   │   │
//! │  │   │  Book    │  │ Catalog  │  │  Order   │  │  buy_book    │   │   │
//! │  │   │ Category │  │ lookups  │  │          │  │  Processor   │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • SEED DATA IS PASSED IN             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`book`] - The `Book` value with validated price/discount/category
//! - [`catalog`] - `Catalog` plus lookups over a [`BookMap`]
//! - [`order`] - `Order`, a list of book IDs awaiting payment
//! - [`customer`] - `Customer` and mailing labels
//! - [`payment`] - `PaymentProcessor` and `buy_book`
//! - [`money`] - Integer-cents `Money`
//! - [`seed`] - The reference book set
//! - [`types`] - `Category`, `BookMap`, identifier generation
//! - [`validation`] - Shared input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bookshop_core::catalog::net_price;
//! use bookshop_core::payment::{buy_book, pay};
//! use bookshop_core::seed::{seed_books, BOLEK_I_LOLEK};
//!
//! let books = seed_books();
//! let book = &books[BOLEK_I_LOLEK];
//!
//! // $20.00 list, 20% off
//! let price = net_price(book, &books).unwrap();
//! assert_eq!(price, 1600);
//!
//! assert!(buy_book(&book.id, price, &pay).unwrap());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod book;
pub mod catalog;
pub mod customer;
pub mod error;
pub mod money;
pub mod order;
pub mod payment;
pub mod seed;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use book::Book;
pub use catalog::Catalog;
pub use customer::Customer;
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use money::Money;
pub use order::Order;
pub use payment::{buy_book, PaymentProcessor};
pub use types::{new_id, BookMap, Category};
