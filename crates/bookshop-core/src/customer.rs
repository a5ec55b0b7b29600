//! # Customer
//!
//! Who a parcel goes to.

use serde::{Deserialize, Serialize};

/// A bookshop customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Form of address, e.g. "Mr", "Dr".
    pub title: String,
    pub name: String,
    /// Full postal address on one line.
    pub address: String,
}

impl Customer {
    pub fn new(
        title: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Customer {
            title: title.into(),
            name: name.into(),
            address: address.into(),
        }
    }

    /// Two-line label for printing on a parcel.
    ///
    /// ## Example
    /// ```rust
    /// use bookshop_core::Customer;
    ///
    /// let c = Customer::new("Mrs", "Monika White", "23 Avenue, Dublin, Ireland");
    /// assert_eq!(c.mailing_label(), "Mrs Monika White\n23 Avenue, Dublin, Ireland");
    /// ```
    pub fn mailing_label(&self) -> String {
        format!("{} {}\n{}", self.title, self.name, self.address)
    }
}
