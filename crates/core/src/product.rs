//! Product records
//!
//! A product is what occupies a slot: a name that is unique across the store
//! (compared case-insensitively), a quantity and a unit price.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::limits::Limits;

/// A product stored in one slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    quantity: u64,
    price: f64,
}

impl Product {
    /// Build a validated product.
    ///
    /// The name is trimmed. Fails with `InvalidInput` if the trimmed name is
    /// empty, the quantity is negative, or the price is negative or not finite.
    pub fn new(name: &str, quantity: i64, price: f64) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::invalid_input("Product name cannot be empty."));
        }
        if quantity < 0 {
            return Err(Error::invalid_input("Quantity cannot be negative."));
        }
        if !price.is_finite() {
            return Err(Error::invalid_input("Price must be a finite number."));
        }
        if price < 0.0 {
            return Err(Error::invalid_input("Price cannot be negative."));
        }
        Ok(Self {
            name: name.to_string(),
            quantity: quantity as u64,
            price,
        })
    }

    /// Like [`Product::new`], additionally enforcing the name length limit.
    pub fn with_limits(name: &str, quantity: i64, price: f64, limits: &Limits) -> Result<Self> {
        let product = Self::new(name, quantity, price)?;
        limits.validate_name(&product.name)?;
        Ok(product)
    }

    /// Product name as entered (trimmed)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Units in stock
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Unit price
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Case-insensitive name comparison used for uniqueness and lookup
    pub fn matches(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Compare two product names ignoring case and surrounding whitespace
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
