//! Size limits for layouts and product names
//!
//! Shelf counts and capacities come straight from the operator, so they are
//! bounded before any slot vector is allocated. Violations are reported as
//! `InvalidInput`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Size limits enforced by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of shelves (default: 1000)
    pub max_shelves: usize,

    /// Maximum slots on a single shelf (default: 10_000)
    pub max_slots_per_shelf: usize,

    /// Maximum slots across the whole layout (default: 1M)
    pub max_total_slots: usize,

    /// Maximum product name length in bytes (default: 256)
    pub max_name_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_shelves: 1_000,
            max_slots_per_shelf: 10_000,
            max_total_slots: 1_000_000,
            max_name_bytes: 256,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_shelves: 4,
            max_slots_per_shelf: 8,
            max_total_slots: 16,
            max_name_bytes: 16,
        }
    }

    /// Validate a shelf count
    pub fn validate_shelf_count(&self, count: usize) -> Result<()> {
        if count > self.max_shelves {
            return Err(Error::invalid_input(format!(
                "Number of stocks {} exceeds the maximum of {}.",
                count, self.max_shelves
            )));
        }
        Ok(())
    }

    /// Validate a per-shelf capacity and the running slot total
    pub fn validate_capacity(&self, capacity: usize, running_total: usize) -> Result<()> {
        if capacity > self.max_slots_per_shelf {
            return Err(Error::invalid_input(format!(
                "Number of catalogues {} exceeds the maximum of {} per stock.",
                capacity, self.max_slots_per_shelf
            )));
        }
        if running_total > self.max_total_slots {
            return Err(Error::invalid_input(format!(
                "Total catalogues {} exceed the maximum of {}.",
                running_total, self.max_total_slots
            )));
        }
        Ok(())
    }

    /// Validate a product name length
    pub fn validate_name(&self, name: &str) -> Result<()> {
        if name.len() > self.max_name_bytes {
            return Err(Error::invalid_input(format!(
                "Product name is {} bytes long, the maximum is {}.",
                name.len(),
                self.max_name_bytes
            )));
        }
        Ok(())
    }
}
