//! Error types for the inventory store
//!
//! Every failure an operator can trigger is represented here. All variants are
//! recoverable: the menu driver reports them and the session continues.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the inventory store
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Validation | `InvalidInput`, `OutOfRange` | Bad operator input |
/// | Conflict | `SlotOccupied`, `DuplicateName`, `StoreFull` | Placement refused |
/// | Lookup | `NotFound` | No product with that name |
/// | State | `Uninitialized` | No layout has been set up |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum Error {
    /// Non-numeric, negative or otherwise malformed input
    #[error("{reason}")]
    InvalidInput {
        /// What was wrong with the input
        reason: String,
    },

    /// Shelf or slot index outside the current layout
    #[error("Invalid {what} number {index}. Choose between 1 and {max}.")]
    OutOfRange {
        /// "shelf" or "slot"
        what: String,
        /// The 1-based index that was supplied
        index: i64,
        /// Largest valid 1-based index
        max: usize,
    },

    /// Target slot already holds a product
    #[error("Slot [{slot}] on shelf [{shelf}] is occupied by [{occupant}].")]
    SlotOccupied {
        /// 1-based shelf
        shelf: usize,
        /// 1-based slot
        slot: usize,
        /// Name of the current occupant
        occupant: String,
    },

    /// Another slot already holds a product with this name (case-insensitive)
    #[error("Product [{name}] already exists in shelf [{shelf}], slot [{slot}].")]
    DuplicateName {
        /// The name that was rejected
        name: String,
        /// 1-based shelf of the existing product
        shelf: usize,
        /// 1-based slot of the existing product
        slot: usize,
    },

    /// Every slot is occupied
    #[error("Stock is full. Cannot add more products ({total} of {total} slots used).")]
    StoreFull {
        /// Total slot count of the layout
        total: usize,
    },

    /// No product with the given name
    #[error("Product [{name}] not found.")]
    NotFound {
        /// The name that was looked up
        name: String,
    },

    /// No layout has been set up yet
    #[error("Stock is not initialized. Please set up the stock first.")]
    Uninitialized,
}

impl Error {
    /// Shorthand for an `InvalidInput` error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Short machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidInput { .. } => "invalid_input",
            Error::OutOfRange { .. } => "out_of_range",
            Error::SlotOccupied { .. } => "slot_occupied",
            Error::DuplicateName { .. } => "duplicate_name",
            Error::StoreFull { .. } => "store_full",
            Error::NotFound { .. } => "not_found",
            Error::Uninitialized => "uninitialized",
        }
    }
}
