//! Core types for Stockroom
//!
//! This crate defines the data model and the single stateful component:
//! - ShelfLayout: per-shelf capacities and flat slot addressing
//! - Product: a validated product record
//! - InsertionLog: append-only placement history
//! - InventoryStore: the store itself (initialize, place, view, update, delete, history)
//! - Error: all recoverable failures

#![warn(missing_docs)]

pub mod clock;
pub mod error;
pub mod history;
pub mod layout;
pub mod limits;
pub mod product;
pub mod store;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use history::{
    is_valid_timestamp_format, HistoryEntry, InsertionLog, DEFAULT_TIMESTAMP_FORMAT,
};
pub use layout::{ShelfLayout, SlotAddress};
pub use limits::Limits;
pub use product::{names_match, Product};
pub use store::InventoryStore;
pub use types::{ShelfView, SlotView, StoreSummary, UpdateOutcome};
