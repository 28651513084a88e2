//! # Stockroom Executor
//!
//! The public API for Stockroom: a command interface over the in-memory
//! inventory store.
//!
//! - [`Command`]/[`Output`] - the instruction set and its results
//! - [`Executor`] - owns the session's store and runs commands
//! - [`StockroomConfig`] - settings from `stockroom.toml`
//!
//! ## Quick Start
//!
//! ```
//! use stockroom_executor::{Command, Error, Executor};
//!
//! let mut executor = Executor::new();
//! executor.execute(Command::Initialize { shelves: 2, capacities: vec![2, 1] })?;
//! executor.execute(Command::Place {
//!     shelf: 1,
//!     slot: 1,
//!     name: "Apple".into(),
//!     quantity: 5,
//!     price: 1.50,
//! })?;
//! executor.execute(Command::Delete { name: "apple".into() })?;
//! # Ok::<(), Error>(())
//! ```

#![warn(missing_docs)]

mod command;
pub mod config;
mod executor;
mod output;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use config::{ConfigError, OutputFormat, StockroomConfig, CONFIG_FILE_NAME};
pub use executor::Executor;
pub use output::Output;

// Re-export the store types so users don't need stockroom-core directly
pub use stockroom_core::{
    Error, FixedClock, HistoryEntry, InventoryStore, Limits, ShelfView, SlotAddress, SlotView,
    StoreSummary, SystemClock, UpdateOutcome, DEFAULT_TIMESTAMP_FORMAT,
};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
