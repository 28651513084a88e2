//! Stockroom - in-memory shelf and slot inventory tracker
//!
//! A fixed layout of shelves, each with its own number of slots, holds at most
//! one product per slot. Product names are unique ignoring case, and every
//! successful placement is recorded in an insertion history.
//!
//! # Quick Start
//!
//! ```
//! use stockroom::{Command, Executor, Output};
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
//!
//! let out = executor.execute(Command::AvailableShelves)?;
//! assert_eq!(out, Output::Shelves(vec![1, 2]));
//! # Ok::<(), stockroom::Error>(())
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which owns the session's one
//! [`InventoryStore`]. The console menu lives in the `stockroom-cli` crate.

// Re-export the public API from stockroom-executor
pub use stockroom_executor::*;
