//! Command enum defining all Stockroom operations.
//!
//! Commands are the "instruction set" of Stockroom. Every operation the menu
//! can perform on the store is a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Raw**: Numbers are carried as the operator typed them (signed), and
//!   validated by the executor

use serde::{Deserialize, Serialize};

/// A command is a self-contained, serializable operation.
///
/// | Command | Returns |
/// |---------|---------|
/// | `Initialize` | `Output::Initialized` |
/// | `Place` | `Output::Placed` |
/// | `View` | `Output::Layout` |
/// | `Update` | `Output::Updated` |
/// | `Delete` | `Output::Deleted` |
/// | `History` | `Output::History` or `Output::NoHistory` |
/// | `AvailableShelves` | `Output::Shelves` |
/// | `Summary` | `Output::Summary` |
///
/// # Example
///
/// ```
/// use stockroom_executor::{Command, Executor, Output};
///
/// let mut executor = Executor::new();
/// executor
///     .execute(Command::Initialize { shelves: 2, capacities: vec![2, 1] })
///     .unwrap();
/// let out = executor
///     .execute(Command::Place {
///         shelf: 1,
///         slot: 1,
///         name: "Apple".into(),
///         quantity: 5,
///         price: 1.50,
///     })
///     .unwrap();
/// assert!(matches!(out, Output::Placed { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Replace the layout with `shelves` shelves of the given capacities.
    /// Clears every slot and the insertion log.
    Initialize {
        /// Number of shelves; must be positive and match `capacities.len()`
        shelves: i64,
        /// Slot capacity per shelf; each must be positive
        capacities: Vec<i64>,
    },

    /// Put a new product into an empty slot.
    Place {
        /// 1-based shelf
        shelf: i64,
        /// 1-based slot
        slot: i64,
        /// Product name, unique ignoring case
        name: String,
        /// Units in stock
        quantity: i64,
        /// Unit price
        price: f64,
    },

    /// Show every shelf and slot.
    View,

    /// Replace the product found by `name` (ignoring case).
    Update {
        /// Name of the product to change
        name: String,
        /// Replacement name
        new_name: String,
        /// Replacement quantity
        quantity: i64,
        /// Replacement price
        price: f64,
    },

    /// Remove the product found by `name` (ignoring case).
    Delete {
        /// Name of the product to remove
        name: String,
    },

    /// List the insertion log.
    History,

    /// List shelves that still have an empty slot.
    AvailableShelves,

    /// Report shelf count, slot count and occupancy.
    Summary,
}

impl Command {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Initialize { .. } => "initialize",
            Command::Place { .. } => "place",
            Command::View => "view",
            Command::Update { .. } => "update",
            Command::Delete { .. } => "delete",
            Command::History => "history",
            Command::AvailableShelves => "available_shelves",
            Command::Summary => "summary",
        }
    }
}
