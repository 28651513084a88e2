//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant (`History` produces
//! `History` or `NoHistory` depending on whether anything was logged).

use serde::{Deserialize, Serialize};
use stockroom_core::{HistoryEntry, ShelfView, SlotAddress, StoreSummary, UpdateOutcome};

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Layout created
    Initialized(StoreSummary),

    /// Product stored
    Placed {
        /// Stored name (trimmed)
        name: String,
        /// Where it went
        address: SlotAddress,
    },

    /// Every shelf and slot, in order
    Layout(Vec<ShelfView>),

    /// Product replaced in place
    Updated(UpdateOutcome),

    /// Product removed
    Deleted {
        /// Name of the removed product
        name: String,
        /// Where it was
        address: SlotAddress,
    },

    /// Insertion log in append order, never empty
    History(Vec<HistoryEntry>),

    /// Nothing has been placed since the last initialization
    NoHistory,

    /// 1-based shelves with at least one empty slot
    Shelves(Vec<usize>),

    /// Occupancy counters
    Summary(StoreSummary),
}
