//! Read-side views returned by the store

use serde::{Deserialize, Serialize};

use crate::layout::SlotAddress;

/// One slot as seen by `view()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    /// 1-based slot number
    pub slot: usize,
    /// Occupant name, `None` when empty
    pub product: Option<String>,
}

impl SlotView {
    /// Whether the slot holds nothing
    pub fn is_empty(&self) -> bool {
        self.product.is_none()
    }
}

/// One shelf as seen by `view()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfView {
    /// 1-based shelf number
    pub shelf: usize,
    /// Slots in order
    pub slots: Vec<SlotView>,
}

/// Occupancy counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSummary {
    /// Number of shelves
    pub shelves: usize,
    /// Total slot count
    pub total_slots: usize,
    /// Occupied slot count
    pub occupied: usize,
}

impl StoreSummary {
    /// Whether every slot is occupied
    pub fn is_full(&self) -> bool {
        self.occupied >= self.total_slots
    }
}

/// Result of a successful update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    /// Where the product lives
    pub address: SlotAddress,
    /// Name before the update
    pub old_name: String,
    /// Name after the update
    pub new_name: String,
    /// Insertion log entries whose name was rewritten
    pub history_rewritten: usize,
}
