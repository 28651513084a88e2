//! Shelf layout and slot addressing
//!
//! A layout is a list of per-shelf capacities plus an offset table. Every slot
//! lives at a flat index into one backing vector:
//!
//! ```text
//! capacities = [2, 1, 3]
//! offsets    = [0, 2, 3]
//! flat index = offsets[shelf - 1] + (slot - 1)
//! ```
//!
//! Addresses are 1-based on the outside, matching what the operator types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::limits::Limits;

/// A 1-based (shelf, slot) position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotAddress {
    /// 1-based shelf number
    pub shelf: usize,
    /// 1-based slot number within the shelf
    pub slot: usize,
}

impl SlotAddress {
    /// Create an address from 1-based shelf and slot numbers
    pub const fn new(shelf: usize, slot: usize) -> Self {
        Self { shelf, slot }
    }
}

impl fmt::Display for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shelf [{}], slot [{}]", self.shelf, self.slot)
    }
}

/// Immutable shelf layout for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfLayout {
    capacities: Vec<usize>,
    offsets: Vec<usize>,
    total: usize,
}

impl ShelfLayout {
    /// Build a layout from per-shelf capacities.
    ///
    /// Fails with `InvalidInput` if there are no shelves, any capacity is
    /// zero, or the limits are exceeded.
    pub fn new(capacities: Vec<usize>, limits: &Limits) -> Result<Self> {
        if capacities.is_empty() {
            return Err(Error::invalid_input("Number of stocks must be positive."));
        }
        limits.validate_shelf_count(capacities.len())?;

        let mut offsets = Vec::with_capacity(capacities.len());
        let mut total = 0usize;
        for &capacity in &capacities {
            if capacity == 0 {
                return Err(Error::invalid_input(
                    "Number of catalogues must be positive.",
                ));
            }
            offsets.push(total);
            total = total.saturating_add(capacity);
            limits.validate_capacity(capacity, total)?;
        }

        Ok(Self {
            capacities,
            offsets,
            total,
        })
    }

    /// Number of shelves
    pub fn shelf_count(&self) -> usize {
        self.capacities.len()
    }

    /// Capacity of a 1-based shelf, `None` if out of range
    pub fn capacity(&self, shelf: usize) -> Option<usize> {
        shelf
            .checked_sub(1)
            .and_then(|i| self.capacities.get(i))
            .copied()
    }

    /// Total slots across all shelves
    pub fn total_slots(&self) -> usize {
        self.total
    }

    /// Flat index range covered by a 1-based shelf
    pub fn shelf_range(&self, shelf: usize) -> Option<std::ops::Range<usize>> {
        let capacity = self.capacity(shelf)?;
        let start = self.offsets[shelf - 1];
        Some(start..start + capacity)
    }

    /// Check that a 1-based shelf number exists
    pub fn check_shelf(&self, shelf: usize) -> Result<usize> {
        self.capacity(shelf).ok_or_else(|| Error::OutOfRange {
            what: "shelf".to_string(),
            index: shelf as i64,
            max: self.shelf_count(),
        })
    }

    /// Map a 1-based address to its flat index
    pub fn flat_index(&self, address: SlotAddress) -> Result<usize> {
        let capacity = self.check_shelf(address.shelf)?;
        if address.slot == 0 || address.slot > capacity {
            return Err(Error::OutOfRange {
                what: "slot".to_string(),
                index: address.slot as i64,
                max: capacity,
            });
        }
        Ok(self.offsets[address.shelf - 1] + address.slot - 1)
    }

    /// Map a flat index back to its 1-based address
    pub fn address_of(&self, index: usize) -> Option<SlotAddress> {
        if index >= self.total {
            return None;
        }
        // offsets[0] == 0, so at least one offset is <= index
        let shelf = self.offsets.partition_point(|&offset| offset <= index);
        Some(SlotAddress {
            shelf,
            slot: index - self.offsets[shelf - 1] + 1,
        })
    }
}
