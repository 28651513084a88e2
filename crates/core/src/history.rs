//! Insertion log: append-only record of placements
//!
//! ## Rules
//!
//! 1. **Append-only**: one entry per successful placement, in placement order.
//!    Deleting a product never removes its entries.
//!
//! 2. **Rename rewrites**: renaming a product rewrites the name field of every
//!    entry that *contains* the name used to look it up, by case-sensitive
//!    substring replacement. An entry for "Pineapple" is rewritten when "apple"
//!    is renamed; looking up "Apple" as "APPLE" rewrites nothing. This matches the
//!    behavior of the console tool this replaces and is kept deliberately.
//!
//! 3. **Reset**: only re-initializing the store clears the log.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Default rendering of insertion timestamps, e.g. `Sunday, October, 18, 2026, 09:05:00`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%A, %B, %-d, %Y, %H:%M:%S";

/// Check that a strftime pattern parses cleanly.
///
/// Formatting with a broken pattern panics inside `ToString`, so patterns
/// from configuration are validated before use.
pub fn is_valid_timestamp_format(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// One placement in the insertion log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the product was placed
    pub timestamp: DateTime<Local>,
    /// Product name at placement, or after later renames
    pub product_name: String,
}

impl HistoryEntry {
    /// Render the timestamp with a strftime pattern
    pub fn format_timestamp(&self, pattern: &str) -> String {
        self.timestamp.format(pattern).to_string()
    }
}

/// Append-only insertion log
#[derive(Debug, Clone, Default)]
pub struct InsertionLog {
    entries: Vec<HistoryEntry>,
}

impl InsertionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a placement
    pub fn append(&mut self, timestamp: DateTime<Local>, product_name: &str) {
        self.entries.push(HistoryEntry {
            timestamp,
            product_name: product_name.to_string(),
        });
    }

    /// Entries in append order
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Rewrite `old` to `new` inside every entry name containing `old`.
    ///
    /// The match is case-sensitive substring containment. Returns the number
    /// of entries rewritten.
    pub fn rename(&mut self, old: &str, new: &str) -> usize {
        if old.is_empty() {
            return 0;
        }
        let mut rewritten = 0;
        for entry in &mut self.entries {
            if entry.product_name.contains(old) {
                entry.product_name = entry.product_name.replace(old, new);
                rewritten += 1;
            }
        }
        rewritten
    }
}
