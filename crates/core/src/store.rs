//! InventoryStore: shelves of slots holding uniquely named products
//!
//! ## Model
//!
//! - One [`ShelfLayout`] per session, fixed at `initialize()`.
//! - One flat `Vec<Option<Product>>` addressed through the layout.
//! - Product names are unique across the store, ignoring case.
//! - Every successful placement appends to the [`InsertionLog`].
//!
//! ## Failure atomicity
//!
//! `place`, `update` and `delete` check everything before they touch state,
//! so a failed call leaves the store exactly as it was. `initialize` is the
//! exception: it discards the previous layout first, so a failed
//! re-initialization leaves the store uninitialized.
//!
//! Lookups are linear scans; layouts are operator-sized.

use std::fmt;

use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::history::{HistoryEntry, InsertionLog};
use crate::layout::{ShelfLayout, SlotAddress};
use crate::limits::Limits;
use crate::product::Product;
use crate::types::{ShelfView, SlotView, StoreSummary, UpdateOutcome};

/// Layout plus slot contents, present once initialized
#[derive(Debug)]
struct Stock {
    layout: ShelfLayout,
    slots: Vec<Option<Product>>,
    occupied: usize,
}

impl Stock {
    fn new(layout: ShelfLayout) -> Self {
        let slots = vec![None; layout.total_slots()];
        Self {
            layout,
            slots,
            occupied: 0,
        }
    }

    fn is_full(&self) -> bool {
        self.occupied >= self.layout.total_slots()
    }

    fn summary(&self) -> StoreSummary {
        StoreSummary {
            shelves: self.layout.shelf_count(),
            total_slots: self.layout.total_slots(),
            occupied: self.occupied,
        }
    }

    /// Address of a flat index known to be in range
    fn address(&self, index: usize) -> SlotAddress {
        self.layout
            .address_of(index)
            .unwrap_or(SlotAddress::new(0, 0))
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|p| p.matches(name)))
    }

    fn vacant_index(&self, address: SlotAddress) -> Result<usize> {
        let index = self.layout.flat_index(address)?;
        match &self.slots[index] {
            Some(occupant) => Err(Error::SlotOccupied {
                shelf: address.shelf,
                slot: address.slot,
                occupant: occupant.name().to_string(),
            }),
            None => Ok(index),
        }
    }

    /// Fails if `name` is held by any slot other than `except`
    fn check_unique(&self, name: &str, except: Option<usize>) -> Result<()> {
        let clash = self.slots.iter().enumerate().find(|(i, slot)| {
            Some(*i) != except && slot.as_ref().is_some_and(|p| p.matches(name))
        });
        match clash {
            Some((index, _)) => {
                let at = self.address(index);
                Err(Error::DuplicateName {
                    name: name.trim().to_string(),
                    shelf: at.shelf,
                    slot: at.slot,
                })
            }
            None => Ok(()),
        }
    }
}

/// In-memory inventory of shelves and slots
///
/// # Example
///
/// ```
/// use stockroom_core::{InventoryStore, Product, SlotAddress};
///
/// let mut store = InventoryStore::new();
/// store.initialize(vec![2, 1]).unwrap();
///
/// let apple = Product::new("Apple", 5, 1.50).unwrap();
/// store.place(SlotAddress::new(1, 1), apple).unwrap();
/// assert_eq!(store.summary().unwrap().occupied, 1);
///
/// store.delete("apple").unwrap();
/// assert_eq!(store.summary().unwrap().occupied, 0);
/// ```
pub struct InventoryStore {
    limits: Limits,
    clock: Box<dyn Clock>,
    stock: Option<Stock>,
    log: InsertionLog,
}

impl fmt::Debug for InventoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryStore")
            .field("limits", &self.limits)
            .field("stock", &self.stock)
            .field("history_len", &self.log.len())
            .finish()
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    /// Create an uninitialized store using the system clock and default limits
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
            clock: Box::new(SystemClock),
            stock: None,
            log: InsertionLog::new(),
        }
    }

    /// Replace the clock used to stamp insertions
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the size limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Active size limits
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Set up a fresh layout with one capacity per shelf.
    ///
    /// Clears all slots and the insertion log. On failure the store is left
    /// uninitialized.
    pub fn initialize(&mut self, capacities: Vec<usize>) -> Result<StoreSummary> {
        self.reset();

        let layout = match ShelfLayout::new(capacities, &self.limits) {
            Ok(layout) => layout,
            Err(e) => {
                warn!(target: "stockroom::store", error = %e, "Initialization rejected");
                return Err(e);
            }
        };
        let stock = Stock::new(layout);
        let summary = stock.summary();
        self.stock = Some(stock);

        info!(
            target: "stockroom::store",
            shelves = summary.shelves,
            total_slots = summary.total_slots,
            "Stock initialized"
        );
        Ok(summary)
    }

    /// Drop the layout, slots and log, returning to uninitialized
    pub fn reset(&mut self) {
        self.stock = None;
        self.log.clear();
    }

    /// Whether a layout exists
    pub fn is_initialized(&self) -> bool {
        self.stock.is_some()
    }

    /// Current layout, if initialized
    pub fn layout(&self) -> Option<&ShelfLayout> {
        self.stock.as_ref().map(|s| &s.layout)
    }

    fn stock(&self) -> Result<&Stock> {
        self.stock.as_ref().ok_or(Error::Uninitialized)
    }

    fn stock_mut(&mut self) -> Result<&mut Stock> {
        self.stock.as_mut().ok_or(Error::Uninitialized)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Shelf count, slot count and occupancy
    pub fn summary(&self) -> Result<StoreSummary> {
        Ok(self.stock()?.summary())
    }

    /// Every shelf with every slot's occupant, in order
    pub fn view(&self) -> Result<Vec<ShelfView>> {
        let stock = self.stock()?;
        let shelves = (1..=stock.layout.shelf_count())
            .map(|shelf| {
                let range = stock.layout.shelf_range(shelf).unwrap_or(0..0);
                let slots = stock.slots[range]
                    .iter()
                    .enumerate()
                    .map(|(i, slot)| SlotView {
                        slot: i + 1,
                        product: slot.as_ref().map(|p| p.name().to_string()),
                    })
                    .collect();
                ShelfView { shelf, slots }
            })
            .collect();
        debug!(target: "stockroom::store", "Layout viewed");
        Ok(shelves)
    }

    /// 1-based shelves with at least one empty slot; empty when uninitialized
    pub fn available_shelves(&self) -> Vec<usize> {
        let Some(stock) = &self.stock else {
            return Vec::new();
        };
        (1..=stock.layout.shelf_count())
            .filter(|&shelf| {
                stock
                    .layout
                    .shelf_range(shelf)
                    .is_some_and(|range| stock.slots[range].iter().any(Option::is_none))
            })
            .collect()
    }

    /// Find a product by name, ignoring case
    pub fn locate(&self, name: &str) -> Result<(SlotAddress, &Product)> {
        let stock = self.stock()?;
        let index = stock.find(name).ok_or_else(|| Error::NotFound {
            name: name.trim().to_string(),
        })?;
        let product = stock.slots[index].as_ref().ok_or_else(|| Error::NotFound {
            name: name.trim().to_string(),
        })?;
        Ok((stock.address(index), product))
    }

    /// Product at an address, `None` when the slot is empty
    pub fn get(&self, address: SlotAddress) -> Result<Option<&Product>> {
        let stock = self.stock()?;
        let index = stock.layout.flat_index(address)?;
        Ok(stock.slots[index].as_ref())
    }

    /// Insertion log in append order; `None` when nothing was ever placed
    pub fn history(&self) -> Result<Option<&[HistoryEntry]>> {
        self.stock()?;
        if self.log.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.log.entries()))
        }
    }

    // =========================================================================
    // Pre-checks
    // =========================================================================

    /// Fail unless the address is in range and empty
    pub fn ensure_vacant(&self, address: SlotAddress) -> Result<()> {
        self.stock()?.vacant_index(address).map(|_| ())
    }

    /// Fail if any slot already holds `name`, ignoring case
    pub fn ensure_unique(&self, name: &str) -> Result<()> {
        self.stock()?.check_unique(name, None)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Put a product into an empty slot.
    ///
    /// Checks, in order: initialized, not full, address in range, slot empty,
    /// name unique. Appends an insertion log entry on success.
    pub fn place(&mut self, address: SlotAddress, product: Product) -> Result<()> {
        let stock = self.stock.as_mut().ok_or(Error::Uninitialized)?;
        if stock.is_full() {
            return Err(Error::StoreFull {
                total: stock.layout.total_slots(),
            });
        }
        let index = stock.vacant_index(address)?;
        stock.check_unique(product.name(), None)?;
        self.limits.validate_name(product.name())?;

        let name = product.name().to_string();
        stock.slots[index] = Some(product);
        stock.occupied += 1;
        self.log.append(self.clock.now(), &name);

        info!(
            target: "stockroom::store",
            product = %name,
            shelf = address.shelf,
            slot = address.slot,
            occupied = stock.occupied,
            "Product placed"
        );
        Ok(())
    }

    /// Replace the product named `name` with `replacement`, in the same slot.
    ///
    /// Insertion log entries containing `name` exactly as given (trimmed, case
    /// preserved) are rewritten with substring replacement (see
    /// [`InsertionLog::rename`]). A lookup that only matches ignoring case
    /// finds the product but leaves the log alone.
    pub fn update(&mut self, name: &str, replacement: Product) -> Result<UpdateOutcome> {
        let stock = self.stock.as_mut().ok_or(Error::Uninitialized)?;
        let index = stock.find(name).ok_or_else(|| Error::NotFound {
            name: name.trim().to_string(),
        })?;
        stock.check_unique(replacement.name(), Some(index))?;
        self.limits.validate_name(replacement.name())?;

        let address = stock.address(index);
        let new_name = replacement.name().to_string();
        let previous = stock.slots[index].replace(replacement);
        let old_name = previous
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| name.trim().to_string());
        let history_rewritten = self.log.rename(name.trim(), &new_name);

        info!(
            target: "stockroom::store",
            old = %old_name,
            new = %new_name,
            shelf = address.shelf,
            slot = address.slot,
            history_rewritten,
            "Product updated"
        );
        Ok(UpdateOutcome {
            address,
            old_name,
            new_name,
            history_rewritten,
        })
    }

    /// Remove the product named `name`, returning where it was and what it held.
    ///
    /// The insertion log is left untouched.
    pub fn delete(&mut self, name: &str) -> Result<(SlotAddress, Product)> {
        let stock = self.stock_mut()?;
        let index = stock.find(name).ok_or_else(|| Error::NotFound {
            name: name.trim().to_string(),
        })?;
        let address = stock.address(index);
        let product = stock.slots[index].take().ok_or_else(|| Error::NotFound {
            name: name.trim().to_string(),
        })?;
        stock.occupied -= 1;

        info!(
            target: "stockroom::store",
            product = %product.name(),
            shelf = address.shelf,
            slot = address.slot,
            occupied = stock.occupied,
            "Product deleted"
        );
        Ok((address, product))
    }
}
