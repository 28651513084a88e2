//! The Executor - single entry point to the inventory store.
//!
//! The Executor owns the session's one [`InventoryStore`], turns raw operator
//! values into validated arguments, and converts results to [`Output`]s.

use stockroom_core::{InventoryStore, Product, SlotAddress};
use tracing::{debug, warn};

use crate::config::StockroomConfig;
use crate::{Command, Error, Output, Result};

/// The command executor.
///
/// # Example
///
/// ```
/// use stockroom_executor::{Command, Executor, Output};
///
/// let mut executor = Executor::new();
/// let results = executor.execute_many(vec![
///     Command::Initialize { shelves: 1, capacities: vec![1] },
///     Command::History,
/// ]);
/// assert!(matches!(results[1], Ok(Output::NoHistory)));
/// ```
#[derive(Debug, Default)]
pub struct Executor {
    store: InventoryStore,
}

impl Executor {
    /// Create an executor over a fresh, uninitialized store.
    pub fn new() -> Self {
        Self::with_store(InventoryStore::new())
    }

    /// Create an executor over an existing store (custom clock or limits).
    pub fn with_store(store: InventoryStore) -> Self {
        Self { store }
    }

    /// Create an executor using the limits from a configuration.
    pub fn from_config(config: &StockroomConfig) -> Self {
        Self::with_store(InventoryStore::new().with_limits(config.limits.clone()))
    }

    /// Discard the layout, slots and history.
    ///
    /// Used when an interactive set-up is abandoned part way.
    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// Read access to the store, for pre-checks and prompts.
    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Execute a single command.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        debug!(target: "stockroom::exec", command = name, "Executing");
        let result = self.dispatch(cmd);
        if let Err(e) = &result {
            warn!(target: "stockroom::exec", command = name, code = e.code(), error = %e, "Command failed");
        }
        result
    }

    /// Execute commands in order, collecting every result.
    ///
    /// A failing command does not stop the ones after it.
    pub fn execute_many(&mut self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    fn dispatch(&mut self, cmd: Command) -> Result<Output> {
        match cmd {
            Command::Initialize { shelves, capacities } => self.initialize(shelves, capacities),
            Command::Place {
                shelf,
                slot,
                name,
                quantity,
                price,
            } => self.place(shelf, slot, &name, quantity, price),
            Command::View => Ok(Output::Layout(self.store.view()?)),
            Command::Update {
                name,
                new_name,
                quantity,
                price,
            } => self.update(&name, &new_name, quantity, price),
            Command::Delete { name } => {
                require_name(&name)?;
                let (address, product) = self.store.delete(&name)?;
                Ok(Output::Deleted {
                    name: product.name().to_string(),
                    address,
                })
            }
            Command::History => Ok(match self.store.history()? {
                Some(entries) => Output::History(entries.to_vec()),
                None => Output::NoHistory,
            }),
            Command::AvailableShelves => Ok(Output::Shelves(self.store.available_shelves())),
            Command::Summary => Ok(Output::Summary(self.store.summary()?)),
        }
    }

    fn initialize(&mut self, shelves: i64, capacities: Vec<i64>) -> Result<Output> {
        match self.validate_layout(shelves, &capacities) {
            Ok(capacities) => Ok(Output::Initialized(self.store.initialize(capacities)?)),
            Err(e) => {
                self.store.reset();
                Err(e)
            }
        }
    }

    fn place(
        &mut self,
        shelf: i64,
        slot: i64,
        name: &str,
        quantity: i64,
        price: f64,
    ) -> Result<Output> {
        let summary = self.store.summary()?;
        if summary.is_full() {
            return Err(Error::StoreFull {
                total: summary.total_slots,
            });
        }
        let address = self.resolve_address(shelf, slot)?;
        self.store.ensure_vacant(address)?;
        self.store.ensure_unique(name)?;
        let product = Product::with_limits(name, quantity, price, self.store.limits())?;
        let name = product.name().to_string();
        self.store.place(address, product)?;
        Ok(Output::Placed { name, address })
    }

    fn update(&mut self, name: &str, new_name: &str, quantity: i64, price: f64) -> Result<Output> {
        require_name(name)?;
        self.store.locate(name)?;
        if new_name.trim().is_empty() {
            return Err(Error::invalid_input("New product name cannot be empty."));
        }
        let replacement = Product::with_limits(new_name, quantity, price, self.store.limits())?;
        Ok(Output::Updated(self.store.update(name, replacement)?))
    }

    /// Validate a raw shelf count for a new layout.
    pub fn resolve_shelf_count(&self, shelves: i64) -> Result<usize> {
        let shelves = positive(shelves, "Number of stocks must be positive.")?;
        self.store.limits().validate_shelf_count(shelves)?;
        Ok(shelves)
    }

    /// Validate a raw per-shelf slot count for a new layout, given the slots
    /// already declared on earlier shelves.
    pub fn resolve_capacity(&self, capacity: i64, total_before: usize) -> Result<usize> {
        let capacity = positive(capacity, "Number of catalogues must be positive.")?;
        self.store
            .limits()
            .validate_capacity(capacity, total_before.saturating_add(capacity))?;
        Ok(capacity)
    }

    /// Slot count of a 1-based shelf, for prompts.
    pub fn shelf_capacity(&self, shelf: usize) -> Result<usize> {
        let layout = self.store.layout().ok_or(Error::Uninitialized)?;
        layout.capacity(shelf).ok_or_else(|| Error::OutOfRange {
            what: "shelf".to_string(),
            index: shelf as i64,
            max: layout.shelf_count(),
        })
    }

    fn validate_layout(&self, shelves: i64, capacities: &[i64]) -> Result<Vec<usize>> {
        let count = self.resolve_shelf_count(shelves)?;
        let mut total = 0usize;
        let mut resolved = Vec::with_capacity(capacities.len());
        for &capacity in capacities {
            let capacity = self.resolve_capacity(capacity, total)?;
            total += capacity;
            resolved.push(capacity);
        }
        let capacities = resolved;
        if capacities.len() != count {
            return Err(Error::invalid_input(format!(
                "Expected {} catalogue counts, got {}.",
                count,
                capacities.len()
            )));
        }
        Ok(capacities)
    }

    /// Validate a raw 1-based shelf number against the current layout.
    pub fn resolve_shelf(&self, shelf: i64) -> Result<usize> {
        let layout = self.store.layout().ok_or(Error::Uninitialized)?;
        one_based("shelf", shelf, layout.shelf_count())
    }

    /// Validate raw 1-based shelf and slot numbers against the current layout.
    pub fn resolve_address(&self, shelf: i64, slot: i64) -> Result<SlotAddress> {
        let shelf = self.resolve_shelf(shelf)?;
        let slot = one_based("slot", slot, self.shelf_capacity(shelf)?)?;
        Ok(SlotAddress::new(shelf, slot))
    }
}

fn require_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_input("Product name cannot be empty."));
    }
    Ok(())
}

fn one_based(what: &str, value: i64, max: usize) -> Result<usize> {
    match usize::try_from(value) {
        Ok(v) if (1..=max).contains(&v) => Ok(v),
        _ => Err(Error::OutOfRange {
            what: what.to_string(),
            index: value,
            max,
        }),
    }
}

fn positive(value: i64, reason: &str) -> Result<usize> {
    usize::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .ok_or_else(|| Error::invalid_input(reason))
}
