//! Session wrapper around the executor.
//!
//! Holds the one `Executor` for the process together with the settings that
//! shape how results are printed.

use stockroom_executor::{
    Command, Executor, InventoryStore, OutputFormat, Output, Result, StockroomConfig,
};

/// Wraps the executor and tracks presentation settings.
pub struct SessionState {
    executor: Executor,
    mode: OutputFormat,
    timestamp_format: String,
}

impl SessionState {
    /// Create a session over an existing executor.
    pub fn new(executor: Executor, mode: OutputFormat, timestamp_format: impl Into<String>) -> Self {
        Self {
            executor,
            mode,
            timestamp_format: timestamp_format.into(),
        }
    }

    /// Create a session from loaded configuration, with the output mode
    /// already resolved against the command line.
    pub fn from_config(config: &StockroomConfig, mode: OutputFormat) -> Self {
        Self::new(
            Executor::from_config(config),
            mode,
            config.timestamp_format.clone(),
        )
    }

    /// Execute a command via the executor.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        self.executor.execute(cmd)
    }

    /// Read access for pre-checks.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Read access to the store behind the executor.
    pub fn store(&self) -> &InventoryStore {
        self.executor.store()
    }

    /// Forget the current layout after an abandoned set-up.
    pub fn reset(&mut self) {
        self.executor.reset();
    }

    /// Active output mode.
    pub fn mode(&self) -> OutputFormat {
        self.mode
    }

    /// Whether menu banners and prompts should be printed.
    pub fn is_human(&self) -> bool {
        self.mode == OutputFormat::Human
    }

    /// strftime pattern for history timestamps.
    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// Names of every stored product, in slot order. Used for TAB completion.
    pub fn product_names(&self) -> Vec<String> {
        self.store()
            .view()
            .map(|shelves| {
                shelves
                    .into_iter()
                    .flat_map(|shelf| shelf.slots)
                    .filter_map(|slot| slot.product)
                    .collect()
            })
            .unwrap_or_default()
    }
}
