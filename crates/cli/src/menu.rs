//! The numbered console menu.
//!
//! Each option prompts for its fields, runs one or more `Command`s through the
//! session and prints the result. Rejected input is reported and the menu is
//! shown again; only end of input and terminal I/O failures end the loop.

use std::io::{self, Write};

use stockroom_executor::{Command, Error, Output, StoreSummary};
use tracing::{debug, info};

use crate::format::{format_error, format_output};
use crate::parse::{parse_int, parse_menu_choice, parse_price, parse_quantity, MenuChoice};
use crate::repl::LineSource;
use crate::state::SessionState;

const GOODBYE: &str = "---------- Exiting system. Goodbye! ----------";

/// Why a menu step stopped.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Input ran out
    #[error("end of input")]
    Eof,

    /// Reading from or writing to the terminal failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The operator's input was rejected; the menu carries on
    #[error(transparent)]
    Input(#[from] Error),
}

type Step<T = ()> = Result<T, MenuError>;

/// Menu driver over a line source and an output sink.
pub struct Menu<'a, S, W> {
    state: &'a mut SessionState,
    source: S,
    out: W,
}

impl<'a, S: LineSource, W: Write> Menu<'a, S, W> {
    /// Create a driver.
    pub fn new(state: &'a mut SessionState, source: S, out: W) -> Self {
        Self { state, source, out }
    }

    /// Show the menu until Exit or end of input.
    pub fn run(&mut self) -> Step {
        loop {
            self.print_menu()?;
            let line = match self.prompt("[*] Choose an option (1-7): ") {
                Ok(line) => line,
                Err(MenuError::Eof) => return self.goodbye(),
                Err(e) => return Err(e),
            };
            let choice = match parse_menu_choice(&line) {
                Ok(choice) => choice,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };
            debug!(target: "stockroom::cli", ?choice, "Menu selection");
            let result = match choice {
                MenuChoice::Initialize => self.initialize(),
                MenuChoice::View => self.run_command(Command::View),
                MenuChoice::Insert => self.insert(),
                MenuChoice::Update => self.update(),
                MenuChoice::Delete => self.delete(),
                MenuChoice::History => self.run_command(Command::History),
                MenuChoice::Exit => return self.goodbye(),
            };
            match result {
                Ok(()) => {}
                Err(MenuError::Input(e)) => self.report(&e)?,
                Err(MenuError::Eof) => return self.goodbye(),
                Err(e) => return Err(e),
            }
        }
    }

    // =========================================================================
    // Options
    // =========================================================================

    fn initialize(&mut self) -> Step {
        // Any failure before the layout exists leaves the store uninitialized.
        let layout = self.read_layout();
        let (shelves, capacities) = match layout {
            Ok(layout) => layout,
            Err(e) => {
                self.state.reset();
                return Err(e);
            }
        };
        self.run_command(Command::Initialize {
            shelves,
            capacities,
        })?;
        self.fill()?;
        self.say("----- SET UP STOCK SUCCEEDED -----")?;
        self.show_available()
    }

    fn read_layout(&mut self) -> Step<(i64, Vec<i64>)> {
        let shelves = parse_int(&self.prompt("[+] Enter the number of stocks: ")?)?;
        let count = self.state.executor().resolve_shelf_count(shelves)?;
        self.say("[+] Insert the number of catalogue for each stock:")?;
        let mut capacities = Vec::with_capacity(count);
        let mut total = 0usize;
        for shelf in 1..=count {
            let prompt = format!("[+] Insert number of catalogue on stock [{}]: ", shelf);
            let capacity = parse_int(&self.prompt(&prompt)?)?;
            total += self.state.executor().resolve_capacity(capacity, total)?;
            capacities.push(capacity);
        }
        Ok((shelves, capacities))
    }

    /// Placement loop run right after set-up. Shelf `0` finishes early.
    fn fill(&mut self) -> Step {
        loop {
            let summary = self.summary()?;
            if summary.is_full() {
                return Ok(());
            }
            let placed = self.fill_one(summary.shelves);
            match placed {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(MenuError::Input(e)) => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// One round of the fill loop. `Ok(false)` when the operator finishes.
    fn fill_one(&mut self, shelves: usize) -> Step<bool> {
        self.show_available()?;
        let prompt = format!("[+] Enter shelf number (1-{}, 0 to finish): ", shelves);
        match parse_int(&self.prompt(&prompt)?)? {
            0 => Ok(false),
            shelf => self.place(shelf, true).map(|()| true),
        }
    }

    fn insert(&mut self) -> Step {
        let summary = self.summary()?;
        if summary.is_full() {
            return Err(Error::StoreFull {
                total: summary.total_slots,
            }
            .into());
        }
        self.show_available()?;
        let prompt = format!(
            "[+] Enter shelf number to insert product (1-{}): ",
            summary.shelves
        );
        let shelf = parse_int(&self.prompt(&prompt)?)?;
        self.place(shelf, false)
    }

    /// Prompt for the rest of a placement, checking each field as it arrives.
    fn place(&mut self, shelf: i64, setup: bool) -> Step {
        let shelf_no = self.state.executor().resolve_shelf(shelf)?;
        let capacity = self.state.executor().shelf_capacity(shelf_no)?;
        let prompt = if setup {
            format!("[+] Enter slot number (1-{}): ", capacity)
        } else {
            format!("[+] Enter slot number (1-{}) to insert product: ", capacity)
        };
        let slot = parse_int(&self.prompt(&prompt)?)?;
        let address = self.state.executor().resolve_address(shelf, slot)?;
        self.state.store().ensure_vacant(address)?;

        let prompt = if setup {
            format!("[+] Enter product name for {}: ", address)
        } else {
            "[+] Enter product name: ".to_string()
        };
        let name = self.read_name(&prompt, "Product name cannot be empty.")?;
        self.state.store().ensure_unique(&name)?;
        let quantity = parse_quantity(&self.prompt("[+] Enter quantity of product: ")?)?;
        let price = parse_price(&self.prompt("[+] Enter price of product: ")?)?;

        self.run_command(Command::Place {
            shelf,
            slot,
            name,
            quantity,
            price,
        })
    }

    fn update(&mut self) -> Step {
        self.require_initialized()?;
        let names = self.state.product_names();
        self.source.set_completions(names);
        let name = self.read_name(
            "[+] Enter product name to update: ",
            "Product name cannot be empty.",
        )?;
        self.state.store().locate(&name)?;
        let new_name = self.read_name(
            "[+] Enter new product name: ",
            "New product name cannot be empty.",
        )?;
        let quantity = parse_quantity(&self.prompt("[+] Enter new quantity of product: ")?)?;
        let price = parse_price(&self.prompt("[+] Enter new price of product: ")?)?;
        self.run_command(Command::Update {
            name,
            new_name,
            quantity,
            price,
        })
    }

    fn delete(&mut self) -> Step {
        self.require_initialized()?;
        let names = self.state.product_names();
        self.source.set_completions(names);
        let name = self.read_name(
            "[+] Enter product name to delete: ",
            "Product name cannot be empty.",
        )?;
        self.run_command(Command::Delete { name })
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn run_command(&mut self, cmd: Command) -> Step {
        let output = self.state.execute(cmd)?;
        self.emit(&output)
    }

    fn summary(&self) -> Step<StoreSummary> {
        Ok(self.state.store().summary()?)
    }

    fn require_initialized(&self) -> Step {
        if !self.state.store().is_initialized() {
            return Err(Error::Uninitialized.into());
        }
        Ok(())
    }

    fn show_available(&mut self) -> Step {
        if !self.state.is_human() {
            return Ok(());
        }
        let output = self.state.execute(Command::AvailableShelves)?;
        self.emit(&output)
    }

    fn read_name(&mut self, prompt: &str, empty_reason: &str) -> Step<String> {
        let name = self.prompt(prompt)?.trim().to_string();
        if name.is_empty() {
            return Err(Error::invalid_input(empty_reason).into());
        }
        Ok(name)
    }

    /// Read one field. JSON mode reads silently, even on a terminal.
    fn prompt(&mut self, prompt: &str) -> Step<String> {
        let prompt = if self.state.is_human() { prompt } else { "" };
        if !self.source.shows_prompt() && !prompt.is_empty() {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;
        }
        self.source.read_line(prompt)?.ok_or(MenuError::Eof)
    }

    fn print_menu(&mut self) -> Step {
        if !self.state.is_human() {
            return Ok(());
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "--------- Console Stock Management System -----------"
        )?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    fn emit(&mut self, output: &Output) -> Step {
        let text = format_output(output, self.state.mode(), self.state.timestamp_format());
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    /// Menu text, printed in human mode only.
    fn say(&mut self, text: &str) -> Step {
        if self.state.is_human() {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }

    fn report(&mut self, err: &Error) -> Step {
        writeln!(self.out, "{}", format_error(err, self.state.mode()))?;
        Ok(())
    }

    fn goodbye(&mut self) -> Step {
        info!(target: "stockroom::cli", "Session ended");
        self.say(GOODBYE)?;
        self.out.flush()?;
        Ok(())
    }
}
