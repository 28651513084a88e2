//! Raw input lines → menu choices and numeric values.
//!
//! Every failure is an `InvalidInput` error so the menu can report it like
//! any other rejected operation.

use stockroom_executor::{Error, Result};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Initialize,
    View,
    Insert,
    Update,
    Delete,
    History,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order, numbered from 1.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Initialize,
        MenuChoice::View,
        MenuChoice::Insert,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::History,
        MenuChoice::Exit,
    ];

    /// Label shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Initialize => "Set Up Stock with Catalogue",
            MenuChoice::View => "View Product in Stock",
            MenuChoice::Insert => "Insert Product to Stock Catalogue",
            MenuChoice::Update => "Update Product in Stock Catalogue by Product Name",
            MenuChoice::Delete => "Delete Product in Stock Catalogue by Name",
            MenuChoice::History => "View Insertion History in Stock Catalogue",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Parse the menu selection.
pub fn parse_menu_choice(input: &str) -> Result<MenuChoice> {
    let n: i64 = input
        .trim()
        .parse()
        .map_err(|_| Error::invalid_input("Please enter a valid integer for the menu option."))?;
    usize::try_from(n)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| MenuChoice::ALL.get(i).copied())
        .ok_or_else(|| Error::invalid_input("Invalid option. Please choose between 1 and 7."))
}

/// Parse a whole number (shelf, slot, count).
pub fn parse_int(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| Error::invalid_input("Please enter valid numeric values."))
}

/// Parse a quantity, rejecting negatives straight away.
pub fn parse_quantity(input: &str) -> Result<i64> {
    let quantity = parse_int(input)?;
    if quantity < 0 {
        return Err(Error::invalid_input("Quantity cannot be negative."));
    }
    Ok(quantity)
}

/// Parse a price, rejecting negatives straight away.
pub fn parse_price(input: &str) -> Result<f64> {
    let price: f64 = input
        .trim()
        .parse()
        .map_err(|_| Error::invalid_input("Please enter valid numeric values."))?;
    if !price.is_finite() {
        return Err(Error::invalid_input("Please enter valid numeric values."));
    }
    if price < 0.0 {
        return Err(Error::invalid_input("Price cannot be negative."));
    }
    Ok(price)
}
