//! Output → console text or JSON.
//!
//! Two modes:
//! - **Human** (default): the console wording, e.g. `Stock [1] => [ Apple ] [ 2 - EMPTY ]`
//! - **JSON** (`--json`): `serde_json::to_string_pretty` of the output

use stockroom_executor::{Error, HistoryEntry, Output, OutputFormat, ShelfView};

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputFormat, timestamp_format: &str) -> String {
    match mode {
        OutputFormat::Json => format_json(output),
        OutputFormat::Human => format_human(output, timestamp_format),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputFormat) -> String {
    match mode {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": err.to_string(),
            "code": err.code(),
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputFormat::Human => format!("Error: {}", err),
    }
}

/// The "Stock available" line: shelves with room, `|`-separated.
pub fn format_available(shelves: &[usize]) -> String {
    if shelves.is_empty() {
        return "Stock available : None".to_string();
    }
    let list = shelves
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("|");
    format!("Stock available : {}", list)
}

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {}\"}}", e))
}

fn format_human(output: &Output, timestamp_format: &str) -> String {
    match output {
        Output::Initialized(summary) => format!(
            "[+] Enter products for up to {} slots across {} stocks. Enter shelf 0 to finish.",
            summary.total_slots, summary.shelves
        ),
        Output::Placed { name, address } => {
            format!("Product [{}] added to {}.", name, address)
        }
        Output::Layout(shelves) => format_layout(shelves),
        Output::Updated(_) => "Product updated successfully.".to_string(),
        Output::Deleted { .. } => {
            "---------- Product deleted successfully. ----------".to_string()
        }
        Output::History(entries) => format_history(entries, timestamp_format),
        Output::NoHistory => "No insertion history available.".to_string(),
        Output::Shelves(shelves) => format_available(shelves),
        Output::Summary(summary) => format!(
            "{} of {} slots occupied across {} stocks.",
            summary.occupied, summary.total_slots, summary.shelves
        ),
    }
}

fn format_layout(shelves: &[ShelfView]) -> String {
    let mut lines = vec!["-------- View Stock --------".to_string()];
    for shelf in shelves {
        let slots = shelf
            .slots
            .iter()
            .map(|slot| match &slot.product {
                Some(name) => format!("[ {} ]", name),
                None => format!("[ {} - EMPTY ]", slot.slot),
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("Stock [{}] => {}", shelf.shelf, slots));
    }
    lines.join("\n")
}

fn format_history(entries: &[HistoryEntry], timestamp_format: &str) -> String {
    let mut lines = vec!["Insertion History:".to_string()];
    lines.extend(entries.iter().map(|entry| {
        format!(
            "Inserted at [{}], Product: [{}]",
            entry.format_timestamp(timestamp_format),
            entry.product_name
        )
    }));
    lines.join("\n")
}
