//! Common test utilities for inventory tests

use chrono::{DateTime, Local, TimeZone};
use stockroom::{Command, Executor, FixedClock, InventoryStore, Output, StoreSummary};

/// Sunday 18 October 2026, 09:30:00 local time
pub fn fixed_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
}

/// Executor whose clock always reads [`fixed_time`]
pub fn create_executor() -> Executor {
    Executor::with_store(InventoryStore::new().with_clock(FixedClock(fixed_time())))
}

/// Executor already set up with the given per-shelf capacities
pub fn ready_executor(capacities: &[i64]) -> Executor {
    let mut executor = create_executor();
    executor
        .execute(Command::Initialize {
            shelves: capacities.len() as i64,
            capacities: capacities.to_vec(),
        })
        .unwrap();
    executor
}

/// Place command with the usual argument order
pub fn place(shelf: i64, slot: i64, name: &str, quantity: i64, price: f64) -> Command {
    Command::Place {
        shelf,
        slot,
        name: name.into(),
        quantity,
        price,
    }
}

/// Current occupancy counters
pub fn summary(executor: &mut Executor) -> StoreSummary {
    match executor.execute(Command::Summary).unwrap() {
        Output::Summary(s) => s,
        other => panic!("Expected Summary, got {:?}", other),
    }
}

/// Product names in the insertion log, in append order
pub fn history_names(executor: &mut Executor) -> Vec<String> {
    match executor.execute(Command::History).unwrap() {
        Output::History(entries) => entries.into_iter().map(|e| e.product_name).collect(),
        Output::NoHistory => Vec::new(),
        other => panic!("Expected History, got {:?}", other),
    }
}

/// Occupant of every slot, shelf by shelf
pub fn occupants(executor: &mut Executor) -> Vec<Vec<Option<String>>> {
    match executor.execute(Command::View).unwrap() {
        Output::Layout(shelves) => shelves
            .into_iter()
            .map(|shelf| shelf.slots.into_iter().map(|slot| slot.product).collect())
            .collect(),
        other => panic!("Expected Layout, got {:?}", other),
    }
}
