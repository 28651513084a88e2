//! Operator Sessions
//!
//! Whole sessions: set up a layout, fill it, change it, and read it back.

use crate::common::*;
use stockroom::{Command, Error, Output, SlotAddress, DEFAULT_TIMESTAMP_FORMAT};

// ============================================================================
// Set-up and placement
// ============================================================================

/// Two shelves of 2 and 1 slots; a duplicate is refused and deletion frees the slot
#[test]
fn two_shelf_session() {
    let mut executor = create_executor();
    let out = executor
        .execute(Command::Initialize {
            shelves: 2,
            capacities: vec![2, 1],
        })
        .unwrap();
    match out {
        Output::Initialized(s) => assert_eq!(s.total_slots, 3),
        other => panic!("Expected Initialized, got {:?}", other),
    }

    executor.execute(place(1, 1, "Apple", 5, 1.50)).unwrap();
    assert_eq!(summary(&mut executor).occupied, 1);

    let err = executor.execute(place(2, 1, "Apple", 1, 1.0)).unwrap_err();
    assert_eq!(
        err,
        Error::DuplicateName {
            name: "Apple".into(),
            shelf: 1,
            slot: 1,
        }
    );

    executor
        .execute(Command::Delete {
            name: "Apple".into(),
        })
        .unwrap();
    assert_eq!(summary(&mut executor).occupied, 0);
    assert_eq!(occupants(&mut executor)[0][0], None);
}

/// Names collide regardless of case
#[test]
fn duplicate_names_ignore_case() {
    let mut executor = ready_executor(&[3]);
    executor.execute(place(1, 1, "widget", 1, 1.0)).unwrap();
    assert!(matches!(
        executor.execute(place(1, 2, "Widget", 1, 1.0)),
        Err(Error::DuplicateName { .. })
    ));
    assert!(matches!(
        executor.execute(place(1, 3, "WIDGET ", 1, 1.0)),
        Err(Error::DuplicateName { .. })
    ));
}

/// Filling every slot, then one more is refused as full
#[test]
fn fill_to_capacity() {
    let mut executor = ready_executor(&[2, 3]);
    let mut n = 0;
    for (shelf, capacity) in [(1, 2), (2, 3)] {
        for slot in 1..=capacity {
            n += 1;
            executor
                .execute(place(shelf, slot, &format!("item-{}", n), n, 0.25))
                .unwrap();
        }
    }
    let s = summary(&mut executor);
    assert!(s.is_full());
    assert_eq!(s.occupied, 5);
    assert_eq!(
        executor.execute(Command::AvailableShelves),
        Ok(Output::Shelves(vec![]))
    );
    assert_eq!(
        executor.execute(place(1, 1, "extra", 1, 1.0)),
        Err(Error::StoreFull { total: 5 })
    );
}

/// Available shelves track free slots as products come and go
#[test]
fn available_shelves_follow_occupancy() {
    let mut executor = ready_executor(&[1, 2, 1]);
    executor.execute(place(1, 1, "a", 1, 1.0)).unwrap();
    executor.execute(place(3, 1, "b", 1, 1.0)).unwrap();
    assert_eq!(
        executor.execute(Command::AvailableShelves),
        Ok(Output::Shelves(vec![2]))
    );
    executor
        .execute(Command::Delete { name: "B".into() })
        .unwrap();
    assert_eq!(
        executor.execute(Command::AvailableShelves),
        Ok(Output::Shelves(vec![2, 3]))
    );
}

// ============================================================================
// History
// ============================================================================

/// History records placements with the clock time and survives deletion
#[test]
fn history_outlives_deletion() {
    let mut executor = ready_executor(&[2]);
    executor.execute(place(1, 1, "Apple", 5, 1.5)).unwrap();
    executor.execute(place(1, 2, "Pear", 1, 0.5)).unwrap();
    executor
        .execute(Command::Delete {
            name: "apple".into(),
        })
        .unwrap();

    match executor.execute(Command::History).unwrap() {
        Output::History(entries) => {
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].product_name, "Apple");
            assert_eq!(entries[1].product_name, "Pear");
            assert_eq!(
                entries[0].format_timestamp(DEFAULT_TIMESTAMP_FORMAT),
                "Sunday, October, 18, 2026, 09:30:00"
            );
        }
        other => panic!("Expected History, got {:?}", other),
    }
}

/// Setting up again discards products and history
#[test]
fn reinitialize_starts_clean() {
    let mut executor = ready_executor(&[2]);
    executor.execute(place(1, 1, "Apple", 5, 1.5)).unwrap();
    executor
        .execute(Command::Initialize {
            shelves: 1,
            capacities: vec![4],
        })
        .unwrap();
    assert_eq!(summary(&mut executor).total_slots, 4);
    assert_eq!(summary(&mut executor).occupied, 0);
    assert_eq!(executor.execute(Command::History), Ok(Output::NoHistory));
    // The old name is free again
    executor.execute(place(1, 4, "apple", 1, 1.0)).unwrap();
}

/// Renaming rewrites every log entry containing the typed name as a substring
#[test]
fn rename_rewrites_history_substrings() {
    let mut executor = ready_executor(&[3]);
    executor.execute(place(1, 1, "apple", 1, 1.0)).unwrap();
    executor.execute(place(1, 2, "Pineapple", 1, 1.0)).unwrap();
    executor.execute(place(1, 3, "Pear", 1, 1.0)).unwrap();

    let out = executor
        .execute(Command::Update {
            name: "apple".into(),
            new_name: "quince".into(),
            quantity: 2,
            price: 2.0,
        })
        .unwrap();
    match out {
        Output::Updated(outcome) => {
            assert_eq!(outcome.address, SlotAddress::new(1, 1));
            assert_eq!(outcome.old_name, "apple");
            assert_eq!(outcome.history_rewritten, 2);
        }
        other => panic!("Expected Updated, got {:?}", other),
    }
    assert_eq!(
        history_names(&mut executor),
        vec!["quince", "Pinequince", "Pear"]
    );
    // The other product itself keeps its name
    assert!(executor.store().locate("Pineapple").is_ok());
}

/// The log is matched against the name as typed, so a lookup in another
/// case finds the product without touching its history
#[test]
fn rename_by_other_case_leaves_history() {
    let mut executor = ready_executor(&[2]);
    executor.execute(place(1, 1, "Apple", 1, 1.0)).unwrap();
    let out = executor
        .execute(Command::Update {
            name: "APPLE".into(),
            new_name: "Pear".into(),
            quantity: 1,
            price: 1.0,
        })
        .unwrap();
    match out {
        Output::Updated(outcome) => {
            assert_eq!(outcome.old_name, "Apple");
            assert_eq!(outcome.history_rewritten, 0);
        }
        other => panic!("Expected Updated, got {:?}", other),
    }
    assert_eq!(history_names(&mut executor), vec!["Apple"]);
    assert_eq!(occupants(&mut executor), vec![vec![Some("Pear".to_string()), None]]);
}

/// Update keeps the product in its slot
#[test]
fn update_in_place() {
    let mut executor = ready_executor(&[1, 2]);
    executor.execute(place(2, 2, "Apple", 5, 1.5)).unwrap();
    executor
        .execute(Command::Update {
            name: "apple".into(),
            new_name: "Green Apple".into(),
            quantity: 7,
            price: 1.75,
        })
        .unwrap();
    assert_eq!(
        occupants(&mut executor),
        vec![vec![None], vec![None, Some("Green Apple".to_string())]]
    );
    let (address, product) = executor.store().locate("GREEN APPLE").unwrap();
    assert_eq!(address, SlotAddress::new(2, 2));
    assert_eq!(product.quantity(), 7);
    assert_eq!(product.price(), 1.75);
    assert_eq!(summary(&mut executor).occupied, 1);
}
