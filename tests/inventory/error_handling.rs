//! Error Handling Tests
//!
//! Which condition is reported when several apply, and that a rejected
//! operation leaves products, counts and history exactly as they were.

use crate::common::*;
use stockroom::{Command, Error, Executor, InventoryStore, Limits, Output};

type Snapshot = (Vec<Vec<Option<String>>>, usize, Vec<String>);

fn snapshot(executor: &mut Executor) -> Snapshot {
    (
        occupants(executor),
        summary(executor).occupied,
        history_names(executor),
    )
}

// ============================================================================
// Before set-up
// ============================================================================

#[test]
fn every_store_command_needs_setup() {
    let mut executor = create_executor();
    let commands = vec![
        place(1, 1, "Apple", 1, 1.0),
        Command::View,
        Command::Update {
            name: "Apple".into(),
            new_name: "Pear".into(),
            quantity: 1,
            price: 1.0,
        },
        Command::Delete {
            name: "Apple".into(),
        },
        Command::History,
        Command::Summary,
    ];
    for result in executor.execute_many(commands) {
        assert_eq!(result, Err(Error::Uninitialized));
    }
    // Listing free shelves is not an error, there just are none
    assert_eq!(
        executor.execute(Command::AvailableShelves),
        Ok(Output::Shelves(vec![]))
    );
}

#[test]
fn failed_setup_discards_previous_layout() {
    let mut executor = ready_executor(&[2]);
    executor.execute(place(1, 1, "Apple", 1, 1.0)).unwrap();

    let err = executor
        .execute(Command::Initialize {
            shelves: 0,
            capacities: vec![],
        })
        .unwrap_err();
    assert_eq!(err, Error::invalid_input("Number of stocks must be positive."));
    assert_eq!(executor.execute(Command::View), Err(Error::Uninitialized));
}

#[test]
fn layout_limits_are_enforced() {
    let store = InventoryStore::new().with_limits(Limits::with_small_limits());
    let mut executor = Executor::with_store(store);
    assert!(matches!(
        executor.execute(Command::Initialize {
            shelves: 5,
            capacities: vec![1; 5],
        }),
        Err(Error::InvalidInput { .. })
    ));
    assert!(matches!(
        executor.execute(Command::Initialize {
            shelves: 1,
            capacities: vec![9],
        }),
        Err(Error::InvalidInput { .. })
    ));
    // 4 x 8 = 32 slots, over the total of 16
    assert!(matches!(
        executor.execute(Command::Initialize {
            shelves: 4,
            capacities: vec![8; 4],
        }),
        Err(Error::InvalidInput { .. })
    ));
    executor
        .execute(Command::Initialize {
            shelves: 2,
            capacities: vec![8, 8],
        })
        .unwrap();
    assert!(matches!(
        executor.execute(place(1, 1, "a name longer than sixteen bytes", 1, 1.0)),
        Err(Error::InvalidInput { .. })
    ));
}

// ============================================================================
// Precedence
// ============================================================================

#[test]
fn full_store_is_reported_first() {
    let mut executor = ready_executor(&[1]);
    executor.execute(place(1, 1, "Apple", 1, 1.0)).unwrap();
    assert_eq!(
        executor.execute(place(7, -3, "apple", -1, -1.0)),
        Err(Error::StoreFull { total: 1 })
    );
}

#[test]
fn range_then_occupancy_then_name_then_values() {
    let mut executor = ready_executor(&[2, 1]);
    executor.execute(place(1, 1, "Apple", 1, 1.0)).unwrap();

    assert!(matches!(
        executor.execute(place(3, 1, "Apple", -1, 1.0)),
        Err(Error::OutOfRange { .. })
    ));
    assert!(matches!(
        executor.execute(place(1, 1, "Pear", -1, 1.0)),
        Err(Error::SlotOccupied { .. })
    ));
    assert!(matches!(
        executor.execute(place(2, 1, "APPLE", 1, 1.0)),
        Err(Error::DuplicateName { .. })
    ));
    assert!(matches!(
        executor.execute(place(2, 1, "APPLE", -1, f64::NAN)),
        Err(Error::DuplicateName { .. })
    ));
    assert_eq!(
        executor.execute(place(2, 1, "Pear", 1, -0.5)),
        Err(Error::invalid_input("Price cannot be negative."))
    );
}

#[test]
fn update_missing_name_wins_over_bad_values() {
    let mut executor = ready_executor(&[1]);
    assert_eq!(
        executor.execute(Command::Update {
            name: "Ghost".into(),
            new_name: String::new(),
            quantity: -1,
            price: f64::NAN,
        }),
        Err(Error::NotFound {
            name: "Ghost".into()
        })
    );
}

// ============================================================================
// No partial mutation
// ============================================================================

#[test]
fn rejected_operations_change_nothing() {
    let mut executor = ready_executor(&[2, 2]);
    executor.execute(place(1, 1, "Apple", 5, 1.5)).unwrap();
    executor.execute(place(2, 2, "Pear", 3, 0.5)).unwrap();
    let before = snapshot(&mut executor);

    let rejected = vec![
        place(1, 1, "Plum", 1, 1.0),
        place(1, 2, "pear", 1, 1.0),
        place(1, 2, "Plum", -4, 1.0),
        place(0, 1, "Plum", 1, 1.0),
        Command::Update {
            name: "Apple".into(),
            new_name: "PEAR".into(),
            quantity: 1,
            price: 1.0,
        },
        Command::Update {
            name: "Apple".into(),
            new_name: "Plum".into(),
            quantity: 1,
            price: f64::INFINITY,
        },
        Command::Delete {
            name: "Plum".into(),
        },
    ];
    for result in executor.execute_many(rejected) {
        assert!(result.is_err());
    }
    assert_eq!(snapshot(&mut executor), before);
}

#[test]
fn renaming_only_the_case_is_allowed() {
    let mut executor = ready_executor(&[1]);
    executor.execute(place(1, 1, "apple", 5, 1.5)).unwrap();
    executor
        .execute(Command::Update {
            name: "apple".into(),
            new_name: "Apple".into(),
            quantity: 5,
            price: 1.5,
        })
        .unwrap();
    assert_eq!(occupants(&mut executor), vec![vec![Some("Apple".to_string())]]);
    assert_eq!(history_names(&mut executor), vec!["Apple"]);
}
