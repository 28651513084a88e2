//! Serialization Tests
//!
//! A session can be scripted as a JSON array of commands; errors carry a
//! stable code when printed as JSON.

use crate::common::*;
use stockroom::{Command, Error, Output, SlotAddress};

#[test]
fn scripted_session_from_json() {
    let script = r#"[
        {"Initialize": {"shelves": 2, "capacities": [2, 1]}},
        {"Place": {"shelf": 1, "slot": 1, "name": "Apple", "quantity": 5, "price": 1.5}},
        {"Place": {"shelf": 2, "slot": 1, "name": "apple", "quantity": 1, "price": 1.0}},
        {"Delete": {"name": "APPLE"}},
        "AvailableShelves"
    ]"#;
    let commands: Vec<Command> = serde_json::from_str(script).unwrap();
    let mut executor = create_executor();
    let results = executor.execute_many(commands);

    assert_eq!(results.len(), 5);
    assert!(matches!(results[0], Ok(Output::Initialized(_))));
    assert!(matches!(results[2], Err(Error::DuplicateName { .. })));
    assert_eq!(
        results[3],
        Ok(Output::Deleted {
            name: "Apple".into(),
            address: SlotAddress::new(1, 1),
        })
    );
    assert_eq!(results[4], Ok(Output::Shelves(vec![1, 2])));
}

#[test]
fn error_json_carries_fields() {
    let err = Error::SlotOccupied {
        shelf: 1,
        slot: 2,
        occupant: "Apple".into(),
    };
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["SlotOccupied"]["occupant"], "Apple");
    assert_eq!(err.code(), "slot_occupied");
    assert_eq!(
        err.to_string(),
        "Slot [2] on shelf [1] is occupied by [Apple]."
    );
}

#[test]
fn layout_output_json() {
    let mut executor = ready_executor(&[1, 1]);
    executor.execute(place(2, 1, "Pear", 1, 1.0)).unwrap();
    let output = executor.execute(Command::View).unwrap();
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["Layout"][0]["slots"][0]["product"], serde_json::Value::Null);
    assert_eq!(json["Layout"][1]["slots"][0]["product"], "Pear");
}
