//! Invariant Tests
//!
//! Random operation sequences with raw, possibly invalid, numbers. After
//! every step the executor must agree with a simple model: occupancy equals
//! the number of non-empty slots, names are unique ignoring case, and the
//! history grows by one per successful placement only.

use crate::common::*;
use proptest::prelude::*;
use stockroom::{Command, Output};

#[derive(Debug, Clone)]
enum Op {
    Place { shelf: i64, slot: i64, name: usize, quantity: i64 },
    Delete { name: usize },
    Rename { from: usize, to: usize },
}

const NAMES: [&str; 4] = ["bolt", "BOLT", "nut", "washer"];

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-1i64..4, -1i64..4, 0..NAMES.len(), -1i64..3).prop_map(|(shelf, slot, name, quantity)| {
            Op::Place {
                shelf,
                slot,
                name,
                quantity,
            }
        }),
        (0..NAMES.len()).prop_map(|name| Op::Delete { name }),
        (0..NAMES.len(), 0..NAMES.len()).prop_map(|(from, to)| Op::Rename { from, to }),
    ]
}

proptest! {
    #[test]
    fn occupancy_names_and_history_stay_consistent(ops in prop::collection::vec(op(), 1..40)) {
        let mut executor = ready_executor(&[2, 3]);
        let mut placements = 0usize;

        for op in ops {
            let cmd = match op {
                Op::Place { shelf, slot, name, quantity } => {
                    place(shelf, slot, NAMES[name], quantity, 1.0)
                }
                Op::Delete { name } => Command::Delete { name: NAMES[name].into() },
                Op::Rename { from, to } => Command::Update {
                    name: NAMES[from].into(),
                    new_name: NAMES[to].into(),
                    quantity: 1,
                    price: 1.0,
                },
            };
            if let Ok(Output::Placed { .. }) = executor.execute(cmd) {
                placements += 1;
            }

            let names: Vec<String> = occupants(&mut executor)
                .into_iter()
                .flatten()
                .flatten()
                .collect();
            prop_assert_eq!(summary(&mut executor).occupied, names.len());

            let mut lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
            lowered.sort();
            lowered.dedup();
            prop_assert_eq!(lowered.len(), names.len());

            prop_assert_eq!(history_names(&mut executor).len(), placements);
        }
    }
}
