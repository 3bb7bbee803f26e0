//! Façade validation specs
//!
//! Verify absent arguments are rejected before the flow runs.

use crate::prelude::*;
use similar_asserts::assert_eq;
use std::cell::Cell;

type Predicate = fn(&i32) -> bool;
type Sink = fn(&i32);

#[test]
fn absent_contract_is_rejected() {
    let err = Activity::<String, (), ()>::contract(None).unwrap_err();
    assert_eq!(err.to_string(), "contract in 'contract' must not be absent");
}

#[test]
fn absent_entry_is_rejected() {
    let err = Activity::contract(Some(1))
        .unwrap()
        .entry(None::<i32>)
        .unwrap_err();
    assert_eq!(err.operation(), Operation::Entry);
}

#[test]
fn rejected_call_leaves_the_pipeline_usable() {
    let activity = open(0, 3);

    let err = activity.decision(None::<Predicate>).unwrap_err();
    assert_eq!(
        err,
        ActivityError::MissingArgument {
            operation: Operation::Decision,
            parameter: "predicate",
        }
    );

    let result = activity
        .decision(Some(|x: &i32| *x == 3))
        .unwrap()
        .exit(Some(|x: &i32| Some(x * 10)))
        .unwrap();
    assert_eq!(result, 30);
}

#[test]
fn absent_channel_is_rejected_before_mapping_runs() {
    let calls = Cell::new(0);

    let err = open(0, 3)
        .channel_with_entry(
            Some(|e: &i32, v: &i32| {
                calls.set(calls.get() + 1);
                Some(e + v)
            }),
            None::<Sink>,
        )
        .unwrap_err();

    assert_eq!(err.parameter(), "channel");
    assert_eq!(calls.get(), 0);
}
