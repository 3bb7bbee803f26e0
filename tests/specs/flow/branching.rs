//! Branching specs
//!
//! Verify how decisions, actions and `otherwise` settle the contract.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn failed_decision_falls_back_to_contract() {
    let result = Stage::contract(-1000i64)
        .entry(10)
        .decision(|x| *x < 10)
        .exit(|x| Some(i64::from(*x)));

    assert_eq!(result, -1000);
}

#[test]
fn absent_action_skips_the_rest_of_the_flow() {
    let result = Stage::contract("contract".to_string())
        .entry(1)
        .action(|_| None::<i32>)
        .action(|_| Some(String::new()))
        .exit(|s| Some(s.clone()));

    assert_eq!(result, "contract");
}

#[test]
fn otherwise_supplies_the_alternate_contract() {
    let result = Stage::contract(0)
        .entry(1)
        .action(|_| None::<i32>)
        .otherwise(|| Some(2))
        .exit(|_| Some(3));

    assert_eq!(result, 2);
}

#[test]
fn empty_otherwise_gives_the_next_one_a_chance() {
    let result = Stage::contract(Vec::<i32>::new())
        .entry(1)
        .decision(|x| x % 2 == 0)
        .otherwise(|| None)
        .otherwise_with_entry(|x| Some(vec![x * 2]))
        .exit(|x| Some(vec![*x]));

    assert_eq!(result, vec![2]);
}

#[test]
fn otherwise_on_a_live_flow_changes_nothing() {
    let result = Stage::contract("1".to_string())
        .entry(0)
        .otherwise(|| Some("10".to_string()))
        .exit(|v| Some(v.to_string()));

    assert_eq!(result, "0");
}

#[test]
fn live_flow_exits_through_its_mapping() {
    let result = open(0.0f32, 100)
        .action(Some(|x: &i32| Some(x * 3)))
        .unwrap()
        .decision(Some(|x: &i32| *x > 0))
        .unwrap()
        .exit(Some(|x: &i32| Some(*x as f32)))
        .unwrap();

    assert_eq!(result, 300.0);
}

#[test]
fn abandoned_stage_can_still_be_resumed_differently() {
    let pending = open("fallback".to_string(), 5)
        .decision(Some(|x: &i32| *x > 10))
        .unwrap();

    let first = pending
        .otherwise(Some(|| Some("first".to_string())))
        .unwrap()
        .exit(Some(|x: &i32| Some(x.to_string())))
        .unwrap();
    let second = pending
        .otherwise_with_entry(Some(|e: &i32| Some(format!("second {e}"))))
        .unwrap()
        .exit(Some(|x: &i32| Some(x.to_string())))
        .unwrap();

    assert_eq!(first, "first");
    assert_eq!(second, "second 5");
    assert_eq!(pending.flow(), Flow::Pending);
}
