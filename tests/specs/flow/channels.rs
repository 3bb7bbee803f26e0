//! Channel specs
//!
//! Verify what side channels receive and how they interact with the flow.

use crate::prelude::*;
use similar_asserts::assert_eq;
use std::sync::mpsc;

#[test]
fn otherwise_channel_emits_and_keeps_contract() {
    let sink = RecordingChannel::<i64>::new();

    let result = Stage::contract(0i64)
        .entry(1.0f32)
        .decision(|f| *f > 2.0)
        .otherwise_channel(|f| Some(*f as i64), sink.clone())
        .exit(|f| Some(*f as i64));

    assert_eq!(sink.messages(), vec![1]);
    assert_eq!(result, 0);
}

#[test]
fn channel_sees_every_live_value() {
    let (tx, rx) = mpsc::channel::<i32>();

    let result = open(0, 1)
        .channel(Some(tx.clone()))
        .unwrap()
        .action(Some(|v: &i32| Some(v + 1)))
        .unwrap()
        .channel(Some(tx.clone()))
        .unwrap()
        .decision(Some(|v: &i32| *v > 5))
        .unwrap()
        .channel(Some(tx))
        .unwrap()
        .exit(Some(|v: &i32| Some(*v)))
        .unwrap();

    assert_eq!(result, 0);
    assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn channel_with_entry_reports_progress_against_entry() {
    let sink = RecordingChannel::<String>::new();

    let result = open("none".to_string(), 4)
        .action(Some(|v: &i32| Some(v + 5)))
        .unwrap()
        .channel_with_entry(
            Some(|e: &i32, v: &i32| Some(format!("{e} -> {v}"))),
            Some(sink.clone()),
        )
        .unwrap()
        .exit(Some(|v: &i32| Some(v.to_string())))
        .unwrap();

    assert_eq!(result, "9");
    assert_eq!(sink.messages(), vec!["4 -> 9".to_string()]);
}

#[test]
fn nothing_reaches_channels_after_the_flow_closes() {
    let sink = RecordingChannel::<i32>::new();
    let alternates = RecordingChannel::<i32>::new();

    let result = open(10, 1)
        .decision(Some(|x: &i32| *x > 1))
        .unwrap()
        .channel(Some(sink.clone()))
        .unwrap()
        .otherwise_channel(Some(|e: &i32| Some(*e)), Some(alternates.clone()))
        .unwrap()
        .exit(Some(|x: &i32| Some(x * 2)))
        .unwrap();

    assert_eq!(result, 10);
    assert!(sink.is_empty());
    assert!(alternates.is_empty());
}
