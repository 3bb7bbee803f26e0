//! Shared helpers for the specs

pub use actflow::{Activity, ActivityError, Flow, Operation, RecordingChannel, Stage};

/// Validated pipeline that is known to have valid arguments
pub fn open<C, E: Clone>(contract: C, entry: E) -> Activity<C, E, E> {
    Activity::contract(Some(contract))
        .and_then(|builder| builder.entry(Some(entry)))
        .expect("contract and entry are present")
}
