// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! actflow: linear activity flows with argument validation
//!
//! `Activity` wraps the `actflow_core::Stage` state machine and rejects
//! absent arguments before they reach it. Hosts that never deal with
//! optional arguments can use `Stage` directly.

pub mod activity;
pub mod error;

pub use activity::{Activity, ActivityBuilder};
pub use error::ActivityError;

// Re-export the core types a host needs alongside the façade
pub use actflow_core::{Channel, Flow, Operation, Stage, StageBuilder};

#[cfg(any(test, feature = "test-support"))]
pub use actflow_core::RecordingChannel;
