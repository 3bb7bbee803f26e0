// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! actflow-core: the pipeline stage state machine
//!
//! This crate provides:
//! - `Stage`, an immutable stage of a linear activity flow
//! - `Flow`, the liveness of a stage (live, pending, ended)
//! - `Channel`, the seam for side-channel messages
//! - `Operation`, names for every stage operation

pub mod channel;
pub mod flow;
pub mod operation;
pub mod stage;

pub use channel::Channel;
pub use flow::Flow;
pub use operation::Operation;
pub use stage::{Stage, StageBuilder};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use channel::RecordingChannel;
