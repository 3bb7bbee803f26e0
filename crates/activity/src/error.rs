// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised by the validating façade

use actflow_core::Operation;
use thiserror::Error;

/// Errors that can occur before an operation reaches the stage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("{parameter} in '{operation}' must not be absent")]
    MissingArgument {
        operation: Operation,
        parameter: &'static str,
    },
}

impl ActivityError {
    /// Operation that rejected the call
    pub fn operation(&self) -> Operation {
        match self {
            ActivityError::MissingArgument { operation, .. } => *operation,
        }
    }

    /// Name of the absent parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            ActivityError::MissingArgument { parameter, .. } => parameter,
        }
    }
}
