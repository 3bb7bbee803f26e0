// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Liveness of a pipeline stage

use serde::{Deserialize, Serialize};

/// Where a stage sits in the flow.
///
/// A stage is either still carrying a value (`Live`), has lost its value but
/// may still be resolved by an alternate contract (`Pending`), or has been
/// closed for good (`Ended`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    /// Current value present, the flow continues
    Live,
    /// Current value absent, one `otherwise` may still commit a contract
    Pending,
    /// Flow closed; only the stored contract can come out of `exit`
    Ended,
}

impl Flow {
    /// Derive the flow from a stage's raw fields
    pub fn of(has_value: bool, ended: bool) -> Self {
        match (has_value, ended) {
            (true, _) => Flow::Live,
            (false, false) => Flow::Pending,
            (false, true) => Flow::Ended,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Flow::Live => "live",
            Flow::Pending => "pending",
            Flow::Ended => "ended",
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Flow::Live)
    }

    /// Check if this flow still accepts an alternate contract
    pub fn accepts_otherwise(&self) -> bool {
        matches!(self, Flow::Pending)
    }

    /// Check if this flow can no longer change its contract
    pub fn is_terminal(&self) -> bool {
        matches!(self, Flow::Ended)
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "flow_tests.rs"]
mod tests;
