// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Names of the stage operations

use serde::{Deserialize, Serialize};

/// Every operation a caller can apply to a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Fix the fallback contract
    Contract,
    /// Supply the entry value and open the flow
    Entry,
    Decision,
    Action,
    /// Action that also sees the entry value
    ActionWithEntry,
    Otherwise,
    /// Otherwise computed from the entry value
    OtherwiseWithEntry,
    Channel,
    /// Channel fed by a mapping of entry and current value
    ChannelWithEntry,
    OtherwiseChannel,
    Exit,
}

impl Operation {
    /// Name used in error messages and log fields
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Contract => "contract",
            Operation::Entry => "entry",
            Operation::Decision => "decision",
            Operation::Action => "action",
            Operation::ActionWithEntry => "action with entry",
            Operation::Otherwise => "otherwise",
            Operation::OtherwiseWithEntry => "otherwise with entry",
            Operation::Channel => "channel",
            Operation::ChannelWithEntry => "channel with entry",
            Operation::OtherwiseChannel => "otherwise channel",
            Operation::Exit => "exit",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "operation_tests.rs"]
mod tests;
