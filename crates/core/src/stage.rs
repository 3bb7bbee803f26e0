// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline stage state machine
//!
//! A stage holds the fallback contract, the entry value the pipeline was
//! opened with, and the value currently flowing through it. Every operation
//! is a pure function from one stage to the next; the receiver is never
//! modified.
//!
//! Once the current value is gone the flow has ended. An ended flow ignores
//! further actions, decisions and channels, but a flow that ended without
//! being closed (`Flow::Pending`) still accepts a single alternate contract
//! through `otherwise` or `otherwise_channel`.

use crate::channel::Channel;
use crate::flow::Flow;
use crate::operation::Operation;
use std::sync::Arc;

/// First half of a pipeline: the contract is known, the entry is not
#[derive(Debug, Clone)]
pub struct StageBuilder<C> {
    contract: C,
}

impl<C> StageBuilder<C> {
    /// Open the flow with its entry value; the entry is also the first current value
    pub fn entry<E: Clone>(self, entry: E) -> Stage<C, E, E> {
        Stage {
            contract: self.contract,
            current: Some(entry.clone()),
            entry: Arc::new(entry),
            ended: false,
        }
    }
}

/// One step of a pipeline
///
/// - `C`: contract, the value `exit` falls back to
/// - `E`: entry, shared by every stage derived from the same pipeline
/// - `V`: current value
pub struct Stage<C, E, V> {
    contract: C,
    entry: Arc<E>,
    current: Option<V>,
    ended: bool,
}

impl<C> Stage<C, (), ()> {
    /// Start a pipeline with the contract `exit` falls back to
    pub fn contract(contract: C) -> StageBuilder<C> {
        StageBuilder { contract }
    }
}

impl<C, E, V> Stage<C, E, V> {
    pub fn contract_value(&self) -> &C {
        &self.contract
    }

    pub fn entry(&self) -> &E {
        &self.entry
    }

    /// Shared handle to the entry; identical for every derived stage
    pub fn entry_handle(&self) -> &Arc<E> {
        &self.entry
    }

    pub fn current(&self) -> Option<&V> {
        self.current.as_ref()
    }

    pub fn flow(&self) -> Flow {
        Flow::of(self.current.is_some(), self.ended)
    }

    pub fn is_live(&self) -> bool {
        self.flow().is_live()
    }
}

impl<C: Clone, E, V: Clone> Stage<C, E, V> {
    /// Continue only if `predicate` holds for the current value.
    ///
    /// A false predicate ends the flow and leaves it open for `otherwise`.
    /// On an already ended flow the predicate is not evaluated and the flow
    /// is closed.
    pub fn decision<P>(&self, predicate: P) -> Stage<C, E, V>
    where
        P: FnOnce(&V) -> bool,
    {
        let Some(value) = &self.current else {
            return self.closed(Operation::Decision);
        };

        if predicate(value) {
            return self.clone();
        }

        self.pending(Operation::Decision)
    }

    /// Like [`Stage::decision`] for predicates that can fail.
    ///
    /// The predicate's error is returned unchanged.
    pub fn try_decision<P, X>(&self, predicate: P) -> Result<Stage<C, E, V>, X>
    where
        P: FnOnce(&V) -> Result<bool, X>,
    {
        let Some(value) = &self.current else {
            return Ok(self.closed(Operation::Decision));
        };

        if predicate(value)? {
            Ok(self.clone())
        } else {
            Ok(self.pending(Operation::Decision))
        }
    }

    /// Emit the current value to `channel`.
    ///
    /// Nothing is emitted once the flow has ended, and the flow is closed.
    pub fn channel<K>(&self, channel: K) -> Stage<C, E, V>
    where
        K: Channel<V>,
    {
        let Some(value) = &self.current else {
            return self.closed(Operation::Channel);
        };

        channel.commit(value);
        self.clone()
    }

    /// Emit a message built from the entry and the current value.
    ///
    /// `None` from `function` emits nothing. The stage itself is unchanged.
    pub fn channel_with_entry<W, F, K>(&self, function: F, channel: K) -> Stage<C, E, V>
    where
        F: FnOnce(&E, &V) -> Option<W>,
        K: Channel<W>,
    {
        let Some(value) = &self.current else {
            return self.closed(Operation::ChannelWithEntry);
        };

        if let Some(message) = function(self.entry(), value) {
            channel.commit(&message);
        }
        self.clone()
    }
}

impl<C: Clone, E, V> Stage<C, E, V> {
    /// Transform the current value.
    ///
    /// `None` from `function` ends the flow. Acting on an ended flow does not
    /// call `function` and closes the flow.
    pub fn action<W, F>(&self, function: F) -> Stage<C, E, W>
    where
        F: FnOnce(&V) -> Option<W>,
    {
        let Some(value) = &self.current else {
            return self.closed(Operation::Action);
        };

        self.with_current(function(value))
    }

    /// Transform the current value with access to the entry
    pub fn action_with_entry<W, F>(&self, function: F) -> Stage<C, E, W>
    where
        F: FnOnce(&E, &V) -> Option<W>,
    {
        let Some(value) = &self.current else {
            return self.closed(Operation::ActionWithEntry);
        };

        self.with_current(function(self.entry(), value))
    }

    /// Like [`Stage::action`] for transforms that can fail.
    ///
    /// The transform's error is returned unchanged.
    pub fn try_action<W, F, X>(&self, function: F) -> Result<Stage<C, E, W>, X>
    where
        F: FnOnce(&V) -> Result<Option<W>, X>,
    {
        let Some(value) = &self.current else {
            return Ok(self.closed(Operation::Action));
        };

        Ok(self.with_current(function(value)?))
    }

    /// Collapse the pipeline to its contract.
    ///
    /// A live flow is mapped through `function`; an ended flow, or `None`
    /// from `function`, yields the stored contract.
    pub fn exit<F>(&self, function: F) -> C
    where
        F: FnOnce(&V) -> Option<C>,
    {
        match &self.current {
            Some(value) => function(value).unwrap_or_else(|| self.contract.clone()),
            None => self.contract.clone(),
        }
    }

    fn with_current<W>(&self, current: Option<W>) -> Stage<C, E, W> {
        if current.is_none() {
            tracing::trace!(flow = %Flow::Pending, "action produced no value");
        }

        Stage {
            contract: self.contract.clone(),
            entry: Arc::clone(&self.entry),
            current,
            ended: false,
        }
    }

    fn pending<W>(&self, operation: Operation) -> Stage<C, E, W> {
        tracing::trace!(%operation, "predicate failed, flow pending");

        Stage {
            contract: self.contract.clone(),
            entry: Arc::clone(&self.entry),
            current: None,
            ended: false,
        }
    }

    /// Stage that keeps the contract and accepts nothing more
    fn closed<W>(&self, operation: Operation) -> Stage<C, E, W> {
        let from = self.flow();
        if !from.is_terminal() {
            tracing::trace!(%operation, %from, "flow closed");
        }

        Stage {
            contract: self.contract.clone(),
            entry: Arc::clone(&self.entry),
            current: None,
            ended: true,
        }
    }
}

impl<C: Clone, E, V: Clone> Stage<C, E, V> {
    /// Commit an alternate contract produced without arguments.
    ///
    /// Only a pending flow is affected; `None` leaves it pending so a later
    /// `otherwise` can still resolve it.
    pub fn otherwise<P>(&self, produce: P) -> Stage<C, E, V>
    where
        P: FnOnce() -> Option<C>,
    {
        if !self.flow().accepts_otherwise() {
            return self.clone();
        }

        match produce() {
            Some(contract) => self.resolved(contract, Operation::Otherwise),
            None => self.clone(),
        }
    }

    /// Commit an alternate contract computed from the entry
    pub fn otherwise_with_entry<F>(&self, function: F) -> Stage<C, E, V>
    where
        F: FnOnce(&E) -> Option<C>,
    {
        if !self.flow().accepts_otherwise() {
            return self.clone();
        }

        match function(self.entry()) {
            Some(contract) => self.resolved(contract, Operation::OtherwiseWithEntry),
            None => self.clone(),
        }
    }

    /// Emit an alternate contract to `channel` and close the flow.
    ///
    /// The emitted value is handed to the channel only; the stage keeps its
    /// previous contract. `None` from `function` emits nothing and leaves the
    /// flow pending.
    pub fn otherwise_channel<F, K>(&self, function: F, channel: K) -> Stage<C, E, V>
    where
        F: FnOnce(&E) -> Option<C>,
        K: Channel<C>,
    {
        if !self.flow().accepts_otherwise() {
            return self.clone();
        }

        match function(self.entry()) {
            Some(message) => {
                channel.commit(&message);
                self.closed(Operation::OtherwiseChannel)
            }
            None => self.clone(),
        }
    }

    fn resolved(&self, contract: C, operation: Operation) -> Stage<C, E, V> {
        tracing::debug!(%operation, "alternate contract committed");

        Stage {
            contract,
            entry: Arc::clone(&self.entry),
            current: None,
            ended: true,
        }
    }
}

impl<C: Clone, E, V: Clone> Clone for Stage<C, E, V> {
    fn clone(&self) -> Self {
        Self {
            contract: self.contract.clone(),
            entry: Arc::clone(&self.entry),
            current: self.current.clone(),
            ended: self.ended,
        }
    }
}

impl<C: std::fmt::Debug, E: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug
    for Stage<C, E, V>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("contract", &self.contract)
            .field("entry", &self.entry)
            .field("current", &self.current)
            .field("flow", &self.flow())
            .finish()
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
