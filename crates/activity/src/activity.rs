// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validating wrapper around a pipeline stage
//!
//! Every operation checks that its arguments are present before the wrapped
//! stage sees them. A rejected call never reaches the stage; an accepted one
//! is delegated unchanged and its result is wrapped again.

use crate::error::ActivityError;
use actflow_core::{Channel, Flow, Operation, Stage};
use std::sync::Arc;

/// First half of a validated pipeline: the contract is known, the entry is not
#[derive(Debug, Clone)]
pub struct ActivityBuilder<C> {
    contract: C,
    label: Option<Arc<str>>,
}

impl<C> ActivityBuilder<C> {
    /// Tag log records emitted for this pipeline
    pub fn named(self, label: impl Into<Arc<str>>) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    /// Open the flow; the entry is required
    pub fn entry<E: Clone>(self, entry: Option<E>) -> Result<Activity<C, E, E>, ActivityError> {
        let entry = require(entry, Operation::Entry, "entry", self.label.as_deref())?;
        Ok(Activity {
            stage: Stage::contract(self.contract).entry(entry),
            label: self.label,
        })
    }
}

/// A pipeline stage whose operations reject absent arguments
#[derive(Debug)]
pub struct Activity<C, E, V> {
    stage: Stage<C, E, V>,
    label: Option<Arc<str>>,
}

impl<C> Activity<C, (), ()> {
    /// Start a validated pipeline; the contract is required
    pub fn contract(contract: Option<C>) -> Result<ActivityBuilder<C>, ActivityError> {
        let contract = require(contract, Operation::Contract, "contract", None)?;
        Ok(ActivityBuilder {
            contract,
            label: None,
        })
    }
}

impl<C, E, V> Activity<C, E, V> {
    /// Wrap an existing stage
    pub fn from_stage(stage: Stage<C, E, V>) -> Self {
        Self { stage, label: None }
    }

    /// The wrapped stage
    pub fn stage(&self) -> &Stage<C, E, V> {
        &self.stage
    }

    pub fn into_stage(self) -> Stage<C, E, V> {
        self.stage
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn flow(&self) -> Flow {
        self.stage.flow()
    }

    fn wrap<W>(&self, stage: Stage<C, E, W>) -> Activity<C, E, W> {
        Activity {
            stage,
            label: self.label.clone(),
        }
    }

    fn require<T>(
        &self,
        value: Option<T>,
        operation: Operation,
        parameter: &'static str,
    ) -> Result<T, ActivityError> {
        require(value, operation, parameter, self.label.as_deref())
    }
}

impl<C: Clone, E, V: Clone> Activity<C, E, V> {
    /// Continue only if the predicate holds; see [`Stage::decision`]
    pub fn decision<P>(&self, predicate: Option<P>) -> Result<Activity<C, E, V>, ActivityError>
    where
        P: FnOnce(&V) -> bool,
    {
        let predicate = self.require(predicate, Operation::Decision, "predicate")?;
        Ok(self.wrap(self.stage.decision(predicate)))
    }

    /// Fallible decision; the predicate's error is returned inside `Ok`
    pub fn try_decision<P, X>(
        &self,
        predicate: Option<P>,
    ) -> Result<Result<Activity<C, E, V>, X>, ActivityError>
    where
        P: FnOnce(&V) -> Result<bool, X>,
    {
        let predicate = self.require(predicate, Operation::Decision, "predicate")?;
        Ok(self.stage.try_decision(predicate).map(|stage| self.wrap(stage)))
    }

    /// Commit an alternate contract on a pending flow

    pub fn otherwise<P>(&self, produce: Option<P>) -> Result<Activity<C, E, V>, ActivityError>
    where
        P: FnOnce() -> Option<C>,
    {
        let produce = self.require(produce, Operation::Otherwise, "produce")?;
        Ok(self.wrap(self.stage.otherwise(produce)))
    }

    /// Commit an alternate contract computed from the entry
    pub fn otherwise_with_entry<F>(
        &self,
        function: Option<F>,
    ) -> Result<Activity<C, E, V>, ActivityError>
    where
        F: FnOnce(&E) -> Option<C>,
    {
        let function = self.require(function, Operation::OtherwiseWithEntry, "function")?;
        Ok(self.wrap(self.stage.otherwise_with_entry(function)))
    }

    /// Emit the current value to the channel
    pub fn channel<K>(&self, channel: Option<K>) -> Result<Activity<C, E, V>, ActivityError>
    where
        K: Channel<V>,
    {
        let channel = self.require(channel, Operation::Channel, "channel")?;
        Ok(self.wrap(self.stage.channel(channel)))
    }

    /// Emit a message built from the entry and the current value.
    ///
    /// A missing function is reported before a missing channel.
    pub fn channel_with_entry<W, F, K>(
        &self,
        function: Option<F>,
        channel: Option<K>,
    ) -> Result<Activity<C, E, V>, ActivityError>
    where
        F: FnOnce(&E, &V) -> Option<W>,
        K: Channel<W>,
    {
        let function = self.require(function, Operation::ChannelWithEntry, "function")?;
        let channel = self.require(channel, Operation::ChannelWithEntry, "channel")?;
        Ok(self.wrap(self.stage.channel_with_entry(function, channel)))
    }

    /// Emit an alternate contract and close a pending flow
    pub fn otherwise_channel<F, K>(
        &self,
        function: Option<F>,
        channel: Option<K>,
    ) -> Result<Activity<C, E, V>, ActivityError>
    where
        F: FnOnce(&E) -> Option<C>,
        K: Channel<C>,
    {
        let function = self.require(function, Operation::OtherwiseChannel, "function")?;
        let channel = self.require(channel, Operation::OtherwiseChannel, "channel")?;
        Ok(self.wrap(self.stage.otherwise_channel(function, channel)))
    }
}

impl<C: Clone, E, V> Activity<C, E, V> {
    /// Transform the current value
    pub fn action<W, F>(&self, function: Option<F>) -> Result<Activity<C, E, W>, ActivityError>
    where
        F: FnOnce(&V) -> Option<W>,
    {
        let function = self.require(function, Operation::Action, "function")?;
        Ok(self.wrap(self.stage.action(function)))
    }

    /// Transform the current value with access to the entry
    pub fn action_with_entry<W, F>(
        &self,
        function: Option<F>,
    ) -> Result<Activity<C, E, W>, ActivityError>
    where
        F: FnOnce(&E, &V) -> Option<W>,
    {
        let function = self.require(function, Operation::ActionWithEntry, "function")?;
        Ok(self.wrap(self.stage.action_with_entry(function)))
    }

    /// Fallible action; the transform's error is returned inside `Ok`
    pub fn try_action<W, F, X>(
        &self,
        function: Option<F>,
    ) -> Result<Result<Activity<C, E, W>, X>, ActivityError>
    where
        F: FnOnce(&V) -> Result<Option<W>, X>,
    {
        let function = self.require(function, Operation::Action, "function")?;
        Ok(self.stage.try_action(function).map(|stage| self.wrap(stage)))
    }

    /// Collapse the pipeline to its contract
    pub fn exit<F>(&self, function: Option<F>) -> Result<C, ActivityError>
    where
        F: FnOnce(&V) -> Option<C>,
    {
        let function = self.require(function, Operation::Exit, "function")?;
        Ok(self.stage.exit(function))
    }
}

impl<C: Clone, E, V: Clone> Clone for Activity<C, E, V> {
    fn clone(&self) -> Self {
        Self {
            stage: self.stage.clone(),
            label: self.label.clone(),
        }
    }
}

impl<C, E, V> From<Stage<C, E, V>> for Activity<C, E, V> {
    fn from(stage: Stage<C, E, V>) -> Self {
        Self::from_stage(stage)
    }
}

fn require<T>(
    value: Option<T>,
    operation: Operation,
    parameter: &'static str,
    label: Option<&str>,
) -> Result<T, ActivityError> {
    match value {
        Some(value) => Ok(value),
        None => {
            tracing::debug!(activity = ?label, %operation, parameter, "rejected absent argument");
            Err(ActivityError::MissingArgument {
                operation,
                parameter,
            })
        }
    }
}

#[cfg(test)]
#[path = "activity_tests.rs"]
mod tests;
