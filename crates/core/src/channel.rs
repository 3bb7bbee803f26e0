// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Side channels that receive messages from a pipeline

use std::sync::mpsc::Sender;

/// Destination for messages emitted by `channel` and `otherwise_channel`.
///
/// Commits are synchronous. A panic inside `commit` unwinds through the
/// stage operation that triggered it.
pub trait Channel<T: ?Sized> {
    fn commit(&self, message: &T);
}

impl<T: ?Sized, F> Channel<T> for F
where
    F: Fn(&T),
{
    fn commit(&self, message: &T) {
        self(message)
    }
}

impl<T: Clone> Channel<T> for Sender<T> {
    fn commit(&self, message: &T) {
        // Receiver gone: nobody is listening any more
        if self.send(message.clone()).is_err() {
            tracing::warn!("channel receiver disconnected, message dropped");
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
mod recording {
    use super::Channel;
    use std::sync::{Arc, Mutex};

    /// Channel that records every committed message
    #[derive(Debug)]
    pub struct RecordingChannel<T> {
        messages: Arc<Mutex<Vec<T>>>,
    }

    impl<T> RecordingChannel<T> {
        pub fn new() -> Self {
            Self {
                messages: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn len(&self) -> usize {
            self.messages.lock().unwrap_or_else(|e| e.into_inner()).len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    impl<T: Clone> RecordingChannel<T> {
        /// All messages committed so far, oldest first
        pub fn messages(&self) -> Vec<T> {
            self.messages
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .clone()
        }

        pub fn last(&self) -> Option<T> {
            self.messages
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .last()
                .cloned()
        }
    }

    impl<T> Clone for RecordingChannel<T> {
        fn clone(&self) -> Self {
            Self {
                messages: Arc::clone(&self.messages),
            }
        }
    }

    impl<T> Default for RecordingChannel<T> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<T: Clone> Channel<T> for RecordingChannel<T> {
        fn commit(&self, message: &T) {
            self.messages
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(message.clone());
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use recording::RecordingChannel;

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
