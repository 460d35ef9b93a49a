// In-memory log sink for the activity pane.
// Keeps the most recent messages in a bounded ring shared with the UI.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use super::sink::{LogSink, empty_message};

/// Console message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
    Error,
}

/// A console message for the activity log.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub level: ConsoleLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ConsoleMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ConsoleLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(ConsoleLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ConsoleLevel::Error, message)
    }

    fn new(level: ConsoleLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Bounded, cloneable message buffer. Clones share the same buffer.
#[derive(Debug, Clone)]
pub struct ConsoleLog {
    messages: Arc<Mutex<VecDeque<ConsoleMessage>>>,
    capacity: usize,
}

impl ConsoleLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            messages: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Append a message, dropping the oldest when full.
    pub fn push(&self, message: ConsoleMessage) {
        let mut messages = self.lock();
        if messages.len() == self.capacity {
            messages.pop_front();
        }
        messages.push_back(message);
    }

    /// Snapshot of buffered messages, oldest first.
    pub fn messages(&self) -> Vec<ConsoleMessage> {
        self.lock().iter().cloned().collect()
    }

    // A panic elsewhere must not take the activity pane down with it.
    fn lock(&self) -> MutexGuard<'_, VecDeque<ConsoleMessage>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
impl ConsoleLog {
    /// Number of buffered messages at the given level.
    pub fn count(&self, level: ConsoleLevel) -> usize {
        self.lock().iter().filter(|msg| msg.level == level).count()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl LogSink for ConsoleLog {
    fn log_info(&self, text: &str) {
        if text.is_empty() {
            self.push(ConsoleMessage::warn(empty_message("info")));
            return;
        }
        self.push(ConsoleMessage::info(text));
    }

    fn log_error(&self, text: &str) {
        if text.is_empty() {
            self.push(ConsoleMessage::warn(empty_message("error")));
            return;
        }
        self.push(ConsoleMessage::error(text));
    }
}
