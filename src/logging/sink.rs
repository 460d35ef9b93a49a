// Log sink abstraction used by the entity service.
// Every sink follows one contract: logging never fails, empty text becomes a warning.

use tracing::{error, info, warn};

/// Destination for service log messages.
///
/// Implementations must not panic or report failure. An empty message is not
/// forwarded; a warning-level fallback entry is recorded instead.
pub trait LogSink: Send + Sync {
    fn log_info(&self, text: &str);
    fn log_error(&self, text: &str);
}

/// Fallback text recorded when a sink receives an empty message.
pub fn empty_message(level: &str) -> String {
    format!("{level} logging was called with no message")
}

/// Sink that emits `tracing` events tagged with a channel name.
#[derive(Debug, Clone)]
pub struct TracingLog {
    channel: String,
}

impl TracingLog {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

impl LogSink for TracingLog {
    fn log_info(&self, text: &str) {
        if text.is_empty() {
            warn!(channel = %self.channel, "{}", empty_message("info"));
            return;
        }
        info!(channel = %self.channel, "{text}");
    }

    fn log_error(&self, text: &str) {
        if text.is_empty() {
            warn!(channel = %self.channel, "{}", empty_message("error"));
            return;
        }
        error!(channel = %self.channel, "{text}");
    }
}

/// Fan-out: a pair of sinks receives every message.
impl<A: LogSink, B: LogSink> LogSink for (A, B) {
    fn log_info(&self, text: &str) {
        self.0.log_info(text);
        self.1.log_info(text);
    }

    fn log_error(&self, text: &str) {
        self.0.log_error(text);
        self.1.log_error(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{ConsoleLevel, ConsoleLog};
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_tracing_log_emits_with_channel() {
        let log = TracingLog::new("lookup");

        log.log_info("fetch post called with argument: 3");
        log.log_error("fetch post failed");

        assert!(logs_contain("fetch post called with argument: 3"));
        assert!(logs_contain("fetch post failed"));
        assert!(logs_contain("channel=lookup"));
    }

    #[traced_test]
    #[test]
    fn test_tracing_log_empty_message_warns() {
        let log = TracingLog::new("lookup");

        log.log_info("");

        assert!(logs_contain("WARN"));
        assert!(logs_contain("info logging was called with no message"));
    }

    #[test]
    fn test_pair_fans_out() {
        let first = ConsoleLog::new(10);
        let second = ConsoleLog::new(10);
        let pair = (first.clone(), second.clone());

        pair.log_info("a");
        pair.log_error("b");

        assert_eq!(first.len(), 2);
        assert_eq!(second.count(ConsoleLevel::Error), 1);
    }
}
