// Logging module.
// Log sinks injected into the service plus global tracing setup.

pub mod console;
pub mod setup;
pub mod sink;

pub use console::{ConsoleLevel, ConsoleLog};
pub use setup::init_logging;
pub use sink::{LogSink, TracingLog};
