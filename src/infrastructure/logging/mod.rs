// Logging module - tracing subscribers for the terminal and file sinks
mod file;

pub use file::{FileSink, LogFile, LogFileWriter};

use crate::domain::error::{NamedLogError, NamedLogResult};
use std::io;
use std::sync::Arc;
use tracing::Dispatch;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Parse a filter directive such as `"info"` or `"namedlog=debug,warn"`.
pub fn parse_filter(directives: &str) -> NamedLogResult<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| NamedLogError::Config {
        message: format!("invalid log level '{}': {}", directives, e),
    })
}

/// Human-readable, colored dispatcher writing to stderr.
pub fn terminal_dispatch(level: &str) -> NamedLogResult<Dispatch> {
    let subscriber = tracing_subscriber::registry().with(parse_filter(level)?).with(
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(true)
            .with_target(false)
            .with_level(true),
    );

    Ok(Dispatch::new(subscriber))
}

/// JSON dispatcher appending one object per event to `file`.
pub fn file_dispatch(file: Arc<LogFile>, level: &str) -> NamedLogResult<Dispatch> {
    let subscriber = tracing_subscriber::registry().with(parse_filter(level)?).with(
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(FileSink(file))
            .with_target(false)
            .with_level(true)
            .with_thread_ids(true),
    );

    Ok(Dispatch::new(subscriber))
}
