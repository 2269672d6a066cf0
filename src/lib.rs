//! namedlog Library
//!
//! Sets up terminal or file-based logging on top of `tracing` and hands out
//! named loggers, each backed by its own lazily opened file in file mode.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::global;
pub use crate::core::{normalize_name, Logger, LoggerRegistry, LoggingContext};
pub use crate::domain::config::{LogConfig, NamedLogConfig, OutputMode};
pub use crate::domain::error::{NamedLogError, NamedLogResult};
