//! Process-wide logging setup.
//!
//! The first successful [`initialize`] wins: it builds a [`LoggingContext`],
//! installs its default logger as the global `tracing` dispatcher and keeps
//! it for the rest of the process. Later calls return that same context and
//! ignore their configuration.
//!
//! When the host has already installed its own global dispatcher, the first
//! call still keeps the context (so [`logger`] works) but reports
//! [`NamedLogError::GlobalDefault`]; later calls return the kept context.

use crate::core::context::LoggingContext;
use crate::core::logger::Logger;
use crate::domain::config::LogConfig;
use crate::domain::error::{NamedLogError, NamedLogResult};
use std::sync::{Mutex, OnceLock, PoisonError};

static CONTEXT: OnceLock<LoggingContext> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Initialize process-wide logging once.
pub fn initialize(config: &LogConfig) -> NamedLogResult<&'static LoggingContext> {
    if let Some(ctx) = CONTEXT.get() {
        return Ok(ctx);
    }

    let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(ctx) = CONTEXT.get() {
        return Ok(ctx);
    }

    let ctx = LoggingContext::initialize(config)?;
    let installed = ctx.install_global();
    let ctx = CONTEXT.get_or_init(|| ctx);

    // The context is kept either way so its files are opened only once.
    installed.map(|()| ctx)
}

/// The process-wide context, if [`initialize`] has built one.
pub fn get() -> Option<&'static LoggingContext> {
    CONTEXT.get()
}

/// Logger for `name` from the process-wide context.
pub fn logger(name: &str) -> NamedLogResult<Logger> {
    get().ok_or(NamedLogError::NotInitialized)?.logger(name)
}

/// Close every file held by the process-wide context.
pub fn shutdown() -> usize {
    get().map(LoggingContext::shutdown).unwrap_or(0)
}
