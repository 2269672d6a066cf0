use crate::domain::error::NamedLogResult;
use crate::infrastructure::logging::{self, LogFile};
use std::fmt;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::{Dispatch, Level};

/// A named logger bound to one output sink.
///
/// Cloning is cheap and clones share the sink. Two handles obtained for the
/// same name from a registry satisfy [`Logger::ptr_eq`].
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    name: String,
    sink: Sink,
    dispatch: Dispatch,
}

enum Sink {
    Terminal,
    File(Arc<LogFile>),
}

impl Logger {
    /// Logger writing human-readable output to stderr.
    pub fn terminal(level: &str) -> NamedLogResult<Self> {
        Ok(Self {
            inner: Arc::new(LoggerInner {
                name: "terminal".to_string(),
                sink: Sink::Terminal,
                dispatch: logging::terminal_dispatch(level)?,
            }),
        })
    }

    /// Logger appending JSON records to `file`.
    pub fn file(name: impl Into<String>, file: Arc<LogFile>, level: &str) -> NamedLogResult<Self> {
        let dispatch = logging::file_dispatch(file.clone(), level)?;
        Ok(Self {
            inner: Arc::new(LoggerInner {
                name: name.into(),
                sink: Sink::File(file),
                dispatch,
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Backing file, `None` for the terminal logger.
    pub fn path(&self) -> Option<&Path> {
        match &self.inner.sink {
            Sink::Terminal => None,
            Sink::File(file) => Some(file.path()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.inner.sink, Sink::Terminal)
    }

    /// True once the backing file has been closed by a shutdown.
    pub fn is_closed(&self) -> bool {
        match &self.inner.sink {
            Sink::Terminal => false,
            Sink::File(file) => file.is_closed(),
        }
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.inner.dispatch
    }

    /// Run `f` with this logger as the thread's default dispatcher.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.inner.dispatch, f)
    }

    /// Emit `message` at `level`.
    pub fn log(&self, level: Level, message: &str) {
        let name = self.name();
        self.in_scope(|| match level {
            Level::ERROR => tracing::error!(logger = %name, "{}", message),
            Level::WARN => tracing::warn!(logger = %name, "{}", message),
            Level::INFO => tracing::info!(logger = %name, "{}", message),
            Level::DEBUG => tracing::debug!(logger = %name, "{}", message),
            _ => tracing::trace!(logger = %name, "{}", message),
        });
    }

    pub fn trace(&self, message: &str) {
        self.log(Level::TRACE, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }

    pub fn flush(&self) -> io::Result<()> {
        match &self.inner.sink {
            Sink::Terminal => Ok(()),
            Sink::File(file) => file.flush(),
        }
    }

    /// Whether both handles refer to the same logger instance.
    pub fn ptr_eq(a: &Logger, b: &Logger) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.inner.name)
            .field("path", &self.path())
            .field("closed", &self.is_closed())
            .finish()
    }
}
