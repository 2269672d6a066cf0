use crate::core::logger::Logger;
use crate::core::registry::LoggerRegistry;
use crate::domain::config::{LogConfig, OutputMode};
use crate::domain::error::{NamedLogError, NamedLogResult};
use std::io::IsTerminal;

/// Downgrade `terminal` to `file` when stdout is not attached to a terminal.
pub fn resolve_output_mode(requested: OutputMode, stdout_is_terminal: bool) -> OutputMode {
    match requested {
        OutputMode::Terminal if !stdout_is_terminal => OutputMode::File,
        mode => mode,
    }
}

/// Whether the process's stdout is an interactive terminal.
///
/// On Windows this also recognizes msys/cygwin pseudo-terminals.
pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Logging state for one application: the resolved output mode, the default
/// logger and the per-name file registry.
///
/// Construct it once at startup, hand out references, and call
/// [`LoggingContext::shutdown`] before exit.
#[derive(Debug)]
pub struct LoggingContext {
    mode: OutputMode,
    default_logger: Logger,
    registry: LoggerRegistry,
}

impl LoggingContext {
    /// Set up logging, probing stdout for a terminal.
    pub fn initialize(config: &LogConfig) -> NamedLogResult<Self> {
        Self::with_terminal(config, stdout_is_terminal())
    }

    /// Set up logging with an explicit terminal probe result.
    pub fn with_terminal(config: &LogConfig, stdout_is_terminal: bool) -> NamedLogResult<Self> {
        let mode = resolve_output_mode(config.output, stdout_is_terminal);
        let registry = LoggerRegistry::new(&config.folder, &config.level);

        let default_logger = match mode {
            OutputMode::Terminal => Logger::terminal(&config.level)?,
            OutputMode::File => registry.logger(&config.filename)?,
        };

        default_logger.in_scope(|| {
            tracing::info!(
                requested = %config.output,
                mode = %mode,
                folder = %config.folder.display(),
                "logging initialized"
            )
        });

        Ok(Self {
            mode,
            default_logger,
            registry,
        })
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn is_terminal(&self) -> bool {
        self.mode == OutputMode::Terminal
    }

    pub fn default_logger(&self) -> &Logger {
        &self.default_logger
    }

    /// Logger for `name`: the shared terminal logger in terminal mode,
    /// otherwise the registry's file logger.
    pub fn logger(&self, name: &str) -> NamedLogResult<Logger> {
        match self.mode {
            OutputMode::Terminal => Ok(self.default_logger.clone()),
            OutputMode::File => self.registry.logger(name),
        }
    }

    pub fn registry(&self) -> &LoggerRegistry {
        &self.registry
    }

    /// Install the default logger as the process-wide `tracing` dispatcher.
    pub fn install_global(&self) -> NamedLogResult<()> {
        tracing::dispatcher::set_global_default(self.default_logger.dispatch().clone())
            .map_err(|e| NamedLogError::GlobalDefault(e.to_string()))
    }

    /// Close every file held by the registry. The mode is left unchanged.
    pub fn shutdown(&self) -> usize {
        self.registry.close_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn file_config(folder: PathBuf, output: OutputMode) -> LogConfig {
        LogConfig {
            output,
            folder,
            filename: "app".to_string(),
            level: "info".to_string(),
        }
    }

    #[test]
    fn test_resolve_output_mode() {
        assert_eq!(resolve_output_mode(OutputMode::Terminal, true), OutputMode::Terminal);
        assert_eq!(resolve_output_mode(OutputMode::Terminal, false), OutputMode::File);
        assert_eq!(resolve_output_mode(OutputMode::File, true), OutputMode::File);
        assert_eq!(resolve_output_mode(OutputMode::File, false), OutputMode::File);
    }

    #[test]
    fn test_terminal_mode_shares_one_logger() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("logs");
        let ctx = LoggingContext::with_terminal(&file_config(folder.clone(), OutputMode::Terminal), true)
            .unwrap();

        assert!(ctx.is_terminal());
        let audit = ctx.logger("Audit").unwrap();
        let worker = ctx.logger("worker").unwrap();
        assert!(audit.is_terminal());
        assert!(Logger::ptr_eq(&audit, &worker));
        assert!(Logger::ptr_eq(&audit, ctx.default_logger()));
        assert!(ctx.registry().is_empty());
        assert!(!folder.exists());
    }

    #[test]
    fn test_terminal_without_tty_falls_back_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = LoggingContext::with_terminal(
            &file_config(temp_dir.path().to_path_buf(), OutputMode::Terminal),
            false,
        )
        .unwrap();

        assert_eq!(ctx.mode(), OutputMode::File);
        assert!(temp_dir.path().join("app.log").is_file());
    }

    #[test]
    fn test_file_mode_default_logger_is_registry_entry() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = LoggingContext::with_terminal(
            &file_config(temp_dir.path().to_path_buf(), OutputMode::File),
            true,
        )
        .unwrap();

        let app = ctx.logger("APP").unwrap();
        assert!(Logger::ptr_eq(&app, ctx.default_logger()));
        assert_eq!(ctx.registry().names(), vec!["app.log".to_string()]);

        let content = fs::read_to_string(temp_dir.path().join("app.log")).unwrap();
        assert!(content.contains("logging initialized"));
    }

    #[test]
    fn test_shutdown_closes_files_keeps_mode() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = LoggingContext::with_terminal(
            &file_config(temp_dir.path().to_path_buf(), OutputMode::File),
            false,
        )
        .unwrap();
        let audit = ctx.logger("audit").unwrap();

        assert_eq!(ctx.shutdown(), 2);
        assert!(audit.is_closed());
        assert!(ctx.default_logger().is_closed());
        assert_eq!(ctx.mode(), OutputMode::File);
    }

    #[test]
    fn test_bad_level_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = file_config(temp_dir.path().to_path_buf(), OutputMode::Terminal);
        config.level = "namedlog=loud".to_string();

        let err = LoggingContext::with_terminal(&config, true).unwrap_err();
        assert!(matches!(err, NamedLogError::Config { .. }));
    }
}
