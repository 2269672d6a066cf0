use crate::domain::config::NamedLogConfig;
use std::io::{self, Write};

/// Output writer trait for command results
pub trait OutputWriter {
    fn write_config(&self, config: &NamedLogConfig) -> Result<(), OutputError>;
    fn write_message(&self, message: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("TOML serialization error: {0}")]
    TomlError(#[from] toml::ser::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Console output writer
pub struct ConsoleWriter {
    quiet: bool,
}

impl ConsoleWriter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_config(&self, config: &NamedLogConfig) -> Result<(), OutputError> {
        let output = toml::to_string_pretty(config)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        Ok(())
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        if !self.quiet {
            writeln!(io::stdout().lock(), "{}", message)?;
        }
        Ok(())
    }
}
