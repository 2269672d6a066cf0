use crate::domain::error::{NamedLogError, NamedLogResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// namedlog configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedLogConfig {
    /// The `[log]` table
    #[serde(default)]
    pub log: LogConfig,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Requested output mode
    #[serde(default)]
    pub output: OutputMode,
    /// Directory holding the log files
    #[serde(default = "default_folder")]
    pub folder: PathBuf,
    /// Base name of the default log file
    #[serde(default = "default_filename")]
    pub filename: String,
    /// Filter directive, e.g. "info" or "namedlog=debug,warn"
    #[serde(default = "default_level")]
    pub level: String,
}

/// Where log output goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Terminal,
    File,
}

// Default value functions
fn default_folder() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_filename() -> String {
    "app".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::default(),
            folder: default_folder(),
            filename: default_filename(),
            level: default_level(),
        }
    }
}

impl LogConfig {
    /// Environment variables consulted by [`LogConfig::apply_overrides`].
    pub const ENV_OUTPUT: &'static str = "NAMEDLOG_OUTPUT";
    pub const ENV_FOLDER: &'static str = "NAMEDLOG_FOLDER";
    pub const ENV_FILENAME: &'static str = "NAMEDLOG_FILENAME";
    pub const ENV_LEVEL: &'static str = "NAMEDLOG_LEVEL";

    /// Overlay values produced by `lookup` (normally `std::env::var`).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> NamedLogResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(output) = lookup(Self::ENV_OUTPUT) {
            self.output = output.parse()?;
        }
        if let Some(folder) = lookup(Self::ENV_FOLDER) {
            self.folder = PathBuf::from(folder);
        }
        if let Some(filename) = lookup(Self::ENV_FILENAME) {
            self.filename = filename;
        }
        if let Some(level) = lookup(Self::ENV_LEVEL) {
            self.level = level;
        }
        Ok(())
    }

    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) -> NamedLogResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }
}

impl FromStr for OutputMode {
    type Err = NamedLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" => Ok(Self::Terminal),
            "file" => Ok(Self::File),
            other => Err(NamedLogError::Config {
                message: format!("unknown log output '{}', expected 'terminal' or 'file'", other),
            }),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Terminal => write!(f, "terminal"),
            OutputMode::File => write!(f, "file"),
        }
    }
}
