use crate::domain::config::{LogConfig, OutputMode};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command line arguments for namedlog
#[derive(Parser, Debug)]
#[command(
    name = "namedlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Terminal or per-name file logging",
    long_about = "Sets up terminal or file-based logging and writes through named loggers, one log file per name."
)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output mode (overrides log.output)
    #[arg(long, value_enum, global = true)]
    pub output: Option<OutputArg>,

    /// Log directory (overrides log.folder)
    #[arg(long, global = true)]
    pub folder: Option<PathBuf>,

    /// Default log file name (overrides log.filename)
    #[arg(long, global = true)]
    pub filename: Option<String>,

    /// Filter directive (overrides log.level)
    #[arg(long, global = true)]
    pub level: Option<String>,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write one message through a named logger
    Write {
        /// Message text
        message: String,
        /// Logger name (default logger if omitted)
        #[arg(short, long)]
        name: Option<String>,
        /// Event severity
        #[arg(short, long, value_enum, default_value = "info")]
        severity: SeverityArg,
    },
    /// Print the log file a logger name resolves to
    Path {
        /// Logger name
        name: String,
    },
    /// Configuration management commands
    Config(ConfigArgs),
    /// Display version information
    Version,
}

/// Configuration management arguments
#[derive(ClapArgs, Debug)]
pub struct ConfigArgs {
    /// Configuration subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Create a default project configuration
    Init {
        /// Project directory (current directory if omitted)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

/// Output mode argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputArg {
    Terminal,
    File,
}

/// Severity argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SeverityArg {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<OutputArg> for OutputMode {
    fn from(output: OutputArg) -> Self {
        match output {
            OutputArg::Terminal => Self::Terminal,
            OutputArg::File => Self::File,
        }
    }
}

impl From<SeverityArg> for tracing::Level {
    fn from(severity: SeverityArg) -> Self {
        match severity {
            SeverityArg::Trace => Self::TRACE,
            SeverityArg::Debug => Self::DEBUG,
            SeverityArg::Info => Self::INFO,
            SeverityArg::Warn => Self::WARN,
            SeverityArg::Error => Self::ERROR,
        }
    }
}

impl Args {
    /// Apply command line overrides on top of a loaded configuration.
    pub fn apply_to(&self, config: &mut LogConfig) {
        if let Some(output) = self.output {
            config.output = output.into();
        }
        if let Some(folder) = &self.folder {
            config.folder = folder.clone();
        }
        if let Some(filename) = &self.filename {
            config.filename = filename.clone();
        }
        if let Some(level) = &self.level {
            config.level = level.clone();
        }
    }
}
