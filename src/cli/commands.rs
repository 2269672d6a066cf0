use crate::cli::args::{Args, Command, ConfigCommand};
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::core::{global, LoggerRegistry};
use crate::domain::config::NamedLogConfig;
use crate::infrastructure::config::ConfigManager;
use anyhow::Context;

/// Execute CLI command
pub fn execute_command(args: Args) -> anyhow::Result<()> {
    let writer = ConsoleWriter::new(args.quiet);
    let config_manager = ConfigManager::new();
    let config = load_config(&args, &config_manager)?;

    match args.command {
        Command::Write {
            message,
            name,
            severity,
        } => {
            let ctx = global::initialize(&config.log).context("failed to set up logging")?;
            let logger = match name.as_deref() {
                Some(name) => ctx
                    .logger(name)
                    .with_context(|| format!("failed to open logger '{}'", name))?,
                None => ctx.default_logger().clone(),
            };

            logger.log(severity.into(), &message);
            logger.flush().context("failed to flush log file")?;

            if let Some(path) = logger.path() {
                writer.write_message(&format!("wrote to {}", path.display()))?;
            }
            global::shutdown();
            Ok(())
        }
        Command::Path { name } => {
            let registry = LoggerRegistry::new(&config.log.folder, &config.log.level);
            let path = registry.path_for(&name)?;
            writer.write_message(&path.display().to_string())?;
            Ok(())
        }
        Command::Config(config_args) => match config_args.command {
            ConfigCommand::Show => {
                writer.write_config(&config)?;
                Ok(())
            }
            ConfigCommand::Init { dir } => {
                let dir = match dir {
                    Some(dir) => dir,
                    None => std::env::current_dir().context("cannot determine current directory")?,
                };
                let path = config_manager.init_project_config(&dir)?;
                writer.write_message(&format!("created {}", path.display()))?;
                Ok(())
            }
        },
        Command::Version => {
            writer.write_message(&format!("namedlog {}", env!("CARGO_PKG_VERSION")))?;
            Ok(())
        }
    }
}

/// Files, then environment, then command line flags.
fn load_config(args: &Args, config_manager: &ConfigManager) -> anyhow::Result<NamedLogConfig> {
    let mut config = config_manager
        .load_with_env(args.config.as_deref())
        .context("failed to load configuration")?;
    args.apply_to(&mut config.log);
    Ok(config)
}
