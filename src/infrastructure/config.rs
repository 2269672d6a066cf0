use crate::domain::config::NamedLogConfig;
use crate::domain::error::{NamedLogError, NamedLogResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-local configuration directory name
pub const PROJECT_DIR: &str = ".namedlog";
/// Configuration file name inside the global and project directories
pub const CONFIG_FILE: &str = "config.toml";

/// Configuration manager
pub struct ConfigManager {
    global_config_path: Option<PathBuf>,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> Self {
        Self {
            global_config_path: Self::find_global_config_path(),
            project_config_path: Self::find_project_config_path(),
        }
    }

    /// Manager with explicit lookup locations
    pub fn with_paths(global: Option<PathBuf>, project: Option<PathBuf>) -> Self {
        Self {
            global_config_path: global,
            project_config_path: project,
        }
    }

    /// Load configuration from files. The project file takes precedence over
    /// the global one; neither has to exist.
    pub fn load_config(&self) -> NamedLogResult<NamedLogConfig> {
        for path in [&self.project_config_path, &self.global_config_path]
            .into_iter()
            .flatten()
        {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading configuration");
                return self.load_config_from_path(path);
            }
        }

        Ok(NamedLogConfig::default())
    }

    /// Load configuration, then overlay `NAMEDLOG_*` environment variables.
    pub fn load_with_env(&self, explicit: Option<&Path>) -> NamedLogResult<NamedLogConfig> {
        let mut config = match explicit {
            Some(path) => self.load_config_from_path(path)?,
            None => self.load_config()?,
        };
        config.log.apply_env()?;
        Ok(config)
    }

    /// Global configuration path (`~/.config/namedlog/config.toml`)
    fn find_global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("namedlog").join(CONFIG_FILE))
    }

    /// Find project configuration path by walking up directory tree
    fn find_project_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut path = current_dir.as_path();

        loop {
            let config_path = path.join(PROJECT_DIR).join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> NamedLogResult<NamedLogConfig> {
        let content = fs::read_to_string(path).map_err(|e| NamedLogError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| NamedLogError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Save configuration to specific path
    pub fn save_config_to_path(&self, path: &Path, config: &NamedLogConfig) -> NamedLogResult<()> {
        let content = toml::to_string_pretty(config).map_err(|e| NamedLogError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path, content).map_err(|e| NamedLogError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })
    }

    /// Create default project configuration under `path`
    pub fn init_project_config(&self, path: &Path) -> NamedLogResult<PathBuf> {
        let config_dir = path.join(PROJECT_DIR);
        let config_file = config_dir.join(CONFIG_FILE);

        if config_file.exists() {
            return Err(NamedLogError::Config {
                message: "Project configuration already exists".to_string(),
            });
        }

        fs::create_dir_all(&config_dir).map_err(|e| NamedLogError::Config {
            message: format!("Failed to create {} directory: {}", PROJECT_DIR, e),
        })?;

        self.save_config_to_path(&config_file, &NamedLogConfig::default())?;

        Ok(config_file)
    }

    /// Get the current project config path (if any)
    pub fn project_config_path(&self) -> Option<&PathBuf> {
        self.project_config_path.as_ref()
    }

    /// Get the global config path (if a home directory is known)
    pub fn global_config_path(&self) -> Option<&PathBuf> {
        self.global_config_path.as_ref()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
