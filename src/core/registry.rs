use crate::core::logger::Logger;
use crate::core::name::normalize_name;
use crate::domain::error::{NamedLogError, NamedLogResult};
use crate::infrastructure::logging::LogFile;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One open log file and the logger writing to it.
struct RegistryEntry {
    file: Arc<LogFile>,
    logger: Logger,
}

/// Lazily opened per-name file loggers.
///
/// Each normalized name maps to exactly one open file for the lifetime of
/// the registry. Lookup-or-create happens under a single lock, so concurrent
/// first requests for the same name still open the file once.
pub struct LoggerRegistry {
    folder: PathBuf,
    level: String,
    entries: Mutex<HashMap<String, RegistryEntry>>,
}

impl LoggerRegistry {
    /// Create an empty registry. Nothing touches the filesystem until the
    /// first [`LoggerRegistry::logger`] call.
    pub fn new(folder: impl Into<PathBuf>, level: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            level: level.into(),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// The file a logger name resolves to.
    pub fn path_for(&self, name: &str) -> NamedLogResult<PathBuf> {
        Ok(self.folder.join(normalize_name(name)?))
    }

    /// Return the logger for `name`, opening its file on first use.
    pub fn logger(&self, name: &str) -> NamedLogResult<Logger> {
        let normalized = normalize_name(name)?;

        let mut entries = self.lock();
        if let Some(entry) = entries.get(&normalized) {
            return Ok(entry.logger.clone());
        }

        self.ensure_folder()?;
        let file = Arc::new(LogFile::open(&self.folder.join(&normalized))?);
        let logger = Logger::file(normalized.clone(), file.clone(), &self.level)?;

        entries.insert(
            normalized,
            RegistryEntry {
                file,
                logger: logger.clone(),
            },
        );

        Ok(logger)
    }

    /// Close every open file. Entries stay cached; loggers handed out before
    /// the call keep working as handles but their writes are dropped.
    pub fn close_all(&self) -> usize {
        let files: Vec<Arc<LogFile>> = self.lock().values().map(|e| e.file.clone()).collect();
        files.iter().filter(|file| file.close()).count()
    }

    pub fn contains(&self, name: &str) -> bool {
        normalize_name(name)
            .map(|normalized| self.lock().contains_key(&normalized))
            .unwrap_or(false)
    }

    /// Normalized names currently held, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn ensure_folder(&self) -> NamedLogResult<()> {
        if self.folder.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(&self.folder).map_err(|source| NamedLogError::CreateDirectory {
            path: self.folder.clone(),
            source,
        })?;
        tracing::debug!(folder = %self.folder.display(), "created log directory");
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, RegistryEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("folder", &self.folder)
            .field("level", &self.level)
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tempfile::TempDir;

    #[test]
    fn test_lazy_creation() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("nested").join("logs");
        let registry = LoggerRegistry::new(&folder, "info");

        assert!(registry.is_empty());
        assert!(!folder.exists());

        let logger = registry.logger("Audit").unwrap();
        assert!(folder.is_dir());
        assert!(folder.join("audit.log").is_file());
        assert_eq!(logger.path(), Some(folder.join("audit.log").as_path()));
        assert_eq!(logger.name(), "audit.log");
        assert_eq!(registry.names(), vec!["audit.log".to_string()]);
    }

    #[test]
    fn test_same_normalized_name_same_logger() {
        let temp_dir = TempDir::new().unwrap();
        let registry = LoggerRegistry::new(temp_dir.path(), "info");

        let first = registry.logger("worker").unwrap();
        for name in ["WORKER", "worker.log", "Worker"] {
            let again = registry.logger(name).unwrap();
            assert!(Logger::ptr_eq(&first, &again));
        }
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("WORKER.LOG"));
        assert!(!registry.contains("other"));
    }

    #[test]
    fn test_distinct_names_distinct_files() {
        let temp_dir = TempDir::new().unwrap();
        let registry = LoggerRegistry::new(temp_dir.path(), "info");

        let app = registry.logger("app").unwrap();
        let audit = registry.logger("audit").unwrap();
        assert!(!Logger::ptr_eq(&app, &audit));
        assert_eq!(registry.names(), vec!["app.log".to_string(), "audit.log".to_string()]);
    }

    #[test]
    fn test_invalid_name_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("logs");
        let registry = LoggerRegistry::new(&folder, "info");

        assert!(matches!(registry.logger(""), Err(NamedLogError::InvalidName(_))));
        assert!(!folder.exists());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_folder_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("logs");
        fs::write(&blocker, "not a directory").unwrap();

        let registry = LoggerRegistry::new(&blocker, "info");
        let err = registry.logger("app").unwrap_err();
        assert!(matches!(err, NamedLogError::CreateDirectory { .. }));
        assert!(err.is_fatal());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_close_all_keeps_entries() {
        let temp_dir = TempDir::new().unwrap();
        let registry = LoggerRegistry::new(temp_dir.path(), "info");
        let app = registry.logger("app").unwrap();
        registry.logger("audit").unwrap();

        app.info("before shutdown");
        assert_eq!(registry.close_all(), 2);
        assert_eq!(registry.close_all(), 0);

        assert!(app.is_closed());
        app.info("after shutdown");
        assert!(app.flush().is_err());

        let again = registry.logger("APP").unwrap();
        assert!(Logger::ptr_eq(&app, &again));
        assert_eq!(registry.len(), 2);

        let content = fs::read_to_string(temp_dir.path().join("app.log")).unwrap();
        assert!(content.contains("before shutdown"));
        assert!(!content.contains("after shutdown"));
    }

    #[test]
    fn test_concurrent_first_use_opens_once() {
        let temp_dir = TempDir::new().unwrap();
        let registry = Arc::new(LoggerRegistry::new(temp_dir.path(), "info"));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = registry.clone();
                thread::spawn(move || {
                    let name = if i % 2 == 0 { "shared" } else { "SHARED.log" };
                    registry.logger(name).unwrap()
                })
            })
            .collect();

        let loggers: Vec<Logger> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(loggers.iter().all(|l| Logger::ptr_eq(l, &loggers[0])));
        assert_eq!(registry.len(), 1);
    }
}
