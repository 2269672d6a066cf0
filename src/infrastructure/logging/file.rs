use crate::domain::error::{NamedLogError, NamedLogResult};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing_subscriber::fmt::MakeWriter;

/// An append-only log file that can be closed while loggers still point at it.
///
/// Writes after [`LogFile::close`] fail with `io::ErrorKind::BrokenPipe`.
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl LogFile {
    /// Open (or create) `path` for read, write and append.
    pub fn open(path: &Path) -> NamedLogResult<Self> {
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path)
            .map_err(|source| NamedLogError::OpenFile {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "opened log file");

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(Some(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.lock().is_none()
    }

    /// Flush and release the handle. Returns false if it was already closed.
    pub fn close(&self) -> bool {
        // Release the lock before logging: the current dispatcher may write here.
        let taken = self.lock().take();
        match taken {
            Some(mut file) => {
                if let Err(e) = file.flush() {
                    tracing::warn!(path = %self.path.display(), error = %e, "flush on close failed");
                }
                true
            }
            None => false,
        }
    }

    pub fn flush(&self) -> io::Result<()> {
        self.writer().flush()
    }

    /// Writer holding the file lock until dropped, so one event is one write.
    pub fn writer(&self) -> LogFileWriter<'_> {
        LogFileWriter { guard: self.lock() }
    }

    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        self.file.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Exclusive write access to a [`LogFile`].
pub struct LogFileWriter<'a> {
    guard: MutexGuard<'a, Option<File>>,
}

fn closed_error() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "log file is closed")
}

impl Write for LogFileWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.guard.as_mut() {
            Some(file) => file.write(buf),
            None => Err(closed_error()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.guard.as_mut() {
            Some(file) => file.flush(),
            None => Err(closed_error()),
        }
    }
}

/// `MakeWriter` over a shared [`LogFile`].
#[derive(Debug, Clone)]
pub struct FileSink(pub Arc<LogFile>);

impl<'a> MakeWriter<'a> for FileSink {
    type Writer = LogFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        self.0.writer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_appends_to_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");
        fs::write(&path, "first run\n").unwrap();

        let file = LogFile::open(&path).unwrap();
        file.writer().write_all(b"second run\n").unwrap();
        file.flush().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first run\nsecond run\n");
    }

    #[test]
    fn test_write_after_close_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = LogFile::open(&temp_dir.path().join("closed.log")).unwrap();

        assert!(!file.is_closed());
        assert!(file.close());
        assert!(file.is_closed());
        assert!(!file.close());

        let err = file.writer().write_all(b"late").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(file.flush().is_err());
    }

    #[test]
    fn test_open_in_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("app.log");

        let err = LogFile::open(&path).unwrap_err();
        assert!(matches!(err, NamedLogError::OpenFile { .. }));
        assert!(err.is_fatal());
    }
}
