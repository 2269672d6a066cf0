use crate::domain::error::{NamedLogError, NamedLogResult};
use std::path::Path;

/// Extension given to names that have none.
pub const LOG_EXTENSION: &str = "log";

/// Map a logger name to the file name it is stored under.
///
/// The name is lowercased and gets a `.log` suffix unless it already carries
/// an extension, so `"Audit"`, `"AUDIT"` and `"audit.log"` all end up in
/// `audit.log`. Empty names and names containing a path separator are
/// rejected.
pub fn normalize_name(name: &str) -> NamedLogResult<String> {
    if name.trim().is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(NamedLogError::InvalidName(name.to_string()));
    }

    let mut normalized = name.to_lowercase();
    if Path::new(&normalized).extension().is_none() {
        normalized.push('.');
        normalized.push_str(LOG_EXTENSION);
    }

    Ok(normalized)
}
