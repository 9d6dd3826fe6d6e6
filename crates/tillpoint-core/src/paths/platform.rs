//! Data root resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "TILLPOINT_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `TILLPOINT_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/tillpoint`)
pub fn data_root() -> Result<PathBuf, PathError> {
    resolve_data_root(env::var(DATA_DIR_ENV).ok())
}

/// Resolve the data root from an optional override, creating it if needed.
pub fn resolve_data_root(override_dir: Option<String>) -> Result<PathBuf, PathError> {
    let root = match override_dir {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(PathError::EmptyPath);
            }
            PathBuf::from(trimmed)
        }
        None => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("tillpoint"),
    };

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}
