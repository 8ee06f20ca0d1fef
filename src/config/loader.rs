//! Configuration file discovery and loading.

use crate::config::schema::EnsureConfig;
use crate::error::{EnsureError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = ".depensure.yml";

/// Find the project config at `<project_root>/.depensure.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<EnsureConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnsureError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnsureError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into an [`EnsureConfig`].
///
/// An empty document is the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<EnsureConfig> {
    if content.trim().is_empty() {
        return Ok(EnsureConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| EnsureError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, the project config is used
/// when present and the default config otherwise.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<EnsureConfig> {
    if let Some(path) = config_override {
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No {} in {}", CONFIG_FILE_NAME, project_root.display());
            Ok(EnsureConfig::default())
        }
    }
}
