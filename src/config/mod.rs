//! Configuration loading and resolution.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Override merging and validation in [`settings`]
//!
//! # Example
//!
//! ```
//! use depensure::config::{load_config, EnsureSettings, Overrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".depensure.yml"), "library: PyYAML\nmodule: yaml").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! let settings = EnsureSettings::resolve(&config, &Overrides::default()).unwrap();
//! assert_eq!(settings.dependency.module.as_str(), "yaml");
//! ```

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{find_project_config, load_config, load_config_file, CONFIG_FILE_NAME};
pub use schema::{EnsureConfig, InstallerConfig};
pub use settings::{default_interpreter, EnsureSettings, Overrides, DEFAULT_LIBRARY};
