//! Effective settings.
//!
//! Combines the config file with command-line and environment overrides
//! into validated [`EnsureSettings`]. Precedence, lowest first: built-in
//! defaults, config file, overrides.

use crate::config::schema::EnsureConfig;
use crate::ensure::{Dependency, InstallerCommand, LibraryName, ModuleName};
use crate::error::{EnsureError, Result};

/// Library ensured when nothing else is configured.
pub const DEFAULT_LIBRARY: &str = "libcst";

/// Interpreter used when nothing else is configured.
pub fn default_interpreter() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Library name override.
    pub library: Option<String>,
    /// Module name override.
    pub module: Option<String>,
    /// Interpreter override.
    pub python: Option<String>,
}

/// Fully resolved, validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsureSettings {
    /// What to check and install.
    pub dependency: Dependency,
    /// Interpreter used for probing.
    pub interpreter: String,
    /// Installer command, minus the library name.
    pub installer: InstallerCommand,
}

impl EnsureSettings {
    /// Resolve settings from a config file and overrides.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLibraryName`/`InvalidModuleName` for malformed
    /// names and `ConfigValidationError` for an empty interpreter or
    /// installer program.
    pub fn resolve(config: &EnsureConfig, overrides: &Overrides) -> Result<Self> {
        let library = overrides
            .library
            .as_deref()
            .or(config.library.as_deref())
            .unwrap_or(DEFAULT_LIBRARY);
        let library = LibraryName::new(library)?;

        // A library given as an override does not inherit the config
        // file's module; that module belongs to a different library.
        let module = match (&overrides.module, &overrides.library) {
            (Some(module), _) => Some(module.as_str()),
            (None, Some(_)) => None,
            (None, None) => config.module.as_deref(),
        };
        let dependency = match module {
            Some(module) => Dependency::with_module(library, ModuleName::new(module)?),
            None => Dependency::new(library),
        };

        let interpreter = overrides
            .python
            .as_deref()
            .or(config.python.as_deref())
            .unwrap_or(default_interpreter())
            .trim()
            .to_string();
        if interpreter.is_empty() {
            return Err(EnsureError::ConfigValidationError {
                message: "python interpreter must not be empty".into(),
            });
        }

        let mut installer = InstallerCommand::pip(&interpreter);
        if let Some(custom) = &config.installer {
            if let Some(program) = &custom.program {
                let program = program.trim();
                if program.is_empty() {
                    return Err(EnsureError::ConfigValidationError {
                        message: "installer.program must not be empty".into(),
                    });
                }
                installer.program = program.to_string();
            }
            if let Some(args) = &custom.args {
                installer.args = args.clone();
            }
        }

        Ok(Self {
            dependency,
            interpreter,
            installer,
        })
    }
}
