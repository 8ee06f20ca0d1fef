//! Configuration schema.
//!
//! Maps the optional `.depensure.yml` file. Every field is optional;
//! unset fields fall back to CLI flags, environment variables, or the
//! built-in defaults.

use serde::{Deserialize, Serialize};

/// Root configuration structure for `.depensure.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnsureConfig {
    /// Library passed to the installer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,

    /// Import name probed with the resolver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    /// Python interpreter used for probing (and installing by default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// Installer command override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installer: Option<InstallerConfig>,
}

/// Installer command configuration.
///
/// ```yaml
/// installer:
///   program: uv
///   args: [pip, install]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    /// Installer executable. Defaults to the interpreter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Arguments before the library name. Defaults to `-m pip install`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
}
