//! Library and module identifiers.
//!
//! A library name is what the installer receives; a module name is what
//! the resolver looks up. They usually coincide (`libcst`) but not always
//! (`PyYAML` installs the `yaml` module).

use crate::error::{EnsureError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Packaging name rule: alphanumerics, with `.`, `_` and `-` allowed inside.
static LIBRARY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?$")
        .expect("LIBRARY_REGEX must compile")
});

/// Dotted sequence of identifiers.
static MODULE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("MODULE_REGEX must compile")
});

/// Name of a library as passed to the package installer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryName(String);

impl LibraryName {
    /// Validate and wrap a library name.
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if LIBRARY_REGEX.is_match(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(EnsureError::InvalidLibraryName {
                name: name.to_string(),
            })
        }
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Import name this library most likely provides.
    ///
    /// Lowercases and maps `-` and `.` to `_`, which covers the common
    /// case. Libraries whose import name differs need an explicit module.
    pub fn default_module(&self) -> ModuleName {
        let normalized: String = self
            .0
            .chars()
            .map(|c| match c {
                '-' | '.' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        // A leading digit is a valid package name but not a valid identifier.
        let normalized = if normalized.starts_with(|c: char| c.is_ascii_digit()) {
            format!("_{}", normalized)
        } else {
            normalized
        };
        ModuleName(normalized)
    }
}

impl FromStr for LibraryName {
    type Err = EnsureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for LibraryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a module as looked up by the module resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    /// Validate and wrap a module name.
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if MODULE_REGEX.is_match(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(EnsureError::InvalidModuleName {
                name: name.to_string(),
            })
        }
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ModuleName {
    type Err = EnsureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
