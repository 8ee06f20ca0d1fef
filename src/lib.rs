//! depensure - Ensure a Python library is installed.
//!
//! depensure asks a Python interpreter whether a library's module can be
//! located and, when it cannot, runs the package installer for it once.
//! Any failure is fatal and surfaces as a non-zero exit.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and override resolution
//! - [`ensure`] - Module resolver, package installer, and the ensurer
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Child process execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use depensure::ensure::{Dependency, LibraryName};
//!
//! let dependency = Dependency::new(LibraryName::new("Typing-Extensions").unwrap());
//! assert_eq!(dependency.module.as_str(), "typing_extensions");
//! ```

pub mod cli;
pub mod config;
pub mod ensure;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{EnsureError, Result};
