//! Dependency detection and installation.
//!
//! This module checks whether a library's module can be located by the
//! interpreter and installs the library when it cannot.
//!
//! # Modules
//!
//! - [`names`] - Validated library and module identifiers
//! - [`status`] - Presence flag and ensure outcome
//! - [`resolver`] - Module resolver trait and the Python-backed resolver
//! - [`installer`] - Package installer trait and the command-backed installer
//! - [`ensurer`] - The check-then-install sequence

pub mod ensurer;
pub mod installer;
pub mod names;
pub mod resolver;
pub mod status;

pub use ensurer::{Dependency, DependencyEnsurer};
pub use installer::{CommandInstaller, InstallerCommand, PackageInstaller};
pub use names::{LibraryName, ModuleName};
pub use resolver::{ModuleResolver, PythonResolver};
pub use status::{EnsureOutcome, ModuleStatus};
