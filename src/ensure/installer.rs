//! Package installation.
//!
//! The [`PackageInstaller`] trait runs the installer for one library.
//! [`CommandInstaller`] shells out to a configured command with the
//! library name appended, inheriting stdout and stderr so the installer's
//! own progress output reaches the user.

use super::names::LibraryName;
use crate::error::{EnsureError, Result};
use crate::shell::{execute, CommandOptions, CommandSpec};

/// Installs a library into the environment.
pub trait PackageInstaller {
    /// Run the installer once. Any failure is final.
    ///
    /// A missing installer executable is `SpawnFailed` carrying the OS
    /// error; a non-zero exit is `InstallFailed`.
    fn install(&self, library: &LibraryName) -> Result<()>;
}

/// The installer command line, minus the library name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerCommand {
    /// Installer executable.
    pub program: String,

    /// Arguments placed before the library name.
    pub args: Vec<String>,
}

impl InstallerCommand {
    /// `<interpreter> -m pip install`.
    pub fn pip(interpreter: impl Into<String>) -> Self {
        Self {
            program: interpreter.into(),
            args: vec!["-m".into(), "pip".into(), "install".into()],
        }
    }

    /// Full command line for a library.
    pub fn for_library(&self, library: &LibraryName) -> CommandSpec {
        CommandSpec::new(&self.program)
            .args(self.args.iter().cloned())
            .arg(library.as_str())
    }
}

/// Installer that runs an [`InstallerCommand`] as a child process.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    command: InstallerCommand,
}

impl CommandInstaller {
    /// Create an installer running the given command.
    pub fn new(command: InstallerCommand) -> Self {
        Self { command }
    }
}

impl PackageInstaller for CommandInstaller {
    fn install(&self, library: &LibraryName) -> Result<()> {
        let spec = self.command.for_library(library);
        let command = spec.to_string();

        let result = execute(&spec, &CommandOptions::default())?;

        if result.success {
            tracing::debug!("Installed '{}' in {:?}", library, result.duration);
            Ok(())
        } else {
            Err(EnsureError::InstallFailed {
                library: library.to_string(),
                command,
                code: result.exit_code,
            })
        }
    }
}
