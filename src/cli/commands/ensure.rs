//! Ensure command implementation.
//!
//! `depensure ensure` (also the default with no subcommand) installs the
//! library when its module cannot be located.

use crate::config::EnsureSettings;
use crate::ensure::{
    CommandInstaller, Dependency, DependencyEnsurer, ModuleResolver, PackageInstaller,
    PythonResolver,
};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The ensure command implementation.
pub struct EnsureCommand {
    dependency: Dependency,
    resolver: Box<dyn ModuleResolver>,
    installer: Box<dyn PackageInstaller>,
}

impl EnsureCommand {
    /// Create an ensure command backed by the configured interpreter and installer.
    pub fn new(settings: &EnsureSettings) -> Self {
        Self::with_parts(
            settings.dependency.clone(),
            Box::new(PythonResolver::new(&settings.interpreter)),
            Box::new(CommandInstaller::new(settings.installer.clone())),
        )
    }

    /// Create an ensure command from explicit collaborators.
    pub fn with_parts(
        dependency: Dependency,
        resolver: Box<dyn ModuleResolver>,
        installer: Box<dyn PackageInstaller>,
    ) -> Self {
        Self {
            dependency,
            resolver,
            installer,
        }
    }
}

impl Command for EnsureCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ensurer = DependencyEnsurer::new(self.resolver.as_ref(), self.installer.as_ref());
        let outcome = ensurer.ensure_installed(&self.dependency, ui)?;
        tracing::debug!("Ensure outcome for {}: {:?}", self.dependency.library, outcome);
        Ok(CommandResult::success())
    }
}
