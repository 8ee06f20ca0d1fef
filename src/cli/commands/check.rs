//! Check command implementation.
//!
//! `depensure check` reports whether the library's module resolves and
//! never installs anything. Exits 1 when the module is missing.

use crate::config::EnsureSettings;
use crate::ensure::{
    CommandInstaller, Dependency, DependencyEnsurer, ModuleResolver, ModuleStatus,
    PackageInstaller, PythonResolver,
};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    dependency: Dependency,
    resolver: Box<dyn ModuleResolver>,
    installer: Box<dyn PackageInstaller>,
}

impl CheckCommand {
    /// Create a check command backed by the configured interpreter.
    pub fn new(settings: &EnsureSettings) -> Self {
        Self::with_parts(
            settings.dependency.clone(),
            Box::new(PythonResolver::new(&settings.interpreter)),
            Box::new(CommandInstaller::new(settings.installer.clone())),
        )
    }

    /// Create a check command from explicit collaborators.
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

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ensurer = DependencyEnsurer::new(self.resolver.as_ref(), self.installer.as_ref());
        match ensurer.check(&self.dependency)? {
            ModuleStatus::Present => {
                ui.success(&format!("{} is installed.", self.dependency.library));
                Ok(CommandResult::success())
            }
            ModuleStatus::Absent => {
                ui.warning(&format!(
                    "{} is not installed (module '{}' not found).",
                    self.dependency.library, self.dependency.module
                ));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
