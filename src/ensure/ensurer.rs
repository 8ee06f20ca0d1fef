//! The dependency ensurer.
//!
//! Check-then-act: ask the resolver once, and only when the module is
//! absent run the installer once. There is no retry and no verification
//! after installing.

use super::installer::PackageInstaller;
use super::names::{LibraryName, ModuleName};
use super::resolver::ModuleResolver;
use super::status::{EnsureOutcome, ModuleStatus};
use crate::error::Result;
use crate::ui::UserInterface;

/// A library together with the module it provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Passed to the installer.
    pub library: LibraryName,
    /// Looked up by the resolver.
    pub module: ModuleName,
}

impl Dependency {
    /// Dependency whose module name is derived from the library name.
    pub fn new(library: LibraryName) -> Self {
        let module = library.default_module();
        Self { library, module }
    }

    /// Dependency with an explicit module name.
    pub fn with_module(library: LibraryName, module: ModuleName) -> Self {
        Self { library, module }
    }
}

/// Ensures dependencies are installed using a resolver and an installer.
pub struct DependencyEnsurer<'a> {
    resolver: &'a dyn ModuleResolver,
    installer: &'a dyn PackageInstaller,
}

impl<'a> DependencyEnsurer<'a> {
    /// Create an ensurer from its two collaborators.
    pub fn new(resolver: &'a dyn ModuleResolver, installer: &'a dyn PackageInstaller) -> Self {
        Self {
            resolver,
            installer,
        }
    }

    /// Report whether the dependency resolves, without installing anything.
    pub fn check(&self, dependency: &Dependency) -> Result<ModuleStatus> {
        self.resolver.resolve(&dependency.module)
    }

    /// Install the dependency if its module cannot be located.
    ///
    /// Returns an error if the resolver cannot answer or the installer
    /// fails; the caller is expected to abort.
    pub fn ensure_installed(
        &self,
        dependency: &Dependency,
        ui: &mut dyn UserInterface,
    ) -> Result<EnsureOutcome> {
        match self.check(dependency)? {
            ModuleStatus::Present => {
                ui.success(&format!("{} is already installed.", dependency.library));
                Ok(EnsureOutcome::AlreadyInstalled)
            }
            ModuleStatus::Absent => {
                ui.message(&format!(
                    "{} not found. Installing...",
                    dependency.library
                ));
                self.installer.install(&dependency.library)?;
                ui.success(&format!("Installed {}.", dependency.library));
                Ok(EnsureOutcome::Installed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnsureError;
    use crate::ui::MockUI;
    use std::cell::{Cell, RefCell};

    struct FakeResolver {
        status: ModuleStatus,
        calls: Cell<usize>,
    }

    impl FakeResolver {
        fn new(status: ModuleStatus) -> Self {
            Self {
                status,
                calls: Cell::new(0),
            }
        }
    }

    impl ModuleResolver for FakeResolver {
        fn resolve(&self, _module: &ModuleName) -> Result<ModuleStatus> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.status)
        }
    }

    struct FailingResolver;

    impl ModuleResolver for FailingResolver {
        fn resolve(&self, module: &ModuleName) -> Result<ModuleStatus> {
            Err(EnsureError::ProbeFailed {
                module: module.to_string(),
                message: "interpreter not found".into(),
            })
        }
    }

    /// Records every install request and exits with a fixed code.
    struct RecordingInstaller {
        exit_code: i32,
        installed: RefCell<Vec<String>>,
    }

    impl RecordingInstaller {
        fn exiting(exit_code: i32) -> Self {
            Self {
                exit_code,
                installed: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.installed.borrow().clone()
        }
    }

    impl PackageInstaller for RecordingInstaller {
        fn install(&self, library: &LibraryName) -> Result<()> {
            self.installed
                .borrow_mut()
                .push(format!("installer install {}", library));
            if self.exit_code == 0 {
                Ok(())
            } else {
                Err(EnsureError::InstallFailed {
                    library: library.to_string(),
                    command: format!("installer install {}", library),
                    code: Some(self.exit_code),
                })
            }
        }
    }

    fn libcst() -> Dependency {
        Dependency::new(LibraryName::new("libcst").unwrap())
    }

    #[test]
    fn present_library_runs_no_installer() {
        let resolver = FakeResolver::new(ModuleStatus::Present);
        let installer = RecordingInstaller::exiting(0);
        let mut ui = MockUI::new();

        let outcome = DependencyEnsurer::new(&resolver, &installer)
            .ensure_installed(&libcst(), &mut ui)
            .unwrap();

        assert_eq!(outcome, EnsureOutcome::AlreadyInstalled);
        assert!(installer.calls().is_empty());
        assert!(ui.has_success("libcst is already installed."));
    }

    #[test]
    fn absent_library_installs_exactly_once() {
        let resolver = FakeResolver::new(ModuleStatus::Absent);
        let installer = RecordingInstaller::exiting(0);
        let mut ui = MockUI::new();

        let outcome = DependencyEnsurer::new(&resolver, &installer)
            .ensure_installed(&libcst(), &mut ui)
            .unwrap();

        assert_eq!(outcome, EnsureOutcome::Installed);
        assert_eq!(installer.calls(), vec!["installer install libcst"]);
        assert!(ui.has_message("libcst not found. Installing..."));
    }

    #[test]
    fn installer_failure_propagates_without_retry() {
        let resolver = FakeResolver::new(ModuleStatus::Absent);
        let installer = RecordingInstaller::exiting(1);
        let mut ui = MockUI::new();

        let err = DependencyEnsurer::new(&resolver, &installer)
            .ensure_installed(&libcst(), &mut ui)
            .unwrap_err();

        assert!(matches!(
            err,
            EnsureError::InstallFailed { code: Some(1), .. }
        ));
        assert_eq!(installer.calls().len(), 1);
        assert_eq!(resolver.calls.get(), 1);
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn present_library_is_idempotent() {
        let resolver = FakeResolver::new(ModuleStatus::Present);
        let installer = RecordingInstaller::exiting(0);
        let mut ui = MockUI::new();
        let ensurer = DependencyEnsurer::new(&resolver, &installer);

        for _ in 0..2 {
            let outcome = ensurer.ensure_installed(&libcst(), &mut ui).unwrap();
            assert_eq!(outcome, EnsureOutcome::AlreadyInstalled);
        }

        assert!(installer.calls().is_empty());
        assert_eq!(resolver.calls.get(), 2);
    }

    #[test]
    fn resolver_failure_skips_installer() {
        let installer = RecordingInstaller::exiting(0);
        let mut ui = MockUI::new();

        let err = DependencyEnsurer::new(&FailingResolver, &installer)
            .ensure_installed(&libcst(), &mut ui)
            .unwrap_err();

        assert!(matches!(err, EnsureError::ProbeFailed { .. }));
        assert!(installer.calls().is_empty());
    }

    #[test]
    fn check_never_installs() {
        let resolver = FakeResolver::new(ModuleStatus::Absent);
        let installer = RecordingInstaller::exiting(0);

        let status = DependencyEnsurer::new(&resolver, &installer)
            .check(&libcst())
            .unwrap();

        assert_eq!(status, ModuleStatus::Absent);
        assert!(installer.calls().is_empty());
    }

    #[test]
    fn installer_receives_library_not_module() {
        let resolver = FakeResolver::new(ModuleStatus::Absent);
        let installer = RecordingInstaller::exiting(0);
        let mut ui = MockUI::new();
        let dependency = Dependency::with_module(
            LibraryName::new("PyYAML").unwrap(),
            ModuleName::new("yaml").unwrap(),
        );

        DependencyEnsurer::new(&resolver, &installer)
            .ensure_installed(&dependency, &mut ui)
            .unwrap();

        assert_eq!(installer.calls(), vec!["installer install PyYAML"]);
    }
}
