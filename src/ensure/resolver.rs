//! Module resolution.
//!
//! The [`ModuleResolver`] trait answers "can a module with this name be
//! located?" without importing it. [`PythonResolver`] asks a Python
//! interpreter through `importlib.util.find_spec`.

use super::names::ModuleName;
use super::status::ModuleStatus;
use crate::error::{describe_exit, EnsureError, Result};
use crate::shell::{execute, CommandOptions, CommandSpec};

/// Exit code the probe uses to report a missing module.
pub const PROBE_ABSENT_EXIT: i32 = 3;

/// Looks up the module name passed as the first argument.
///
/// `-c` puts the working directory first on `sys.path`; it is dropped so
/// a same-named directory next to the caller does not count as installed.
/// `find_spec` raises `ModuleNotFoundError` for a dotted name whose parent
/// package is missing; that counts as absent too.
const PROBE_SOURCE: &str = "\
import importlib.util, sys
if sys.path and sys.path[0] == '':
    del sys.path[0]
try:
    spec = importlib.util.find_spec(sys.argv[1])
except ModuleNotFoundError:
    spec = None
sys.exit(0 if spec is not None else 3)
";

/// Determines whether a module can be located.
pub trait ModuleResolver {
    /// Check for the module right now.
    fn resolve(&self, module: &ModuleName) -> Result<ModuleStatus>;
}

/// Resolver backed by a Python interpreter child process.
#[derive(Debug, Clone)]
pub struct PythonResolver {
    interpreter: String,
}

impl PythonResolver {
    /// Create a resolver that asks the given interpreter.
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// The probe command for a module.
    pub fn probe_command(&self, module: &ModuleName) -> CommandSpec {
        CommandSpec::new(&self.interpreter)
            .arg("-c")
            .arg(PROBE_SOURCE)
            .arg(module.as_str())
    }
}

impl ModuleResolver for PythonResolver {
    fn resolve(&self, module: &ModuleName) -> Result<ModuleStatus> {
        let spec = self.probe_command(module);
        let result =
            execute(&spec, &CommandOptions::captured()).map_err(|e| EnsureError::ProbeFailed {
                module: module.to_string(),
                message: e.to_string(),
            })?;

        match result.exit_code {
            Some(0) => {
                tracing::debug!("Module '{}' resolved via {}", module, self.interpreter);
                Ok(ModuleStatus::Present)
            }
            Some(PROBE_ABSENT_EXIT) => {
                tracing::debug!("Module '{}' not found via {}", module, self.interpreter);
                Ok(ModuleStatus::Absent)
            }
            code => {
                let stderr = result.stderr.trim();
                tracing::debug!("Probe stderr: {}", stderr);
                Err(EnsureError::ProbeFailed {
                    module: module.to_string(),
                    message: if stderr.is_empty() {
                        format!("{} exited with {}", self.interpreter, describe_exit(code))
                    } else {
                        format!(
                            "{} exited with {}: {}",
                            self.interpreter,
                            describe_exit(code),
                            stderr
                        )
                    },
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str) -> ModuleName {
        ModuleName::new(name).unwrap()
    }

    #[test]
    fn probe_passes_module_as_argument() {
        let resolver = PythonResolver::new("python3");
        let spec = resolver.probe_command(&module("libcst"));

        assert_eq!(spec.program, "python3");
        assert_eq!(spec.args[0], "-c");
        assert!(spec.args[1].contains("importlib.util.find_spec"));
        assert_eq!(spec.args.last().map(String::as_str), Some("libcst"));
    }

    #[test]
    fn probe_source_uses_absent_exit_code() {
        assert!(PROBE_SOURCE.contains(&format!("else {}", PROBE_ABSENT_EXIT)));
    }

    #[test]
    fn missing_interpreter_is_probe_failure() {
        let resolver = PythonResolver::new("depensure-no-such-python");
        let err = resolver.resolve(&module("libcst")).unwrap_err();
        assert!(matches!(err, EnsureError::ProbeFailed { .. }));
    }

    #[cfg(unix)]
    mod with_fake_interpreter {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        fn fake_python(exit_code: i32) -> (TempDir, String) {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("python");
            fs::write(
                &path,
                format!("#!/bin/sh\necho probe-stderr >&2\nexit {}\n", exit_code),
            )
            .unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            let path = path.to_string_lossy().to_string();
            (temp, path)
        }

        #[test]
        fn exit_zero_is_present() {
            let (_temp, python) = fake_python(0);
            let status = PythonResolver::new(python)
                .resolve(&module("libcst"))
                .unwrap();
            assert_eq!(status, ModuleStatus::Present);
        }

        #[test]
        fn absent_exit_is_absent() {
            let (_temp, python) = fake_python(PROBE_ABSENT_EXIT);
            let status = PythonResolver::new(python)
                .resolve(&module("libcst"))
                .unwrap();
            assert_eq!(status, ModuleStatus::Absent);
        }

        #[test]
        fn other_exit_is_probe_failure_with_stderr() {
            let (_temp, python) = fake_python(1);
            let err = PythonResolver::new(python)
                .resolve(&module("libcst"))
                .unwrap_err();
            match err {
                EnsureError::ProbeFailed { module, message } => {
                    assert_eq!(module, "libcst");
                    assert!(message.contains("exited with exit code 1"));
                    assert!(message.contains("probe-stderr"));
                }
                other => panic!("Expected ProbeFailed, got {:?}", other),
            }
        }
    }

    #[cfg(unix)]
    mod with_python3 {
        use super::*;
        use std::process::Command;

        fn python3() -> Option<PythonResolver> {
            let available = Command::new("python3")
                .arg("--version")
                .output()
                .is_ok_and(|o| o.status.success());
            if available {
                Some(PythonResolver::new("python3"))
            } else {
                eprintln!("python3 not on PATH, skipping");
                None
            }
        }

        #[test]
        fn stdlib_module_is_present() {
            let Some(resolver) = python3() else { return };
            let status = resolver.resolve(&module("json")).unwrap();
            assert_eq!(status, ModuleStatus::Present);
        }

        #[test]
        fn dotted_stdlib_module_is_present() {
            let Some(resolver) = python3() else { return };
            let status = resolver.resolve(&module("os.path")).unwrap();
            assert_eq!(status, ModuleStatus::Present);
        }

        #[test]
        fn unknown_module_is_absent() {
            let Some(resolver) = python3() else { return };
            let status = resolver
                .resolve(&module("depensure_not_installed_xyz"))
                .unwrap();
            assert_eq!(status, ModuleStatus::Absent);
        }

        #[test]
        fn missing_parent_package_is_absent() {
            let Some(resolver) = python3() else { return };
            let status = resolver
                .resolve(&module("depensure_not_installed_xyz.child"))
                .unwrap();
            assert_eq!(status, ModuleStatus::Absent);
        }
    }
}
