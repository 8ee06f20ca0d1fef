//! Child process execution.

use crate::error::{EnsureError, Result};
use std::fmt;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A program and its arguments, run directly without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Executable name or path.
    pub program: String,

    /// Arguments passed verbatim.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a command with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandOptions {
    /// Capture stdout and stderr (if false, both inherit from parent).
    ///
    /// Captured stdout is discarded; only stderr is kept for diagnostics.
    pub capture_output: bool,
}

impl CommandOptions {
    /// Capture both output streams.
    pub fn captured() -> Self {
        Self {
            capture_output: true,
        }
    }
}

/// Execute a command and wait for it to exit.
///
/// A non-zero exit is not an error here; callers inspect
/// [`CommandResult::success`]. Only failure to start the process is.
pub fn execute(spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);
    cmd.stdin(Stdio::inherit());

    if options.capture_output {
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
    }

    tracing::debug!("Running: {}", spec);

    let output = cmd.output().map_err(|e| EnsureError::SpawnFailed {
        command: spec.to_string(),
        message: e.to_string(),
    })?;

    let duration = start.elapsed();

    let stderr = if options.capture_output {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    tracing::debug!(
        "'{}' exited with {:?} after {:?}",
        spec.program,
        output.status.code(),
        duration
    );

    Ok(CommandResult {
        exit_code: output.status.code(),
        stderr,
        duration,
        success: output.status.success(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_program_and_args() {
        let spec = CommandSpec::new("python3").args(["-m", "pip", "install", "libcst"]);
        assert_eq!(spec.to_string(), "python3 -m pip install libcst");
    }

    #[test]
    fn display_quotes_args_with_spaces() {
        let spec = CommandSpec::new("python3").arg("-c").arg("import sys");
        assert_eq!(spec.to_string(), "python3 -c \"import sys\"");
    }

    #[test]
    fn builder_appends_in_order() {
        let spec = CommandSpec::new("pip").arg("install").args(vec!["a", "b"]);
        assert_eq!(spec.args, vec!["install", "a", "b"]);
    }

    #[test]
    fn spawn_failure_is_error() {
        let spec = CommandSpec::new("depensure-definitely-not-a-real-program");
        let err = execute(&spec, &CommandOptions::captured()).unwrap_err();
        match err {
            EnsureError::SpawnFailed { command, .. } => {
                assert!(command.contains("depensure-definitely-not-a-real-program"));
            }
            other => panic!("Expected SpawnFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn execute_successful_command() {
        let spec = CommandSpec::new("sh").args(["-c", "echo hello >&2"]);
        let result = execute(&spec, &CommandOptions::captured()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stderr.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_failing_command_is_not_an_error() {
        let spec = CommandSpec::new("sh").args(["-c", "exit 3"]);
        let result = execute(&spec, &CommandOptions::captured()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn inherited_output_is_not_captured() {
        let spec = CommandSpec::new("sh").args(["-c", "echo visible >&2"]);
        let result = execute(&spec, &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert!(result.stderr.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn arguments_are_not_shell_interpreted() {
        let spec = CommandSpec::new("sh").args(["-c", "echo \"$1\" >&2", "sh", "$HOME; exit 9"]);
        let result = execute(&spec, &CommandOptions::captured()).unwrap();

        assert!(result.success);
        assert!(result.stderr.contains("$HOME; exit 9"));
    }
}
