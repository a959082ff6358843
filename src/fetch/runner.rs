use crate::error::{ReleaseError, Result};
use std::process::Command;

/// Runs external programs on behalf of the fetcher
pub trait CommandRunner {
    /// Run `program` with `args` to completion.
    ///
    /// # Returns
    /// * `Ok(String)` - Trimmed standard output when the exit status is zero
    /// * `Err(ExternalCommandFailure)` - If the program cannot be started or exits non-zero
    fn run(&self, program: &str, args: &[String]) -> Result<String>;
}

/// Runs commands as child processes of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        let command_line = render_command(program, args);
        tracing::debug!(command = %command_line, "running command");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| ReleaseError::command(&command_line, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = match stderr.trim() {
                "" => format!("exit code {}", output.status.code().unwrap_or(-1)),
                trimmed => trimmed.to_string(),
            };
            return Err(ReleaseError::command(command_line, stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Command line as shown in logs and errors
pub fn render_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_command() {
        assert_eq!(
            render_command("git", &args(&["clone", "--depth", "1"])),
            "git clone --depth 1"
        );
        assert_eq!(render_command("true", &[]), "true");
    }

    #[test]
    fn test_missing_program_is_command_failure() {
        let err = SystemRunner
            .run("release-kit-no-such-program", &[])
            .unwrap_err();
        assert!(matches!(
            err,
            ReleaseError::ExternalCommandFailure { ref command, .. }
                if command == "release-kit-no-such-program"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_command_returns_stdout() {
        let out = SystemRunner.run("sh", &args(&["-c", "echo hello"])).unwrap();
        assert_eq!(out, "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_reports_stderr() {
        let err = SystemRunner
            .run("sh", &args(&["-c", "echo oops >&2; exit 3"]))
            .unwrap_err();
        match err {
            ReleaseError::ExternalCommandFailure { stderr, .. } => assert_eq!(stderr, "oops"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_without_stderr_reports_exit_code() {
        let err = SystemRunner.run("sh", &args(&["-c", "exit 4"])).unwrap_err();
        assert!(err.to_string().contains("exit code 4"));
    }
}
