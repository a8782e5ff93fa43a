//! Shell command execution.
//!
//! The raw command string is handed to the system shell as-is. Nothing is
//! quoted, escaped, or validated: this is the command-injection sink shared
//! by `/malicious` and the startup fetch.

use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::debug;

use crate::{Result, VulnAppError};

/// System shell used to interpret command strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    /// Shell executable
    program: String,
    /// Flag telling the shell to read the command from the next argument
    flag: String,
}

impl Shell {
    pub fn new(program: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flag: flag.into(),
        }
    }

    /// `sh -c` on Unix, `cmd /C` on Windows
    pub fn platform_default() -> Self {
        let (program, flag) = if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };
        Self::new(program, flag)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// Run `command` through the shell and wait for it to exit.
    ///
    /// Output is discarded. The exit status is returned but carries no
    /// meaning for callers; only a failure to spawn is an error.
    pub async fn run(&self, command: &str) -> Result<ExitStatus> {
        let status = Command::new(&self.program)
            .arg(&self.flag)
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|source| VulnAppError::Shell {
                command: command.to_string(),
                source,
            })?;

        debug!(exit_code = ?status.code(), "shell command finished");
        Ok(status)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::platform_default()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_reports_exit_status() {
        let shell = Shell::platform_default();

        assert!(shell.run("true").await.unwrap().success());
        assert_eq!(shell.run("exit 3").await.unwrap().code(), Some(3));
    }

    #[tokio::test]
    async fn test_run_interprets_shell_syntax() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("marker");

        // Chained commands reach the shell unmodified
        let command = format!("echo one && touch {}", marker.display());
        shell_run(&command).await;

        assert!(marker.exists());
    }

    #[tokio::test]
    async fn test_missing_shell_is_an_error() {
        let shell = Shell::new("/definitely/not/a/shell", "-c");

        let err = shell.run("echo hi").await.unwrap_err();
        assert!(matches!(err, VulnAppError::Shell { ref command, .. } if command == "echo hi"));
    }

    #[test]
    fn test_platform_default_is_sh() {
        let shell = Shell::default();
        assert_eq!(shell.program(), "sh");
        assert_eq!(shell.flag(), "-c");
    }

    async fn shell_run(command: &str) {
        Shell::platform_default().run(command).await.unwrap();
    }
}
