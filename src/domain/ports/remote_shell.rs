//! Remote shell port - run a command line on the sync host
//!
//! Some remote commands are probes whose failure is an answer (`grep`,
//! `stat`); callers use `run` for those and `run_checked` for everything
//! that must succeed.

use crate::domain::entities::SyncContext;
use crate::error::{SyncError, SyncResult};

/// Captured result of a remote command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Executes shell command lines on the remote host described by a context
pub trait RemoteShell {
    /// Run a command and report its outcome without judging it
    fn run(&self, ctx: &SyncContext, command: &str) -> SyncResult<CommandOutput>;

    /// Run a command that must succeed; returns trimmed stdout
    fn run_checked(&self, ctx: &SyncContext, command: &str) -> SyncResult<String> {
        let output = self.run(ctx, command)?;
        if !output.success {
            return Err(SyncError::CommandFailed {
                command: command.to_string(),
                code: output.code,
                stderr: output.stderr,
            });
        }
        Ok(output.stdout.trim().to_string())
    }
}

/// Quote a value for safe interpolation into a POSIX shell command
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Like `shell_quote`, but words made only of characters the shell treats
/// literally are left bare
pub fn shell_word(s: &str) -> String {
    let literal = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c));
    if literal {
        s.to_string()
    } else {
        shell_quote(s)
    }
}
