//! SSH Remote Shell
//!
//! Implements the RemoteShell port by handing the command line to `ssh`.
//! The remote login shell interprets it, so `~`, pipes and `$(...)` work.

use std::process::{Command, Stdio};

use crate::domain::entities::SyncContext;
use crate::domain::ports::{CommandOutput, RemoteShell};
use crate::error::{SyncError, SyncResult};

/// Remote shell over the system `ssh` client
#[derive(Debug, Clone, Copy, Default)]
pub struct SshShell;

impl SshShell {
    pub fn new() -> Self {
        Self
    }

    fn command(&self, ctx: &SyncContext, remote_command: &str) -> Command {
        let mut cmd = Command::new("ssh");
        cmd.arg(ctx.ssh_destination()).arg(remote_command);
        cmd
    }
}

impl RemoteShell for SshShell {
    fn run(&self, ctx: &SyncContext, command: &str) -> SyncResult<CommandOutput> {
        tracing::debug!(host = %ctx.host, user = %ctx.user, command, "running remote command");

        let output = self
            .command(ctx, command)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| SyncError::CommandSpawn {
                program: "ssh".to_string(),
                source,
            })?;

        let result = CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };
        tracing::trace!(
            success = result.success,
            code = ?result.code,
            stdout = %result.stdout.trim(),
            "remote command finished"
        );
        Ok(result)
    }
}
