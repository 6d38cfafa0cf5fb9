//! Running local programs
//!
//! Transfers and chown run as child processes. Their progress output goes
//! straight to the terminal unless the caller asks for quiet mode.

use std::process::{Command, Stdio};

use crate::error::{SyncError, SyncResult};

/// `program arg1 arg2 ...` for logs and error messages
pub fn render(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().to_string()];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().to_string()));
    parts.join(" ")
}

/// Run a command to completion, failing on a non-zero exit
pub fn run_checked(cmd: &mut Command, quiet: bool) -> SyncResult<()> {
    let rendered = render(cmd);
    tracing::debug!(command = %rendered, "running local command");

    cmd.stdin(Stdio::inherit());
    if quiet {
        cmd.stdout(Stdio::null()).stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    }

    let program = cmd.get_program().to_string_lossy().to_string();
    let output = cmd
        .output()
        .map_err(|source| SyncError::CommandSpawn { program, source })?;

    if !output.status.success() {
        return Err(SyncError::CommandFailed {
            command: rendered,
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }
    Ok(())
}

/// Check whether a program can be spawned at all
pub fn is_available(program: &str, probe_arg: Option<&str>) -> bool {
    let mut cmd = Command::new(program);
    if let Some(arg) = probe_arg {
        cmd.arg(arg);
    }
    cmd.stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}
