//! Advisory size reporting via `du -sh`
//!
//! Sizes are shown so the user knows how long a fetch may take. A failed
//! measurement never stops a pull.

use crate::domain::entities::SyncContext;
use crate::domain::ports::RemoteShell;

/// Shown when the remote size cannot be determined
pub const UNKNOWN_SIZE: &str = "unknown";

/// Human-readable size of a remote path, or `UNKNOWN_SIZE`
pub fn remote_size(shell: &dyn RemoteShell, ctx: &SyncContext, remote_path: &str) -> String {
    let command = format!("du -sh {}", remote_path);
    match shell.run(ctx, &command) {
        Ok(output) if output.success => {
            parse_du_size(&output.stdout).unwrap_or_else(|| UNKNOWN_SIZE.to_string())
        }
        Ok(output) => {
            tracing::warn!(path = remote_path, stderr = %output.stderr.trim(), "du failed");
            UNKNOWN_SIZE.to_string()
        }
        Err(err) => {
            tracing::warn!(path = remote_path, error = %err, "du could not run");
            UNKNOWN_SIZE.to_string()
        }
    }
}

/// First column of `du -sh` output (`"12M\t/home/jenkins/acme.sql.gz"` -> `"12M"`)
pub fn parse_du_size(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| !line.trim().is_empty())
        .and_then(|line| line.split_whitespace().next())
        .map(str::to_string)
}
