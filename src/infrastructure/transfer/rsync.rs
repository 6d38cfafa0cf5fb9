//! Rsync Transfer Strategy
//!
//! Uses rsync for efficient incremental pulls.
//! This is the preferred method and the only one that can skip large files.

use std::path::Path;
use std::process::Command;

use super::remote_spec;
use crate::domain::entities::SyncContext;
use crate::domain::ports::Transfer;
use crate::domain::value_objects::SizeLimit;
use crate::error::SyncResult;
use crate::infrastructure::process;

/// Transfer strategy using rsync over ssh
#[derive(Debug, Clone, Copy, Default)]
pub struct RsyncTransfer {
    quiet: bool,
}

impl RsyncTransfer {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Check if rsync is installed and available
    pub fn check_available() -> bool {
        process::is_available("rsync", Some("--version"))
    }

    fn fetch_command(ctx: &SyncContext, remote_path: &str, local_path: &Path) -> Command {
        let mut cmd = Command::new("rsync");
        cmd.arg("-aPz")
            .arg("-e")
            .arg("ssh")
            .arg(remote_spec(ctx, remote_path))
            .arg(local_path);
        cmd
    }

    fn sync_command(
        ctx: &SyncContext,
        remote_dir: &str,
        local_dir: &Path,
        limit: Option<SizeLimit>,
    ) -> Command {
        let mut cmd = Command::new("rsync");
        cmd.arg("-aHPzq");
        if let Some(limit) = limit {
            cmd.arg(limit.rsync_arg());
        }
        // trailing slashes: copy contents, not the directory itself
        cmd.arg("-e")
            .arg("ssh")
            .arg(format!(
                "{}/",
                remote_spec(ctx, remote_dir.trim_end_matches('/'))
            ))
            .arg(format!("{}/", local_dir.display()));
        cmd
    }
}

impl Transfer for RsyncTransfer {
    fn name(&self) -> &'static str {
        "rsync"
    }

    fn fetch_file(
        &self,
        ctx: &SyncContext,
        remote_path: &str,
        local_path: &Path,
    ) -> SyncResult<()> {
        process::run_checked(
            &mut Self::fetch_command(ctx, remote_path, local_path),
            self.quiet,
        )
    }

    fn sync_dir(
        &self,
        ctx: &SyncContext,
        remote_dir: &str,
        local_dir: &Path,
        limit: Option<SizeLimit>,
    ) -> SyncResult<()> {
        process::run_checked(
            &mut Self::sync_command(ctx, remote_dir, local_dir, limit),
            self.quiet,
        )
    }
}
