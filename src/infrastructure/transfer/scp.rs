//! SCP Transfer Strategy
//!
//! Fallback when rsync is not installed. scp always copies whole trees and
//! has no size filter, so only full directory syncs are possible.

use std::path::Path;
use std::process::Command;

use super::remote_spec;
use crate::domain::entities::SyncContext;
use crate::domain::ports::Transfer;
use crate::domain::value_objects::SizeLimit;
use crate::error::{SyncError, SyncResult};
use crate::infrastructure::process;

/// Transfer strategy using scp
#[derive(Debug, Clone, Copy, Default)]
pub struct ScpTransfer {
    quiet: bool,
}

impl ScpTransfer {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Check if scp is installed and available
    pub fn check_available() -> bool {
        // scp without args returns non-zero, but if we can spawn it, it's available
        process::is_available("scp", None)
    }

    fn base_command(&self) -> Command {
        let mut cmd = Command::new("scp");
        cmd.arg("-p");
        if self.quiet {
            cmd.arg("-q");
        }
        cmd
    }
}

impl Transfer for ScpTransfer {
    fn name(&self) -> &'static str {
        "scp"
    }

    fn fetch_file(
        &self,
        ctx: &SyncContext,
        remote_path: &str,
        local_path: &Path,
    ) -> SyncResult<()> {
        let mut cmd = self.base_command();
        cmd.arg(remote_spec(ctx, remote_path)).arg(local_path);
        process::run_checked(&mut cmd, self.quiet)
    }

    fn sync_dir(
        &self,
        ctx: &SyncContext,
        remote_dir: &str,
        local_dir: &Path,
        limit: Option<SizeLimit>,
    ) -> SyncResult<()> {
        if limit.is_some() {
            return Err(SyncError::Unsupported(
                "scp cannot skip large files; install rsync or run a full sync".to_string(),
            ));
        }

        let mut cmd = self.base_command();
        cmd.arg("-r")
            .arg(format!(
                "{}/.",
                remote_spec(ctx, remote_dir.trim_end_matches('/'))
            ))
            .arg(local_dir);
        process::run_checked(&mut cmd, self.quiet)
    }
}
