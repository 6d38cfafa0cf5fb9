//! Local File System Implementation
//!
//! Implements the LocalFiles port: directory creation, `chown -R` through
//! sudo, and a recursive mode pass over the synced tree.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::ports::{LocalFiles, NormalizeSummary};
use crate::domain::value_objects::PermissionPolicy;
use crate::error::{SyncError, SyncResult};
use crate::infrastructure::process;

/// How ownership changes are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChownMode {
    /// `sudo chown -R` (synced trees belong to another user)
    Sudo,
    /// `chown -R` as the current user
    Direct,
    /// Leave ownership alone
    Skip,
}

/// Local file system implementation
#[derive(Debug, Clone, Copy)]
pub struct LocalFs {
    chown: ChownMode,
    quiet: bool,
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new(ChownMode::Sudo)
    }
}

impl LocalFs {
    pub fn new(chown: ChownMode) -> Self {
        Self {
            chown,
            quiet: false,
        }
    }

    /// Modes only; used where there is no sudo (tests, containers)
    pub fn without_chown() -> Self {
        Self::new(ChownMode::Skip)
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn chown_command(&self, root: &Path, policy: &PermissionPolicy) -> Option<Command> {
        let mut cmd = match self.chown {
            ChownMode::Skip => return None,
            ChownMode::Sudo => {
                let mut cmd = Command::new("sudo");
                cmd.arg("chown");
                cmd
            }
            ChownMode::Direct => Command::new("chown"),
        };
        cmd.arg("-R").arg(policy.chown_spec()).arg(root);
        Some(cmd)
    }
}

impl LocalFiles for LocalFs {
    fn ensure_dir(&self, path: &Path) -> SyncResult<()> {
        std::fs::create_dir_all(path)?;
        Ok(())
    }

    fn normalize_permissions(
        &self,
        root: &Path,
        policy: &PermissionPolicy,
    ) -> SyncResult<NormalizeSummary> {
        if let Some(mut cmd) = self.chown_command(root, policy) {
            process::run_checked(&mut cmd, self.quiet)?;
        }

        let mut summary = NormalizeSummary::default();
        let walker = ignore::WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .build();

        for entry in walker {
            let entry = entry.map_err(walk_error)?;
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                set_mode(entry.path(), policy.dir_mode)?;
                summary.dirs += 1;
            } else if file_type.is_file() {
                set_mode(entry.path(), policy.file_mode)?;
                summary.files += 1;
            }
        }

        tracing::debug!(
            root = %root.display(),
            dirs = summary.dirs,
            files = summary.files,
            "permissions normalized"
        );
        Ok(summary)
    }
}

fn walk_error(err: ignore::Error) -> SyncError {
    let message = err.to_string();
    SyncError::Io(
        err.into_io_error()
            .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, message)),
    )
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> SyncResult<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> SyncResult<()> {
    Ok(())
}

/// Expand a leading `~` against `home`
pub fn expand_home(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
