//! Home directory resolution with test isolation support.
//!
//! `sitepull_home_dir()` checks `SITEPULL_TEST_HOME` first and falls back to
//! `dirs::home_dir()`. Every default that lives under `~` (settings file,
//! dump directory) goes through it so integration tests never touch the
//! real home directory.

use std::path::PathBuf;

use crate::error::{SyncError, SyncResult};

/// Environment variable for test isolation of home directory.
pub const SITEPULL_TEST_HOME_VAR: &str = "SITEPULL_TEST_HOME";

/// Get the home directory for sitepull paths.
pub fn sitepull_home_dir() -> Option<PathBuf> {
    std::env::var(SITEPULL_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Like `sitepull_home_dir`, but an error when there is no home directory
pub fn require_home_dir() -> SyncResult<PathBuf> {
    sitepull_home_dir().ok_or(SyncError::HomeDirUnavailable)
}
