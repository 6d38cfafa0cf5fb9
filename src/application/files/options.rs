//! Files Sync Options

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{MultisiteKey, PermissionPolicy};

/// Default root holding local site checkouts
pub const DEFAULT_BASE_DIR: &str = "/vagrant";

/// Options for the files sync use case
#[derive(Debug, Clone)]
pub struct FilesOptions {
    /// Root holding `<url>/<www_subdir>/...` checkouts
    pub base_dir: PathBuf,
    /// Ownership and modes applied to the synced tree
    pub permissions: PermissionPolicy,
}

impl FilesOptions {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            permissions: PermissionPolicy::default(),
        }
    }

    pub fn with_permissions(mut self, permissions: PermissionPolicy) -> Self {
        self.permissions = permissions;
        self
    }

    /// `<base>/<url>/<www_subdir>/sites/<multisite>/files`
    pub fn local_files_dir(&self, url: &str, www_subdir: &str, multisite: &MultisiteKey) -> PathBuf {
        local_files_dir(&self.base_dir, url, www_subdir, multisite)
    }
}

impl Default for FilesOptions {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR)
    }
}

fn local_files_dir(base: &Path, url: &str, www_subdir: &str, multisite: &MultisiteKey) -> PathBuf {
    base.join(url)
        .join(www_subdir)
        .join("sites")
        .join(multisite.as_str())
        .join("files")
}
