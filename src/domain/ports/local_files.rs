//! Local files port - directory creation and permission fixups

use std::path::Path;

use crate::domain::value_objects::PermissionPolicy;
use crate::error::SyncResult;

/// Counts of entries touched by a permission pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeSummary {
    pub dirs: usize,
    pub files: usize,
}

/// Local filesystem operations needed by the pipelines
pub trait LocalFiles {
    /// Create directory and parents
    fn ensure_dir(&self, path: &Path) -> SyncResult<()>;

    /// Apply ownership and modes recursively under `root` (root included)
    fn normalize_permissions(
        &self,
        root: &Path,
        policy: &PermissionPolicy,
    ) -> SyncResult<NormalizeSummary>;
}
