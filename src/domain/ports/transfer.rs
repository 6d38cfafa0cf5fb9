//! Transfer port - copy data from the remote host to local disk

use std::path::Path;

use crate::domain::entities::SyncContext;
use crate::domain::value_objects::SizeLimit;
use crate::error::SyncResult;

/// Pulls remote files and directories to the local machine
pub trait Transfer {
    /// Get the name of this transfer method (for logging)
    fn name(&self) -> &'static str;

    /// Copy a single remote file to `local_path`
    fn fetch_file(&self, ctx: &SyncContext, remote_path: &str, local_path: &Path)
        -> SyncResult<()>;

    /// Mirror the contents of `remote_dir` into `local_dir`
    ///
    /// With a limit, remote files larger than it are skipped.
    fn sync_dir(
        &self,
        ctx: &SyncContext,
        remote_dir: &str,
        local_dir: &Path,
        limit: Option<SizeLimit>,
    ) -> SyncResult<()>;
}
