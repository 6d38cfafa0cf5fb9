//! Transfer strategies
//!
//! rsync preferred, scp fallback.

mod rsync;
mod scp;

pub use rsync::RsyncTransfer;
pub use scp::ScpTransfer;

use crate::domain::entities::SyncContext;
use crate::domain::ports::Transfer;

/// Detect and return the best available transfer strategy
pub fn detect_strategy(quiet: bool) -> Option<Box<dyn Transfer>> {
    if RsyncTransfer::check_available() {
        return Some(Box::new(RsyncTransfer::new(quiet)));
    }

    if ScpTransfer::check_available() {
        return Some(Box::new(ScpTransfer::new(quiet)));
    }

    None
}

/// `user@host:path`, with `~/` dropped since both tools start in the remote home
pub(crate) fn remote_spec(ctx: &SyncContext, remote_path: &str) -> String {
    let path = remote_path.strip_prefix("~/").unwrap_or(remote_path);
    format!("{}:{}", ctx.ssh_destination(), path)
}
