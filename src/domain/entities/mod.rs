//! Domain Entities
//!
//! Plain data carried through a pull. No I/O.

mod project_entry;
mod sync_request;

pub use project_entry::ProjectEntry;
pub use sync_request::{
    SyncContext, SyncRequest, DEFAULT_BRANCH, DEFAULT_REMOTE_CLI, DEFAULT_WWW_SUBDIR,
};
