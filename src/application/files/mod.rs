//! Files Sync Module
//!
//! ## Structure
//!
//! - `options` - Configuration (`FilesOptions`)
//! - `use_case` - The resolve-transfer-normalize pipeline (`FilesSync`)

mod options;
mod use_case;

pub use options::{FilesOptions, DEFAULT_BASE_DIR};
pub use use_case::{FilesOutcome, FilesSync};
