//! Database Sync Module
//!
//! ## Structure
//!
//! - `options` - Configuration (`DatabaseOptions`)
//! - `use_case` - The export-and-fetch pipeline (`DatabaseSync`)

mod options;
mod use_case;

pub use options::DatabaseOptions;
pub use use_case::{dump_file_name, export_scan_pattern, DatabaseOutcome, DatabaseSync};
