//! Application Layer
//!
//! Use cases that orchestrate a pull.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates ports without knowing which adapters sit behind them
//!
//! ## Use Cases
//!
//! - `ConfigStore` - Resolve host and user for a project
//! - `DatabaseSync` - Guarded export, settle, fetch, remote cleanup
//! - `FilesSync` - Alias check, multisite resolution, filtered mirror, permissions
//! - `PullUseCase` - Resolve settings then dispatch by sync type

pub mod config_store;
pub mod database;
pub mod files;
pub mod pull;
pub mod settle;
pub mod size_report;

#[cfg(test)]
pub(crate) mod test_support;

pub use config_store::{ConfigStore, SettingsSource};
pub use database::{dump_file_name, DatabaseOptions, DatabaseOutcome, DatabaseSync};
pub use files::{FilesOptions, FilesOutcome, FilesSync, DEFAULT_BASE_DIR};
pub use pull::{PullOutcome, PullUseCase};
pub use settle::{SettleStrategy, DEFAULT_SETTLE};
