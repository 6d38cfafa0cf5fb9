//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `remote/` - `ssh` remote shell
//! - `transfer/` - rsync and scp transfer strategies
//! - `fs/` - local directories, permissions, home directory
//! - `config/` - ini settings store
//! - `prompt/` - interactive settings collection
//! - `events/` - NDJSON event sink

pub mod clock;
pub mod config;
pub mod events;
pub mod fs;
pub mod process;
pub mod prompt;
pub mod remote;
pub mod transfer;

// Re-export for convenience
pub use clock::ThreadSleeper;
pub use config::IniCredentials;
pub use events::JsonEventSink;
pub use fs::{ChownMode, LocalFs};
pub use prompt::{DialoguerPrompter, InteractiveCredentials};
pub use remote::SshShell;
pub use transfer::detect_strategy;
