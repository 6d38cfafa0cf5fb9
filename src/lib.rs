//! Sitepull - pull a Drupal site into a local development checkout
//!
//! Sitepull copies a site's database dump and user-uploaded files from a
//! remote host over ssh. Connection settings per project live in an ini
//! file and are asked for once when missing.
//!
//! ## Layers
//!
//! - `domain` - entities, value objects and the ports every adapter implements
//! - `application` - the database, files and pull use cases
//! - `infrastructure` - ssh, rsync/scp, local filesystem, ini store, prompts
//! - `presentation` - clap CLI and the factory wiring it all together

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{PullOutcome, PullUseCase, SettleStrategy};
pub use domain::entities::{ProjectEntry, SyncContext, SyncRequest};
pub use domain::value_objects::SyncType;
pub use error::{SyncError, SyncResult};
