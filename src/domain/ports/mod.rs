//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod credentials;
pub mod local_files;
pub mod remote_shell;
pub mod sleeper;
pub mod sync_events;
pub mod transfer;

pub use credentials::{CredentialsProvider, CredentialsStore, Prompter};
pub use local_files::{LocalFiles, NormalizeSummary};
pub use remote_shell::{shell_quote, shell_word, CommandOutput, RemoteShell};
pub use sleeper::Sleeper;
pub use sync_events::{Pipeline, SyncEvent, SyncEventSink};
pub use transfer::Transfer;
