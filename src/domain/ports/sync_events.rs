//! Sync Event Port
//!
//! Provides an observable interface for pull operations.
//! Enables console progress, NDJSON event streams, and sequence assertions in tests.

use std::path::PathBuf;
use std::time::Duration;

/// Which pipeline an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    Database,
    Files,
}

impl Pipeline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pipeline::Database => "db",
            Pipeline::Files => "files",
        }
    }
}

/// Event emitted during a pull
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// Host and user resolved for the run
    Connected {
        host: String,
        user: String,
        remote_cli: String,
    },

    /// A pipeline started
    PipelineStarted { pipeline: Pipeline, alias: String },

    /// Local dump directory exists
    DumpDirReady { path: PathBuf },

    /// No concurrent export was seen
    ExportGuardPassed { shortname: String },

    /// Remote export command completed
    ExportIssued { alias: String, remote_path: String },

    /// Waited for the remote artifact to settle
    Settled { waited: Duration },

    /// Human-readable size of something about to be transferred (advisory)
    SizeReported { pipeline: Pipeline, size: String },

    /// Remote artifact copied locally
    ArtifactFetched { local_path: PathBuf },

    /// Remote artifact deleted
    ArtifactRemoved { remote_path: String },

    /// Site alias exists remotely
    SiteVerified { alias: String },

    /// Remote files directory resolved
    FilesDirResolved { remote_dir: String },

    /// Local multisite directory chosen
    MultisiteResolved { key: String },

    /// Files directory mirrored locally
    FilesTransferred { local_dir: PathBuf, limited: bool },

    /// Ownership and modes applied
    PermissionsNormalized {
        root: PathBuf,
        dirs: usize,
        files: usize,
    },

    /// A pipeline finished
    PipelineCompleted { pipeline: Pipeline },
}

/// Trait for receiving sync events
///
/// Implementations can be:
/// - ConsoleEventSink: progress lines in the terminal
/// - JsonEventSink: NDJSON event stream
pub trait SyncEventSink {
    fn on_event(&self, event: SyncEvent);
}
