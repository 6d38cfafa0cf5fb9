//! JSON Event Sink
//!
//! Outputs pull events as NDJSON for CI/automation consumption.

use crate::domain::ports::{SyncEvent, SyncEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// NDJSON representation of a single event
pub fn event_json(event: &SyncEvent) -> serde_json::Value {
    match event {
        SyncEvent::Connected {
            host,
            user,
            remote_cli,
        } => serde_json::json!({
            "event": "start",
            "command": "pull",
            "host": host,
            "user": user,
            "remote_cli": remote_cli,
        }),

        SyncEvent::PipelineStarted { pipeline, alias } => serde_json::json!({
            "event": "pipeline_start",
            "pipeline": pipeline.as_str(),
            "alias": alias,
        }),

        SyncEvent::DumpDirReady { path } => serde_json::json!({
            "event": "dump_dir_ready",
            "pipeline": "db",
            "path": path.display().to_string(),
        }),

        SyncEvent::ExportGuardPassed { shortname } => serde_json::json!({
            "event": "export_guard_passed",
            "pipeline": "db",
            "shortname": shortname,
        }),

        SyncEvent::ExportIssued { alias, remote_path } => serde_json::json!({
            "event": "export_issued",
            "pipeline": "db",
            "alias": alias,
            "remote_path": remote_path,
        }),

        SyncEvent::Settled { waited } => serde_json::json!({
            "event": "settled",
            "pipeline": "db",
            "waited_ms": waited.as_millis() as u64,
        }),

        SyncEvent::SizeReported { pipeline, size } => serde_json::json!({
            "event": "size",
            "pipeline": pipeline.as_str(),
            "size": size,
        }),

        SyncEvent::ArtifactFetched { local_path } => serde_json::json!({
            "event": "artifact_fetched",
            "pipeline": "db",
            "path": local_path.display().to_string(),
        }),

        SyncEvent::ArtifactRemoved { remote_path } => serde_json::json!({
            "event": "artifact_removed",
            "pipeline": "db",
            "remote_path": remote_path,
        }),

        SyncEvent::SiteVerified { alias } => serde_json::json!({
            "event": "site_verified",
            "pipeline": "files",
            "alias": alias,
        }),

        SyncEvent::FilesDirResolved { remote_dir } => serde_json::json!({
            "event": "files_dir_resolved",
            "pipeline": "files",
            "remote_dir": remote_dir,
        }),

        SyncEvent::MultisiteResolved { key } => serde_json::json!({
            "event": "multisite_resolved",
            "pipeline": "files",
            "key": key,
        }),

        SyncEvent::FilesTransferred { local_dir, limited } => serde_json::json!({
            "event": "files_transferred",
            "pipeline": "files",
            "path": local_dir.display().to_string(),
            "limited": limited,
        }),

        SyncEvent::PermissionsNormalized { root, dirs, files } => serde_json::json!({
            "event": "permissions_normalized",
            "pipeline": "files",
            "path": root.display().to_string(),
            "dirs": dirs,
            "files": files,
        }),

        SyncEvent::PipelineCompleted { pipeline } => serde_json::json!({
            "event": "pipeline_complete",
            "pipeline": pipeline.as_str(),
        }),
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        self.write_event(event_json(&event));
    }
}
