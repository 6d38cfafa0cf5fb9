//! Error types for sitepull
//!
//! Library code returns `SyncError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sitepull operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Main error type for sync operations
#[derive(Error, Debug)]
pub enum SyncError {
    /// Another database export for the same project is running remotely
    #[error(
        "someone is already running an SQL dump of '{shortname}'; \
         wait for their sync to finish and try again in a few moments"
    )]
    ConcurrentExport { shortname: String },

    /// The site alias is not known to the remote CMS CLI
    #[error("couldn't find site {alias} on the remote server")]
    SiteNotFound { alias: String },

    /// The remote CMS CLI returned no files directory for the alias
    #[error("remote files directory for {alias} could not be resolved")]
    RemoteFilesDirUnresolved { alias: String },

    /// An external command exited unsuccessfully
    #[error("command failed ({}): {command}{}", exit_label(.code), stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// An external program could not be started
    #[error("failed to run '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A name that would be interpolated into a command line or path is unsafe
    #[error("invalid {field} '{value}': {reason}")]
    InvalidName {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// The selected tool cannot do what was asked
    #[error("{0}")]
    Unsupported(String),

    /// The settings file exists but could not be read or parsed
    #[error("invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// No provider could supply host and user for a project
    #[error("no connection settings available for '{shortname}'")]
    MissingSettings { shortname: String },

    /// No home directory to resolve `~` paths against
    #[error("could not determine the user's home directory")]
    HomeDirUnavailable,

    /// Interactive prompt failed
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyncError {
    /// Stable machine-readable name, used in NDJSON error events
    pub fn kind(&self) -> &'static str {
        match self {
            SyncError::ConcurrentExport { .. } => "concurrent_export",
            SyncError::SiteNotFound { .. } => "site_not_found",
            SyncError::RemoteFilesDirUnresolved { .. } => "files_dir_unresolved",
            SyncError::CommandFailed { .. } => "command_failed",
            SyncError::CommandSpawn { .. } => "command_spawn",
            SyncError::InvalidName { .. } => "invalid_name",
            SyncError::Unsupported(_) => "unsupported",
            SyncError::Config { .. } => "config",
            SyncError::MissingSettings { .. } => "missing_settings",
            SyncError::HomeDirUnavailable => "home_dir_unavailable",
            SyncError::Prompt(_) => "prompt",
            SyncError::Io(_) => "io",
        }
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {}", c),
        None => "terminated by signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{}", trimmed)
    }
}
