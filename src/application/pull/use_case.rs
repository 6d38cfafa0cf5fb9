//! Pull Use Case
//!
//! The entry operation: resolve where the project lives, then run the
//! requested pipelines. `all` runs the database pipeline to completion
//! before the files pipeline starts.

use crate::application::config_store::{ConfigStore, SettingsSource};
use crate::application::database::{DatabaseOutcome, DatabaseSync};
use crate::application::files::{FilesOutcome, FilesSync};
use crate::domain::entities::{ProjectEntry, SyncContext, SyncRequest};
use crate::domain::ports::{SyncEvent, SyncEventSink};
use crate::error::SyncResult;

/// Everything a pull produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullOutcome {
    pub entry: ProjectEntry,
    pub settings_source: SettingsSource,
    pub database: Option<DatabaseOutcome>,
    pub files: Option<FilesOutcome>,
}

pub struct PullUseCase<'a> {
    settings: &'a ConfigStore,
    database: DatabaseSync<'a>,
    files: FilesSync<'a>,
    events: &'a dyn SyncEventSink,
    remote_cli: String,
}

impl<'a> PullUseCase<'a> {
    pub fn new(
        settings: &'a ConfigStore,
        database: DatabaseSync<'a>,
        files: FilesSync<'a>,
        events: &'a dyn SyncEventSink,
        remote_cli: impl Into<String>,
    ) -> Self {
        Self {
            settings,
            database,
            files,
            events,
            remote_cli: remote_cli.into(),
        }
    }

    pub fn execute(&self, request: &SyncRequest) -> SyncResult<PullOutcome> {
        request.validate()?;
        let (entry, settings_source) = self.settings.resolve_with_source(&request.shortname)?;
        let ctx = SyncContext::from_entry(&entry).with_remote_cli(&self.remote_cli);

        tracing::info!(host = %ctx.host, user = %ctx.user, cli = %ctx.remote_cli, "connection resolved");
        self.events.on_event(SyncEvent::Connected {
            host: ctx.host.clone(),
            user: ctx.user.clone(),
            remote_cli: ctx.remote_cli.clone(),
        });

        let database = if request.sync_type.includes_db() {
            Some(
                self.database
                    .export_and_fetch(&ctx, &request.shortname, &request.branch)?,
            )
        } else {
            None
        };

        let files = if request.sync_type.includes_files() {
            Some(self.files.sync_files(&ctx, request)?)
        } else {
            None
        };

        Ok(PullOutcome {
            entry,
            settings_source,
            database,
            files,
        })
    }
}
