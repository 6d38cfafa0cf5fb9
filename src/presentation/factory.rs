//! Use Case Factory
//!
//! Builds the concrete adapters and wires them into the pull use case.
//! This is the dependency injection point for the application.
//!
//! The use cases borrow their ports, so the adapters live in a
//! `PullRuntime` that outlives the use case built from it.

use std::path::PathBuf;

use crate::application::{
    ConfigStore, DatabaseOptions, DatabaseSync, FilesOptions, FilesSync, PullUseCase,
};
use crate::domain::ports::{SyncEventSink, Transfer};
use crate::error::{SyncError, SyncResult};
use crate::infrastructure::fs::{expand_home, require_home_dir};
use crate::infrastructure::{
    detect_strategy, ChownMode, DialoguerPrompter, IniCredentials, InteractiveCredentials,
    LocalFs, SshShell, ThreadSleeper,
};
use crate::presentation::cli::{ChownWhen, Cli};

/// Concrete adapters for one run
pub struct PullRuntime {
    shell: SshShell,
    transfer: Box<dyn Transfer>,
    local: LocalFs,
    sleeper: ThreadSleeper,
    events: Box<dyn SyncEventSink>,
    settings: ConfigStore,
    database: DatabaseOptions,
    files: FilesOptions,
    remote_cli: String,
}

impl PullRuntime {
    /// Wire every adapter from parsed arguments
    pub fn from_cli(cli: &Cli, events: Box<dyn SyncEventSink>) -> SyncResult<Self> {
        let home = require_home_dir()?;
        let quiet = cli.json;

        let transfer = detect_strategy(quiet).ok_or_else(|| {
            SyncError::Unsupported("neither rsync nor scp is available on PATH".to_string())
        })?;
        tracing::debug!(strategy = transfer.name(), "transfer strategy selected");

        let config_path = cli
            .config
            .as_deref()
            .map(|p| expand_home(p, &home))
            .unwrap_or_else(|| IniCredentials::default_path(&home));
        let settings = create_config_store(config_path);

        let database = match &cli.dump_dir {
            Some(dir) => DatabaseOptions::new(expand_home(dir, &home)),
            None => DatabaseOptions::in_home(&home),
        }
        .with_settle(cli.settle());

        let files = FilesOptions::new(expand_home(&cli.base_dir, &home))
            .with_permissions(cli.permissions());

        Ok(Self {
            shell: SshShell::new(),
            transfer,
            local: LocalFs::new(chown_mode(cli.chown)).quiet(quiet),
            sleeper: ThreadSleeper,
            events,
            settings,
            database,
            files,
            remote_cli: cli.remote_cli.clone(),
        })
    }

    /// The pull use case borrowing this runtime's adapters
    pub fn use_case(&self) -> PullUseCase<'_> {
        let database = DatabaseSync::new(
            &self.shell,
            self.transfer.as_ref(),
            &self.local,
            &self.sleeper,
            self.events.as_ref(),
            self.database.clone(),
        );
        let files = FilesSync::new(
            &self.shell,
            self.transfer.as_ref(),
            &self.local,
            self.events.as_ref(),
            self.files.clone(),
        );

        PullUseCase::new(
            &self.settings,
            database,
            files,
            self.events.as_ref(),
            &self.remote_cli,
        )
    }
}

/// Stored sections first, then the terminal prompt
pub fn create_config_store(path: PathBuf) -> ConfigStore {
    tracing::debug!(path = %path.display(), "settings file");
    ConfigStore::new(
        Box::new(IniCredentials::new(path)),
        Box::new(InteractiveCredentials::new(DialoguerPrompter::new())),
    )
}

fn chown_mode(when: ChownWhen) -> ChownMode {
    match when {
        ChownWhen::Sudo => ChownMode::Sudo,
        ChownWhen::Direct => ChownMode::Direct,
        ChownWhen::Skip => ChownMode::Skip,
    }
}
