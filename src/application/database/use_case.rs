//! Database Sync Use Case
//!
//! Export a site's database on the remote host and bring it home:
//! 1. Ensure the local dump directory exists
//! 2. Refuse to start if another export of the same project is running
//! 3. `sql-dump | gzip` into the remote home directory
//! 4. Let the artifact settle
//! 5. Report its size
//! 6. Fetch it
//! 7. Remove the remote copy, whether or not the fetch worked
//!
//! The concurrency guard is a point-in-time `ps` scan, not a lock. An
//! export started between the scan and step 3 goes unnoticed.

use std::path::PathBuf;

use crate::application::size_report::remote_size;
use crate::domain::entities::SyncContext;
use crate::domain::ports::{
    shell_quote, shell_word, LocalFiles, Pipeline, RemoteShell, Sleeper, SyncEvent, SyncEventSink,
    Transfer,
};
use crate::domain::value_objects::{validate_name, SiteAlias};
use crate::error::{SyncError, SyncResult};

use super::options::DatabaseOptions;

/// What a database sync produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseOutcome {
    pub local_path: PathBuf,
    pub size: String,
}

/// File name of the dump for a project, both remotely and locally
pub fn dump_file_name(shortname: &str) -> String {
    format!("{}.sql.gz", shortname)
}

/// Extended regex matching a process line that writes exactly `file_name`
///
/// The name must not be preceded or followed by another name character, so
/// `bigacme.sql.gz` and `x-acme.sql.gz` do not match `acme.sql.gz`.
pub fn export_scan_pattern(file_name: &str) -> String {
    const NAME_CHARS: &str = "A-Za-z0-9._-";
    let mut escaped = String::with_capacity(file_name.len() * 2);
    for c in file_name.chars() {
        if "\\.^$|?*+()[]{}".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("(^|[^{c}]){e}([^{c}]|$)", c = NAME_CHARS, e = escaped)
}

pub struct DatabaseSync<'a> {
    shell: &'a dyn RemoteShell,
    transfer: &'a dyn Transfer,
    local: &'a dyn LocalFiles,
    sleeper: &'a dyn Sleeper,
    events: &'a dyn SyncEventSink,
    options: DatabaseOptions,
}

impl<'a> DatabaseSync<'a> {
    pub fn new(
        shell: &'a dyn RemoteShell,
        transfer: &'a dyn Transfer,
        local: &'a dyn LocalFiles,
        sleeper: &'a dyn Sleeper,
        events: &'a dyn SyncEventSink,
        options: DatabaseOptions,
    ) -> Self {
        Self {
            shell,
            transfer,
            local,
            sleeper,
            events,
            options,
        }
    }

    pub fn options(&self) -> &DatabaseOptions {
        &self.options
    }

    /// Export `@<shortname>_<branch>` remotely and fetch the gzipped dump
    pub fn export_and_fetch(
        &self,
        ctx: &SyncContext,
        shortname: &str,
        branch: &str,
    ) -> SyncResult<DatabaseOutcome> {
        validate_name("shortname", shortname)?;
        validate_name("branch", branch)?;
        let alias = SiteAlias::new(shortname, branch);
        self.events.on_event(SyncEvent::PipelineStarted {
            pipeline: Pipeline::Database,
            alias: alias.to_string(),
        });

        self.local.ensure_dir(&self.options.dump_dir)?;
        self.events.on_event(SyncEvent::DumpDirReady {
            path: self.options.dump_dir.clone(),
        });

        let file_name = dump_file_name(shortname);
        self.ensure_no_concurrent_export(ctx, shortname, &file_name)?;

        let remote_path = format!("~/{}", file_name);
        let remote_arg = format!("~/{}", shell_word(&file_name));
        let export = format!(
            "{} {} sql-dump | gzip > {}",
            ctx.remote_cli,
            shell_word(&alias.to_string()),
            remote_arg
        );
        tracing::info!(alias = %alias, host = %ctx.host, "making a database backup");
        self.shell.run_checked(ctx, &export)?;
        self.events.on_event(SyncEvent::ExportIssued {
            alias: alias.to_string(),
            remote_path: remote_path.clone(),
        });

        let waited = self
            .options
            .settle
            .wait(self.shell, self.sleeper, ctx, &remote_arg)?;
        self.events.on_event(SyncEvent::Settled { waited });

        let size = remote_size(self.shell, ctx, &remote_arg);
        self.events.on_event(SyncEvent::SizeReported {
            pipeline: Pipeline::Database,
            size: size.clone(),
        });

        let local_path = self.options.dump_dir.join(&file_name);
        tracing::info!(
            remote = %remote_path,
            local = %local_path.display(),
            via = self.transfer.name(),
            "fetching database backup"
        );
        let fetched = self.transfer.fetch_file(ctx, &remote_path, &local_path);
        if fetched.is_ok() {
            self.events.on_event(SyncEvent::ArtifactFetched {
                local_path: local_path.clone(),
            });
        }

        let removed = self
            .shell
            .run_checked(ctx, &format!("rm {}", remote_arg));
        match (&fetched, &removed) {
            (_, Ok(_)) => self.events.on_event(SyncEvent::ArtifactRemoved {
                remote_path: remote_path.clone(),
            }),
            (Err(_), Err(rm_err)) => {
                tracing::warn!(remote = %remote_path, error = %rm_err, "remote cleanup failed");
            }
            (Ok(_), Err(_)) => {}
        }

        fetched?;
        removed?;

        self.events.on_event(SyncEvent::PipelineCompleted {
            pipeline: Pipeline::Database,
        });
        Ok(DatabaseOutcome { local_path, size })
    }

    fn ensure_no_concurrent_export(
        &self,
        ctx: &SyncContext,
        shortname: &str,
        marker: &str,
    ) -> SyncResult<()> {
        let scan = format!(
            "ps aux | grep -E {} | grep -v grep",
            shell_quote(&export_scan_pattern(marker))
        );
        let output = self.shell.run(ctx, &scan)?;
        if output.success {
            tracing::debug!(matches = %output.stdout.trim(), "concurrent export detected");
            return Err(SyncError::ConcurrentExport {
                shortname: shortname.to_string(),
            });
        }
        self.events.on_event(SyncEvent::ExportGuardPassed {
            shortname: shortname.to_string(),
        });
        Ok(())
    }
}
