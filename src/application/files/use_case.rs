//! Files Sync Use Case
//!
//! Mirror a site's public files directory locally:
//! 1. Check the site alias exists remotely
//! 2. Ask the CMS CLI where the files directory is
//! 3. Report its size
//! 4. Pick the local multisite directory the same way Drupal does
//! 5. rsync it down, skipping files over 100 KiB unless `full_sync`
//! 6. Fix ownership and modes on the local tree

use std::path::PathBuf;

use crate::application::size_report::remote_size;
use crate::domain::entities::{SyncContext, SyncRequest};
use crate::domain::ports::{
    shell_quote, shell_word, LocalFiles, NormalizeSummary, Pipeline, RemoteShell, SyncEvent,
    SyncEventSink, Transfer,
};
use crate::domain::value_objects::{validate_name, MultisiteKey, SiteAlias, SizeLimit};
use crate::error::{SyncError, SyncResult};

use super::options::FilesOptions;

/// What a files sync produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesOutcome {
    pub remote_dir: String,
    pub local_dir: PathBuf,
    pub multisite: MultisiteKey,
    pub size: String,
    pub normalized: NormalizeSummary,
}

pub struct FilesSync<'a> {
    shell: &'a dyn RemoteShell,
    transfer: &'a dyn Transfer,
    local: &'a dyn LocalFiles,
    events: &'a dyn SyncEventSink,
    options: FilesOptions,
}

impl<'a> FilesSync<'a> {
    pub fn new(
        shell: &'a dyn RemoteShell,
        transfer: &'a dyn Transfer,
        local: &'a dyn LocalFiles,
        events: &'a dyn SyncEventSink,
        options: FilesOptions,
    ) -> Self {
        Self {
            shell,
            transfer,
            local,
            events,
            options,
        }
    }

    pub fn options(&self) -> &FilesOptions {
        &self.options
    }

    /// Sync the files directory of `request.url` for `request.alias()`
    pub fn sync_files(&self, ctx: &SyncContext, request: &SyncRequest) -> SyncResult<FilesOutcome> {
        validate_name("shortname", &request.shortname)?;
        validate_name("branch", &request.branch)?;
        validate_name("url", &request.url)?;
        validate_name("www-subdir", &request.www_subdir)?;
        let alias = request.alias();
        self.events.on_event(SyncEvent::PipelineStarted {
            pipeline: Pipeline::Files,
            alias: alias.to_string(),
        });

        self.verify_site(ctx, &alias)?;

        tracing::info!(alias = %alias, "finding the remote files directory");
        let remote_dir = self.resolve_remote_files_dir(ctx, &alias)?;
        self.events.on_event(SyncEvent::FilesDirResolved {
            remote_dir: remote_dir.clone(),
        });

        let size = remote_size(
            self.shell,
            ctx,
            &shell_quote(&format!("{}/", remote_dir)),
        );
        self.events.on_event(SyncEvent::SizeReported {
            pipeline: Pipeline::Files,
            size: size.clone(),
        });

        let multisite = self.resolve_multisite(ctx, &alias, &request.url)?;
        self.events.on_event(SyncEvent::MultisiteResolved {
            key: multisite.to_string(),
        });

        let local_dir = self
            .options
            .local_files_dir(&request.url, &request.www_subdir, &multisite);
        let limit = SizeLimit::for_sync(request.full_sync);

        tracing::info!(
            remote = %remote_dir,
            local = %local_dir.display(),
            via = self.transfer.name(),
            full = request.full_sync,
            "syncing remote files directory"
        );
        self.local.ensure_dir(&local_dir)?;
        self.transfer.sync_dir(ctx, &remote_dir, &local_dir, limit)?;
        self.events.on_event(SyncEvent::FilesTransferred {
            local_dir: local_dir.clone(),
            limited: limit.is_some(),
        });

        let normalized = self
            .local
            .normalize_permissions(&local_dir, &self.options.permissions)?;
        self.events.on_event(SyncEvent::PermissionsNormalized {
            root: local_dir.clone(),
            dirs: normalized.dirs,
            files: normalized.files,
        });

        self.events.on_event(SyncEvent::PipelineCompleted {
            pipeline: Pipeline::Files,
        });
        Ok(FilesOutcome {
            remote_dir,
            local_dir,
            multisite,
            size,
            normalized,
        })
    }

    fn verify_site(&self, ctx: &SyncContext, alias: &SiteAlias) -> SyncResult<()> {
        let lookup = format!(
            "{} sa | grep -- {}",
            ctx.remote_cli,
            shell_quote(&alias.to_string())
        );
        let output = self.shell.run(ctx, &lookup)?;
        if !output.success {
            return Err(SyncError::SiteNotFound {
                alias: alias.to_string(),
            });
        }
        self.events.on_event(SyncEvent::SiteVerified {
            alias: alias.to_string(),
        });
        Ok(())
    }

    fn resolve_remote_files_dir(&self, ctx: &SyncContext, alias: &SiteAlias) -> SyncResult<String> {
        let query = format!(
            "echo $({} {} dd files)",
            ctx.remote_cli,
            shell_word(&alias.to_string())
        );
        let dir = self.shell.run_checked(ctx, &query)?;
        let dir = dir.trim_end_matches('/').to_string();
        if dir.is_empty() {
            return Err(SyncError::RemoteFilesDirUnresolved {
                alias: alias.to_string(),
            });
        }
        Ok(dir)
    }

    fn resolve_multisite(
        &self,
        ctx: &SyncContext,
        alias: &SiteAlias,
        url: &str,
    ) -> SyncResult<MultisiteKey> {
        let probe = format!(
            "stat \"$({} {} dd)\"/sites/{}",
            ctx.remote_cli,
            shell_word(&alias.to_string()),
            shell_quote(url)
        );
        let output = self.shell.run(ctx, &probe)?;
        Ok(MultisiteKey::from_probe(url, output.success))
    }
}
