//! Per-invocation request and connection context
//!
//! `SyncRequest` is what the user asked for; `SyncContext` is the resolved
//! connection every remote step runs against. Both live for one run only.

use crate::domain::entities::ProjectEntry;
use crate::domain::value_objects::{validate_name, SiteAlias, SyncType};
use crate::error::SyncResult;

/// Default branch when none is given
pub const DEFAULT_BRANCH: &str = "master";
/// Default docroot subdirectory under a site checkout
pub const DEFAULT_WWW_SUBDIR: &str = "www";
/// Default path of the remote CMS CLI
pub const DEFAULT_REMOTE_CLI: &str = "/usr/bin/drush";

/// What to pull, and from which site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    pub shortname: String,
    pub url: String,
    pub sync_type: SyncType,
    pub branch: String,
    pub www_subdir: String,
    pub full_sync: bool,
}

impl SyncRequest {
    pub fn new(shortname: impl Into<String>, url: impl Into<String>, sync_type: SyncType) -> Self {
        Self {
            shortname: shortname.into(),
            url: url.into(),
            sync_type,
            branch: DEFAULT_BRANCH.to_string(),
            www_subdir: DEFAULT_WWW_SUBDIR.to_string(),
            full_sync: false,
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    pub fn with_www_subdir(mut self, www_subdir: impl Into<String>) -> Self {
        self.www_subdir = www_subdir.into();
        self
    }

    pub fn with_full_sync(mut self, full_sync: bool) -> Self {
        self.full_sync = full_sync;
        self
    }

    pub fn alias(&self) -> SiteAlias {
        SiteAlias::new(&self.shortname, &self.branch)
    }

    /// Reject names that are unsafe on a remote command line or as a local
    /// path component. `url` and `www_subdir` are only checked when files
    /// are pulled.
    pub fn validate(&self) -> SyncResult<()> {
        validate_name("shortname", &self.shortname)?;
        validate_name("branch", &self.branch)?;
        if self.sync_type.includes_files() {
            validate_name("url", &self.url)?;
            validate_name("www-subdir", &self.www_subdir)?;
        }
        Ok(())
    }
}

/// Resolved connection shared by every step of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncContext {
    pub host: String,
    pub user: String,
    /// Remote CMS CLI invocation prefix (e.g. `/usr/bin/drush`)
    pub remote_cli: String,
}

impl SyncContext {
    pub fn new(host: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            remote_cli: DEFAULT_REMOTE_CLI.to_string(),
        }
    }

    pub fn from_entry(entry: &ProjectEntry) -> Self {
        Self::new(&entry.hostname, &entry.username)
    }

    pub fn with_remote_cli(mut self, remote_cli: impl Into<String>) -> Self {
        self.remote_cli = remote_cli.into();
        self
    }

    /// `user@host` for ssh, scp and rsync
    pub fn ssh_destination(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}
