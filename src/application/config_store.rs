//! Connection settings resolution
//!
//! Persisted sections win. When a project has no usable section, the
//! fallback provider (normally the interactive one) answers and the result
//! is appended to the store so the next run does not ask again.

use crate::domain::entities::ProjectEntry;
use crate::domain::ports::{CredentialsProvider, CredentialsStore};
use crate::error::{SyncError, SyncResult};

/// Where a resolved entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSource {
    Stored,
    Fallback,
}

pub struct ConfigStore {
    store: Box<dyn CredentialsStore>,
    fallback: Box<dyn CredentialsProvider>,
}

impl ConfigStore {
    pub fn new(store: Box<dyn CredentialsStore>, fallback: Box<dyn CredentialsProvider>) -> Self {
        Self { store, fallback }
    }

    /// Host and user for `shortname`
    pub fn resolve(&self, shortname: &str) -> SyncResult<ProjectEntry> {
        self.resolve_with_source(shortname).map(|(entry, _)| entry)
    }

    pub fn resolve_with_source(&self, shortname: &str) -> SyncResult<(ProjectEntry, SettingsSource)> {
        if let Some(entry) = self.store.lookup(shortname)? {
            tracing::debug!(shortname, provider = self.store.name(), "using stored settings");
            return Ok((entry, SettingsSource::Stored));
        }

        tracing::info!(
            shortname,
            provider = self.fallback.name(),
            "no stored settings for project"
        );
        let entry = self
            .fallback
            .lookup(shortname)?
            .ok_or_else(|| SyncError::MissingSettings {
                shortname: shortname.to_string(),
            })?;

        self.store.append(&entry)?;
        Ok((entry, SettingsSource::Fallback))
    }
}
