//! Credentials ports - where a project's host and user come from
//!
//! Implementations:
//! - `IniCredentials` - persisted sections in the settings file
//! - `InteractiveCredentials` - asks the user through a `Prompter`

use crate::domain::entities::ProjectEntry;
use crate::error::SyncResult;

/// Source of connection settings for a shortname
pub trait CredentialsProvider {
    /// Name used in log output
    fn name(&self) -> &'static str;

    /// Look up settings; `Ok(None)` means this provider has no answer
    fn lookup(&self, shortname: &str) -> SyncResult<Option<ProjectEntry>>;
}

/// A provider that can also remember new entries
pub trait CredentialsStore: CredentialsProvider {
    /// Persist an entry without touching existing ones
    fn append(&self, entry: &ProjectEntry) -> SyncResult<()>;
}

/// Asks the user a single question with a default answer
pub trait Prompter {
    fn ask(&self, question: &str, default: &str) -> SyncResult<String>;
}
