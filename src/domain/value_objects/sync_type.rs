//! Sync type value object - which pipelines a pull runs
//!
//! - `Db`: database export and fetch only
//! - `Files`: files directory sync only
//! - `All`: database first, then files

use std::str::FromStr;

/// Which parts of a site to pull
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncType {
    Db,
    Files,
    All,
}

impl SyncType {
    /// Returns true if the database pipeline runs
    pub fn includes_db(&self) -> bool {
        matches!(self, SyncType::Db | SyncType::All)
    }

    /// Returns true if the files pipeline runs
    pub fn includes_files(&self) -> bool {
        matches!(self, SyncType::Files | SyncType::All)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncType::Db => "db",
            SyncType::Files => "files",
            SyncType::All => "all",
        }
    }
}

impl std::fmt::Display for SyncType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyncType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "db" => Ok(SyncType::Db),
            "files" => Ok(SyncType::Files),
            "all" => Ok(SyncType::All),
            other => Err(format!(
                "unknown sync type '{}' (expected db, files or all)",
                other
            )),
        }
    }
}
