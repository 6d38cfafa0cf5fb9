//! Database Sync Options

use std::path::{Path, PathBuf};

use crate::application::settle::SettleStrategy;

/// Options for the database sync use case
#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    /// Local directory receiving `<shortname>.sql.gz`
    pub dump_dir: PathBuf,
    /// How to wait for the remote dump before fetching it
    pub settle: SettleStrategy,
}

impl DatabaseOptions {
    pub fn new(dump_dir: impl Into<PathBuf>) -> Self {
        Self {
            dump_dir: dump_dir.into(),
            settle: SettleStrategy::default(),
        }
    }

    /// `~/sql-dumps` under the given home directory
    pub fn in_home(home: &Path) -> Self {
        Self::new(home.join("sql-dumps"))
    }

    pub fn with_settle(mut self, settle: SettleStrategy) -> Self {
        self.settle = settle;
        self
    }
}
