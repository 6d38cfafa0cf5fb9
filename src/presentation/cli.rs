//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Positional `<shortname> <synctype>` select the project and the pipelines
//! - `--url` is only required when the files pipeline runs
//! - Global output flags (--json, --color, --verbose) follow the usual layout

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::application::{SettleStrategy, DEFAULT_BASE_DIR};
use crate::domain::entities::{
    SyncRequest, DEFAULT_BRANCH, DEFAULT_REMOTE_CLI, DEFAULT_WWW_SUBDIR,
};
use crate::domain::value_objects::{name_problem, PermissionPolicy, SyncType};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// How ownership of the synced files tree is changed
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChownWhen {
    /// `sudo chown -R`
    #[default]
    Sudo,
    /// `chown -R` as the current user
    Direct,
    /// Leave ownership alone (modes are still applied)
    Skip,
}

/// Sitepull - pull a Drupal site's database and files into a local checkout
#[derive(Parser, Debug)]
#[command(name = "sitepull")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Examples:\n  sitepull acme db\n  sitepull acme files --url acmesite\n  sitepull acme all --url acmesite --branch stage --full 1"
)]
pub struct Cli {
    /// Project shortname (section name in the settings file)
    #[arg(value_parser = parse_name)]
    pub shortname: String,

    /// What to pull: db, files, or all
    #[arg(value_name = "SYNCTYPE")]
    pub sync_type: SyncType,

    /// Site url / local checkout name (required for files and all)
    #[arg(
        long,
        value_parser = parse_name,
        required_if_eq_any = [("sync_type", "files"), ("sync_type", "all")]
    )]
    pub url: Option<String>,

    /// Branch part of the remote site alias
    #[arg(long, default_value = DEFAULT_BRANCH, value_parser = parse_name)]
    pub branch: String,

    /// Docroot subdirectory inside the local checkout
    #[arg(long, default_value = DEFAULT_WWW_SUBDIR, value_parser = parse_name)]
    pub www_subdir: String,

    /// Copy every file (1) instead of only files up to 100K (0)
    #[arg(
        long,
        action = ArgAction::Set,
        default_value = "0",
        value_parser = parse_switch,
        value_name = "0|1"
    )]
    pub full: bool,

    /// Root directory holding local site checkouts
    #[arg(long, default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// Local directory for database dumps [default: ~/sql-dumps]
    #[arg(long)]
    pub dump_dir: Option<PathBuf>,

    /// Path of the CMS command line tool on the remote host
    #[arg(long, default_value = DEFAULT_REMOTE_CLI)]
    pub remote_cli: String,

    /// Owner applied to the synced files tree
    #[arg(long, default_value = PermissionPolicy::DEFAULT_OWNER)]
    pub owner: String,

    /// Group applied to the synced files tree
    #[arg(long, default_value = PermissionPolicy::DEFAULT_GROUP)]
    pub group: String,

    /// How ownership is changed on the synced files tree
    #[arg(long, value_enum, default_value_t = ChownWhen::Sudo)]
    pub chown: ChownWhen,

    /// Poll the remote dump size until it stops growing instead of a fixed wait
    #[arg(long)]
    pub wait_stable: bool,

    /// Settings file [default: ~/builder.ini]
    #[arg(long, env = "SITEPULL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output NDJSON events
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The request described by the positional arguments and site flags
    pub fn request(&self) -> SyncRequest {
        SyncRequest::new(
            &self.shortname,
            self.url.clone().unwrap_or_default(),
            self.sync_type,
        )
        .with_branch(&self.branch)
        .with_www_subdir(&self.www_subdir)
        .with_full_sync(self.full)
    }

    pub fn settle(&self) -> SettleStrategy {
        if self.wait_stable {
            SettleStrategy::poll()
        } else {
            SettleStrategy::default()
        }
    }

    pub fn permissions(&self) -> PermissionPolicy {
        PermissionPolicy::new(&self.owner, &self.group)
    }
}

/// Site names end up in remote command lines and local paths
fn parse_name(value: &str) -> Result<String, String> {
    match name_problem(value) {
        None => Ok(value.to_string()),
        Some(reason) => Err(reason.to_string()),
    }
}

/// Accepts `0`/`1` as well as `true`/`false`
fn parse_switch(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(format!("expected 0 or 1, got '{}'", other)),
    }
}
