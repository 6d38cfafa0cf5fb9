//! INI-backed credentials store
//!
//! One section per project shortname:
//!
//! ```ini
//! [acme]
//! hostname = dev1.example.com
//! username = jenkins
//! ```
//!
//! Section names and keys are case-sensitive. New sections are appended to
//! the end of the file; existing text is never rewritten. There is no file
//! locking, so two first runs racing on the same project can both append.

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use ini::Ini;

use crate::domain::entities::ProjectEntry;
use crate::domain::ports::{CredentialsProvider, CredentialsStore};
use crate::error::{SyncError, SyncResult};

/// File name of the settings store in the home directory
pub const CONFIG_FILE_NAME: &str = "builder.ini";

const HOSTNAME_KEY: &str = "hostname";
const USERNAME_KEY: &str = "username";

/// Credentials persisted in an ini file
#[derive(Debug, Clone)]
pub struct IniCredentials {
    path: PathBuf,
}

impl IniCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<home>/builder.ini`
    pub fn default_path(home: &Path) -> PathBuf {
        home.join(CONFIG_FILE_NAME)
    }

    fn load(&self) -> SyncResult<Option<Ini>> {
        if !self.path.is_file() {
            return Ok(None);
        }
        Ini::load_from_file(&self.path)
            .map(Some)
            .map_err(|e| SyncError::Config {
                path: self.path.clone(),
                message: e.to_string(),
            })
    }
}

impl CredentialsProvider for IniCredentials {
    fn name(&self) -> &'static str {
        "ini"
    }

    fn lookup(&self, shortname: &str) -> SyncResult<Option<ProjectEntry>> {
        let Some(ini) = self.load()? else {
            tracing::debug!(path = %self.path.display(), "settings file not found");
            return Ok(None);
        };
        let Some(section) = ini.section(Some(shortname)) else {
            return Ok(None);
        };

        match (section.get(HOSTNAME_KEY), section.get(USERNAME_KEY)) {
            (Some(hostname), Some(username)) => {
                Ok(Some(ProjectEntry::new(shortname, hostname, username)))
            }
            _ => {
                tracing::warn!(
                    path = %self.path.display(),
                    section = shortname,
                    "section lacks hostname or username; ignoring it"
                );
                Ok(None)
            }
        }
    }
}

impl CredentialsStore for IniCredentials {
    fn append(&self, entry: &ProjectEntry) -> SyncResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut section = Ini::new();
        section
            .with_section(Some(entry.shortname.as_str()))
            .set(HOSTNAME_KEY, entry.hostname.as_str())
            .set(USERNAME_KEY, entry.username.as_str());

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;

        if needs_separator(&mut file)? {
            file.write_all(b"\n")?;
        }
        section.write_to(&mut file)?;
        file.flush()?;

        tracing::info!(
            path = %self.path.display(),
            section = %entry.shortname,
            "saved connection settings"
        );
        Ok(())
    }
}

/// True when the file has content that does not end in a newline
fn needs_separator(file: &mut std::fs::File) -> std::io::Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
