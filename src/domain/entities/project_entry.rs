//! Project connection settings

/// Host and user to pull a project from, keyed by shortname
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub shortname: String,
    pub hostname: String,
    pub username: String,
}

impl ProjectEntry {
    pub fn new(
        shortname: impl Into<String>,
        hostname: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            shortname: shortname.into(),
            hostname: hostname.into(),
            username: username.into(),
        }
    }
}
