//! Site alias value object
//!
//! The remote CMS CLI addresses an environment as `@<shortname>_<branch>`.

/// Remote site alias for a project branch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteAlias {
    shortname: String,
    branch: String,
}

impl SiteAlias {
    pub fn new(shortname: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            shortname: shortname.into(),
            branch: branch.into(),
        }
    }

    pub fn shortname(&self) -> &str {
        &self.shortname
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }
}

impl std::fmt::Display for SiteAlias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}_{}", self.shortname, self.branch)
    }
}
