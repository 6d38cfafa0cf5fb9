//! Multisite key - which `sites/<key>` directory holds a site's files
//!
//! Drupal looks for `sites/<url>` first and falls back to `sites/default`.
//! Local paths must follow the same rule.

/// Resolved multisite directory name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MultisiteKey {
    /// Site has its own `sites/<url>` directory
    Named(String),
    /// Site lives in `sites/default`
    Default,
}

impl MultisiteKey {
    /// Pick the key from the outcome of probing `sites/<url>` remotely
    pub fn from_probe(url: &str, dedicated_dir_exists: bool) -> Self {
        if dedicated_dir_exists {
            MultisiteKey::Named(url.to_string())
        } else {
            MultisiteKey::Default
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MultisiteKey::Named(name) => name,
            MultisiteKey::Default => "default",
        }
    }
}

impl std::fmt::Display for MultisiteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
