//! Ownership and mode policy for a synced files tree
//!
//! The web server group must be able to write uploads, and new entries must
//! inherit the group, hence setgid on both directories and files.

/// Owner, group and modes applied after a files sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionPolicy {
    pub owner: String,
    pub group: String,
    pub dir_mode: u32,
    pub file_mode: u32,
}

impl PermissionPolicy {
    pub const DEFAULT_OWNER: &'static str = "vagrant";
    pub const DEFAULT_GROUP: &'static str = "www-data";
    pub const DIR_MODE: u32 = 0o2775;
    pub const FILE_MODE: u32 = 0o2664;

    pub fn new(owner: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            group: group.into(),
            dir_mode: Self::DIR_MODE,
            file_mode: Self::FILE_MODE,
        }
    }

    /// `owner:group` as passed to chown
    pub fn chown_spec(&self) -> String {
        format!("{}:{}", self.owner, self.group)
    }
}

impl Default for PermissionPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OWNER, Self::DEFAULT_GROUP)
    }
}
