//! Names that flow into remote command lines and local paths
//!
//! Shortnames, branches, site urls and docroot subdirectories are
//! interpolated into ssh command lines and joined onto the local base
//! directory. They are restricted to `[A-Za-z0-9._-]`, may not start with
//! `-` and may not contain `..`.

use crate::error::{SyncError, SyncResult};

/// Why `value` is not usable as a site name, if it isn't
pub fn name_problem(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("must not be empty");
    }
    if value.starts_with('-') {
        return Some("must not start with '-'");
    }
    if value.contains("..") {
        return Some("must not contain '..'");
    }
    if !value.chars().all(is_name_char) {
        return Some("may only contain letters, digits, '.', '_' and '-'");
    }
    None
}

/// `Ok` when `value` is a usable site name, otherwise `InvalidName` for `field`
pub fn validate_name(field: &'static str, value: &str) -> SyncResult<()> {
    match name_problem(value) {
        None => Ok(()),
        Some(reason) => Err(SyncError::InvalidName {
            field,
            value: value.to_string(),
            reason,
        }),
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}
