//! File System Implementations
//!
//! Concrete implementation of the LocalFiles port and home directory lookup.

mod home;
mod local;

pub use home::{require_home_dir, sitepull_home_dir, SITEPULL_TEST_HOME_VAR};
pub use local::{expand_home, ChownMode, LocalFs};
