//! Settings persistence

mod ini_credentials;

pub use ini_credentials::{IniCredentials, CONFIG_FILE_NAME};
