//! Interactive settings collection

mod interactive;
mod terminal;

pub use interactive::{InteractiveCredentials, DEFAULT_HOST, DEFAULT_USER};
pub use terminal::DialoguerPrompter;
