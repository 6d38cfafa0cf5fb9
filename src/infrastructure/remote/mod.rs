//! Remote command execution

mod ssh;

pub use ssh::SshShell;
