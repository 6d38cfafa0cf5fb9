//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions and their mapping onto a `SyncRequest`
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! Terminal rendering lives in the binary's `ui` module.

pub mod cli;
pub mod factory;

pub use cli::{ChownWhen, Cli, ColorWhen};
pub use factory::PullRuntime;
