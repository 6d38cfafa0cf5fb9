//! Terminal output for the sitepull binary
//!
//! Colors, icons and capability detection, plus the pull progress view.

pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
