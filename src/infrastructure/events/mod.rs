//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The human-readable console view lives with the rest of the terminal UI
//! in the binary.

mod json;

pub use json::{event_json, JsonEventSink};
