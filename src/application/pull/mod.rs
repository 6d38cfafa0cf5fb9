//! Pull Module
//!
//! Composes settings resolution with the database and files pipelines.

mod use_case;

pub use use_case::{PullOutcome, PullUseCase};

#[cfg(test)]
mod tests;
