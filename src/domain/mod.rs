//! Domain Layer
//!
//! Pure types and interfaces for pulling a site; no I/O.
//!
//! ## Structure
//!
//! - `entities/` - Project settings, request and run context
//! - `value_objects/` - Sync type, site alias, multisite key, size limit, permission policy
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod value_objects;
