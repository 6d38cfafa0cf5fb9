//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod multisite;
mod permission_policy;
mod site_alias;
mod site_name;
mod size_limit;
mod sync_type;

pub use multisite::MultisiteKey;
pub use permission_policy::PermissionPolicy;
pub use site_alias::SiteAlias;
pub use site_name::{name_problem, validate_name};
pub use size_limit::SizeLimit;
pub use sync_type::SyncType;
