//! Campaign domain model and in-memory registries.
//!
//! Everything here is synchronous and storage-agnostic. The `store` module
//! owns entity lifetime; `filter`, `dashboard` and `validation` are pure
//! helpers used by the HTTP service.

pub mod brand_rule;
pub mod campaign;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod ids;
pub mod patch;
pub mod specification;
pub mod store;
pub mod types;
pub mod validation;
