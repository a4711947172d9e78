//! In-memory registries.
//!
//! Each registry owns the lifetime of its entities and keeps them in
//! insertion order. Mutations take `&mut self`; callers that share a
//! registry across tasks wrap it in their own lock.
//!
//! Operations that reference a missing identifier leave the registry
//! untouched and report it through the return value (`None` / `false`).

pub mod brand_rules;
pub mod campaigns;
pub mod snapshot;
pub mod specifications;

pub use brand_rules::BrandRuleRegistry;
pub use campaigns::CampaignRegistry;
pub use snapshot::Snapshot;
pub use specifications::SpecificationRegistry;
