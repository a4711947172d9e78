//! Query parameter types shared by API handlers.
//!
//! List filters come straight from `campaignhub_core::filter`; this module
//! holds the ones that only make sense at the HTTP layer.

use serde::Deserialize;

/// `?limit=` for endpoints that return a bounded "recent" list.
#[derive(Debug, Default, Deserialize)]
pub struct RecentParams {
    pub limit: Option<usize>,
}
