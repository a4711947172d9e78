use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::brand_rules;
use crate::state::AppState;

/// Brand-rule routes mounted at `/brand-rules`.
///
/// ```text
/// GET    /                -> list_brand_rules
/// POST   /                -> create_brand_rule
/// POST   /import          -> import_brand_rules
/// GET    /{id}            -> get_brand_rule
/// PUT    /{id}            -> update_brand_rule
/// DELETE /{id}            -> delete_brand_rule
/// PUT    /{id}/override   -> set_campaign_override
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(brand_rules::list_brand_rules).post(brand_rules::create_brand_rule),
        )
        .route("/import", post(brand_rules::import_brand_rules))
        .route(
            "/{id}",
            get(brand_rules::get_brand_rule)
                .put(brand_rules::update_brand_rule)
                .delete(brand_rules::delete_brand_rule),
        )
        .route("/{id}/override", put(brand_rules::set_campaign_override))
}
