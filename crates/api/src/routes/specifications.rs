use axum::routing::{get, post};
use axum::Router;

use crate::handlers::specifications;
use crate::state::AppState;

/// Specification routes mounted at `/specifications`.
///
/// ```text
/// GET    /          -> list_specifications
/// POST   /          -> create_specification
/// POST   /import    -> import_specifications
/// GET    /{id}      -> get_specification
/// PUT    /{id}      -> update_specification
/// DELETE /{id}      -> delete_specification
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(specifications::list_specifications).post(specifications::create_specification),
        )
        .route("/import", post(specifications::import_specifications))
        .route(
            "/{id}",
            get(specifications::get_specification)
                .put(specifications::update_specification)
                .delete(specifications::delete_specification),
        )
}
