pub mod brand_rules;
pub mod campaigns;
pub mod dashboard;
pub mod health;
pub mod specifications;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /campaigns                                       list, create
/// /campaigns/current                               current selection
/// /campaigns/{id}                                  get, update, delete
/// /campaigns/{id}/select                           make current (POST)
/// /campaigns/{id}/key-visuals[/{key_visual_id}]    add, update, delete
/// /campaigns/{id}/assets[/{asset_id}]              add, update, delete
/// /campaigns/{id}/channels[/{channel_id}]          add, update, delete
///
/// /specifications                                  list, create
/// /specifications/import                           bulk create (POST)
/// /specifications/{id}                             get, update, delete
///
/// /brand-rules                                     list, create
/// /brand-rules/import                              bulk create (POST)
/// /brand-rules/{id}                                get, update, delete
/// /brand-rules/{id}/override                       set campaign override (PUT)
///
/// /dashboard                                       summary counts + recent
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/campaigns", campaigns::router())
        .nest("/specifications", specifications::router())
        .nest("/brand-rules", brand_rules::router())
        .nest("/dashboard", dashboard::router())
}
