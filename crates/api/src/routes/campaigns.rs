//! Route definitions for campaigns and the entities they own.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::campaigns;
use crate::state::AppState;

/// Campaign routes mounted at `/campaigns`.
///
/// ```text
/// GET    /                                   -> list_campaigns
/// POST   /                                   -> create_campaign
/// GET    /current                            -> get_current_campaign
/// GET    /{id}                               -> get_campaign
/// PUT    /{id}                               -> update_campaign
/// DELETE /{id}                               -> delete_campaign
/// POST   /{id}/select                        -> select_campaign
/// POST   /{id}/key-visuals                   -> add_key_visual
/// PUT    /{id}/key-visuals/{key_visual_id}   -> update_key_visual
/// DELETE /{id}/key-visuals/{key_visual_id}   -> delete_key_visual
/// POST   /{id}/assets                        -> add_asset
/// PUT    /{id}/assets/{asset_id}             -> update_asset
/// DELETE /{id}/assets/{asset_id}             -> delete_asset
/// POST   /{id}/channels                      -> add_channel
/// PUT    /{id}/channels/{channel_id}         -> update_channel
/// DELETE /{id}/channels/{channel_id}         -> delete_channel
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(campaigns::list_campaigns).post(campaigns::create_campaign),
        )
        .route("/current", get(campaigns::get_current_campaign))
        .route(
            "/{id}",
            get(campaigns::get_campaign)
                .put(campaigns::update_campaign)
                .delete(campaigns::delete_campaign),
        )
        .route("/{id}/select", post(campaigns::select_campaign))
        .route("/{id}/key-visuals", post(campaigns::add_key_visual))
        .route(
            "/{id}/key-visuals/{key_visual_id}",
            put(campaigns::update_key_visual).delete(campaigns::delete_key_visual),
        )
        .route("/{id}/assets", post(campaigns::add_asset))
        .route(
            "/{id}/assets/{asset_id}",
            put(campaigns::update_asset).delete(campaigns::delete_asset),
        )
        .route("/{id}/channels", post(campaigns::add_channel))
        .route(
            "/{id}/channels/{channel_id}",
            put(campaigns::update_channel).delete(campaigns::delete_channel),
        )
}
