//! Handlers for campaigns and their key visuals, assets and channels.
//!
//! Every nested endpoint addresses the owning campaign first; a missing
//! campaign and a missing child both surface as 404.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use campaignhub_core::campaign::{
    AssetInput, AssetUpdate, CampaignInput, CampaignUpdate, ChannelInput, ChannelUpdate,
    KeyVisualInput, KeyVisualUpdate,
};
use campaignhub_core::filter::CampaignFilter;
use campaignhub_core::validation;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

/// GET /api/v1/campaigns
///
/// List campaigns in creation order, optionally filtered by `search` (name
/// substring) and `objective` (primary or secondary).
pub async fn list_campaigns(
    State(state): State<AppState>,
    Query(filter): Query<CampaignFilter>,
) -> AppResult<impl IntoResponse> {
    let registry = state.campaigns.read().await;
    let campaigns: Vec<_> = filter.apply(registry.list()).into_iter().cloned().collect();

    Ok(Json(DataResponse { data: campaigns }))
}

/// POST /api/v1/campaigns
///
/// Create a campaign. The new campaign becomes the current one.
pub async fn create_campaign(
    State(state): State<AppState>,
    Json(input): Json<CampaignInput>,
) -> AppResult<impl IntoResponse> {
    validation::validate_campaign_input(&input)?;

    let mut registry = state.campaigns.write().await;
    let id = registry.create(input);
    let campaign = registry
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::InternalError(format!("Campaign {id} vanished after create")))?;

    tracing::info!(campaign_id = %id, name = %campaign.name, "Campaign created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: campaign })))
}

/// GET /api/v1/campaigns/current
///
/// Returns 204 when no campaign is selected.
pub async fn get_current_campaign(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let registry = state.campaigns.read().await;

    match registry.current() {
        Some(c) => Ok(Json(DataResponse { data: c.clone() }).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// GET /api/v1/campaigns/{id}
pub async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let registry = state.campaigns.read().await;
    let campaign = registry
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Campaign", &id))?;

    Ok(Json(DataResponse { data: campaign }))
}

/// PUT /api/v1/campaigns/{id}
///
/// Shallow merge of the supplied top-level fields. Owned collections are
/// managed through the nested endpoints.
pub async fn update_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<CampaignUpdate>,
) -> AppResult<impl IntoResponse> {
    validation::validate_campaign_update(&update)?;

    let mut registry = state.campaigns.write().await;
    let campaign = registry
        .update(&id, update)
        .cloned()
        .ok_or_else(|| AppError::not_found("Campaign", &id))?;

    tracing::info!(campaign_id = %id, "Campaign updated");

    Ok(Json(DataResponse { data: campaign }))
}

/// DELETE /api/v1/campaigns/{id}
///
/// Removes the campaign with everything it owns.
pub async fn delete_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !state.campaigns.write().await.delete(&id) {
        return Err(AppError::not_found("Campaign", &id));
    }

    tracing::info!(campaign_id = %id, "Campaign deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/campaigns/{id}/select
///
/// Make the campaign current. An unknown id clears the selection and
/// returns 404.
pub async fn select_campaign(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut registry = state.campaigns.write().await;
    let campaign = registry
        .set_current(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Campaign", &id))?;

    tracing::info!(campaign_id = %id, "Campaign selected");

    Ok(Json(DataResponse { data: campaign }))
}

// ---------------------------------------------------------------------------
// Key visuals
// ---------------------------------------------------------------------------

/// POST /api/v1/campaigns/{id}/key-visuals
pub async fn add_key_visual(
    State(state): State<AppState>,
    Path(campaign_id): Path<String>,
    Json(input): Json<KeyVisualInput>,
) -> AppResult<impl IntoResponse> {
    validation::validate_key_visual_input(&input)?;

    let mut registry = state.campaigns.write().await;
    let id = registry
        .add_key_visual(&campaign_id, input)
        .ok_or_else(|| AppError::not_found("Campaign", &campaign_id))?;
    let key_visual = registry
        .get(&campaign_id)
        .and_then(|c| c.key_visual(&id))
        .cloned()
        .ok_or_else(|| AppError::InternalError(format!("Key visual {id} vanished after add")))?;

    tracing::info!(%campaign_id, key_visual_id = %id, "Key visual added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: key_visual })))
}

/// PUT /api/v1/campaigns/{id}/key-visuals/{key_visual_id}
pub async fn update_key_visual(
    State(state): State<AppState>,
    Path((campaign_id, key_visual_id)): Path<(String, String)>,
    Json(update): Json<KeyVisualUpdate>,
) -> AppResult<impl IntoResponse> {
    let mut registry = state.campaigns.write().await;
    let campaign = registry
        .get(&campaign_id)
        .ok_or_else(|| AppError::not_found("Campaign", &campaign_id))?;
    let current = campaign
        .key_visual(&key_visual_id)
        .ok_or_else(|| AppError::not_found("KeyVisual", &key_visual_id))?;
    validation::validate_key_visual_update(current, &update)?;

    let key_visual = registry
        .update_key_visual(&campaign_id, &key_visual_id, update)
        .cloned()
        .ok_or_else(|| AppError::not_found("KeyVisual", &key_visual_id))?;

    tracing::info!(%campaign_id, %key_visual_id, "Key visual updated");

    Ok(Json(DataResponse { data: key_visual }))
}

/// DELETE /api/v1/campaigns/{id}/key-visuals/{key_visual_id}
pub async fn delete_key_visual(
    State(state): State<AppState>,
    Path((campaign_id, key_visual_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let mut registry = state.campaigns.write().await;
    if registry.get(&campaign_id).is_none() {
        return Err(AppError::not_found("Campaign", &campaign_id));
    }
    if !registry.delete_key_visual(&campaign_id, &key_visual_id) {
        return Err(AppError::not_found("KeyVisual", &key_visual_id));
    }

    tracing::info!(%campaign_id, %key_visual_id, "Key visual deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// POST /api/v1/campaigns/{id}/assets
///
/// New assets start at version 1.
pub async fn add_asset(
    State(state): State<AppState>,
    Path(campaign_id): Path<String>,
    Json(input): Json<AssetInput>,
) -> AppResult<impl IntoResponse> {
    validation::validate_name("Asset", &input.name)?;

    let mut registry = state.campaigns.write().await;
    let id = registry
        .add_asset(&campaign_id, input)
        .ok_or_else(|| AppError::not_found("Campaign", &campaign_id))?;
    let asset = registry
        .get(&campaign_id)
        .and_then(|c| c.asset(&id))
        .cloned()
        .ok_or_else(|| AppError::InternalError(format!("Asset {id} vanished after add")))?;

    tracing::info!(%campaign_id, asset_id = %id, "Asset added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// PUT /api/v1/campaigns/{id}/assets/{asset_id}
///
/// Every successful update bumps the asset version.
pub async fn update_asset(
    State(state): State<AppState>,
    Path((campaign_id, asset_id)): Path<(String, String)>,
    Json(update): Json<AssetUpdate>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &update.name {
        validation::validate_name("Asset", name)?;
    }

    let mut registry = state.campaigns.write().await;
    if registry.get(&campaign_id).is_none() {
        return Err(AppError::not_found("Campaign", &campaign_id));
    }
    let asset = registry
        .update_asset(&campaign_id, &asset_id, update)
        .cloned()
        .ok_or_else(|| AppError::not_found("Asset", &asset_id))?;

    tracing::info!(%campaign_id, %asset_id, version = asset.version, "Asset updated");

    Ok(Json(DataResponse { data: asset }))
}

/// DELETE /api/v1/campaigns/{id}/assets/{asset_id}
pub async fn delete_asset(
    State(state): State<AppState>,
    Path((campaign_id, asset_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let mut registry = state.campaigns.write().await;
    if registry.get(&campaign_id).is_none() {
        return Err(AppError::not_found("Campaign", &campaign_id));
    }
    if !registry.delete_asset(&campaign_id, &asset_id) {
        return Err(AppError::not_found("Asset", &asset_id));
    }

    tracing::info!(%campaign_id, %asset_id, "Asset deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

/// POST /api/v1/campaigns/{id}/channels
///
/// Formats without an id get one assigned.
pub async fn add_channel(
    State(state): State<AppState>,
    Path(campaign_id): Path<String>,
    Json(input): Json<ChannelInput>,
) -> AppResult<impl IntoResponse> {
    let mut registry = state.campaigns.write().await;
    let id = registry
        .add_channel(&campaign_id, input)
        .ok_or_else(|| AppError::not_found("Campaign", &campaign_id))?;
    let channel = registry
        .get(&campaign_id)
        .and_then(|c| c.channel(&id))
        .cloned()
        .ok_or_else(|| AppError::InternalError(format!("Channel {id} vanished after add")))?;

    tracing::info!(%campaign_id, channel_id = %id, formats = channel.formats.len(), "Channel added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: channel })))
}

/// PUT /api/v1/campaigns/{id}/channels/{channel_id}
pub async fn update_channel(
    State(state): State<AppState>,
    Path((campaign_id, channel_id)): Path<(String, String)>,
    Json(update): Json<ChannelUpdate>,
) -> AppResult<impl IntoResponse> {
    let mut registry = state.campaigns.write().await;
    if registry.get(&campaign_id).is_none() {
        return Err(AppError::not_found("Campaign", &campaign_id));
    }
    let channel = registry
        .update_channel(&campaign_id, &channel_id, update)
        .cloned()
        .ok_or_else(|| AppError::not_found("Channel", &channel_id))?;

    tracing::info!(%campaign_id, %channel_id, "Channel updated");

    Ok(Json(DataResponse { data: channel }))
}

/// DELETE /api/v1/campaigns/{id}/channels/{channel_id}
pub async fn delete_channel(
    State(state): State<AppState>,
    Path((campaign_id, channel_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let mut registry = state.campaigns.write().await;
    if registry.get(&campaign_id).is_none() {
        return Err(AppError::not_found("Campaign", &campaign_id));
    }
    if !registry.delete_channel(&campaign_id, &channel_id) {
        return Err(AppError::not_found("Channel", &channel_id));
    }

    tracing::info!(%campaign_id, %channel_id, "Channel deleted");

    Ok(StatusCode::NO_CONTENT)
}
