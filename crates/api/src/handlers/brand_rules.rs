//! Handlers for brand-compliance rules.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use campaignhub_core::brand_rule::{BrandRuleInput, BrandRuleUpdate};
use campaignhub_core::filter::BrandRuleFilter;
use campaignhub_core::validation;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /brand-rules/{id}/override`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideRequest {
    pub campaign_override: bool,
}

/// GET /api/v1/brand-rules
///
/// Filter by `search` (name or description substring) and `category`.
pub async fn list_brand_rules(
    State(state): State<AppState>,
    Query(filter): Query<BrandRuleFilter>,
) -> AppResult<impl IntoResponse> {
    let registry = state.brand_rules.read().await;
    let rules: Vec<_> = filter.apply(registry.list()).into_iter().cloned().collect();

    Ok(Json(DataResponse { data: rules }))
}

/// POST /api/v1/brand-rules
pub async fn create_brand_rule(
    State(state): State<AppState>,
    Json(input): Json<BrandRuleInput>,
) -> AppResult<impl IntoResponse> {
    validation::validate_brand_rule_input(&input)?;

    let mut registry = state.brand_rules.write().await;
    let id = registry.add(input);
    let rule = registry.get(&id).cloned().ok_or_else(|| {
        AppError::InternalError(format!("Brand rule {id} vanished after create"))
    })?;

    tracing::info!(
        brand_rule_id = %id,
        category = rule.category.as_str(),
        "Brand rule created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: rule })))
}

/// POST /api/v1/brand-rules/import
///
/// All-or-nothing bulk create preserving input order.
pub async fn import_brand_rules(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<BrandRuleInput>>,
) -> AppResult<impl IntoResponse> {
    for (index, input) in inputs.iter().enumerate() {
        validation::validate_brand_rule_input(input)
            .map_err(|e| AppError::BadRequest(format!("Entry {index}: {e}")))?;
    }

    let mut registry = state.brand_rules.write().await;
    let ids = registry.import(inputs);
    let rules: Vec<_> = ids.iter().filter_map(|id| registry.get(id)).cloned().collect();

    tracing::info!(count = rules.len(), "Brand rules imported");

    Ok((StatusCode::CREATED, Json(DataResponse { data: rules })))
}

/// GET /api/v1/brand-rules/{id}
pub async fn get_brand_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let registry = state.brand_rules.read().await;
    let rule = registry
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found("BrandRule", &id))?;

    Ok(Json(DataResponse { data: rule }))
}

/// PUT /api/v1/brand-rules/{id}
///
/// Supplied `parameters` replace the stored map wholesale. Whichever map the
/// rule ends up with is checked against its post-update category.
pub async fn update_brand_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<BrandRuleUpdate>,
) -> AppResult<impl IntoResponse> {
    let mut registry = state.brand_rules.write().await;
    let current = registry
        .get(&id)
        .ok_or_else(|| AppError::not_found("BrandRule", &id))?;
    validation::validate_brand_rule_update(
        &update,
        update.category.unwrap_or(current.category),
        &current.parameters,
    )?;

    let rule = registry
        .update(&id, update)
        .cloned()
        .ok_or_else(|| AppError::not_found("BrandRule", &id))?;

    tracing::info!(brand_rule_id = %id, "Brand rule updated");

    Ok(Json(DataResponse { data: rule }))
}

/// DELETE /api/v1/brand-rules/{id}
pub async fn delete_brand_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !state.brand_rules.write().await.delete(&id) {
        return Err(AppError::not_found("BrandRule", &id));
    }

    tracing::info!(brand_rule_id = %id, "Brand rule deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/brand-rules/{id}/override
///
/// Set whether campaigns may override this rule.
pub async fn set_campaign_override(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<OverrideRequest>,
) -> AppResult<impl IntoResponse> {
    let mut registry = state.brand_rules.write().await;
    let rule = registry
        .set_campaign_override(&id, body.campaign_override)
        .cloned()
        .ok_or_else(|| AppError::not_found("BrandRule", &id))?;

    tracing::info!(
        brand_rule_id = %id,
        campaign_override = body.campaign_override,
        "Brand rule override set",
    );

    Ok(Json(DataResponse { data: rule }))
}
