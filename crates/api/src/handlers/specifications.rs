//! Handlers for the channel specification library.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use campaignhub_core::filter::SpecificationFilter;
use campaignhub_core::specification::{SpecificationInput, SpecificationUpdate};
use campaignhub_core::validation;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/specifications
pub async fn list_specifications(
    State(state): State<AppState>,
    Query(filter): Query<SpecificationFilter>,
) -> AppResult<impl IntoResponse> {
    let registry = state.specifications.read().await;
    let specs: Vec<_> = filter.apply(registry.list()).into_iter().cloned().collect();

    Ok(Json(DataResponse { data: specs }))
}

/// POST /api/v1/specifications
pub async fn create_specification(
    State(state): State<AppState>,
    Json(input): Json<SpecificationInput>,
) -> AppResult<impl IntoResponse> {
    validation::validate_specification_input(&input)?;

    let mut registry = state.specifications.write().await;
    let id = registry.add(input);
    let spec = registry.get(&id).cloned().ok_or_else(|| {
        AppError::InternalError(format!("Specification {id} vanished after create"))
    })?;

    tracing::info!(specification_id = %id, name = %spec.name, "Specification created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: spec })))
}

/// POST /api/v1/specifications/import
///
/// Bulk create. Either every entry is valid and all are added in input
/// order, or nothing is added.
pub async fn import_specifications(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<SpecificationInput>>,
) -> AppResult<impl IntoResponse> {
    for (index, input) in inputs.iter().enumerate() {
        validation::validate_specification_input(input)
            .map_err(|e| AppError::BadRequest(format!("Entry {index}: {e}")))?;
    }

    let mut registry = state.specifications.write().await;
    let ids = registry.import(inputs);
    let specs: Vec<_> = ids.iter().filter_map(|id| registry.get(id)).cloned().collect();

    tracing::info!(count = specs.len(), "Specifications imported");

    Ok((StatusCode::CREATED, Json(DataResponse { data: specs })))
}

/// GET /api/v1/specifications/{id}
pub async fn get_specification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let registry = state.specifications.read().await;
    let spec = registry
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Specification", &id))?;

    Ok(Json(DataResponse { data: spec }))
}

/// PUT /api/v1/specifications/{id}
///
/// Campaign channels hold copies, so existing channel formats are unaffected.
pub async fn update_specification(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<SpecificationUpdate>,
) -> AppResult<impl IntoResponse> {
    validation::validate_specification_update(&update)?;

    let mut registry = state.specifications.write().await;
    let spec = registry
        .update(&id, update)
        .cloned()
        .ok_or_else(|| AppError::not_found("Specification", &id))?;

    tracing::info!(specification_id = %id, "Specification updated");

    Ok(Json(DataResponse { data: spec }))
}

/// DELETE /api/v1/specifications/{id}
pub async fn delete_specification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !state.specifications.write().await.delete(&id) {
        return Err(AppError::not_found("Specification", &id));
    }

    tracing::info!(specification_id = %id, "Specification deleted");

    Ok(StatusCode::NO_CONTENT)
}
