//! Variant API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Variant, VariantCreate, VariantUpdate};
use crate::db::repository::{PhaseRepository, VariantRepository};
use crate::services::SummaryService;
use crate::services::summary::VariantSummary;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/variants/by-phase/:phase_id - list variants of a phase
pub async fn list_by_phase(
    State(state): State<ServerState>,
    Path(phase_id): Path<String>,
) -> AppResult<Json<Vec<Variant>>> {
    let repo = VariantRepository::new(state.db.clone());
    let variants = repo
        .find_by_phase(&phase_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(variants))
}

/// GET /api/variants/:id - get a single variant
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Variant>> {
    let repo = VariantRepository::new(state.db.clone());
    let variant = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::VariantNotFound).with_detail("id", id.clone()))?;
    Ok(Json(variant))
}

/// POST /api/variants - create a variant under a phase
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<VariantCreate>,
) -> AppResult<Json<Variant>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let phases = PhaseRepository::new(state.db.clone());
    phases
        .find_by_id(&payload.phase)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| {
            AppError::new(ErrorCode::PhaseNotFound).with_detail("id", payload.phase.clone())
        })?;

    let repo = VariantRepository::new(state.db.clone());
    let variant = repo
        .create(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(variant))
}

/// PATCH /api/variants/:id - update a variant
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<VariantUpdate>,
) -> AppResult<Json<Variant>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let repo = VariantRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::VariantNotFound).with_detail("id", id.clone()))?;

    let variant = repo
        .update(&id, payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(variant))
}

/// DELETE /api/variants/:id - delete a variant with its rooms and lines
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = VariantRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::VariantNotFound).with_detail("id", id.clone()))?;

    repo.delete(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(true))
}

/// GET /api/variants/:id/summary - price one variant with its rooms
pub async fn summary(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<VariantSummary>> {
    let service = SummaryService::new(state.db.clone());
    let summary = service.variant_summary(&id).await?;
    Ok(Json(summary))
}
