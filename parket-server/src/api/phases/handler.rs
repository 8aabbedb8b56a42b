//! Phase API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Phase, PhaseCreate, PhaseUpdate};
use crate::db::repository::{PhaseRepository, ProjectRepository};
use crate::services::SummaryService;
use crate::services::summary::PhaseSummary;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/phases/by-project/:project_id - list phases of a project
///
/// Ordered by `sort_order`.
pub async fn list_by_project(
    State(state): State<ServerState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Vec<Phase>>> {
    let repo = PhaseRepository::new(state.db.clone());
    let phases = repo
        .find_by_project(&project_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(phases))
}

/// GET /api/phases/:id - get a single phase
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Phase>> {
    let repo = PhaseRepository::new(state.db.clone());
    let phase = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::PhaseNotFound).with_detail("id", id.clone()))?;
    Ok(Json(phase))
}

/// POST /api/phases - create a phase under a project
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PhaseCreate>,
) -> AppResult<Json<Phase>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let projects = ProjectRepository::new(state.db.clone());
    projects
        .find_by_id(&payload.project)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| {
            AppError::new(ErrorCode::ProjectNotFound).with_detail("id", payload.project.clone())
        })?;

    let repo = PhaseRepository::new(state.db.clone());
    let phase = repo
        .create(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(phase))
}

/// PATCH /api/phases/:id - update a phase
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PhaseUpdate>,
) -> AppResult<Json<Phase>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let repo = PhaseRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::PhaseNotFound).with_detail("id", id.clone()))?;

    let phase = repo
        .update(&id, payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(phase))
}

/// DELETE /api/phases/:id - delete a phase and everything under it
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = PhaseRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::PhaseNotFound).with_detail("id", id.clone()))?;

    repo.delete(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(true))
}

/// GET /api/phases/:id/summary - price the whole phase tree
pub async fn summary(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<PhaseSummary>> {
    let service = SummaryService::new(state.db.clone());
    let summary = service.phase_summary(&id).await?;
    Ok(Json(summary))
}
