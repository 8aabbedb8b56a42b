//! Room API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Room, RoomCreate, RoomUpdate};
use crate::db::repository::{RoomRepository, VariantRepository};
use crate::services::SummaryService;
use crate::services::summary::RoomSummary;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/rooms/by-variant/:variant_id - list rooms of a variant
pub async fn list_by_variant(
    State(state): State<ServerState>,
    Path(variant_id): Path<String>,
) -> AppResult<Json<Vec<Room>>> {
    let repo = RoomRepository::new(state.db.clone());
    let rooms = repo
        .find_by_variant(&variant_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(rooms))
}

/// GET /api/rooms/:id - get a single room
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Room>> {
    let repo = RoomRepository::new(state.db.clone());
    let room = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::RoomNotFound).with_detail("id", id.clone()))?;
    Ok(Json(room))
}

/// POST /api/rooms - create a room under a variant
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<Json<Room>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let variants = VariantRepository::new(state.db.clone());
    variants
        .find_by_id(&payload.variant)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| {
            AppError::new(ErrorCode::VariantNotFound).with_detail("id", payload.variant.clone())
        })?;

    let repo = RoomRepository::new(state.db.clone());
    let room = repo
        .create(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(room))
}

/// PATCH /api/rooms/:id - update a room
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RoomUpdate>,
) -> AppResult<Json<Room>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let repo = RoomRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::RoomNotFound).with_detail("id", id.clone()))?;

    let room = repo
        .update(&id, payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(room))
}

/// DELETE /api/rooms/:id - delete a room and its line items
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = RoomRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::RoomNotFound).with_detail("id", id.clone()))?;

    repo.delete(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(true))
}

/// GET /api/rooms/:id/summary - price one room's line items
pub async fn summary(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<RoomSummary>> {
    let service = SummaryService::new(state.db.clone());
    let summary = service.room_summary(&id).await?;
    Ok(Json(summary))
}
