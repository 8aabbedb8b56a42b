//! Room line item API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{RoomProduct, RoomProductCreate, RoomProductUpdate};
use crate::db::repository::{RepoError, RoomProductRepository, RoomRepository};
use crate::utils::validation::{
    MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

fn validate_texts(
    description: &Option<String>,
    unit: &Option<String>,
) -> Result<(), AppError> {
    validate_optional_text(description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(unit, "unit", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

/// GET /api/room-products/by-room/:room_id - list line items of a room
pub async fn list_by_room(
    State(state): State<ServerState>,
    Path(room_id): Path<String>,
) -> AppResult<Json<Vec<RoomProduct>>> {
    let repo = RoomProductRepository::new(state.db.clone());
    let lines = repo
        .find_by_room(&room_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(lines))
}

/// GET /api/room-products/:id - get a single line item
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<RoomProduct>> {
    let repo = RoomProductRepository::new(state.db.clone());
    let line = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| {
            AppError::new(ErrorCode::RoomProductNotFound).with_detail("id", id.clone())
        })?;
    Ok(Json(line))
}

/// POST /api/room-products - add a line item to a room
///
/// A referenced catalog product fills in description, unit and unit
/// price for any of those fields the payload leaves empty.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoomProductCreate>,
) -> AppResult<Json<RoomProduct>> {
    validate_texts(&payload.description, &payload.unit)?;

    let rooms = RoomRepository::new(state.db.clone());
    rooms
        .find_by_id(&payload.room)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| {
            AppError::new(ErrorCode::RoomNotFound).with_detail("id", payload.room.clone())
        })?;

    let repo = RoomProductRepository::new(state.db.clone());
    let line = repo.create(payload).await.map_err(|e| match e {
        RepoError::NotFound(msg) => {
            AppError::new(ErrorCode::ProductNotFound).with_detail("message", msg)
        }
        other => AppError::database(other.to_string()),
    })?;

    Ok(Json(line))
}

/// PATCH /api/room-products/:id - update a line item
///
/// Only the stored snapshot changes; the catalog is never re-read.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RoomProductUpdate>,
) -> AppResult<Json<RoomProduct>> {
    validate_texts(&payload.description, &payload.unit)?;

    let repo = RoomProductRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| {
            AppError::new(ErrorCode::RoomProductNotFound).with_detail("id", id.clone())
        })?;

    let line = repo
        .update(&id, payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(line))
}

/// DELETE /api/room-products/:id - remove a line item
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = RoomProductRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| {
            AppError::new(ErrorCode::RoomProductNotFound).with_detail("id", id.clone())
        })?;

    repo.delete(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(true))
}
