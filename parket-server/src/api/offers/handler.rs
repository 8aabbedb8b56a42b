//! Offer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Offer, OfferCreate, OfferUpdate};
use crate::db::repository::{OfferRepository, PhaseRepository};
use crate::services::SummaryService;
use crate::services::summary::OfferSummary;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/offers - list all offers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Offer>>> {
    let repo = OfferRepository::new(state.db.clone());
    let offers = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(offers))
}

/// GET /api/offers/:id - get a single offer header
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Offer>> {
    let repo = OfferRepository::new(state.db.clone());
    let offer = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::OfferNotFound).with_detail("id", id.clone()))?;
    Ok(Json(offer))
}

/// POST /api/offers - create an offer for a phase
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OfferCreate>,
) -> AppResult<Json<Offer>> {
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let phases = PhaseRepository::new(state.db.clone());
    phases
        .find_by_id(&payload.phase)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| {
            AppError::new(ErrorCode::PhaseNotFound).with_detail("id", payload.phase.clone())
        })?;

    let repo = OfferRepository::new(state.db.clone());
    if let Some(number) = payload.number
        && repo
            .find_by_number(number)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .is_some()
    {
        return Err(AppError::new(ErrorCode::OfferNumberExists).with_detail("number", number));
    }

    let offer = repo
        .create(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(offer))
}

/// PATCH /api/offers/:id - update offer header fields
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OfferUpdate>,
) -> AppResult<Json<Offer>> {
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let repo = OfferRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::OfferNotFound).with_detail("id", id.clone()))?;

    let offer = repo
        .update(&id, payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(offer))
}

/// DELETE /api/offers/:id - delete an offer
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = OfferRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::OfferNotFound).with_detail("id", id.clone()))?;

    repo.delete(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(true))
}

/// GET /api/offers/:id/summary - offer header plus freshly priced phase
pub async fn summary(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OfferSummary>> {
    let service = SummaryService::new(state.db.clone());
    let summary = service.offer_summary(&id).await?;
    Ok(Json(summary))
}
