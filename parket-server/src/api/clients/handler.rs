//! Client API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Client, ClientCreate, ClientUpdate};
use crate::db::repository::ClientRepository;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

fn validate_create(payload: &ClientCreate) -> Result<(), AppError> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.contact_person, "contact_person", MAX_NAME_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    Ok(())
}

fn validate_update(payload: &ClientUpdate) -> Result<(), AppError> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.contact_person, "contact_person", MAX_NAME_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    Ok(())
}

/// GET /api/clients - list all clients
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Client>>> {
    let repo = ClientRepository::new(state.db.clone());
    let clients = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(clients))
}

/// GET /api/clients/:id - get a single client
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Client>> {
    let repo = ClientRepository::new(state.db.clone());
    let client = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound).with_detail("id", id.clone()))?;
    Ok(Json(client))
}

/// POST /api/clients - create a client
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ClientCreate>,
) -> AppResult<Json<Client>> {
    validate_create(&payload)?;

    let repo = ClientRepository::new(state.db.clone());
    if repo
        .find_by_name(&payload.name)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .is_some()
    {
        return Err(
            AppError::new(ErrorCode::ClientNameExists).with_detail("name", payload.name.clone())
        );
    }

    let client = repo
        .create(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(client))
}

/// PATCH /api/clients/:id - update a client
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ClientUpdate>,
) -> AppResult<Json<Client>> {
    validate_update(&payload)?;

    let repo = ClientRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound).with_detail("id", id.clone()))?;

    if let Some(name) = &payload.name
        && let Some(other) = repo
            .find_by_name(name)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
        && other.id != existing.id
    {
        return Err(AppError::new(ErrorCode::ClientNameExists).with_detail("name", name.clone()));
    }

    let client = repo
        .update(&id, payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(client))
}

/// DELETE /api/clients/:id - delete a client
///
/// Refused while the client still has projects.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ClientRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound).with_detail("id", id.clone()))?;

    if repo
        .has_projects(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
    {
        return Err(AppError::new(ErrorCode::ClientHasProjects).with_detail("id", id.clone()));
    }

    repo.delete(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(true))
}
