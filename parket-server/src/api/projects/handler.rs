//! Project API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Project, ProjectCreate, ProjectUpdate};
use crate::db::repository::{ClientRepository, ProjectRepository};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

fn validate_texts(
    name: Option<&String>,
    site_address: &Option<String>,
    architect: &Option<String>,
    notes: &Option<String>,
) -> Result<(), AppError> {
    if let Some(name) = name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(site_address, "site_address", MAX_ADDRESS_LEN)?;
    validate_optional_text(architect, "architect", MAX_NAME_LEN)?;
    validate_optional_text(notes, "notes", MAX_NOTE_LEN)?;
    Ok(())
}

/// GET /api/projects - list all projects
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Project>>> {
    let repo = ProjectRepository::new(state.db.clone());
    let projects = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(projects))
}

/// GET /api/projects/by-client/:client_id - list projects of one client
pub async fn list_by_client(
    State(state): State<ServerState>,
    Path(client_id): Path<String>,
) -> AppResult<Json<Vec<Project>>> {
    let repo = ProjectRepository::new(state.db.clone());
    let projects = repo
        .find_by_client(&client_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(projects))
}

/// GET /api/projects/:id - get a single project
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let repo = ProjectRepository::new(state.db.clone());
    let project = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::ProjectNotFound).with_detail("id", id.clone()))?;
    Ok(Json(project))
}

/// POST /api/projects - create a project under a client
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProjectCreate>,
) -> AppResult<Json<Project>> {
    validate_texts(
        Some(&payload.name),
        &payload.site_address,
        &payload.architect,
        &payload.notes,
    )?;

    let clients = ClientRepository::new(state.db.clone());
    clients
        .find_by_id(&payload.client)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| {
            AppError::new(ErrorCode::ClientNotFound).with_detail("id", payload.client.clone())
        })?;

    let repo = ProjectRepository::new(state.db.clone());
    let project = repo
        .create(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(project))
}

/// PATCH /api/projects/:id - update a project
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProjectUpdate>,
) -> AppResult<Json<Project>> {
    validate_texts(
        payload.name.as_ref(),
        &payload.site_address,
        &payload.architect,
        &payload.notes,
    )?;

    let repo = ProjectRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::ProjectNotFound).with_detail("id", id.clone()))?;

    let project = repo
        .update(&id, payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(project))
}

/// DELETE /api/projects/:id - delete a project and its whole tree
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ProjectRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::ProjectNotFound).with_detail("id", id.clone()))?;

    repo.delete(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(true))
}
