//! Invoice API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Invoice, InvoiceCreate, InvoiceUpdate};
use crate::db::repository::{ClientRepository, InvoiceRepository, OrderRepository};
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/invoices - list all invoices
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Invoice>>> {
    let repo = InvoiceRepository::new(state.db.clone());
    let invoices = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(invoices))
}

/// GET /api/invoices/by-order/:order_id - list invoices of one order
pub async fn list_by_order(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Vec<Invoice>>> {
    let repo = InvoiceRepository::new(state.db.clone());
    let invoices = repo
        .find_by_order(&order_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(invoices))
}

/// GET /api/invoices/:id - get a single invoice
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Invoice>> {
    let repo = InvoiceRepository::new(state.db.clone());
    let invoice = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::InvoiceNotFound).with_detail("id", id.clone()))?;
    Ok(Json(invoice))
}

/// POST /api/invoices - create an invoice
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InvoiceCreate>,
) -> AppResult<Json<Invoice>> {
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    if let Some(a) = payload.amount
        && a < 0.0
    {
        return Err(AppError::validation("amount must not be negative"));
    }

    let repo = InvoiceRepository::new(state.db.clone());
    if let Some(number) = payload.number
        && repo
            .find_by_number(number)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .is_some()
    {
        return Err(AppError::new(ErrorCode::InvoiceNumberExists).with_detail("number", number));
    }

    if let Some(order) = &payload.order {
        OrderRepository::new(state.db.clone())
            .find_by_id(order)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| {
                AppError::new(ErrorCode::OrderNotFound).with_detail("id", order.clone())
            })?;
    }
    if let Some(client) = &payload.client {
        ClientRepository::new(state.db.clone())
            .find_by_id(client)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| {
                AppError::new(ErrorCode::ClientNotFound).with_detail("id", client.clone())
            })?;
    }

    let invoice = repo
        .create(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(invoice))
}

/// PATCH /api/invoices/:id - update an invoice
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InvoiceUpdate>,
) -> AppResult<Json<Invoice>> {
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    if let Some(a) = payload.amount
        && a < 0.0
    {
        return Err(AppError::validation("amount must not be negative"));
    }

    let repo = InvoiceRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::InvoiceNotFound).with_detail("id", id.clone()))?;

    let invoice = repo
        .update(&id, payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(invoice))
}

/// DELETE /api/invoices/:id - delete an invoice
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = InvoiceRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::InvoiceNotFound).with_detail("id", id.clone()))?;

    repo.delete(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(true))
}
