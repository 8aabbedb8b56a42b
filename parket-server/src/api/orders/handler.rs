//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderUpdate};
use crate::db::repository::{ClientRepository, OrderRepository, ProjectRepository};
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::OverallStatus;

/// Order as served to clients: stored fields plus the derived overall
/// status, recomputed from the three sub-statuses on every read.
#[derive(Debug, Serialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub overall_status: OverallStatus,
    pub overall_rank: u8,
    pub overall_label: &'static str,
    pub overall_css: &'static str,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        let overall = OverallStatus::resolve(
            order.confirmation_status,
            order.payment_status,
            order.delivery_status,
        );
        Self {
            order,
            overall_status: overall,
            overall_rank: overall.priority_rank(),
            overall_label: overall.label(),
            overall_css: overall.css_class(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    /// Filter on the derived overall status label, e.g. `UNPAID`
    pub overall: Option<String>,
}

fn validate_payload(
    supplier: &Option<String>,
    description: &Option<String>,
    notes: &Option<String>,
    amount: Option<f64>,
) -> Result<(), AppError> {
    validate_optional_text(supplier, "supplier", MAX_NAME_LEN)?;
    validate_optional_text(description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(notes, "notes", MAX_NOTE_LEN)?;
    if let Some(a) = amount
        && a < 0.0
    {
        return Err(AppError::validation("amount must not be negative"));
    }
    Ok(())
}

/// GET /api/orders - list orders, optionally filtered by derived status
///
/// A label no order resolves to simply yields an empty list.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<Vec<OrderView>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let mut views: Vec<OrderView> = orders.into_iter().map(OrderView::from).collect();
    if let Some(filter) = &query.overall {
        views.retain(|v| v.overall_label == filter.as_str());
    }

    Ok(Json(views))
}

/// GET /api/orders/:id - get a single order with its derived status
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderView>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("id", id.clone()))?;
    Ok(Json(OrderView::from(order)))
}

/// POST /api/orders - create an order
///
/// The order number is generated when the payload does not carry one.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<OrderView>> {
    validate_payload(
        &payload.supplier,
        &payload.description,
        &payload.notes,
        payload.amount,
    )?;

    let repo = OrderRepository::new(state.db.clone());
    if let Some(number) = payload.number
        && repo
            .find_by_number(number)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .is_some()
    {
        return Err(AppError::new(ErrorCode::OrderNumberExists).with_detail("number", number));
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
    if let Some(project) = &payload.project {
        ProjectRepository::new(state.db.clone())
            .find_by_id(project)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| {
                AppError::new(ErrorCode::ProjectNotFound).with_detail("id", project.clone())
            })?;
    }

    let order = repo
        .create(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(OrderView::from(order)))
}

/// PATCH /api/orders/:id - update an order
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<OrderView>> {
    validate_payload(
        &payload.supplier,
        &payload.description,
        &payload.notes,
        payload.amount,
    )?;

    let repo = OrderRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("id", id.clone()))?;

    let order = repo
        .update(&id, payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(OrderView::from(order)))
}

/// DELETE /api/orders/:id - delete an order
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = OrderRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("id", id.clone()))?;

    repo.delete(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(true))
}
