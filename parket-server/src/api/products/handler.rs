//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::db::repository::ProductRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

fn validate_prices(
    cost_eur: Option<f64>,
    cost_bgn: Option<f64>,
    sale_bgn: Option<f64>,
    sale_eur: Option<f64>,
    markup: Option<f64>,
) -> Result<(), AppError> {
    let fields = [
        ("cost_eur", cost_eur),
        ("cost_bgn", cost_bgn),
        ("sale_bgn", sale_bgn),
        ("sale_eur", sale_eur),
        ("markup", markup),
    ];
    for (field, value) in fields {
        if let Some(v) = value
            && v < 0.0
        {
            return Err(AppError::new(ErrorCode::ProductInvalidPrice)
                .with_detail("field", field)
                .with_detail("value", v));
        }
    }
    Ok(())
}

/// GET /api/products - list the whole catalog
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(products))
}

/// GET /api/products/:id - get a single product
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id.clone()))?;
    Ok(Json(product))
}

/// GET /api/products/by-code/:code - look a product up by its code
pub async fn get_by_code(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_code(&code)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| {
            AppError::new(ErrorCode::ProductNotFound).with_detail("code", code.clone())
        })?;
    Ok(Json(product))
}

/// POST /api/products - create a catalog product
///
/// Missing cost and sale fields are derived once at this point: the
/// other currency via the fixed rate, the sale price via the markup.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    validate_required_text(&payload.code, "code", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.manufacturer, "manufacturer", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.category, "category", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.unit, "unit", MAX_SHORT_TEXT_LEN)?;
    validate_prices(
        payload.cost_eur,
        payload.cost_bgn,
        payload.sale_bgn,
        payload.sale_eur,
        payload.markup,
    )?;

    let repo = ProductRepository::new(state.db.clone());
    if repo
        .find_by_code(&payload.code)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .is_some()
    {
        return Err(
            AppError::new(ErrorCode::ProductCodeExists).with_detail("code", payload.code.clone())
        );
    }

    let product = repo
        .create(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(product))
}

/// PATCH /api/products/:id - update a product
///
/// Stored values change as sent; nothing is re-derived here.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    if let Some(code) = &payload.code {
        validate_required_text(code, "code", MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.manufacturer, "manufacturer", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.category, "category", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.unit, "unit", MAX_SHORT_TEXT_LEN)?;
    validate_prices(
        payload.cost_eur,
        payload.cost_bgn,
        payload.sale_bgn,
        payload.sale_eur,
        payload.markup,
    )?;

    let repo = ProductRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id.clone()))?;

    if let Some(code) = &payload.code
        && let Some(other) = repo
            .find_by_code(code)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
        && other.id != existing.id
    {
        return Err(AppError::new(ErrorCode::ProductCodeExists).with_detail("code", code.clone()));
    }

    let product = repo
        .update(&id, payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(product))
}

/// DELETE /api/products/:id - delete a product
///
/// Room line items keep their copied snapshot and are not touched.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ProductRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id.clone()))?;

    repo.delete(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(true))
}
