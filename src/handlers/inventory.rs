// src/handlers/inventory.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        validation::{validate_name, validate_not_negative, validate_positive_price, validate_record_status},
    },
    config::AppState,
    handlers::responses,
    middleware::{form::FormJson, i18n::Locale},
    models::{
        common::{EntityKind, Listing, ListQuery},
        inventory::ProductInput,
    },
};

// =============================================================================
//  PAYLOADS
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "validate_not_negative"))]
    pub cost_price: Decimal,

    // Ausente vale 0 e é recusado como qualquer preço não positivo
    #[serde(default)]
    #[validate(custom(function = "validate_positive_price"))]
    pub price: Decimal,

    #[serde(default)]
    #[validate(range(min = 0, code = "stock_negative"))]
    pub stock: i32,

    #[validate(custom(function = "validate_record_status"))]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "validate_not_negative"))]
    pub cost_price: Decimal,

    #[serde(default)]
    #[validate(custom(function = "validate_positive_price"))]
    pub price: Decimal,

    #[serde(default)]
    #[validate(range(min = 0, code = "stock_negative"))]
    pub stock: i32,
}

// =============================================================================
//  PRODUTOS
// =============================================================================

// GET /api/products?status=
pub async fn list_products(State(app_state): State<AppState>, Query(query): Query<ListQuery>) -> impl IntoResponse {
    let products = app_state.inventory_service.list_products(query.status).await;
    Json(Listing::from(products))
}

// GET /api/products/{id}
pub async fn get_product(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let product = app_state
        .inventory_service
        .get_product(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;
    Ok(Json(product))
}

// POST /api/products
pub async fn create_product(
    State(app_state): State<AppState>,
    locale: Locale,
    FormJson(payload): FormJson<CreateProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let status = responses::record_status(payload.status.as_deref());
    let input = ProductInput {
        name: payload.name,
        description: payload.description,
        cost_price: payload.cost_price,
        price: payload.price,
        stock: payload.stock,
    };
    let product = app_state.inventory_service.create_product(input, status).await;

    let saved = responses::created(&app_state.i18n_store, &locale, EntityKind::Product, product);
    Ok((StatusCode::CREATED, Json(saved)))
}

// PUT /api/products/{id}
pub async fn update_product(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u64>,
    FormJson(payload): FormJson<UpdateProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let input = ProductInput {
        name: payload.name,
        description: payload.description,
        cost_price: payload.cost_price,
        price: payload.price,
        stock: payload.stock,
    };
    let product = app_state
        .inventory_service
        .update_product(id, input)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(responses::updated(&app_state.i18n_store, &locale, EntityKind::Product, product)))
}

// POST /api/products/{id}/inactivation
pub async fn open_product_inactivation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let (confirmation_id, product) = app_state
        .inventory_service
        .open_inactivation(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let prompt = responses::inactivation_prompt(&app_state.i18n_store, &locale, EntityKind::Product, confirmation_id, &product);
    Ok((StatusCode::CREATED, Json(prompt)))
}

// POST /api/products/{id}/inactivation/{confirmation_id}
pub async fn confirm_product_inactivation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((id, confirmation_id)): Path<(u64, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let product = app_state
        .inventory_service
        .confirm_inactivation(id, confirmation_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(responses::inactivated(&app_state.i18n_store, &locale, EntityKind::Product, product)))
}

// DELETE /api/products/{id}/inactivation/{confirmation_id}
pub async fn cancel_product_inactivation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((id, confirmation_id)): Path<(u64, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .inventory_service
        .cancel_inactivation(id, confirmation_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
