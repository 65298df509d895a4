// src/handlers/catalog.rs

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
        validation::{validate_name, validate_positive_price, validate_record_status},
    },
    config::AppState,
    handlers::responses,
    middleware::{form::FormJson, i18n::Locale},
    models::{
        catalog::ServiceInput,
        common::{EntityKind, Listing, ListQuery},
    },
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServicePayload {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "validate_positive_price"))]
    pub price: Decimal,

    #[validate(custom(function = "validate_record_status"))]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServicePayload {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "validate_positive_price"))]
    pub price: Decimal,
}

// GET /api/services?status=
pub async fn list_services(State(app_state): State<AppState>, Query(query): Query<ListQuery>) -> impl IntoResponse {
    let services = app_state.catalog_service.list_services(query.status).await;
    Json(Listing::from(services))
}

// GET /api/services/{id}
pub async fn get_service(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let service = app_state
        .catalog_service
        .get_service(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;
    Ok(Json(service))
}

// POST /api/services
pub async fn create_service(
    State(app_state): State<AppState>,
    locale: Locale,
    FormJson(payload): FormJson<CreateServicePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let status = responses::record_status(payload.status.as_deref());
    let input = ServiceInput {
        name: payload.name,
        description: payload.description,
        price: payload.price,
    };
    let service = app_state.catalog_service.create_service(input, status).await;

    let saved = responses::created(&app_state.i18n_store, &locale, EntityKind::Service, service);
    Ok((StatusCode::CREATED, Json(saved)))
}

// PUT /api/services/{id}
pub async fn update_service(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u64>,
    FormJson(payload): FormJson<UpdateServicePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let input = ServiceInput {
        name: payload.name,
        description: payload.description,
        price: payload.price,
    };
    let service = app_state
        .catalog_service
        .update_service(id, input)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(responses::updated(&app_state.i18n_store, &locale, EntityKind::Service, service)))
}

// POST /api/services/{id}/inactivation
pub async fn open_service_inactivation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let (confirmation_id, service) = app_state
        .catalog_service
        .open_inactivation(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let prompt = responses::inactivation_prompt(&app_state.i18n_store, &locale, EntityKind::Service, confirmation_id, &service);
    Ok((StatusCode::CREATED, Json(prompt)))
}

// POST /api/services/{id}/inactivation/{confirmation_id}
pub async fn confirm_service_inactivation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((id, confirmation_id)): Path<(u64, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let service = app_state
        .catalog_service
        .confirm_inactivation(id, confirmation_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(responses::inactivated(&app_state.i18n_store, &locale, EntityKind::Service, service)))
}

// DELETE /api/services/{id}/inactivation/{confirmation_id}
pub async fn cancel_service_inactivation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((id, confirmation_id)): Path<(u64, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .catalog_service
        .cancel_inactivation(id, confirmation_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
