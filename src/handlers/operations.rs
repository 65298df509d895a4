// src/handlers/operations.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        validation::{validate_quantity, validate_work_order_status},
    },
    config::AppState,
    middleware::{form::FormJson, i18n::Locale},
    models::{
        common::{EntityKind, Listing, Saved, Toast},
        operations::{LineItemKind, WorkOrder, WorkOrderStatus},
    },
    services::operation_service::{ItemRequest, NewWorkOrder},
};

// =============================================================================
//  PAYLOADS
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct WorkOrderListQuery {
    #[validate(custom(function = "validate_work_order_status"))]
    pub status: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddItemPayload {
    #[serde(rename = "type")]
    pub kind: LineItemKind,

    pub id: u64,

    #[serde(default = "default_quantity")]
    #[validate(custom(function = "validate_quantity"))]
    pub quantity: u32,
}

impl From<&AddItemPayload> for ItemRequest {
    fn from(payload: &AddItemPayload) -> Self {
        ItemRequest { kind: payload.kind, id: payload.id, quantity: payload.quantity }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitWorkOrderPayload {
    #[validate(required(code = "client_required"))]
    pub client_id: Option<u64>,

    pub description: Option<String>,

    #[validate(custom(function = "validate_work_order_status"))]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkOrderPayload {
    #[validate(required(code = "client_required"))]
    pub client_id: Option<u64>,

    pub description: Option<String>,

    #[validate(custom(function = "validate_work_order_status"))]
    pub status: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<AddItemPayload>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStatusPayload {
    #[validate(custom(function = "validate_work_order_status"))]
    pub status: String,
}

// Os campos já passaram pelo validador
fn order_header(client_id: Option<u64>, description: Option<String>, status: Option<&str>) -> NewWorkOrder {
    NewWorkOrder {
        client_id: client_id.unwrap_or_default(),
        description: description.map(|d| d.trim().to_string()).unwrap_or_default(),
        status: status.and_then(|s| s.parse().ok()).unwrap_or_default(),
    }
}

fn created_order(app_state: &AppState, locale: &Locale, order: WorkOrder) -> Saved<WorkOrder> {
    let lang = locale.0.as_str();
    let store = &app_state.i18n_store;
    let toast = Toast {
        title: store.translate(lang, "toast.work_order.created"),
        description: store.translate_with(lang, "toast.work_order.description", &[("name", &order.client_name)]),
    };
    Saved { data: order, toast, redirect_to: EntityKind::WorkOrder.list_path().to_string() }
}

// =============================================================================
//  ORDENS DE SERVIÇO
// =============================================================================

// GET /api/work-orders?status=
pub async fn list_work_orders(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<WorkOrderListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let status = query.status.as_deref().and_then(|s| s.parse::<WorkOrderStatus>().ok());
    let orders = app_state.operations_service.list_orders(status).await;
    Ok(Json(Listing::from(orders)))
}

// GET /api/work-orders/{id}
pub async fn get_work_order(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let order = app_state
        .operations_service
        .get_order(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;
    Ok(Json(order))
}

// POST /api/work-orders
pub async fn create_work_order(
    State(app_state): State<AppState>,
    locale: Locale,
    FormJson(payload): FormJson<CreateWorkOrderPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let requests = payload.items.iter().map(ItemRequest::from).collect();
    let header = order_header(payload.client_id, payload.description, payload.status.as_deref());
    let order = app_state
        .operations_service
        .create_order(header, requests)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(created_order(&app_state, &locale, order))))
}

// PATCH /api/work-orders/{id}/status
pub async fn update_work_order_status(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u64>,
    FormJson(payload): FormJson<UpdateStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let next = payload.status.parse::<WorkOrderStatus>().unwrap_or_default();
    let order = app_state
        .operations_service
        .transition(id, next)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(order))
}

// GET /api/work-order-options
pub async fn get_work_order_options(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.operations_service.options().await)
}

// =============================================================================
//  RASCUNHOS (formulário "Nova Ordem de Serviço")
// =============================================================================

// POST /api/work-order-drafts
pub async fn create_draft(State(app_state): State<AppState>) -> impl IntoResponse {
    let draft = app_state.operations_service.create_draft().await;
    (StatusCode::CREATED, Json(draft))
}

// GET /api/work-order-drafts/{draft_id}
pub async fn get_draft(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(draft_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = app_state
        .operations_service
        .get_draft(draft_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;
    Ok(Json(draft))
}

// POST /api/work-order-drafts/{draft_id}/items
pub async fn add_draft_item(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(draft_id): Path<Uuid>,
    FormJson(payload): FormJson<AddItemPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let draft = app_state
        .operations_service
        .add_draft_item(draft_id, ItemRequest::from(&payload))
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;
    Ok(Json(draft))
}

// DELETE /api/work-order-drafts/{draft_id}/items/{index}
pub async fn remove_draft_item(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((draft_id, index)): Path<(Uuid, usize)>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = app_state
        .operations_service
        .remove_draft_item(draft_id, index)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;
    Ok(Json(draft))
}

// POST /api/work-order-drafts/{draft_id}/submit
pub async fn submit_draft(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(draft_id): Path<Uuid>,
    FormJson(payload): FormJson<SubmitWorkOrderPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let header = order_header(payload.client_id, payload.description, payload.status.as_deref());
    let order = app_state
        .operations_service
        .submit_draft(draft_id, header)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(created_order(&app_state, &locale, order))))
}
