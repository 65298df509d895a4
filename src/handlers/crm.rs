// src/handlers/crm.rs

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
        validation::{validate_name, validate_record_status},
    },
    config::AppState,
    handlers::responses,
    middleware::{form::FormJson, i18n::Locale},
    models::{
        common::{Listing, ListQuery},
        crm::{Contact, PartyInput, PartyRole},
    },
};

// =============================================================================
//  PAYLOADS
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactPayload {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(email(code = "invalid_email"))]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub is_whatsapp: bool,

    #[serde(default)]
    pub cnpj_cpf: String,

    pub address: Option<String>,

    #[validate(custom(function = "validate_record_status"))]
    pub status: Option<String>,
}

// Edição: mesmos campos, sem status
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactPayload {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(email(code = "invalid_email"))]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub is_whatsapp: bool,

    #[serde(default)]
    pub cnpj_cpf: String,

    pub address: Option<String>,
}

fn party_input(name: String, email: String, phone: String, is_whatsapp: bool, cnpj_cpf: String, address: Option<String>) -> PartyInput {
    PartyInput {
        name,
        contact: Contact { phone, is_whatsapp, email },
        cnpj_cpf,
        address,
    }
}

// =============================================================================
//  FLUXO COMUM (clientes e fornecedores)
// =============================================================================

async fn list_parties(app_state: AppState, role: PartyRole, query: ListQuery) -> impl IntoResponse {
    let parties = app_state.crm_service.list(role, query.status).await;
    Json(Listing::from(parties))
}

async fn get_party(app_state: AppState, locale: Locale, role: PartyRole, id: u64) -> Result<impl IntoResponse, ApiError> {
    let party = app_state
        .crm_service
        .get(role, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;
    Ok(Json(party))
}

async fn create_party(
    app_state: AppState,
    locale: Locale,
    role: PartyRole,
    payload: CreateContactPayload,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let status = responses::record_status(payload.status.as_deref());
    let input = party_input(payload.name, payload.email, payload.phone, payload.is_whatsapp, payload.cnpj_cpf, payload.address);
    let party = app_state.crm_service.create(role, input, status).await;

    let saved = responses::created(&app_state.i18n_store, &locale, role.kind(), party);
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn update_party(
    app_state: AppState,
    locale: Locale,
    role: PartyRole,
    id: u64,
    payload: UpdateContactPayload,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let input = party_input(payload.name, payload.email, payload.phone, payload.is_whatsapp, payload.cnpj_cpf, payload.address);
    let party = app_state
        .crm_service
        .update(role, id, input)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(responses::updated(&app_state.i18n_store, &locale, role.kind(), party)))
}

async fn open_party_inactivation(app_state: AppState, locale: Locale, role: PartyRole, id: u64) -> Result<impl IntoResponse, ApiError> {
    let (confirmation_id, party) = app_state
        .crm_service
        .open_inactivation(role, id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let prompt = responses::inactivation_prompt(&app_state.i18n_store, &locale, role.kind(), confirmation_id, &party);
    Ok((StatusCode::CREATED, Json(prompt)))
}

async fn confirm_party_inactivation(
    app_state: AppState,
    locale: Locale,
    role: PartyRole,
    id: u64,
    confirmation_id: Uuid,
) -> Result<impl IntoResponse, ApiError> {
    let party = app_state
        .crm_service
        .confirm_inactivation(role, id, confirmation_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(responses::inactivated(&app_state.i18n_store, &locale, role.kind(), party)))
}

async fn cancel_party_inactivation(
    app_state: AppState,
    locale: Locale,
    role: PartyRole,
    id: u64,
    confirmation_id: Uuid,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .crm_service
        .cancel_inactivation(role, id, confirmation_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  CLIENTES
// =============================================================================

// GET /api/clients?status=
pub async fn list_clients(State(app_state): State<AppState>, Query(query): Query<ListQuery>) -> impl IntoResponse {
    list_parties(app_state, PartyRole::Client, query).await
}

// GET /api/clients/{id}
pub async fn get_client(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    get_party(app_state, locale, PartyRole::Client, id).await
}

// POST /api/clients
pub async fn create_client(
    State(app_state): State<AppState>,
    locale: Locale,
    FormJson(payload): FormJson<CreateContactPayload>,
) -> Result<impl IntoResponse, ApiError> {
    create_party(app_state, locale, PartyRole::Client, payload).await
}

// PUT /api/clients/{id}
pub async fn update_client(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u64>,
    FormJson(payload): FormJson<UpdateContactPayload>,
) -> Result<impl IntoResponse, ApiError> {
    update_party(app_state, locale, PartyRole::Client, id, payload).await
}

// POST /api/clients/{id}/inactivation
pub async fn open_client_inactivation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    open_party_inactivation(app_state, locale, PartyRole::Client, id).await
}

// POST /api/clients/{id}/inactivation/{confirmation_id}
pub async fn confirm_client_inactivation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((id, confirmation_id)): Path<(u64, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    confirm_party_inactivation(app_state, locale, PartyRole::Client, id, confirmation_id).await
}

// DELETE /api/clients/{id}/inactivation/{confirmation_id}
pub async fn cancel_client_inactivation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((id, confirmation_id)): Path<(u64, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    cancel_party_inactivation(app_state, locale, PartyRole::Client, id, confirmation_id).await
}

// =============================================================================
//  FORNECEDORES
// =============================================================================

// GET /api/suppliers?status=
pub async fn list_suppliers(State(app_state): State<AppState>, Query(query): Query<ListQuery>) -> impl IntoResponse {
    list_parties(app_state, PartyRole::Supplier, query).await
}

// GET /api/suppliers/{id}
pub async fn get_supplier(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    get_party(app_state, locale, PartyRole::Supplier, id).await
}

// POST /api/suppliers
pub async fn create_supplier(
    State(app_state): State<AppState>,
    locale: Locale,
    FormJson(payload): FormJson<CreateContactPayload>,
) -> Result<impl IntoResponse, ApiError> {
    create_party(app_state, locale, PartyRole::Supplier, payload).await
}

// PUT /api/suppliers/{id}
pub async fn update_supplier(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u64>,
    FormJson(payload): FormJson<UpdateContactPayload>,
) -> Result<impl IntoResponse, ApiError> {
    update_party(app_state, locale, PartyRole::Supplier, id, payload).await
}

// POST /api/suppliers/{id}/inactivation
pub async fn open_supplier_inactivation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    open_party_inactivation(app_state, locale, PartyRole::Supplier, id).await
}

// POST /api/suppliers/{id}/inactivation/{confirmation_id}
pub async fn confirm_supplier_inactivation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((id, confirmation_id)): Path<(u64, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    confirm_party_inactivation(app_state, locale, PartyRole::Supplier, id, confirmation_id).await
}

// DELETE /api/suppliers/{id}/inactivation/{confirmation_id}
pub async fn cancel_supplier_inactivation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path((id, confirmation_id)): Path<(u64, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    cancel_party_inactivation(app_state, locale, PartyRole::Supplier, id, confirmation_id).await
}
