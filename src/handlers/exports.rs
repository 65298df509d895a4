// src/handlers/exports.rs
//
// O botão "Exportar" das listagens: a tabela filtrada em CSV.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        export::{to_csv, CsvExport},
    },
    config::AppState,
    handlers::operations::WorkOrderListQuery,
    middleware::i18n::Locale,
    models::{common::ListQuery, crm::PartyRole, operations::WorkOrderStatus},
};

fn csv_response<T: CsvExport>(app_state: &AppState, locale: &Locale, filename: &str, rows: &[T]) -> Result<Response, ApiError> {
    let bytes = to_csv(rows).map_err(|e| e.to_api_error(locale, &app_state.i18n_store))?;
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}.csv\"", filename)),
    ];
    Ok((headers, bytes).into_response())
}

// GET /api/exports/clients?status=
pub async fn export_clients(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    let rows = app_state.crm_service.list(PartyRole::Client, query.status).await;
    csv_response(&app_state, &locale, "clientes", &rows)
}

// GET /api/exports/suppliers?status=
pub async fn export_suppliers(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    let rows = app_state.crm_service.list(PartyRole::Supplier, query.status).await;
    csv_response(&app_state, &locale, "fornecedores", &rows)
}

// GET /api/exports/products?status=
pub async fn export_products(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    let rows = app_state.inventory_service.list_products(query.status).await;
    csv_response(&app_state, &locale, "produtos", &rows)
}

// GET /api/exports/services?status=
pub async fn export_services(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<ListQuery>,
) -> Result<Response, ApiError> {
    let rows = app_state.catalog_service.list_services(query.status).await;
    csv_response(&app_state, &locale, "servicos", &rows)
}

// GET /api/exports/work-orders?status=
pub async fn export_work_orders(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<WorkOrderListQuery>,
) -> Result<Response, ApiError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let status = query.status.as_deref().and_then(|s| s.parse::<WorkOrderStatus>().ok());
    let rows = app_state.operations_service.list_orders(status).await;
    csv_response(&app_state, &locale, "ordens_servico", &rows)
}
