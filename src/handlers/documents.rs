// src/handlers/documents.rs

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::{common::error::ApiError, config::AppState, middleware::i18n::Locale};

// GET /api/work-orders/{id}/pdf
pub async fn generate_order_pdf(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(order_id): Path<u64>,
) -> Result<Response, ApiError> {
    let pdf_bytes = app_state
        .document_service
        .generate_order_pdf(order_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    // Configura os Headers para o navegador baixar ou mostrar o PDF
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (header::CONTENT_DISPOSITION, format!("attachment; filename=\"ordem_servico_{}.pdf\"", order_id)),
    ];

    Ok((headers, pdf_bytes).into_response())
}
