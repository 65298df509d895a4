// src/handlers/auth.rs

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::auth::{AuthResponse, LoginUserPayload, LogoutResponse, SessionUser},
    services::auth::{DASHBOARD_PATH, HOME_PATH},
};

// Handler de login. Corpo malformado ou campos inválidos dão a mesma resposta.
pub async fn login(
    State(app_state): State<AppState>,
    locale: Locale,
    payload: Result<Json<LoginUserPayload>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let to_api = |e: AppError| e.to_api_error(&locale, &app_state.i18n_store);

    let Json(payload) = payload.map_err(|_| to_api(AppError::InvalidInput))?;
    payload.validate().map_err(|_| to_api(AppError::InvalidInput))?;

    let token = app_state
        .auth_service
        .login_user(&payload.email, &payload.password, payload.remember)
        .await
        .map_err(to_api)?;

    Ok(Json(AuthResponse {
        token,
        redirect_to: DASHBOARD_PATH.to_string(),
    }))
}

// O token é descartado pelo cliente; aqui só devolvemos o destino
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse { redirect_to: HOME_PATH.to_string() })
}

// Handler da rota protegida /me
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<SessionUser> {
    Json(user)
}
