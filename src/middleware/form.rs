// src/middleware/form.rs

use std::sync::LazyLock;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    Json,
};
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
};

// "items[0].quantity: invalid type: ..." -> caminho + motivo
static FIELD_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(?P<path>[\w\[\].]+): )?(?P<reason>.+)$").expect("regex válida"));
static MISSING_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^missing field `(?P<name>[^`]+)`").expect("regex válida"));

/// `Json<T>` dos formulários: corpo que não desserializa vira o mesmo
/// `{ error, details }` traduzido da validação, em vez do texto puro do axum.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormJson<T>(pub T);

impl<T> FromRequest<AppState> for FormJson<T>
where
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let locale = Locale::from_request_parts(&mut parts, state).await.unwrap_or_default();
        let req = Request::from_parts(parts, body);

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(FormJson(value)),
            Err(rejection) => {
                tracing::debug!("📭 Corpo recusado: {}", rejection.body_text());
                Err(body_error(&rejection).to_api_error(&locale, &state.i18n_store))
            }
        }
    }
}

fn body_error(rejection: &JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(_) => {
            let text = rejection.body_text();
            // Descarta o prefixo fixo do axum ("Failed to deserialize ...: ")
            let detail = text.split_once(": ").map(|(_, rest)| rest).unwrap_or(&text);
            data_error(detail)
        }
        _ => AppError::MalformedBody { field: None, code: "body_invalid" },
    }
}

fn data_error(detail: &str) -> AppError {
    let Some(caps) = FIELD_PATH.captures(detail) else {
        return AppError::MalformedBody { field: None, code: "body_invalid" };
    };
    let path = caps.name("path").map(|m| m.as_str());
    let reason = caps.name("reason").map_or("", |m| m.as_str());

    if let Some(missing) = MISSING_FIELD.captures(reason) {
        let name = &missing["name"];
        let field = match path {
            Some(path) => format!("{path}.{name}"),
            None => name.to_string(),
        };
        return AppError::MalformedBody { field: Some(field), code: "field_required" };
    }

    match path {
        Some(path) => AppError::MalformedBody { field: Some(path.to_string()), code: "field_invalid" },
        None => AppError::MalformedBody { field: None, code: "body_invalid" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header};
    use serde::Deserialize;

    #[allow(dead_code)]
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Line {
        id: u64,
        quantity: u32,
    }

    #[allow(dead_code)]
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Form {
        name: String,
        cost_price: f64,
        #[serde(default)]
        items: Vec<Line>,
    }

    async fn rejection(body: &str) -> JsonRejection {
        let req = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        Json::<Form>::from_request(req, &()).await.unwrap_err()
    }

    fn field_and_code(error: AppError) -> (Option<String>, &'static str) {
        match error {
            AppError::MalformedBody { field, code } => (field, code),
            other => panic!("erro inesperado: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_field_is_reported_as_required() {
        let rejection = rejection(r#"{"costPrice": 1.5}"#).await;
        assert_eq!(field_and_code(body_error(&rejection)), (Some("name".into()), "field_required"));
    }

    #[tokio::test]
    async fn wrong_type_points_at_the_field() {
        let rejection = rejection(r#"{"name": "Ana", "costPrice": "abc"}"#).await;
        assert_eq!(field_and_code(body_error(&rejection)), (Some("costPrice".into()), "field_invalid"));
    }

    #[tokio::test]
    async fn nested_fields_keep_their_index() {
        let rejection = rejection(r#"{"name": "Ana", "costPrice": 1, "items": [{"id": 1}]}"#).await;
        assert_eq!(
            field_and_code(body_error(&rejection)),
            (Some("items[0].quantity".into()), "field_required")
        );
    }

    #[tokio::test]
    async fn broken_json_is_a_body_error() {
        let rejection = rejection(r#"{"name": "#).await;
        assert_eq!(field_and_code(body_error(&rejection)), (None, "body_invalid"));
    }
}
