use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::{
    common::i18n::I18nStore,
    middleware::i18n::Locale,
    models::{common::EntityKind, operations::WorkOrderStatus},
};

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// As mensagens do `#[error]` vão para o log; o usuário recebe a tradução via `to_api_error`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] ValidationErrors),

    #[error("Entrada inválida")]
    InvalidInput,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("{0} #{1} não encontrado")]
    ResourceNotFound(EntityKind, u64),

    #[error("Confirmação de inativação não encontrada")]
    ConfirmationNotFound,

    #[error("Rascunho de ordem de serviço não encontrado")]
    DraftNotFound,

    #[error("Item na posição {0} não existe no rascunho")]
    LineItemNotFound(usize),

    #[error("{0} #{1} indisponível para seleção")]
    ItemUnavailable(EntityKind, u64),

    #[error("Transição de status inválida: {from:?} -> {to:?}")]
    InvalidTransition {
        from: WorkOrderStatus,
        to: WorkOrderStatus,
    },

    #[error("Total da ordem de serviço fora do limite")]
    AmountOverflow,

    // Corpo JSON que nem chegou a virar payload (campo ausente, tipo errado, sintaxe)
    #[error("Corpo da requisição inválido ({code})")]
    MalformedBody {
        field: Option<String>,
        code: &'static str,
    },

    #[error("Fonte não encontrada: {0}")]
    FontNotFound(String),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Erro de CSV: {0}")]
    CsvError(#[from] csv::Error),
}

// O erro já traduzido, pronto para virar resposta HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<HashMap<String, Vec<String>>>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.message, "details": details }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl AppError {
    pub fn to_api_error(self, locale: &Locale, store: &I18nStore) -> ApiError {
        let lang = locale.0.as_str();
        let resource = |kind: EntityKind, id: u64| format!("{} #{}", store.translate(lang, kind.i18n_key()), id);

        match self {
            AppError::ValidationError(errors) => {
                let mut details = HashMap::new();
                collect_details("", &errors, lang, store, &mut details);
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    message: store.translate(lang, "error.validation_failed"),
                    details: Some(details),
                }
            }
            AppError::InvalidInput => {
                ApiError::new(StatusCode::BAD_REQUEST, store.translate(lang, "error.invalid_input"))
            }
            AppError::InvalidCredentials => ApiError::new(
                StatusCode::UNAUTHORIZED,
                store.translate(lang, "error.invalid_credentials"),
            ),
            AppError::InvalidToken => {
                ApiError::new(StatusCode::UNAUTHORIZED, store.translate(lang, "error.invalid_token"))
            }
            AppError::ResourceNotFound(kind, id) => ApiError::new(
                StatusCode::NOT_FOUND,
                store.translate_with(lang, "error.not_found", &[("resource", &resource(kind, id))]),
            ),
            AppError::ConfirmationNotFound => ApiError::new(
                StatusCode::NOT_FOUND,
                store.translate(lang, "error.confirmation_not_found"),
            ),
            AppError::DraftNotFound => {
                ApiError::new(StatusCode::NOT_FOUND, store.translate(lang, "error.draft_not_found"))
            }
            AppError::LineItemNotFound(index) => ApiError::new(
                StatusCode::NOT_FOUND,
                store.translate_with(lang, "error.line_item_not_found", &[("index", &index.to_string())]),
            ),
            AppError::ItemUnavailable(kind, id) => ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                store.translate_with(lang, "error.item_unavailable", &[("resource", &resource(kind, id))]),
            ),
            AppError::AmountOverflow => ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                store.translate(lang, "error.amount_overflow"),
            ),
            AppError::MalformedBody { field, code } => {
                let key = field.unwrap_or_else(|| "body".to_string());
                let message = store.translate(lang, &format!("validation.{code}"));
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    message: store.translate(lang, "error.validation_failed"),
                    details: Some(HashMap::from([(key, vec![message])])),
                }
            }
            AppError::InvalidTransition { from, to } => ApiError::new(
                StatusCode::CONFLICT,
                store.translate_with(
                    lang,
                    "error.invalid_transition",
                    &[
                        ("from", &store.translate(lang, from.i18n_key())),
                        ("to", &store.translate(lang, to.i18n_key())),
                    ],
                ),
            ),
            // Todos os outros erros viram 500. O `tracing` loga a mensagem detalhada.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                let key = match e {
                    AppError::FontNotFound(_) => "error.font_not_found",
                    _ => "error.internal",
                };
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, store.translate(lang, key))
            }
        }
    }
}

// Usado quando não temos o idioma em mãos (ex: dentro do middleware).
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default(), I18nStore::global())
            .into_response()
    }
}

// Achata os erros em "campo" -> mensagens. Itens de listas viram "items[0].quantity".
fn collect_details(
    prefix: &str,
    errors: &ValidationErrors,
    lang: &str,
    store: &I18nStore,
    details: &mut HashMap<String, Vec<String>>,
) {
    for (field, kind) in errors.errors() {
        let key = format!("{}{}", prefix, to_camel_case(field));
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages = field_errors
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => store.translate(lang, &format!("validation.{}", e.code)),
                    })
                    .collect();
                details.insert(key, messages);
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_details(&format!("{key}."), nested, lang, store, details);
            }
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    collect_details(&format!("{key}[{index}]."), nested, lang, store, details);
                }
            }
        }
    }
}

// O validator reporta o nome do campo em Rust (snake_case); o frontend espera camelCase.
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
