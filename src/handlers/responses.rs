// src/handlers/responses.rs
//
// Montagem das notificações (toasts) e do diálogo de inativação no idioma da requisição.

use uuid::Uuid;

use crate::{
    common::i18n::I18nStore,
    middleware::i18n::Locale,
    models::common::{EntityKind, InactivationPrompt, RecordStatus, Saved, StatusRecord, Toast},
};

pub fn created<T: StatusRecord>(store: &I18nStore, locale: &Locale, kind: EntityKind, record: T) -> Saved<T> {
    let lang = locale.0.as_str();
    let toast = Toast {
        title: store.translate(lang, &format!("toast.{}.created", kind.key())),
        description: store.translate_with(lang, "toast.created.description", &[("name", record.name())]),
    };
    Saved { data: record, toast, redirect_to: kind.list_path().to_string() }
}

pub fn updated<T: StatusRecord>(store: &I18nStore, locale: &Locale, kind: EntityKind, record: T) -> Saved<T> {
    let lang = locale.0.as_str();
    let toast = Toast {
        title: store.translate(lang, "toast.updated"),
        description: store.translate_with(lang, "toast.updated.description", &[("name", record.name())]),
    };
    Saved { data: record, toast, redirect_to: kind.list_path().to_string() }
}

pub fn inactivated<T: StatusRecord>(store: &I18nStore, locale: &Locale, kind: EntityKind, record: T) -> Saved<T> {
    let lang = locale.0.as_str();
    let toast = Toast {
        title: store.translate(lang, "toast.inactivated"),
        description: store.translate_with(lang, "toast.inactivated.description", &[("name", record.name())]),
    };
    Saved { data: record, toast, redirect_to: kind.list_path().to_string() }
}

// "Você tem certeza?" com o nome do registro
pub fn inactivation_prompt<T: StatusRecord>(
    store: &I18nStore,
    locale: &Locale,
    kind: EntityKind,
    confirmation_id: Uuid,
    record: &T,
) -> InactivationPrompt {
    let lang = locale.0.as_str();
    let kind_label = store.translate(lang, kind.i18n_key());
    InactivationPrompt {
        confirmation_id,
        record_id: record.id(),
        title: store.translate(lang, "inactivation.title"),
        description: store.translate_with(
            lang,
            "inactivation.description",
            &[("kind", &kind_label), ("name", record.name())],
        ),
    }
}

// O campo já passou pelo validador; ausente vira Ativo
pub fn record_status(status: Option<&str>) -> RecordStatus {
    status.and_then(|s| s.parse().ok()).unwrap_or_default()
}
