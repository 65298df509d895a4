// src/models/common.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn label(self) -> &'static str {
        match self {
            RecordStatus::Active => "Ativo",
            RecordStatus::Inactive => "Inativo",
        }
    }
}

// Aceita o valor da API ("ACTIVE") e o rótulo do formulário ("Ativo").
impl FromStr for RecordStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "ativo" => Ok(RecordStatus::Active),
            "inactive" | "inativo" => Ok(RecordStatus::Inactive),
            _ => Err(()),
        }
    }
}

// As abas "Todos / Ativos / Inativos" das listagens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(self, status: RecordStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == RecordStatus::Active,
            StatusFilter::Inactive => status == RecordStatus::Inactive,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub status: StatusFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Client,
    Supplier,
    Product,
    Service,
    WorkOrder,
}

impl EntityKind {
    pub fn key(self) -> &'static str {
        match self {
            EntityKind::Client => "client",
            EntityKind::Supplier => "supplier",
            EntityKind::Product => "product",
            EntityKind::Service => "service",
            EntityKind::WorkOrder => "work_order",
        }
    }

    pub fn i18n_key(self) -> &'static str {
        match self {
            EntityKind::Client => "entity.client",
            EntityKind::Supplier => "entity.supplier",
            EntityKind::Product => "entity.product",
            EntityKind::Service => "entity.service",
            EntityKind::WorkOrder => "entity.work_order",
        }
    }

    // Página para onde o frontend volta depois de salvar
    pub fn list_path(self) -> &'static str {
        match self {
            EntityKind::Client => "/dashboard/clients",
            EntityKind::Supplier => "/dashboard/suppliers",
            EntityKind::Product => "/dashboard/products",
            EntityKind::Service => "/dashboard/services",
            EntityKind::WorkOrder => "/dashboard/work-orders",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// --- TRAÇOS DOS REGISTROS ---

pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> u64;
}

// Registros com status Ativo/Inativo. Não existe caminho de volta para Ativo.
pub trait StatusRecord: Entity {
    fn name(&self) -> &str;
    fn status(&self) -> RecordStatus;
    fn inactivate(&mut self);
}

macro_rules! status_record {
    ($ty:ty) => {
        impl $crate::models::common::Entity for $ty {
            fn id(&self) -> u64 {
                self.id
            }
        }

        impl $crate::models::common::StatusRecord for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn status(&self) -> $crate::models::common::RecordStatus {
                self.status
            }

            fn inactivate(&mut self) {
                self.status = $crate::models::common::RecordStatus::Inactive;
            }
        }
    };
}

pub(crate) use status_record;

// --- RESPOSTAS ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

// Resposta de um formulário salvo: o registro, a notificação e a página de destino.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Saved<T> {
    pub data: T,
    pub toast: Toast,
    pub redirect_to: String,
}

// O diálogo "Você tem certeza?" aberto para um registro
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InactivationPrompt {
    pub confirmation_id: Uuid,
    pub record_id: u64,
    pub title: String,
    pub description: String,
}
