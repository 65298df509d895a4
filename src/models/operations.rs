// src/models/operations.rs

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::error::AppError;
use crate::common::export::CsvExport;
use crate::models::common::Entity;

// --- Enums ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkOrderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl WorkOrderStatus {
    // Pendente -> Em Andamento -> Concluída; qualquer etapa aberta pode ser cancelada.
    // Concluída e Cancelada são finais.
    pub fn can_transition_to(self, next: WorkOrderStatus) -> bool {
        use WorkOrderStatus::*;
        matches!(
            (self, next),
            (Pending, InProgress) | (Pending, Completed) | (Pending, Cancelled) | (InProgress, Completed) | (InProgress, Cancelled)
        )
    }

    pub fn is_open(self) -> bool {
        matches!(self, WorkOrderStatus::Pending | WorkOrderStatus::InProgress)
    }

    pub fn i18n_key(self) -> &'static str {
        match self {
            WorkOrderStatus::Pending => "work_order_status.pending",
            WorkOrderStatus::InProgress => "work_order_status.in_progress",
            WorkOrderStatus::Completed => "work_order_status.completed",
            WorkOrderStatus::Cancelled => "work_order_status.cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkOrderStatus::Pending => "Pendente",
            WorkOrderStatus::InProgress => "Em Andamento",
            WorkOrderStatus::Completed => "Concluída",
            WorkOrderStatus::Cancelled => "Cancelada",
        }
    }
}

impl FromStr for WorkOrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "pendente" => Ok(WorkOrderStatus::Pending),
            "in_progress" | "em andamento" => Ok(WorkOrderStatus::InProgress),
            "completed" | "concluída" | "concluida" => Ok(WorkOrderStatus::Completed),
            "cancelled" | "cancelada" => Ok(WorkOrderStatus::Cancelled),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineItemKind {
    Product,
    Service,
}

// --- Itens ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(rename = "type")]
    pub kind: LineItemKind,
    pub id: u64,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl LineItem {
    // `None` quando quantidade x preço não cabe em um Decimal
    pub fn subtotal(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.price)
    }
}

pub fn sum_items(items: &[LineItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.subtotal()?))
}

// Um item do catálogo já resolvido (nome e preço do momento da seleção)
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSelection {
    pub kind: LineItemKind,
    pub id: u64,
    pub name: String,
    pub price: Decimal,
}

// --- Ordem de Serviço ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: u64,
    pub client_id: u64,
    pub client_name: String,
    pub description: String,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub created_at: NaiveDate,
    pub status: WorkOrderStatus,
}

impl Entity for WorkOrder {
    fn id(&self) -> u64 {
        self.id
    }
}

impl CsvExport for WorkOrder {
    fn csv_headers() -> &'static [&'static str] {
        &["id", "cliente", "descricao", "total", "criada_em", "status"]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.client_name.clone(),
            self.description.clone(),
            format!("{:.2}", self.total),
            self.created_at.format("%Y-%m-%d").to_string(),
            self.status.label().to_string(),
        ]
    }
}

// O estado do formulário "Nova Ordem de Serviço" enquanto os itens são montados.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderDraft {
    pub id: Uuid,
    pub items: Vec<LineItem>,
    pub total: Decimal,
}

impl WorkOrderDraft {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Repetir a seleção de um item soma na quantidade em vez de criar outra linha.
    /// Se a quantidade ou o total estourarem, o rascunho fica como estava.
    pub fn add_item(&mut self, selection: CatalogSelection, quantity: u32) -> Result<(), AppError> {
        let mut items = self.items.clone();
        match items
            .iter_mut()
            .find(|item| item.kind == selection.kind && item.id == selection.id)
        {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(quantity)
                    .ok_or(AppError::AmountOverflow)?;
            }
            None => items.push(LineItem {
                kind: selection.kind,
                id: selection.id,
                name: selection.name,
                quantity,
                price: selection.price,
            }),
        }

        self.total = sum_items(&items).ok_or(AppError::AmountOverflow)?;
        self.items = items;
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, AppError> {
        if index >= self.items.len() {
            return Err(AppError::LineItemNotFound(index));
        }
        let removed = self.items.remove(index);
        // Remover nunca aumenta o total
        self.total = sum_items(&self.items).unwrap_or_default();
        Ok(removed)
    }
}

impl Default for WorkOrderDraft {
    fn default() -> Self {
        Self::new()
    }
}

// --- Opções do formulário ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOption {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    pub id: u64,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOption {
    pub id: u64,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderOptions {
    pub clients: Vec<ClientOption>,
    pub products: Vec<ProductOption>,
    pub services: Vec<ServiceOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(kind: LineItemKind, id: u64, price: Decimal) -> CatalogSelection {
        CatalogSelection {
            kind,
            id,
            name: format!("{kind:?} {id}"),
            price,
        }
    }

    #[test]
    fn total_is_sum_of_quantity_times_price() {
        let mut draft = WorkOrderDraft::new();
        draft.add_item(selection(LineItemKind::Product, 2, Decimal::new(150, 0)), 3).unwrap();
        draft.add_item(selection(LineItemKind::Service, 1, Decimal::new(150000, 2)), 1).unwrap();

        assert_eq!(draft.total, Decimal::new(1950, 0));
        assert_eq!(Some(draft.total), sum_items(&draft.items));
    }

    #[test]
    fn repeated_selection_increments_quantity() {
        let mut draft = WorkOrderDraft::new();
        draft.add_item(selection(LineItemKind::Product, 1, Decimal::new(7500, 0)), 1).unwrap();
        draft.add_item(selection(LineItemKind::Product, 1, Decimal::new(7500, 0)), 1).unwrap();
        // Mesmo id, tipo diferente: outra linha
        draft.add_item(selection(LineItemKind::Service, 1, Decimal::new(1500, 0)), 1).unwrap();

        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.items[0].quantity, 2);
        assert_eq!(draft.total, Decimal::new(16500, 0));
    }

    #[test]
    fn removing_an_item_recomputes_total() {
        let mut draft = WorkOrderDraft::new();
        draft.add_item(selection(LineItemKind::Product, 2, Decimal::new(150, 0)), 2).unwrap();
        draft.add_item(selection(LineItemKind::Service, 3, Decimal::new(500, 0)), 1).unwrap();

        let removed = draft.remove_item(0).expect("item removido");
        assert_eq!(removed.id, 2);
        assert_eq!(draft.total, Decimal::new(500, 0));

        assert!(matches!(draft.remove_item(5), Err(AppError::LineItemNotFound(5))));
        assert_eq!(draft.items.len(), 1);
    }

    #[test]
    fn merged_quantity_past_u32_is_refused() {
        let mut draft = WorkOrderDraft::new();
        draft.add_item(selection(LineItemKind::Product, 1, Decimal::ONE), u32::MAX).unwrap();

        let result = draft.add_item(selection(LineItemKind::Product, 1, Decimal::ONE), 1);
        assert!(matches!(result, Err(AppError::AmountOverflow)));
        assert_eq!(draft.items[0].quantity, u32::MAX);
        assert_eq!(draft.total, Decimal::from(u32::MAX));
    }

    #[test]
    fn total_past_decimal_range_is_refused() {
        let mut draft = WorkOrderDraft::new();
        draft.add_item(selection(LineItemKind::Service, 1, Decimal::new(10, 0)), 1).unwrap();

        let result = draft.add_item(selection(LineItemKind::Product, 1, Decimal::MAX), 2);
        assert!(matches!(result, Err(AppError::AmountOverflow)));
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.total, Decimal::new(10, 0));

        let huge = LineItem {
            kind: LineItemKind::Product,
            id: 9,
            name: "Lote".into(),
            quantity: 4_000_000_000,
            price: Decimal::from_str_exact("10000000000000000000000000").unwrap(),
        };
        assert_eq!(huge.subtotal(), None);
    }

    #[test]
    fn lifecycle_is_one_directional() {
        use WorkOrderStatus::*;
        assert!(Pending.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Completed));
        assert!(InProgress.can_transition_to(Cancelled));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(InProgress));
        assert!(!InProgress.can_transition_to(Pending));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn status_accepts_form_labels() {
        assert_eq!("Em Andamento".parse(), Ok(WorkOrderStatus::InProgress));
        assert_eq!("CONCLUÍDA".parse(), Ok(WorkOrderStatus::Completed));
        assert_eq!("IN_PROGRESS".parse(), Ok(WorkOrderStatus::InProgress));
    }

    #[test]
    fn line_item_type_is_serialized_as_type() {
        let item = LineItem {
            kind: LineItemKind::Service,
            id: 1,
            name: "Consultoria".into(),
            quantity: 1,
            price: Decimal::new(1500, 0),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "service");
    }
}
