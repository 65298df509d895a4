// src/models/catalog.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::export::CsvExport;
use crate::models::common::{status_record, RecordStatus};

// Serviço oferecido (consultoria, manutenção...). Não tem estoque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub status: RecordStatus,
}

status_record!(Service);

#[derive(Debug, Clone)]
pub struct ServiceInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

impl Service {
    pub fn from_input(id: u64, input: ServiceInput, status: RecordStatus) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            status,
        }
    }

    pub fn apply(&mut self, input: ServiceInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
    }

    pub fn is_selectable(&self) -> bool {
        self.status == RecordStatus::Active
    }
}

impl CsvExport for Service {
    fn csv_headers() -> &'static [&'static str] {
        &["id", "nome", "descricao", "preco", "status"]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.description.clone(),
            format!("{:.2}", self.price),
            self.status.label().to_string(),
        ]
    }
}
