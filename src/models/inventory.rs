// src/models/inventory.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::export::CsvExport;
use crate::models::common::{status_record, RecordStatus};

// --- Produtos ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub cost_price: Decimal,
    pub price: Decimal,
    pub stock: i32,
    pub status: RecordStatus,
}

status_record!(Product);

#[derive(Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub cost_price: Decimal,
    pub price: Decimal,
    pub stock: i32,
}

impl Product {
    pub fn from_input(id: u64, input: ProductInput, status: RecordStatus) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            cost_price: input.cost_price,
            price: input.price,
            stock: input.stock,
            status,
        }
    }

    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.description = input.description;
        self.cost_price = input.cost_price;
        self.price = input.price;
        self.stock = input.stock;
    }

    // Só aparece no formulário de O.S. se estiver ativo e com estoque
    pub fn is_selectable(&self) -> bool {
        self.status == RecordStatus::Active && self.stock > 0
    }
}

impl CsvExport for Product {
    fn csv_headers() -> &'static [&'static str] {
        &["id", "nome", "descricao", "preco_custo", "preco_venda", "estoque", "status"]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.description.clone(),
            format!("{:.2}", self.cost_price),
            format!("{:.2}", self.price),
            self.stock.to_string(),
            self.status.label().to_string(),
        ]
    }
}
