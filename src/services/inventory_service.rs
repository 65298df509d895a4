// src/services/inventory_service.rs

use std::time::Duration;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::Table,
    models::{
        common::{EntityKind, RecordStatus, StatusFilter},
        inventory::{Product, ProductInput},
    },
    services::records::RecordDesk,
};

#[derive(Clone)]
pub struct InventoryService {
    products: RecordDesk<Product>,
}

impl InventoryService {
    pub fn new(products: Table<Product>, save_delay: Duration) -> Self {
        Self {
            products: RecordDesk::new(EntityKind::Product, products, save_delay),
        }
    }

    pub async fn list_products(&self, filter: StatusFilter) -> Vec<Product> {
        self.products.list(filter).await
    }

    pub async fn get_product(&self, id: u64) -> Result<Product, AppError> {
        self.products.get(id).await
    }

    pub async fn create_product(&self, mut input: ProductInput, status: RecordStatus) -> Product {
        input.name = input.name.trim().to_string();
        self.products
            .create(|id| Product::from_input(id, input, status))
            .await
    }

    pub async fn update_product(&self, id: u64, mut input: ProductInput) -> Result<Product, AppError> {
        input.name = input.name.trim().to_string();
        self.products.update(id, |product| product.apply(input)).await
    }

    pub async fn open_inactivation(&self, id: u64) -> Result<(Uuid, Product), AppError> {
        self.products.open_inactivation(id).await
    }

    pub async fn confirm_inactivation(&self, id: u64, confirmation_id: Uuid) -> Result<Product, AppError> {
        self.products.confirm_inactivation(id, confirmation_id).await
    }

    pub async fn cancel_inactivation(&self, id: u64, confirmation_id: Uuid) -> Result<(), AppError> {
        self.products.cancel_inactivation(id, confirmation_id).await
    }
}
