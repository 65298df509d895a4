// src/services/catalog_service.rs

use std::time::Duration;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::Table,
    models::{
        catalog::{Service, ServiceInput},
        common::{EntityKind, RecordStatus, StatusFilter},
    },
    services::records::RecordDesk,
};

#[derive(Clone)]
pub struct CatalogService {
    services: RecordDesk<Service>,
}

impl CatalogService {
    pub fn new(services: Table<Service>, save_delay: Duration) -> Self {
        Self {
            services: RecordDesk::new(EntityKind::Service, services, save_delay),
        }
    }

    pub async fn list_services(&self, filter: StatusFilter) -> Vec<Service> {
        self.services.list(filter).await
    }

    pub async fn get_service(&self, id: u64) -> Result<Service, AppError> {
        self.services.get(id).await
    }

    pub async fn create_service(&self, mut input: ServiceInput, status: RecordStatus) -> Service {
        input.name = input.name.trim().to_string();
        self.services
            .create(|id| Service::from_input(id, input, status))
            .await
    }

    pub async fn update_service(&self, id: u64, mut input: ServiceInput) -> Result<Service, AppError> {
        input.name = input.name.trim().to_string();
        self.services.update(id, |service| service.apply(input)).await
    }

    pub async fn open_inactivation(&self, id: u64) -> Result<(Uuid, Service), AppError> {
        self.services.open_inactivation(id).await
    }

    pub async fn confirm_inactivation(&self, id: u64, confirmation_id: Uuid) -> Result<Service, AppError> {
        self.services.confirm_inactivation(id, confirmation_id).await
    }

    pub async fn cancel_inactivation(&self, id: u64, confirmation_id: Uuid) -> Result<(), AppError> {
        self.services.cancel_inactivation(id, confirmation_id).await
    }
}
