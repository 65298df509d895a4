// src/services/crm_service.rs

use std::time::Duration;

use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        format::{format_cnpj_cpf, format_phone},
    },
    db::Table,
    models::{
        common::{EntityKind, RecordStatus, StatusFilter},
        crm::{Client, Party, PartyInput, PartyRole, Supplier},
    },
    services::records::RecordDesk,
};

#[derive(Clone)]
pub struct CrmService {
    clients: RecordDesk<Client>,
    suppliers: RecordDesk<Supplier>,
}

impl CrmService {
    pub fn new(clients: Table<Client>, suppliers: Table<Supplier>, save_delay: Duration) -> Self {
        Self {
            clients: RecordDesk::new(EntityKind::Client, clients, save_delay),
            suppliers: RecordDesk::new(EntityKind::Supplier, suppliers, save_delay),
        }
    }

    fn desk(&self, role: PartyRole) -> &RecordDesk<Party> {
        match role {
            PartyRole::Client => &self.clients,
            PartyRole::Supplier => &self.suppliers,
        }
    }

    pub async fn list(&self, role: PartyRole, filter: StatusFilter) -> Vec<Party> {
        self.desk(role).list(filter).await
    }

    pub async fn get(&self, role: PartyRole, id: u64) -> Result<Party, AppError> {
        self.desk(role).get(id).await
    }

    pub async fn create(&self, role: PartyRole, input: PartyInput, status: RecordStatus) -> Party {
        let input = normalize(input);
        self.desk(role)
            .create(|id| Party::from_input(id, input, status))
            .await
    }

    pub async fn update(&self, role: PartyRole, id: u64, input: PartyInput) -> Result<Party, AppError> {
        let input = normalize(input);
        self.desk(role).update(id, |party| party.apply(input)).await
    }

    pub async fn open_inactivation(&self, role: PartyRole, id: u64) -> Result<(Uuid, Party), AppError> {
        self.desk(role).open_inactivation(id).await
    }

    pub async fn confirm_inactivation(&self, role: PartyRole, id: u64, confirmation_id: Uuid) -> Result<Party, AppError> {
        self.desk(role).confirm_inactivation(id, confirmation_id).await
    }

    pub async fn cancel_inactivation(&self, role: PartyRole, id: u64, confirmation_id: Uuid) -> Result<(), AppError> {
        self.desk(role).cancel_inactivation(id, confirmation_id).await
    }
}

// Aplica as mesmas máscaras que o formulário aplica enquanto o usuário digita
fn normalize(mut input: PartyInput) -> PartyInput {
    input.name = input.name.trim().to_string();
    input.contact.email = input.contact.email.trim().to_string();
    input.contact.phone = format_phone(&input.contact.phone);
    input.cnpj_cpf = format_cnpj_cpf(&input.cnpj_cpf);
    input.address = input
        .address
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty());
    input
}
