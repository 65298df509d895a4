// src/models/crm.rs

use serde::{Deserialize, Serialize};

use crate::common::export::CsvExport;
use crate::models::common::{status_record, EntityKind, RecordStatus};

// Clientes e fornecedores têm exatamente o mesmo formato.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyRole {
    Client,
    Supplier,
}

impl PartyRole {
    pub fn kind(self) -> EntityKind {
        match self {
            PartyRole::Client => EntityKind::Client,
            PartyRole::Supplier => EntityKind::Supplier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub phone: String,
    pub is_whatsapp: bool,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: u64,
    pub name: String,
    pub contact: Contact,
    pub cnpj_cpf: String,
    pub address: Option<String>,
    pub status: RecordStatus,
}

pub type Client = Party;
pub type Supplier = Party;

status_record!(Party);

// Campos editáveis do formulário, já normalizados pelas máscaras
#[derive(Debug, Clone)]
pub struct PartyInput {
    pub name: String,
    pub contact: Contact,
    pub cnpj_cpf: String,
    pub address: Option<String>,
}

impl Party {
    pub fn from_input(id: u64, input: PartyInput, status: RecordStatus) -> Self {
        Self {
            id,
            name: input.name,
            contact: input.contact,
            cnpj_cpf: input.cnpj_cpf,
            address: input.address,
            status,
        }
    }

    // O status nunca muda por aqui
    pub fn apply(&mut self, input: PartyInput) {
        self.name = input.name;
        self.contact = input.contact;
        self.cnpj_cpf = input.cnpj_cpf;
        self.address = input.address;
    }
}

impl CsvExport for Party {
    fn csv_headers() -> &'static [&'static str] {
        &["id", "nome", "email", "telefone", "whatsapp", "cnpj_cpf", "endereco", "status"]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.contact.email.clone(),
            self.contact.phone.clone(),
            if self.contact.is_whatsapp { "sim" } else { "não" }.to_string(),
            self.cnpj_cpf.clone(),
            self.address.clone().unwrap_or_default(),
            self.status.label().to_string(),
        ]
    }
}
