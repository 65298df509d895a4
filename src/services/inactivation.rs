// src/services/inactivation.rs

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::error::AppError;

// Os diálogos "Você tem certeza?" em aberto: id do registro -> confirmação vigente.
// Cada registro tem no máximo um diálogo aberto; reabrir troca a confirmação.
// Uma confirmação só vale para o registro que a abriu e só pode ser usada uma vez.
#[derive(Clone, Default)]
pub struct ConfirmationGate {
    pending: Arc<RwLock<HashMap<u64, Uuid>>>,
}

impl ConfirmationGate {
    pub async fn open(&self, record_id: u64) -> Uuid {
        let confirmation_id = Uuid::new_v4();
        self.pending.write().await.insert(record_id, confirmation_id);
        confirmation_id
    }

    /// Consome a confirmação. Se ela pertence a outro registro, nada é consumido.
    pub async fn take(&self, record_id: u64, confirmation_id: Uuid) -> Result<(), AppError> {
        let mut pending = self.pending.write().await;
        match pending.get(&record_id) {
            Some(current) if *current == confirmation_id => {
                pending.remove(&record_id);
                Ok(())
            }
            _ => Err(AppError::ConfirmationNotFound),
        }
    }

    #[cfg(test)]
    pub async fn pending_count(&self) -> usize {
        self.pending.read().await.len()
    }
}
