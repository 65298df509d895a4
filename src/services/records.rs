// src/services/records.rs

use std::time::Duration;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::Table,
    models::common::{EntityKind, StatusFilter, StatusRecord},
    services::inactivation::ConfirmationGate,
};

// O fluxo que toda página de cadastro repete: listar com abas, salvar o formulário
// e inativar depois da confirmação.
#[derive(Clone)]
pub struct RecordDesk<T> {
    kind: EntityKind,
    table: Table<T>,
    gate: ConfirmationGate,
    save_delay: Duration,
}

impl<T: StatusRecord> RecordDesk<T> {
    pub fn new(kind: EntityKind, table: Table<T>, save_delay: Duration) -> Self {
        Self {
            kind,
            table,
            gate: ConfirmationGate::default(),
            save_delay,
        }
    }

    pub async fn list(&self, filter: StatusFilter) -> Vec<T> {
        self.table.filter(|record| filter.matches(record.status())).await
    }

    pub async fn get(&self, id: u64) -> Result<T, AppError> {
        self.table
            .find(id)
            .await
            .ok_or(AppError::ResourceNotFound(self.kind, id))
    }

    pub async fn create<F>(&self, build: F) -> T
    where
        F: FnOnce(u64) -> T,
    {
        self.simulate_save().await;
        let record = self.table.insert_with(build).await;
        tracing::info!("➕ {} #{} criado: {}", self.kind, record.id(), record.name());
        record
    }

    pub async fn update<F>(&self, id: u64, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut T),
    {
        // 404 antes de esperar o "salvamento"
        self.get(id).await?;
        self.simulate_save().await;
        let record = self
            .table
            .update(id, f)
            .await
            .ok_or(AppError::ResourceNotFound(self.kind, id))?;
        tracing::info!("✏️ {} #{} atualizado", self.kind, id);
        Ok(record)
    }

    // =========================================================================
    //  INATIVAÇÃO (exclusão lógica)
    // =========================================================================

    pub async fn open_inactivation(&self, id: u64) -> Result<(Uuid, T), AppError> {
        let record = self.get(id).await?;
        let confirmation_id = self.gate.open(id).await;
        Ok((confirmation_id, record))
    }

    pub async fn confirm_inactivation(&self, id: u64, confirmation_id: Uuid) -> Result<T, AppError> {
        self.gate.take(id, confirmation_id).await?;
        let record = self
            .table
            .update(id, |record| record.inactivate())
            .await
            .ok_or(AppError::ResourceNotFound(self.kind, id))?;
        tracing::info!("🗑️ {} #{} inativado", self.kind, id);
        Ok(record)
    }

    pub async fn cancel_inactivation(&self, id: u64, confirmation_id: Uuid) -> Result<(), AppError> {
        self.gate.take(id, confirmation_id).await
    }

    // O "salvar" é simulado com um atraso fixo, sem segurar nenhum lock.
    async fn simulate_save(&self) {
        if !self.save_delay.is_zero() {
            tokio::time::sleep(self.save_delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;
    use crate::models::{common::RecordStatus, inventory::Product};

    fn desk() -> RecordDesk<Product> {
        RecordDesk::new(EntityKind::Product, Table::new(seed::products()), Duration::ZERO)
    }

    #[tokio::test]
    async fn confirming_inactivates_only_the_target() {
        let desk = desk();
        let before = desk.list(StatusFilter::All).await;

        let (token, _) = desk.open_inactivation(1).await.unwrap();
        let record = desk.confirm_inactivation(1, token).await.unwrap();
        assert_eq!(record.status, RecordStatus::Inactive);

        let after = desk.list(StatusFilter::All).await;
        assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(&after) {
            if old.id == 1 {
                assert_eq!(new.status, RecordStatus::Inactive);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[tokio::test]
    async fn cancelled_dialog_changes_nothing() {
        let desk = desk();
        let (token, _) = desk.open_inactivation(2).await.unwrap();
        desk.cancel_inactivation(2, token).await.unwrap();

        assert_eq!(desk.get(2).await.unwrap().status, RecordStatus::Active);
        assert!(matches!(
            desk.confirm_inactivation(2, token).await,
            Err(AppError::ConfirmationNotFound)
        ));
    }

    #[tokio::test]
    async fn unknown_record_cannot_open_a_dialog() {
        let desk = desk();
        assert!(matches!(
            desk.open_inactivation(99).await,
            Err(AppError::ResourceNotFound(EntityKind::Product, 99))
        ));
    }

    #[tokio::test]
    async fn list_respects_filter_tabs() {
        let desk = desk();
        assert_eq!(desk.list(StatusFilter::Active).await.len(), 2);
        assert_eq!(desk.list(StatusFilter::Inactive).await.len(), 1);
        assert_eq!(desk.list(StatusFilter::All).await.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn create_waits_for_the_simulated_save() {
        let desk = RecordDesk::new(EntityKind::Product, Table::new(seed::products()), Duration::from_millis(1000));
        let started = tokio::time::Instant::now();
        let product = desk
            .create(|id| Product {
                id,
                name: "Monitor".into(),
                description: String::new(),
                cost_price: rust_decimal::Decimal::ZERO,
                price: rust_decimal::Decimal::ONE,
                stock: 1,
                status: RecordStatus::Active,
            })
            .await;
        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(product.id, 4);
    }
}
