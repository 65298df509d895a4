// src/db/operations_repo.rs

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::Table,
    models::{
        common::EntityKind,
        operations::{WorkOrder, WorkOrderDraft, WorkOrderStatus},
    },
};

// Rascunho parado por mais que isso é descartado
pub const DRAFT_TTL: Duration = Duration::from_secs(30 * 60);
pub const MAX_DRAFTS: usize = 1_000;

struct DraftSlot {
    draft: WorkOrderDraft,
    touched: Instant,
}

impl DraftSlot {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.touched.elapsed() >= ttl
    }
}

// Ordens de serviço e os rascunhos do formulário de nova O.S.
#[derive(Clone)]
pub struct OperationsRepository {
    orders: Table<WorkOrder>,
    drafts: Arc<RwLock<HashMap<Uuid, DraftSlot>>>,
    draft_ttl: Duration,
    max_drafts: usize,
}

impl OperationsRepository {
    pub fn new(orders: Table<WorkOrder>) -> Self {
        Self::with_draft_limits(orders, DRAFT_TTL, MAX_DRAFTS)
    }

    pub fn with_draft_limits(orders: Table<WorkOrder>, draft_ttl: Duration, max_drafts: usize) -> Self {
        Self {
            orders,
            drafts: Arc::new(RwLock::new(HashMap::new())),
            draft_ttl,
            max_drafts: max_drafts.max(1),
        }
    }

    // =========================================================================
    //  ORDENS
    // =========================================================================

    pub async fn list_orders(&self, status: Option<WorkOrderStatus>) -> Vec<WorkOrder> {
        self.orders
            .filter(|order| status.is_none_or(|s| order.status == s))
            .await
    }

    pub async fn get_order(&self, order_id: u64) -> Result<WorkOrder, AppError> {
        self.orders
            .find(order_id)
            .await
            .ok_or(AppError::ResourceNotFound(EntityKind::WorkOrder, order_id))
    }

    pub async fn insert_order<F>(&self, build: F) -> WorkOrder
    where
        F: FnOnce(u64) -> WorkOrder,
    {
        self.orders.insert_with(build).await
    }

    /// Valida a transição e grava o novo status no mesmo lock.
    pub async fn update_order_status(&self, order_id: u64, next: WorkOrderStatus) -> Result<WorkOrder, AppError> {
        let mut outcome = Ok(());
        let updated = self
            .orders
            .update(order_id, |order| {
                if order.status.can_transition_to(next) {
                    order.status = next;
                } else {
                    outcome = Err(AppError::InvalidTransition { from: order.status, to: next });
                }
            })
            .await
            .ok_or(AppError::ResourceNotFound(EntityKind::WorkOrder, order_id))?;
        outcome.map(|_| updated)
    }

    // =========================================================================
    //  RASCUNHOS
    // =========================================================================

    /// Abre um rascunho novo. Os vencidos saem antes; no limite, sai o mais antigo.
    pub async fn create_draft(&self) -> WorkOrderDraft {
        let mut drafts = self.drafts.write().await;
        let ttl = self.draft_ttl;
        drafts.retain(|_, slot| !slot.is_expired(ttl));

        if drafts.len() >= self.max_drafts {
            let oldest = drafts.iter().min_by_key(|(_, slot)| slot.touched).map(|(id, _)| *id);
            if let Some(id) = oldest {
                drafts.remove(&id);
                tracing::warn!("🗑️ Limite de rascunhos atingido, descartando {}", id);
            }
        }

        let draft = WorkOrderDraft::new();
        drafts.insert(draft.id, DraftSlot { draft: draft.clone(), touched: Instant::now() });
        draft
    }

    pub async fn get_draft(&self, draft_id: Uuid) -> Result<WorkOrderDraft, AppError> {
        self.drafts
            .read()
            .await
            .get(&draft_id)
            .filter(|slot| !slot.is_expired(self.draft_ttl))
            .map(|slot| slot.draft.clone())
            .ok_or(AppError::DraftNotFound)
    }

    /// Cada alteração renova o prazo do rascunho.
    pub async fn update_draft<F>(&self, draft_id: Uuid, f: F) -> Result<WorkOrderDraft, AppError>
    where
        F: FnOnce(&mut WorkOrderDraft) -> Result<(), AppError>,
    {
        let mut drafts = self.drafts.write().await;
        let slot = self.live_slot(&mut drafts, draft_id)?;
        f(&mut slot.draft)?;
        slot.touched = Instant::now();
        Ok(slot.draft.clone())
    }

    pub async fn take_draft(&self, draft_id: Uuid) -> Result<WorkOrderDraft, AppError> {
        let mut drafts = self.drafts.write().await;
        self.live_slot(&mut drafts, draft_id)?;
        drafts
            .remove(&draft_id)
            .map(|slot| slot.draft)
            .ok_or(AppError::DraftNotFound)
    }

    // Rascunho vencido é removido na hora e tratado como inexistente
    fn live_slot<'a>(
        &self,
        drafts: &'a mut HashMap<Uuid, DraftSlot>,
        draft_id: Uuid,
    ) -> Result<&'a mut DraftSlot, AppError> {
        if drafts.get(&draft_id).is_some_and(|slot| slot.is_expired(self.draft_ttl)) {
            drafts.remove(&draft_id);
        }
        drafts.get_mut(&draft_id).ok_or(AppError::DraftNotFound)
    }
}
