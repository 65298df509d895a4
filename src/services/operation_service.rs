// src/services/operation_service.rs

use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{OperationsRepository, Table},
    models::{
        catalog::Service,
        common::{EntityKind, StatusRecord},
        crm::Client,
        inventory::Product,
        operations::{
            sum_items, CatalogSelection, ClientOption, LineItem, LineItemKind, ProductOption,
            ServiceOption, WorkOrder, WorkOrderDraft, WorkOrderOptions, WorkOrderStatus,
        },
    },
};

// Cabeçalho da O.S. vindo do formulário (o cliente já foi exigido na validação)
#[derive(Debug, Clone)]
pub struct NewWorkOrder {
    pub client_id: u64,
    pub description: String,
    pub status: WorkOrderStatus,
}

// Um item pedido pelo formulário, antes de ser resolvido no catálogo
#[derive(Debug, Clone, Copy)]
pub struct ItemRequest {
    pub kind: LineItemKind,
    pub id: u64,
    pub quantity: u32,
}

#[derive(Clone)]
pub struct OperationsService {
    repo: OperationsRepository,
    clients: Table<Client>,
    products: Table<Product>,
    services: Table<Service>,
    save_delay: Duration,
}

impl OperationsService {
    pub fn new(
        repo: OperationsRepository,
        clients: Table<Client>,
        products: Table<Product>,
        services: Table<Service>,
        save_delay: Duration,
    ) -> Self {
        Self { repo, clients, products, services, save_delay }
    }

    pub async fn list_orders(&self, status: Option<WorkOrderStatus>) -> Vec<WorkOrder> {
        self.repo.list_orders(status).await
    }

    pub async fn get_order(&self, order_id: u64) -> Result<WorkOrder, AppError> {
        self.repo.get_order(order_id).await
    }

    // =========================================================================
    //  OPÇÕES DO FORMULÁRIO
    // =========================================================================

    pub async fn options(&self) -> WorkOrderOptions {
        let clients = self
            .clients
            .all()
            .await
            .into_iter()
            .map(|c| ClientOption { id: c.id, name: c.name })
            .collect();

        let products = self
            .products
            .filter(Product::is_selectable)
            .await
            .into_iter()
            .map(|p| ProductOption { id: p.id, name: p.name, price: p.price, stock: p.stock })
            .collect();

        let services = self
            .services
            .filter(Service::is_selectable)
            .await
            .into_iter()
            .map(|s| ServiceOption { id: s.id, name: s.name, price: s.price })
            .collect();

        WorkOrderOptions { clients, products, services }
    }

    /// Busca o item no catálogo e tira a "foto" do nome e preço atuais.
    pub async fn resolve_selection(&self, kind: LineItemKind, id: u64) -> Result<CatalogSelection, AppError> {
        match kind {
            LineItemKind::Product => {
                let product = self
                    .products
                    .find(id)
                    .await
                    .ok_or(AppError::ResourceNotFound(EntityKind::Product, id))?;
                if !product.is_selectable() {
                    return Err(AppError::ItemUnavailable(EntityKind::Product, id));
                }
                Ok(CatalogSelection { kind, id, name: product.name, price: product.price })
            }
            LineItemKind::Service => {
                let service = self
                    .services
                    .find(id)
                    .await
                    .ok_or(AppError::ResourceNotFound(EntityKind::Service, id))?;
                if !service.is_selectable() {
                    return Err(AppError::ItemUnavailable(EntityKind::Service, id));
                }
                Ok(CatalogSelection { kind, id, name: service.name, price: service.price })
            }
        }
    }

    // =========================================================================
    //  RASCUNHOS
    // =========================================================================

    pub async fn create_draft(&self) -> WorkOrderDraft {
        self.repo.create_draft().await
    }

    pub async fn get_draft(&self, draft_id: Uuid) -> Result<WorkOrderDraft, AppError> {
        self.repo.get_draft(draft_id).await
    }

    pub async fn add_draft_item(&self, draft_id: Uuid, request: ItemRequest) -> Result<WorkOrderDraft, AppError> {
        // Rascunho inexistente tem prioridade sobre item inexistente
        self.repo.get_draft(draft_id).await?;
        let selection = self.resolve_selection(request.kind, request.id).await?;
        self.repo
            .update_draft(draft_id, |draft| draft.add_item(selection, request.quantity))
            .await
    }

    pub async fn remove_draft_item(&self, draft_id: Uuid, index: usize) -> Result<WorkOrderDraft, AppError> {
        self.repo
            .update_draft(draft_id, |draft| draft.remove_item(index).map(|_| ()))
            .await
    }

    /// Cria a O.S. com os itens do rascunho. O rascunho só é consumido se o cliente existir.
    pub async fn submit_draft(&self, draft_id: Uuid, new: NewWorkOrder) -> Result<WorkOrder, AppError> {
        self.repo.get_draft(draft_id).await?;
        let client = self.find_client(new.client_id).await?;
        let draft = self.repo.take_draft(draft_id).await?;
        self.save_order(client, new, draft.items).await
    }

    /// Criação direta, aplicando as mesmas regras do rascunho.
    pub async fn create_order(&self, new: NewWorkOrder, requests: Vec<ItemRequest>) -> Result<WorkOrder, AppError> {
        let client = self.find_client(new.client_id).await?;

        let mut draft = WorkOrderDraft::new();
        for request in requests {
            let selection = self.resolve_selection(request.kind, request.id).await?;
            draft.add_item(selection, request.quantity)?;
        }

        self.save_order(client, new, draft.items).await
    }

    pub async fn transition(&self, order_id: u64, next: WorkOrderStatus) -> Result<WorkOrder, AppError> {
        let order = self.repo.update_order_status(order_id, next).await?;
        tracing::info!("🔄 Ordem de serviço #{} agora está {}", order.id, order.status.label());
        Ok(order)
    }

    async fn find_client(&self, client_id: u64) -> Result<Client, AppError> {
        self.clients
            .find(client_id)
            .await
            .ok_or(AppError::ResourceNotFound(EntityKind::Client, client_id))
    }

    async fn save_order(&self, client: Client, new: NewWorkOrder, items: Vec<LineItem>) -> Result<WorkOrder, AppError> {
        let total = sum_items(&items).ok_or(AppError::AmountOverflow)?;

        if !self.save_delay.is_zero() {
            tokio::time::sleep(self.save_delay).await;
        }

        let order = self
            .repo
            .insert_order(|id| WorkOrder {
                id,
                client_id: client.id,
                client_name: client.name().to_string(),
                description: new.description,
                items,
                total,
                created_at: Utc::now().date_naive(),
                status: new.status,
            })
            .await;

        tracing::info!("🧾 Ordem de serviço #{} criada para {} (total {})", order.id, order.client_name, order.total);
        Ok(order)
    }
}
