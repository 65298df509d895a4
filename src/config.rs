// src/config.rs

use std::{env, path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;

use crate::{
    common::i18n::I18nStore,
    db::{seed, OperationsRepository, Table},
    services::{
        auth::AuthService, catalog_service::CatalogService, crm_service::CrmService,
        dashboard_service::DashboardService, document_service::DocumentService,
        inventory_service::InventoryService, operation_service::OperationsService,
    },
};

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub jwt_secret: String,
    // Atraso do "salvar" simulado dos formulários
    pub save_delay: Duration,
    pub bcrypt_cost: u32,
    pub fonts_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?;

        let save_delay_ms = match env::var("SAVE_DELAY_MS") {
            Ok(value) => value.parse::<u64>().context("SAVE_DELAY_MS deve ser um número")?,
            Err(_) => 1000,
        };

        let bcrypt_cost = match env::var("BCRYPT_COST") {
            Ok(value) => value.parse::<u32>().context("BCRYPT_COST deve ser um número")?,
            Err(_) => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            jwt_secret,
            save_delay: Duration::from_millis(save_delay_ms),
            bcrypt_cost,
            fonts_dir: env::var("FONTS_DIR").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("./fonts")),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub i18n_store: Arc<I18nStore>,
    pub auth_service: AuthService,
    pub crm_service: CrmService,
    pub inventory_service: InventoryService,
    pub catalog_service: CatalogService,
    pub operations_service: OperationsService,
    pub dashboard_service: DashboardService,
    pub document_service: DocumentService,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        // --- Tabelas em memória, carregadas com os dados de exemplo ---
        let clients = Table::new(seed::clients());
        let suppliers = Table::new(seed::suppliers());
        let products = Table::new(seed::products());
        let services = Table::new(seed::services());
        let orders = Table::new(seed::work_orders());
        let operations_repo = OperationsRepository::new(orders.clone());

        // --- Monta o gráfico de dependências ---
        let auth_service = AuthService::new(config.jwt_secret.clone(), config.bcrypt_cost)
            .context("Falha ao gerar o hash da senha de demonstração")?;
        let crm_service = CrmService::new(clients.clone(), suppliers.clone(), config.save_delay);
        let inventory_service = InventoryService::new(products.clone(), config.save_delay);
        let catalog_service = CatalogService::new(services.clone(), config.save_delay);
        let operations_service = OperationsService::new(
            operations_repo.clone(),
            clients.clone(),
            products.clone(),
            services.clone(),
            config.save_delay,
        );
        let dashboard_service = DashboardService::new(clients, suppliers, products, services, orders);
        let document_service = DocumentService::new(operations_repo, config.fonts_dir.clone());

        tracing::info!("✅ Dados de exemplo carregados em memória");

        Ok(Self {
            config: Arc::new(config),
            i18n_store: Arc::new(I18nStore::new()),
            auth_service,
            crm_service,
            inventory_service,
            catalog_service,
            operations_service,
            dashboard_service,
            document_service,
        })
    }
}
