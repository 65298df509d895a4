// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{config::AppState, handlers, middleware::auth::auth_guard};

pub fn create_router(app_state: AppState) -> Router {
    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout));

    // Rotas de usuário (protegidas pelo middleware)
    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let client_routes = Router::new()
        .route("/"
               ,post(handlers::crm::create_client)
               .get(handlers::crm::list_clients)
        )
        .route("/{id}"
               ,get(handlers::crm::get_client)
               .put(handlers::crm::update_client)
        )
        .route("/{id}/inactivation", post(handlers::crm::open_client_inactivation))
        .route("/{id}/inactivation/{confirmation_id}"
               ,post(handlers::crm::confirm_client_inactivation)
               .delete(handlers::crm::cancel_client_inactivation)
        );

    let supplier_routes = Router::new()
        .route("/"
               ,post(handlers::crm::create_supplier)
               .get(handlers::crm::list_suppliers)
        )
        .route("/{id}"
               ,get(handlers::crm::get_supplier)
               .put(handlers::crm::update_supplier)
        )
        .route("/{id}/inactivation", post(handlers::crm::open_supplier_inactivation))
        .route("/{id}/inactivation/{confirmation_id}"
               ,post(handlers::crm::confirm_supplier_inactivation)
               .delete(handlers::crm::cancel_supplier_inactivation)
        );

    let product_routes = Router::new()
        .route("/"
               ,post(handlers::inventory::create_product)
               .get(handlers::inventory::list_products)
        )
        .route("/{id}"
               ,get(handlers::inventory::get_product)
               .put(handlers::inventory::update_product)
        )
        .route("/{id}/inactivation", post(handlers::inventory::open_product_inactivation))
        .route("/{id}/inactivation/{confirmation_id}"
               ,post(handlers::inventory::confirm_product_inactivation)
               .delete(handlers::inventory::cancel_product_inactivation)
        );

    let service_routes = Router::new()
        .route("/"
               ,post(handlers::catalog::create_service)
               .get(handlers::catalog::list_services)
        )
        .route("/{id}"
               ,get(handlers::catalog::get_service)
               .put(handlers::catalog::update_service)
        )
        .route("/{id}/inactivation", post(handlers::catalog::open_service_inactivation))
        .route("/{id}/inactivation/{confirmation_id}"
               ,post(handlers::catalog::confirm_service_inactivation)
               .delete(handlers::catalog::cancel_service_inactivation)
        );

    let work_order_routes = Router::new()
        .route("/"
               ,post(handlers::operations::create_work_order)
               .get(handlers::operations::list_work_orders)
        )
        .route("/{id}", get(handlers::operations::get_work_order))
        .route("/{id}/status", patch(handlers::operations::update_work_order_status))
        .route("/{id}/pdf", get(handlers::documents::generate_order_pdf));

    let draft_routes = Router::new()
        .route("/", post(handlers::operations::create_draft))
        .route("/{draft_id}", get(handlers::operations::get_draft))
        .route("/{draft_id}/items", post(handlers::operations::add_draft_item))
        .route("/{draft_id}/items/{index}", delete(handlers::operations::remove_draft_item))
        .route("/{draft_id}/submit", post(handlers::operations::submit_draft));

    let export_routes = Router::new()
        .route("/clients", get(handlers::exports::export_clients))
        .route("/suppliers", get(handlers::exports::export_suppliers))
        .route("/products", get(handlers::exports::export_products))
        .route("/services", get(handlers::exports::export_services))
        .route("/work-orders", get(handlers::exports::export_work_orders));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/dashboard/summary", get(handlers::dashboard::get_summary))
        .route("/api/work-order-options", get(handlers::operations::get_work_order_options))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/clients", client_routes)
        .nest("/api/suppliers", supplier_routes)
        .nest("/api/products", product_routes)
        .nest("/api/services", service_routes)
        .nest("/api/work-orders", work_order_routes)
        .nest("/api/work-order-drafts", draft_routes)
        .nest("/api/exports", export_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
