// tests/api.rs
//
// Testes de ponta a ponta do router, sem abrir socket.

use std::{path::PathBuf, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use vitrine::{
    config::{AppState, Config},
    routes::create_router,
};

fn app() -> Router {
    let config = Config {
        bind_addr: "127.0.0.1:0".into(),
        jwt_secret: "segredo-de-teste".into(),
        save_delay: Duration::ZERO,
        bcrypt_cost: 4,
        fonts_dir: PathBuf::from("/caminho/sem/fontes"),
    };
    create_router(AppState::new(config).unwrap())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body, None).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    bearer: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn ids(listing: &Value) -> Vec<u64> {
    listing["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect()
}

// =============================================================================
//  FORMULÁRIOS
// =============================================================================

#[tokio::test]
async fn client_form_rejects_short_name_and_bad_email() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/clients",
        Some(json!({ "name": "Al", "email": "not-an-email" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["name"][0], "O nome deve ter pelo menos 3 caracteres.");
    assert_eq!(body["details"]["email"][0], "Por favor, insira um endereço de e-mail válido.");

    let (_, listing) = send(&app, Method::GET, "/api/clients", None).await;
    assert_eq!(listing["total"], 3);
}

#[tokio::test]
async fn product_form_rejects_non_positive_price_and_negative_stock() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": "Monitor", "costPrice": -1, "price": 0, "stock": -3 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_object().unwrap();
    assert!(details.contains_key("costPrice"));
    assert!(details.contains_key("price"));
    assert!(details.contains_key("stock"));
}

#[tokio::test]
async fn valid_service_form_appends_one_active_record() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/services",
        Some(json!({ "name": "Suporte Remoto", "description": "Atendimento por hora", "price": 120.5 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 4);
    assert_eq!(body["data"]["status"], "ACTIVE");
    assert_eq!(body["toast"]["title"], "Serviço Adicionado!");
    assert_eq!(body["toast"]["description"], "Suporte Remoto foi adicionado com sucesso.");
    assert_eq!(body["redirectTo"], "/dashboard/services");

    let (_, listing) = send(&app, Method::GET, "/api/services", None).await;
    assert_eq!(listing["total"], 4);
}

#[tokio::test]
async fn client_form_applies_input_masks() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/clients",
        Some(json!({
            "name": "Ana Souza",
            "email": "ana@example.com",
            "phone": "1132654321",
            "cnpjCpf": "11222333000144",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["contact"]["phone"], "(11) 3265-4321");
    assert_eq!(body["data"]["cnpjCpf"], "11.222.333/0001-44");
}

#[tokio::test]
async fn unknown_status_value_is_a_field_error() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/suppliers",
        Some(json!({ "name": "Fornecedor 3", "email": "f3@example.com", "status": "ARCHIVED" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["status"][0], "Status inválido.");
}

#[tokio::test]
async fn padded_names_are_checked_after_trimming() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/clients",
        Some(json!({ "name": "   ab  ", "email": "ab@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["name"][0], "O nome deve ter pelo menos 3 caracteres.");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": "      ", "price": 10, "stock": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, clients) = send(&app, Method::GET, "/api/clients", None).await;
    let (_, products) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(clients["total"], 3);
    assert_eq!(products["total"], 3);
}

#[tokio::test]
async fn undecodable_fields_get_the_form_error_shape() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/clients", Some(json!({ "email": "sem-nome@example.com" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Um ou mais campos são inválidos.");
    assert_eq!(body["details"]["name"][0], "Campo obrigatório.");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": "Monitor", "price": 10, "stock": "abc" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["stock"][0], "Valor em formato inválido.");
}

#[tokio::test]
async fn prices_above_the_ceiling_are_refused() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/services",
        Some(json!({ "name": "Projeto gigante", "price": 1e25 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["price"][0], "O valor não pode passar de R$ 1.000.000.000,00.");
}

#[tokio::test]
async fn update_keeps_id_and_status() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/products/3",
        Some(json!({ "name": "Teclado Mecânico RGB", "costPrice": 310, "price": 499.9, "stock": 4 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 3);
    assert_eq!(body["data"]["status"], "INACTIVE");
    assert_eq!(body["data"]["stock"], 4);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/products/99",
        Some(json!({ "name": "Fantasma", "price": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
//  LISTAGENS E EXPORTAÇÃO
// =============================================================================

#[tokio::test]
async fn status_tabs_filter_the_listing() {
    let app = app();
    let (_, active) = send(&app, Method::GET, "/api/clients?status=active", None).await;
    let (_, inactive) = send(&app, Method::GET, "/api/clients?status=inactive", None).await;
    let (_, all) = send(&app, Method::GET, "/api/clients?status=all", None).await;

    assert_eq!(ids(&active), vec![1, 2]);
    assert_eq!(ids(&inactive), vec![3]);
    assert_eq!(all["total"], 3);
}

#[tokio::test]
async fn export_returns_csv_of_the_filtered_table() {
    let app = app();
    let (status, bytes) = send_raw(&app, Method::GET, "/api/exports/products?status=active", None, None).await;

    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "id,nome,descricao,preco_custo,preco_venda,estoque,status");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1,Notebook Pro,"));
}

// =============================================================================
//  INATIVAÇÃO
// =============================================================================

#[tokio::test]
async fn confirmed_inactivation_touches_only_the_target() {
    let app = app();
    let (_, before) = send(&app, Method::GET, "/api/products", None).await;

    let (status, prompt) = send(&app, Method::POST, "/api/products/2/inactivation", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(prompt["title"], "Você tem certeza?");
    assert_eq!(prompt["description"], "Esta ação irá inativar o produto Mouse Sem Fio.");

    let confirmation_id = prompt["confirmationId"].as_str().unwrap();
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/products/2/inactivation/{confirmation_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "INACTIVE");

    let (_, after) = send(&app, Method::GET, "/api/products", None).await;
    let before = before["items"].as_array().unwrap();
    let after = after["items"].as_array().unwrap();
    assert_eq!(before.len(), after.len());
    for (old, new) in before.iter().zip(after) {
        if old["id"] == 2 {
            assert_eq!(new["status"], "INACTIVE");
        } else {
            assert_eq!(old, new);
        }
    }

    // A confirmação já foi consumida
    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/products/2/inactivation/{confirmation_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cancelled_dialog_and_mismatched_record_change_nothing() {
    let app = app();
    let (_, prompt) = send(&app, Method::POST, "/api/clients/1/inactivation", None).await;
    let confirmation_id = prompt["confirmationId"].as_str().unwrap().to_string();

    // Token de outro registro
    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/clients/2/inactivation/{confirmation_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/clients/1/inactivation/{confirmation_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, active) = send(&app, Method::GET, "/api/clients?status=active", None).await;
    assert_eq!(ids(&active), vec![1, 2]);
}

#[tokio::test]
async fn reopening_the_dialog_leaves_one_live_confirmation() {
    let app = app();
    let (_, first) = send(&app, Method::POST, "/api/services/1/inactivation", None).await;
    let (_, second) = send(&app, Method::POST, "/api/services/1/inactivation", None).await;
    let first = first["confirmationId"].as_str().unwrap().to_string();
    let second = second["confirmationId"].as_str().unwrap().to_string();
    assert_ne!(first, second);

    let (status, _) = send(&app, Method::POST, &format!("/api/services/1/inactivation/{first}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::POST, &format!("/api/services/1/inactivation/{second}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "INACTIVE");
}

// =============================================================================
//  ORDENS DE SERVIÇO
// =============================================================================

#[tokio::test]
async fn draft_total_tracks_added_and_removed_items() {
    let app = app();
    let (status, draft) = send(&app, Method::POST, "/api/work-order-drafts", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(draft["total"].as_f64(), Some(0.0));
    let draft_id = draft["id"].as_str().unwrap().to_string();
    let items_uri = format!("/api/work-order-drafts/{draft_id}/items");

    send(&app, Method::POST, &items_uri, Some(json!({ "type": "product", "id": 2, "quantity": 2 }))).await;
    send(&app, Method::POST, &items_uri, Some(json!({ "type": "service", "id": 1 }))).await;
    let (_, draft) = send(&app, Method::POST, &items_uri, Some(json!({ "type": "product", "id": 2 }))).await;

    assert_eq!(draft["items"].as_array().unwrap().len(), 2);
    assert_eq!(draft["items"][0]["quantity"], 3);
    assert_eq!(draft["total"].as_f64(), Some(1950.0));

    let (status, draft) = send(&app, Method::DELETE, &format!("{items_uri}/1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(draft["total"].as_f64(), Some(450.0));

    let (status, _) = send(&app, Method::DELETE, &format!("{items_uri}/7"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unavailable_catalog_items_are_refused() {
    let app = app();
    let (_, draft) = send(&app, Method::POST, "/api/work-order-drafts", None).await;
    let items_uri = format!("/api/work-order-drafts/{}/items", draft["id"].as_str().unwrap());

    let (status, _) = send(&app, Method::POST, &items_uri, Some(json!({ "type": "product", "id": 3 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::POST, &items_uri, Some(json!({ "type": "service", "id": 40 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::POST, &items_uri, Some(json!({ "type": "service", "id": 1, "quantity": 0 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["quantity"][0], "A quantidade deve ser pelo menos 1.");

    let (_, options) = send(&app, Method::GET, "/api/work-order-options", None).await;
    assert_eq!(options["products"].as_array().unwrap().len(), 2);
    assert_eq!(options["services"].as_array().unwrap().len(), 2);
    assert_eq!(options["clients"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn quantities_are_capped() {
    let app = app();
    let (_, draft) = send(&app, Method::POST, "/api/work-order-drafts", None).await;
    let items_uri = format!("/api/work-order-drafts/{}/items", draft["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        Method::POST,
        &items_uri,
        Some(json!({ "type": "service", "id": 1, "quantity": 10_001 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["quantity"][0], "A quantidade não pode passar de 10000.");

    // Fora do alcance de u32 nem chega ao validador
    let (status, body) = send(
        &app,
        Method::POST,
        &items_uri,
        Some(json!({ "type": "service", "id": 1, "quantity": 4_000_000_000u64 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["quantity"][0], "Valor em formato inválido.");

    let (_, draft) = send(&app, Method::GET, &items_uri.replace("/items", ""), None).await;
    assert!(draft["items"].as_array().unwrap().is_empty());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/work-orders",
        Some(json!({ "clientId": 1, "items": [{ "type": "product", "id": 1, "quantity": 99_999 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["items[0].quantity"].is_array(), "{body}");
}

#[tokio::test]
async fn submitting_a_draft_requires_a_client() {
    let app = app();
    let (_, draft) = send(&app, Method::POST, "/api/work-order-drafts", None).await;
    let draft_id = draft["id"].as_str().unwrap().to_string();
    send(
        &app,
        Method::POST,
        &format!("/api/work-order-drafts/{draft_id}/items"),
        Some(json!({ "type": "service", "id": 2 })),
    )
    .await;

    let submit_uri = format!("/api/work-order-drafts/{draft_id}/submit");
    let (status, body) = send(&app, Method::POST, &submit_uri, Some(json!({ "description": "Site novo" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["clientId"][0], "Selecione um cliente.");

    let (status, body) = send(
        &app,
        Method::POST,
        &submit_uri,
        Some(json!({ "clientId": 1, "description": "Site novo" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 4);
    assert_eq!(body["data"]["status"], "PENDING");
    assert_eq!(body["data"]["total"].as_f64(), Some(3500.0));
    assert_eq!(body["toast"]["title"], "Ordem de Serviço Criada!");
    assert_eq!(body["redirectTo"], "/dashboard/work-orders");

    let (status, _) = send(&app, Method::GET, &format!("/api/work-order-drafts/{draft_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn one_shot_creation_and_lifecycle() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/work-orders",
        Some(json!({
            "clientId": 2,
            "status": "Em Andamento",
            "items": [{ "type": "product", "id": 1, "quantity": 1 }, { "type": "service", "id": 1 }],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["total"].as_f64(), Some(9000.0));
    assert_eq!(body["data"]["status"], "IN_PROGRESS");
    let id = body["data"]["id"].as_u64().unwrap();

    let status_uri = format!("/api/work-orders/{id}/status");
    let (status, body) = send(&app, Method::PATCH, &status_uri, Some(json!({ "status": "COMPLETED" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "COMPLETED");

    let (status, _) = send(&app, Method::PATCH, &status_uri, Some(json!({ "status": "PENDING" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, listing) = send(&app, Method::GET, "/api/work-orders?status=COMPLETED", None).await;
    assert_eq!(ids(&listing), vec![1, id]);
}

#[tokio::test]
async fn nested_item_errors_are_reported_per_index() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/work-orders",
        Some(json!({ "clientId": 1, "items": [{ "type": "service", "id": 1, "quantity": 0 }] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["items[0].quantity"].is_array(), "{body}");
}

#[tokio::test]
async fn pdf_of_unknown_order_is_not_found() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/api/work-orders/99/pdf", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Sem fontes configuradas o PDF não pode ser gerado
    let (status, body) = send(&app, Method::GET, "/api/work-orders/1/pdf", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Fonte não encontrada na pasta de fontes.");
}

#[tokio::test]
async fn dashboard_summary_reflects_the_tables() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/dashboard/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clients"]["active"], 2);
    assert_eq!(body["productsOutOfStock"], 1);
    assert_eq!(body["workOrders"]["pending"], 1);
}

// =============================================================================
//  LOGIN
// =============================================================================

#[tokio::test]
async fn login_with_the_demo_pair_redirects_to_the_dashboard() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": "user@example.com", "password": "password" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["redirectTo"], "/dashboard");

    let token = body["token"].as_str().unwrap();
    let (status, bytes) = send_raw(&app, Method::GET, "/api/users/me", None, Some(token)).await;
    assert_eq!(status, StatusCode::OK);
    let me: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(me["email"], "user@example.com");
}

#[tokio::test]
async fn any_other_pair_returns_an_error_without_redirect() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": "user@example.com", "password": "wrong" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Email ou senha inválidos.");
    assert!(body.get("redirectTo").is_none());

    let (status, body) = send(&app, Method::POST, "/api/auth/login", Some(json!({ "email": "nope", "password": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Entrada inválida.");
}

#[tokio::test]
async fn profile_requires_a_token() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/api/users/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_raw(&app, Method::GET, "/api/users/me", None, Some("lixo")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, Method::POST, "/api/auth/logout", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["redirectTo"], "/");
}
