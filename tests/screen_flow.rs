//! Screen flows against a mock backend through the real HTTP client:
//! create-then-reload, local validation making zero requests, and failed
//! mutations leaving screen data untouched.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use app_core::assets::AssetsScreen;
use app_core::categories::{CategoriesScreen, DELETE_BLOCKED_MESSAGE};
use app_core::{ScreenError, ScreenStatus};
use inventory_api::session::{SessionData, SessionHandle, SessionUser};
use inventory_api::{ApiClient, ApiClientConfig, InventoryClient};

fn client_for(server: &MockServer) -> InventoryClient {
    let session = SessionHandle::new();
    session.set(SessionData {
        token: "jwt-flow".to_string(),
        user: SessionUser {
            name: "Operador".to_string(),
            extra: serde_json::Value::Null,
        },
    });
    let config = ApiClientConfig::new(format!("{}/api", server.uri()));
    InventoryClient::new(ApiClient::new(config, session))
}

async fn mount_listings(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api/activos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "codigo": "EQ-001", "nombre": "Laptop", "estado": "DISPONIBLE"}
        ])))
        .expect(expected_calls)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/bodegas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "nombre": "Central"}
        ])))
        .expect(expected_calls)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/categorias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "nombre": "Equipos", "prefijo": "EQ"}
        ])))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_create_asset_posts_once_and_reloads() {
    let server = MockServer::start().await;
    // Initial load plus the post-create reload
    mount_listings(&server, 2).await;

    Mock::given(method("POST"))
        .and(path("/api/activos"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = AssetsScreen::new(client_for(&server));
    screen.load().await.unwrap();

    screen.form.code = "EQ-002".to_string();
    screen.form.name = "Proyector".to_string();
    screen.create().await.unwrap();

    assert_eq!(screen.status, ScreenStatus::Ready);
    assert!(screen.form.code.is_empty());
}

#[tokio::test]
async fn test_invalid_form_makes_no_requests() {
    let server = MockServer::start().await;
    mount_listings(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/activos"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut screen = AssetsScreen::new(client_for(&server));
    screen.load().await.unwrap();

    screen.form.code = String::new();
    screen.form.name = "Sin código".to_string();
    let err = screen.create().await.unwrap_err();
    assert!(matches!(err, ScreenError::Validation(_)));
}

#[tokio::test]
async fn test_partial_load_failure_fails_whole_screen() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/activos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/bodegas"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categorias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let mut screen = AssetsScreen::new(client_for(&server));
    let err = screen.load().await.unwrap_err();

    assert_eq!(screen.status, ScreenStatus::Failed);
    assert!(screen.assets.is_empty());
    assert!(err.to_string().contains("bodegas"));
}

#[tokio::test]
async fn test_rejected_category_delete_leaves_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categorias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "nombre": "Equipos", "prefijo": "EQ"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/categorias/1"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"error": "tiene activos asociados"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut screen = CategoriesScreen::new(client_for(&server));
    screen.load().await.unwrap();

    let err = screen.delete(1).await.unwrap_err();
    assert_eq!(err.to_string(), DELETE_BLOCKED_MESSAGE);
    assert_eq!(screen.categories.len(), 1);
    assert_eq!(screen.status, ScreenStatus::Ready);
}
