//! HTTP surface integration tests
//!
//! These tests drive the axum router in-process with tower's `oneshot`;
//! no sockets, no real DynamoDB.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use notification_record_service::config::{EventsConfig, ServerConfig, Settings, StoreConfig};
use notification_record_service::server::{create_app, AppState};
use notification_record_service::store::MemoryStore;

fn test_app() -> Router {
    let settings = Settings {
        server: ServerConfig::default(),
        store: StoreConfig::default(),
        events: EventsConfig::default(),
    };
    let state = AppState::new(settings, Arc::new(MemoryStore::new()));
    create_app(state)
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn post_notification(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/notification")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_notifications(user_id: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/notifications?user_id={}", user_id))
        .body(Body::empty())
        .unwrap()
}

// =============================================================================
// POST /notification Tests
// =============================================================================

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_accepted() {
        let app = test_app();

        let body = json!({
            "user_id": "user-1",
            "category": "billing",
            "type": "invoice.created"
        });
        let response = app.oneshot(post_notification(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(read_json(response).await, json!({"isCreated": true}));
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let app = test_app();

        let body = json!({
            "user_id": "user-1",
            "category": "orders",
            "type": "order.shipped",
            "additionalData": {"orderId": "ord-7"},
            "isCritical": true
        });
        let response = app.clone().oneshot(post_notification(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let response = app.oneshot(get_notifications("user-1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        let items = json["notifications"].as_array().unwrap();
        assert_eq!(items.len(), 1);

        // Items come back in tagged storage form
        let item = &items[0];
        assert_eq!(item["user_id"], json!({"S": "user-1"}));
        assert_eq!(item["category"], json!({"S": "orders"}));
        assert_eq!(item["type"], json!({"S": "order.shipped"}));
        assert_eq!(item["status"], json!({"S": "UNREAD"}));
        assert_eq!(item["severity"], json!({"S": "CRITICAL"}));
        assert_eq!(item["additionalData"], json!({"S": r#"{"orderId":"ord-7"}"#}));
        assert_eq!(item["isEmailed"], json!({"BOOL": false}));
        assert_eq!(item["isSMS"], json!({"BOOL": false}));
        assert!(item["id"]["S"].is_string());
        assert!(item["createdAt"]["S"].is_string());
    }

    #[tokio::test]
    async fn test_create_empty_user_id_rejected() {
        let app = test_app();

        let body = json!({
            "user_id": "  ",
            "category": "billing",
            "type": "invoice.created"
        });
        let response = app.oneshot(post_notification(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = read_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_missing_fields_rejected() {
        let app = test_app();

        let body = json!({"user_id": "user-1"});
        let response = app.oneshot(post_notification(&body)).await.unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_create_non_scalar_additional_data_rejected() {
        let app = test_app();

        let body = json!({
            "user_id": "user-1",
            "category": "billing",
            "type": "invoice.created",
            "additionalData": {"nested": {"not": "allowed"}}
        });
        let response = app.oneshot(post_notification(&body)).await.unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_create_malformed_json_rejected() {
        let app = test_app();

        let request = Request::builder()
            .method("POST")
            .uri("/notification")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert!(response.status().is_client_error());
    }
}

// =============================================================================
// GET /notifications Tests
// =============================================================================

mod get_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_unknown_user_returns_empty_list() {
        let app = test_app();

        let response = app.oneshot(get_notifications("nobody")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({"notifications": []}));
    }

    #[tokio::test]
    async fn test_get_empty_user_id_returns_empty_list() {
        let app = test_app();

        let response = app.oneshot(get_notifications("")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({"notifications": []}));
    }

    #[tokio::test]
    async fn test_get_missing_user_id_param_rejected() {
        let app = test_app();

        let request = Request::builder()
            .method("GET")
            .uri("/notifications")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_returns_records_per_user() {
        let app = test_app();

        for user_id in ["user-1", "user-1", "user-2"] {
            let body = json!({
                "user_id": user_id,
                "category": "billing",
                "type": "invoice.created"
            });
            let response = app.clone().oneshot(post_notification(&body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::ACCEPTED);
        }

        let response = app.oneshot(get_notifications("user-1")).await.unwrap();
        let json = read_json(response).await;
        assert_eq!(json["notifications"].as_array().unwrap().len(), 2);
    }
}

// =============================================================================
// GET /health Tests
// =============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_store_configuration() {
        let app = test_app();

        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["store"]["backend"], "memory");
        assert_eq!(json["store"]["table"], "notifications");
        assert!(json["uptime_seconds"].is_number());
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = test_app();

        let request = Request::builder()
            .method("GET")
            .uri("/nope")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
