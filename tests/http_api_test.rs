mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use supplier_api::{
    auth::Claims,
    config::AppConfig,
    dto::CreateSupplierRequest,
    services::SupplierService,
    AppState,
};

const TEST_SECRET: &str = "integration-test-secret-key-0123456789abcdef";

fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        log_level: "debug".to_string(),
        log_json: false,
        auto_migrate: false,
        db_max_connections: 1,
        db_min_connections: 1,
        db_connect_timeout_secs: 30,
        db_idle_timeout_secs: 600,
        db_acquire_timeout_secs: 8,
    }
}

async fn test_app() -> (Router, Arc<AppState>) {
    let db = common::setup_db().await;
    let state = Arc::new(AppState::new(db, test_config()));
    (supplier_api::build_router(state.clone()), state)
}

fn bearer() -> String {
    let claims = Claims {
        sub: "integration-tests".to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();
    format!("Bearer {}", token)
}

fn authed(request: axum::http::request::Builder) -> axum::http::request::Builder {
    request.header(header::AUTHORIZATION, bearer())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn liveness_is_open_and_healthy() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/suppliers/liveness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Healthy");
}

#[tokio::test]
async fn readiness_pings_the_database() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/suppliers/readiness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn versioned_api_rejects_missing_and_bad_tokens() {
    let (app, _) = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/v1/suppliers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/suppliers")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_category_returns_201_with_location() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(
            authed(Request::builder())
                .method("POST")
                .uri("/v1/supplier-categories")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"name": "Electronics", "description": "Boards and chips"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(location.starts_with("/v1/supplier-categories/"));

    let body = body_json(response).await;
    assert_eq!(body["name"], "Electronics");
    assert_eq!(body["isActive"], true);
}

#[tokio::test]
async fn invalid_category_payload_returns_400() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(
            authed(Request::builder())
                .method("POST")
                .uri("/v1/supplier-categories")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"name": ""}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn supplier_listing_carries_pagination_headers() {
    let (app, state) = test_app().await;

    let service = SupplierService::new(state.db.clone());
    for i in 0..25 {
        service
            .create_supplier(CreateSupplierRequest {
                name: format!("Supplier {:02}", i),
                registration_number: None,
                tax_id: None,
                website: None,
                description: None,
                status: None,
                category_id: None,
                country_id: None,
                currency_id: None,
                lead_time_days: None,
                minimum_order_amount: None,
                payment_terms: None,
                credit_limit: None,
                quality_rating: None,
                delivery_rating: None,
                service_rating: None,
            })
            .await
            .unwrap();
    }

    let response = app
        .oneshot(
            authed(Request::builder())
                .uri("/v1/suppliers?page=1&pageSize=20")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-total-count").unwrap(), "25");
    assert_eq!(response.headers().get("x-page").unwrap(), "1");
    assert_eq!(response.headers().get("x-page-size").unwrap(), "20");

    let body = body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 20);
}

#[tokio::test]
async fn missing_supplier_returns_404() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(
            authed(Request::builder())
                .uri("/v1/suppliers/424242")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_supplier_defaults_status_to_pending() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(
            authed(Request::builder())
                .method("POST")
                .uri("/v1/suppliers")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"name": "Acme Industrial", "paymentTerms": "NET30"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["paymentTerms"], "NET30");
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[tokio::test]
async fn contact_routes_round_trip() {
    let (app, state) = test_app().await;

    let supplier = SupplierService::new(state.db.clone())
        .create_supplier(CreateSupplierRequest {
            name: "Contact Host".to_string(),
            registration_number: None,
            tax_id: None,
            website: None,
            description: None,
            status: None,
            category_id: None,
            country_id: None,
            currency_id: None,
            lead_time_days: None,
            minimum_order_amount: None,
            payment_terms: None,
            credit_limit: None,
            quality_rating: None,
            delivery_rating: None,
            service_rating: None,
        })
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            authed(Request::builder())
                .method("POST")
                .uri("/v1/supplier-contacts")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "supplierId": supplier.id,
                        "firstName": "Dana",
                        "lastName": "Reyes",
                        "email": "dana.reyes@example.com"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["role"], "Primary");

    let response = app
        .oneshot(
            authed(Request::builder())
                .uri(format!("/v1/supplier-contacts/supplier/{}", supplier.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}
