//! Product search and the product save workflow against the fake backend.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use backoffice_admin::AppError;
use backoffice_admin::api::types::ProductInput;
use backoffice_admin::components::Toast;
use backoffice_admin::services::product_workflow;
use backoffice_admin::services::{ProductExtras, WorkflowError, WorkflowStep};
use backoffice_core::ProductId;
use backoffice_integration_tests::FakeBackend;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::collections::HashMap;

fn input() -> ProductInput {
    ProductInput {
        name: "Linen shirt".to_string(),
        sku: "LS-01".to_string(),
        active: true,
        ..ProductInput::default()
    }
}

fn extras() -> ProductExtras {
    ProductExtras {
        price: Some(Decimal::new(8990, 2)),
        main_image: Some("https://cdn.example.com/ls-01.jpg".to_string()),
        extra_images: vec![String::new(), "https://cdn.example.com/ls-01-b.jpg".to_string()],
    }
}

fn created() -> Router {
    Router::new()
        .route(
            "/products",
            post(|| async { (StatusCode::CREATED, Json(json!({"id": 42, "name": "Linen shirt"}))) }),
        )
        .route("/products/{id}", delete(|| async { StatusCode::NO_CONTENT }))
}

#[tokio::test]
async fn test_search_passes_term_and_parses_results() {
    let router = Router::new().route(
        "/products/search",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let term = params.get("w").cloned().unwrap_or_default();
            Json(json!([
                {"id": 1, "name": format!("{term} tee"), "sku": "T-1", "prices": [{"price": "19.90"}]}
            ]))
        }),
    );
    let backend = FakeBackend::start(router).await;

    let products = backend
        .state
        .api()
        .search_products("blue shirt")
        .await
        .expect("search should succeed");

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "blue shirt tee");
    assert_eq!(products[0].first_price().amount, Decimal::new(1990, 2));
    assert!(backend.log.contains("GET /products/search?w=blue+shirt"));
}

#[tokio::test]
async fn test_server_message_reaches_the_toast() {
    let router = Router::new().route(
        "/products",
        post(|| async {
            (
                StatusCode::CONFLICT,
                Json(json!({"statusCode": 409, "message": "SKU already in use"})),
            )
        }),
    );
    let backend = FakeBackend::start(router).await;

    let err = product_workflow::create_product(backend.state.api(), &input(), &extras())
        .await
        .expect_err("conflict should fail the workflow");
    assert!(matches!(err, WorkflowError::Product(_)));

    let toast = AppError::from(err).to_toast("Could not save product");
    assert_eq!(toast, Some(Toast::error("SKU already in use")));
    assert_eq!(backend.log.entries(), vec!["POST /products".to_string()]);
}

#[tokio::test]
async fn test_full_product_creation() {
    let router = created()
        .route("/prices", post(|| async { StatusCode::CREATED }))
        .route(
            "/products/images",
            post(|Json(body): Json<Value>| async move {
                if body["productId"] == 42 {
                    StatusCode::CREATED
                } else {
                    StatusCode::BAD_REQUEST
                }
            }),
        );
    let backend = FakeBackend::start(router).await;

    let id = product_workflow::create_product(backend.state.api(), &input(), &extras())
        .await
        .expect("workflow should succeed");

    assert_eq!(id, ProductId::new(42));
    assert_eq!(
        backend.log.entries(),
        vec![
            "POST /products".to_string(),
            "POST /prices".to_string(),
            "POST /products/images".to_string(),
            "POST /products/images".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_failed_price_deletes_the_new_product() {
    let router = created().route(
        "/prices",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "Price service unavailable"})),
            )
        }),
    );
    let backend = FakeBackend::start(router).await;

    let err = product_workflow::create_product(backend.state.api(), &input(), &extras())
        .await
        .expect_err("price failure should fail the workflow");

    match &err {
        WorkflowError::Step {
            step,
            product_id,
            rolled_back,
            ..
        } => {
            assert_eq!(*step, WorkflowStep::Price);
            assert_eq!(*product_id, ProductId::new(42));
            assert!(rolled_back);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        backend.log.entries(),
        vec![
            "POST /products".to_string(),
            "POST /prices".to_string(),
            "DELETE /products/42".to_string(),
        ]
    );

    let toast = AppError::from(err).to_toast("Could not save product");
    assert_eq!(toast, Some(Toast::error("Price service unavailable")));
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let backend = FakeBackend::start(created()).await;

    let mut blank = input();
    blank.name = "  ".to_string();
    let err = product_workflow::create_product(backend.state.api(), &blank, &ProductExtras::default())
        .await
        .expect_err("blank name should be rejected");

    assert!(matches!(err, WorkflowError::Invalid(_)));
    assert!(backend.log.entries().is_empty());
}
