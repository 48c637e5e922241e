//! Bulk actions against the fake backend.

use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, patch};
use axum::{Json, Router};
use backoffice_admin::api::ApiError;
use backoffice_admin::services::{CustomerBulkAction, OrderBulkAction, ProductBulkAction, bulk};
use backoffice_core::{CustomerId, OrderId, ProductId};
use backoffice_integration_tests::FakeBackend;
use serde_json::{Value, json};

#[tokio::test]
async fn test_activate_patches_each_product() {
    let bodies = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&bodies);
    let router = Router::new().route(
        "/products/{id}",
        patch(move |Json(body): Json<Value>| {
            let seen = Arc::clone(&seen);
            async move {
                seen.lock().unwrap_or_else(PoisonError::into_inner).push(body);
                StatusCode::NO_CONTENT
            }
        }),
    );
    let backend = FakeBackend::start(router).await;

    let ids = [ProductId::new(3), ProductId::new(4)];
    let outcome = bulk::products(backend.state.api(), ProductBulkAction::Activate, &ids).await;

    assert!(outcome.is_complete());
    assert_eq!(outcome.succeeded, ids.to_vec());
    assert_eq!(
        backend.log.entries(),
        vec!["PATCH /products/3".to_string(), "PATCH /products/4".to_string()]
    );
    let bodies = bodies.lock().unwrap_or_else(PoisonError::into_inner).clone();
    assert_eq!(bodies, vec![json!({"active": true}), json!({"active": true})]);
}

#[tokio::test]
async fn test_mark_shipped_keeps_going_past_a_missing_order() {
    let router = Router::new().route(
        "/orders/{id}",
        patch(|Path(id): Path<i64>| async move {
            if id == 11 {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::NO_CONTENT
            }
        }),
    );
    let backend = FakeBackend::start(router).await;

    let ids = [OrderId::new(10), OrderId::new(11), OrderId::new(12)];
    let outcome = bulk::orders(backend.state.api(), OrderBulkAction::MarkShipped, &ids).await;

    assert_eq!(outcome.succeeded, vec![OrderId::new(10), OrderId::new(12)]);
    assert_eq!(outcome.failed.len(), 1);
    assert_eq!(outcome.failed[0].0, OrderId::new(11));
    assert!(matches!(outcome.failed[0].1, ApiError::NotFound(_)));
    assert_eq!(backend.log.entries().len(), 3);
}

#[tokio::test]
async fn test_delete_customers_sends_one_request_each() {
    let router = Router::new().route("/customers/{id}", delete(|| async { StatusCode::NO_CONTENT }));
    let backend = FakeBackend::start(router).await;

    let ids = [CustomerId::new(7), CustomerId::new(8)];
    let outcome = bulk::customers(
        backend.state.api(),
        CustomerBulkAction::Delete,
        &ids,
    )
    .await;

    assert!(outcome.is_complete());
    assert!(backend.log.contains("DELETE /customers/7"));
    assert!(backend.log.contains("DELETE /customers/8"));
}
