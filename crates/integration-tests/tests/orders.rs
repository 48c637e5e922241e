//! Order listing and stats against the fake backend.

use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use backoffice_admin::api::types::OrdersQuery;
use backoffice_core::{OrderId, OrderStatus};
use backoffice_integration_tests::FakeBackend;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;

fn orders_backend() -> Router {
    Router::new()
        .route(
            "/orders",
            get(|| async {
                Json(json!({
                    "data": [{
                        "id": 10,
                        "customer": {"id": 4, "fullName": "Maria Souza"},
                        "orderDate": "2025-01-15T12:30:00Z",
                        "totalAmount": "150.50",
                        "status": "paid",
                        "paymentMethod": "pix",
                        "items": [{"id": 1, "product": {"id": 7, "name": "Tee"}, "quantity": 2, "unitPrice": 70.25}]
                    }],
                    "total": 11
                }))
            }),
        )
        .route(
            "/orders/stats",
            get(|| async {
                Json(json!({
                    "today": {"count": 3, "total": 420.5},
                    "month": {"count": 41, "total": "9876.10"}
                }))
            }),
        )
        .route("/orders/{id}", patch(|| async { StatusCode::NO_CONTENT }))
}

#[tokio::test]
async fn test_list_orders_sends_filters() {
    let backend = FakeBackend::start(orders_backend()).await;

    let query = OrdersQuery {
        page: Some(2),
        limit: Some(10),
        search: Some("Maria Souza".to_string()),
        status: Some(OrderStatus::Paid),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2025, 1, 31),
    };
    let page = backend
        .state
        .api()
        .list_orders(&query)
        .await
        .expect("orders should load");

    assert_eq!(page.total, 11);
    assert_eq!(page.data.len(), 1);
    let order = &page.data[0];
    assert_eq!(order.id, OrderId::new(10));
    assert_eq!(order.customer.full_name, "Maria Souza");
    assert_eq!(order.total_amount, Decimal::new(15050, 2));
    assert_eq!(order.item_count(), 1);

    assert_eq!(
        backend.log.entries(),
        vec![
            "GET /orders?page=2&limit=10&search=Maria+Souza&status=paid&startDate=2025-01-01&endDate=2025-01-31"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn test_blank_filters_are_omitted() {
    let backend = FakeBackend::start(orders_backend()).await;

    let query = OrdersQuery {
        page: Some(1),
        search: Some("   ".to_string()),
        ..OrdersQuery::default()
    };
    backend
        .state
        .api()
        .list_orders(&query)
        .await
        .expect("orders should load");

    assert_eq!(backend.log.entries(), vec!["GET /orders?page=1".to_string()]);
}

#[tokio::test]
async fn test_order_stats() {
    let backend = FakeBackend::start(orders_backend()).await;

    let stats = backend
        .state
        .api()
        .order_stats()
        .await
        .expect("stats should load");

    assert_eq!(stats.today.count, 3);
    assert_eq!(stats.today.total, Decimal::new(4205, 1));
    assert_eq!(stats.month.count, 41);
    assert_eq!(stats.month.total, Decimal::new(987_610, 2));
}

#[tokio::test]
async fn test_status_update_is_a_patch() {
    let backend = FakeBackend::start(orders_backend()).await;

    backend
        .state
        .api()
        .update_order_status(OrderId::new(10), OrderStatus::Shipped)
        .await
        .expect("status update should succeed");

    assert_eq!(backend.log.entries(), vec!["PATCH /orders/10".to_string()]);
}
