//! Category listing and tree building against the fake backend.

use axum::routing::get;
use axum::{Json, Router};
use backoffice_admin::ApiError;
use backoffice_admin::components::category_tree;
use backoffice_core::CategoryId;
use backoffice_integration_tests::FakeBackend;
use serde_json::json;

fn catalogue() -> Router {
    Router::new().route(
        "/categories",
        get(|| async {
            Json(json!([
                {"id": 1, "name": "Clothing", "level": 0, "showInMenu": true},
                {"id": 3, "name": "Shoes", "level": 0},
                {"id": 2, "name": "Shirts", "level": 1, "parent": {"id": 1}},
                {"id": 5, "name": "Polo", "level": 2, "parent": {"id": 2}},
                {"id": 4, "name": "Lost", "level": 1, "parent": {"id": 99}}
            ]))
        }),
    )
}

#[tokio::test]
async fn test_tree_from_backend_listing() {
    let backend = FakeBackend::start(catalogue()).await;

    let categories = backend
        .state
        .api()
        .list_categories()
        .await
        .expect("categories should load");
    assert_eq!(categories.len(), 5);

    let tree = category_tree::build(&categories, Some(CategoryId::new(2)));
    let order: Vec<(&str, usize)> = tree
        .nodes
        .iter()
        .map(|n| (n.category.name.as_str(), n.depth))
        .collect();
    assert_eq!(
        order,
        vec![("Clothing", 0), ("Shirts", 1), ("Polo", 2), ("Shoes", 0)]
    );

    let shirts = &tree.nodes[1];
    assert!(shirts.selected);
    assert!(shirts.has_children);
    assert_eq!(shirts.indent_px(), 28);

    assert_eq!(tree.report.orphans, vec![CategoryId::new(4)]);
    assert!(tree.report.level_mismatches.is_empty());
    assert_eq!(backend.log.entries(), vec!["GET /categories".to_string()]);
}

#[tokio::test]
async fn test_non_array_listing_is_a_parse_error() {
    let router = Router::new().route(
        "/categories",
        get(|| async { Json(json!({"data": []})) }),
    );
    let backend = FakeBackend::start(router).await;

    let err = backend
        .state
        .api()
        .list_categories()
        .await
        .expect_err("an object is not a category list");
    assert!(matches!(err, ApiError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unknown_resource_is_not_found() {
    let backend = FakeBackend::start(Router::new()).await;

    let err = backend
        .state
        .api()
        .list_menu_categories()
        .await
        .expect_err("nothing is served");
    assert!(matches!(err, ApiError::NotFound(ref path) if path == "categories/menu"));
}
