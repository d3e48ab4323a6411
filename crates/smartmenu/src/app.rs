use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        catalog::{get_menu_item, list_branch_menu, list_categories, list_menu_items},
        error::route_not_found,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Only `POST` is served. Any other method on a known path, and every
/// unknown path, gets the same `404 {"error":"route not found"}`.
pub fn create_app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/categories",
            post(list_categories).fallback(route_not_found),
        )
        .route(
            "/menu/items",
            post(list_menu_items).fallback(route_not_found),
        )
        .route("/menu/item", post(get_menu_item).fallback(route_not_found))
        .route(
            "/branch/menu",
            post(list_branch_menu).fallback(route_not_found),
        );

    Router::new()
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use smartmenu_core::menu::{demo_catalog, MenuItem};
    use smartmenu_core::storage::{keys, RepositoryError};

    use crate::storage::InMemoryRepository;

    const COUNTRY: &str = "US";
    const BRANCH: &str = "01FHZXHK8PTP9FVK99Z66GXQTX";

    fn demo_app() -> (Router, InMemoryRepository) {
        let repo = InMemoryRepository::with_demo_data(COUNTRY, BRANCH);
        let app = create_app(AppState::new(Arc::new(repo.clone())));
        (app, repo)
    }

    async fn send(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_list_categories() {
        let (app, _) = demo_app();
        let body = json!({ "countryCode": COUNTRY, "branchId": BRANCH }).to_string();

        let (status, json) = send(app, "POST", "/api/categories", &body).await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["category"].as_str().unwrap())
            .collect();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"Drinks"));
        assert_eq!(json[0]["pk"], keys::categories_pk(COUNTRY, BRANCH));
    }

    #[tokio::test]
    async fn test_list_categories_unknown_branch_is_200_with_error_body() {
        let (app, _) = demo_app();
        let body = json!({ "countryCode": COUNTRY, "branchId": "nope" }).to_string();

        let (status, json) = send(app, "POST", "/api/categories", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "error": "no entity found" }));
    }

    #[tokio::test]
    async fn test_list_categories_missing_branch_is_400_without_store_call() {
        let (app, repo) = demo_app();

        let (status, json) = send(app, "POST", "/api/categories", r#"{"countryCode":"US"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({ "error": "branchId is required" }));
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_is_400_without_store_call() {
        let (app, repo) = demo_app();

        let (status, json) = send(app, "POST", "/api/menu/items", "{\"countryCode\":").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!json["error"].as_str().unwrap().is_empty());
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn test_list_menu_items_by_category() {
        let (app, _) = demo_app();
        let catalog = demo_catalog(COUNTRY, BRANCH);
        let drinks = catalog
            .categories
            .iter()
            .find(|c| c.category == "Drinks")
            .unwrap();
        let body = json!({
            "countryCode": COUNTRY,
            "branchId": BRANCH,
            "categoryId": drinks.category_id,
        })
        .to_string();

        let (status, json) = send(app, "POST", "/api/menu/items", &body).await;

        assert_eq!(status, StatusCode::OK);
        let items: Vec<MenuItem> = serde_json::from_value(json).unwrap();
        let expected: Vec<MenuItem> = catalog
            .menu_items
            .into_iter()
            .filter(|item| item.category_id == drinks.category_id)
            .collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items, expected);
    }

    #[tokio::test]
    async fn test_list_menu_items_unknown_category_is_no_rows() {
        let (app, _) = demo_app();
        let body = json!({ "countryCode": COUNTRY, "branchId": BRANCH, "categoryId": "none" })
            .to_string();

        let (status, json) = send(app, "POST", "/api/menu/items", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "error": "no entity found" }));
    }

    #[tokio::test]
    async fn test_get_menu_item() {
        let (app, _) = demo_app();
        let expected = demo_catalog(COUNTRY, BRANCH).menu_items.remove(0);
        let body = json!({ "pk": expected.pk, "sk": expected.sk }).to_string();

        let (status, json) = send(app, "POST", "/api/menu/item", &body).await;

        assert_eq!(status, StatusCode::OK);
        let item: MenuItem = serde_json::from_value(json).unwrap();
        assert_eq!(item, expected);
    }

    #[tokio::test]
    async fn test_get_menu_item_missing() {
        let (app, _) = demo_app();
        let body = json!({ "pk": keys::menu_items_pk(COUNTRY, BRANCH), "sk": "x#y" }).to_string();

        let (status, json) = send(app, "POST", "/api/menu/item", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({ "error": "no entity found - invalid menu-item id" })
        );
    }

    #[tokio::test]
    async fn test_branch_menu_queries_raw_branch_partition() {
        let (app, repo) = demo_app();
        let body = json!({ "branchId": BRANCH }).to_string();

        let (status, json) = send(app.clone(), "POST", "/api/branch/menu", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "error": "no entity found - invalid branch id" }));

        let mut raw = demo_catalog(COUNTRY, BRANCH).menu_items.remove(0);
        raw.pk = keys::branch_all_items_pk(BRANCH);
        repo.put_menu_item(raw.clone()).await;

        let (status, json) = send(app, "POST", "/api/branch/menu", &body).await;

        assert_eq!(status, StatusCode::OK);
        let items: Vec<MenuItem> = serde_json::from_value(json).unwrap();
        assert_eq!(items, vec![raw]);
    }

    #[tokio::test]
    async fn test_store_failure_is_500_with_error_text() {
        let repo = InMemoryRepository::failing(RepositoryError::QueryFailed(
            "Throughput exceeded".to_string(),
        ));
        let app = create_app(AppState::new(Arc::new(repo)));
        let body = json!({ "countryCode": COUNTRY, "branchId": BRANCH }).to_string();

        let (status, json) = send(app, "POST", "/api/categories", &body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({ "error": "Query failed: Throughput exceeded" }));
    }

    #[tokio::test]
    async fn test_decode_failure_is_500() {
        let repo = InMemoryRepository::new();
        // A menu item stored in a categories partition cannot decode as a category.
        let mut stray = demo_catalog(COUNTRY, BRANCH).menu_items.remove(0);
        stray.pk = keys::categories_pk(COUNTRY, BRANCH);
        repo.put_menu_item(stray).await;
        let app = create_app(AppState::new(Arc::new(repo)));
        let body = json!({ "countryCode": COUNTRY, "branchId": BRANCH }).to_string();

        let (status, json) = send(app, "POST", "/api/categories", &body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid data:"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let (app, repo) = demo_app();

        let (status, json) = send(app, "POST", "/api/unknown", r#"{"branchId":"b1"}"#).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({ "error": "route not found" }));
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn test_get_on_known_path_is_404() {
        let (app, _) = demo_app();

        let (status, json) = send(app, "GET", "/api/categories", "").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({ "error": "route not found" }));
    }

    #[tokio::test]
    async fn test_other_methods_are_404() {
        let (app, _) = demo_app();

        for method in ["PUT", "DELETE", "PATCH"] {
            let (status, json) = send(app.clone(), method, "/api/menu/item", "{}").await;

            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(json, json!({ "error": "route not found" }));
        }
    }

    #[tokio::test]
    async fn test_root_is_404() {
        let (app, _) = demo_app();

        let (status, _) = send(app, "GET", "/", "").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_requests_share_initialized_store() {
        let (app, repo) = demo_app();
        let body = json!({ "countryCode": COUNTRY, "branchId": BRANCH }).to_string();

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let app = app.clone();
                let body = body.clone();
                tokio::spawn(async move { send(app, "POST", "/api/categories", &body).await })
            })
            .collect();

        for handle in handles {
            let (status, json) = handle.await.unwrap();
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json.as_array().unwrap().len(), 3);
        }
        assert_eq!(repo.call_count(), 32);
    }
}
