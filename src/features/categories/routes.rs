use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route("/categories/", get(handlers::list_categories))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryStore;
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_list_categories_envelope() {
        let store = InMemoryStore::new();
        store.add_category("Zeta");
        store.add_category("Alpha");
        let service = Arc::new(CategoryService::new(store.category_repository()));
        let server = TestServer::new(routes(service)).unwrap();

        let response = server.get("/categories/").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Categories retrieved successfully");
        assert_eq!(body["data"][0]["cc_name"], "Alpha");
        assert_eq!(body["data"][1]["cc_name"], "Zeta");
        assert!(body["data"][0]["cc_id"].is_i64());
    }
}
