//! Axum route handler for the Search API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::search::models::SearchResponse;
use crate::search::{SearchError, SearchQuery};
use crate::state::AppState;

pub const QUERY_REQUIRED: &str = "Search query is required";
pub const NOT_CONFIGURED: &str = "API key or Search Engine ID not configured";
pub const SEARCH_FAILED: &str = "Failed to fetch search results";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/search?q=<query>
///
/// Forwards the query (plus the educational qualifier) to the search API and
/// reshapes the hits into `SearchResponse`.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let query = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::Validation(QUERY_REQUIRED.to_string()))?;
    info!("Search query: {query}");

    let credentials = state
        .config
        .search_credentials()
        .ok_or_else(|| AppError::Configuration(NOT_CONFIGURED.to_string()))?;

    let raw = state
        .search
        .search(&credentials, &SearchQuery::educational(&query))
        .await
        .map_err(|e| match e {
            SearchError::Api { status, message } => AppError::Upstream { status, message },
            other => AppError::internal(SEARCH_FAILED, other),
        })?;

    Ok(Json(SearchResponse::from(raw)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::test_config;
    use crate::routes::build_router;
    use crate::state::test_support::{state_with, StubCompleter, StubSearch};

    async fn get(state: AppState, uri: &str) -> (StatusCode, Value) {
        let response = build_router(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn stub_state(search: Arc<StubSearch>) -> AppState {
        state_with(test_config(), Arc::new(StubCompleter::replying("{}")), search)
    }

    #[tokio::test]
    async fn test_search_augments_query_and_reshapes_items() {
        let search = Arc::new(StubSearch::replying(json!({
            "items": [
                {"title": "Volcano facts", "link": "https://a.example", "snippet": "Lava!", "formattedUrl": "a.example"},
                {"title": "Eruptions", "link": "https://b.example", "formattedUrl": "b.example"}
            ]
        })));

        let (status, body) = get(stub_state(search.clone()), "/api/search?q=volcanoes").await;

        assert_eq!(status, StatusCode::OK);
        let queries = search.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        let (credentials, query) = &queries[0];
        assert_eq!(credentials.api_key, "google-test");
        assert_eq!(credentials.engine_id, "cx-test");
        assert_eq!(query.text, "volcanoes educational resources");
        assert_eq!(query.num, 10);

        assert_eq!(body["items"].as_array().unwrap().len(), 2);
        assert_eq!(body["items"][0]["snippet"], "Lava!");
        assert_eq!(body["items"][1]["snippet"], "");
        assert!(body["items"][1]["gradeLevel"].is_null());
    }

    #[tokio::test]
    async fn test_search_decodes_query_string() {
        let search = Arc::new(StubSearch::replying(json!({})));
        let (status, body) = get(stub_state(search.clone()), "/api/search?q=plate%20tectonics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"items": []}));
        assert_eq!(
            search.queries.lock().unwrap()[0].1.text,
            "plate tectonics educational resources"
        );
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let search = Arc::new(StubSearch::replying(json!({})));
        let (status, body) = get(stub_state(search.clone()), "/api/search").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], QUERY_REQUIRED);

        let (status, _) = get(stub_state(search.clone()), "/api/search?q=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(search.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_without_credentials_is_500() {
        let mut config = test_config();
        config.search_engine_id = None;
        let search = Arc::new(StubSearch::replying(json!({})));
        let state = state_with(config, Arc::new(StubCompleter::replying("{}")), search.clone());

        let (status, body) = get(state, "/api/search?q=volcanoes").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], NOT_CONFIGURED);
        assert!(search.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_propagates_upstream_status() {
        let search = Arc::new(StubSearch::failing(429, "Quota exceeded"));
        let (status, body) = get(stub_state(search), "/api/search?q=volcanoes").await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["error"], "Quota exceeded");
    }

    #[tokio::test]
    async fn test_search_malformed_upstream_payload_is_generic_500() {
        let search = Arc::new(StubSearch::replying(json!({"items": "not a list"})));
        let (status, body) = get(stub_state(search), "/api/search?q=volcanoes").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], SEARCH_FAILED);
    }
}
