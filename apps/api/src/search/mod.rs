//! Search client for the Google Custom Search JSON API.
//!
//! Handlers reach it through the `SearchBackend` trait so the upstream can be
//! swapped without touching the endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::SearchCredentials;

pub mod handlers;
pub mod models;

pub use models::RawSearchResponse;

const CUSTOM_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";
/// Appended to every user query to bias results toward teaching material.
pub const QUERY_QUALIFIER: &str = "educational resources";
pub const RESULT_COUNT: u32 = 10;
const GENERIC_API_ERROR: &str = "Google Search API error";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The outgoing query after augmentation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    pub num: u32,
}

impl SearchQuery {
    pub fn educational(user_query: &str) -> Self {
        Self {
            text: format!("{user_query} {QUERY_QUALIFIER}"),
            num: RESULT_COUNT,
        }
    }
}

/// Carried in `AppState` as `Arc<dyn SearchBackend>`.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(
        &self,
        credentials: &SearchCredentials,
        query: &SearchQuery,
    ) -> Result<RawSearchResponse, SearchError>;
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: Option<String>,
}

#[derive(Clone)]
pub struct GoogleSearchClient {
    client: Client,
}

impl GoogleSearchClient {
    pub fn new(timeout: Duration) -> Result<Self, SearchError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
        })
    }
}

#[async_trait]
impl SearchBackend for GoogleSearchClient {
    async fn search(
        &self,
        credentials: &SearchCredentials,
        query: &SearchQuery,
    ) -> Result<RawSearchResponse, SearchError> {
        let response = self
            .client
            .get(CUSTOM_SEARCH_URL)
            .query(&search_params(credentials, query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: upstream_error_message(&body),
            });
        }

        let body = response.text().await?;
        let parsed: RawSearchResponse = serde_json::from_str(&body)?;
        debug!(
            "Search returned {} items for {:?}",
            parsed.items.as_ref().map_or(0, Vec::len),
            query.text
        );
        Ok(parsed)
    }
}

/// Query-string pairs for one Custom Search call.
fn search_params(
    credentials: &SearchCredentials,
    query: &SearchQuery,
) -> [(&'static str, String); 4] {
    [
        ("key", credentials.api_key.clone()),
        ("cx", credentials.engine_id.clone()),
        ("q", query.text.clone()),
        ("num", query.num.to_string()),
    ]
}

/// Pulls `error.message` out of an upstream error body, or a generic message.
fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<GoogleError>(body)
        .ok()
        .and_then(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_API_ERROR.to_string())
}
