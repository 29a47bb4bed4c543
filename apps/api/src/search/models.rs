use serde::{Deserialize, Serialize};

/// The subset of a Custom Search response this service reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchResponse {
    /// Absent or `null` when the query has no hits.
    #[serde(default)]
    pub items: Option<Vec<RawSearchItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
    pub formatted_url: Option<String>,
}

/// One reshaped search hit.
///
/// The complexity fields are placeholders for text analysis this service does
/// not perform; they always serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub snippet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_url: Option<String>,
    pub estimated_word_count: Option<u32>,
    pub estimated_lexile_level: Option<u32>,
    pub grade_level: Option<String>,
    pub length_suitability: Option<String>,
    pub is_complexity_appropriate: Option<bool>,
}

impl From<RawSearchItem> for SearchResult {
    fn from(item: RawSearchItem) -> Self {
        Self {
            title: item.title,
            link: item.link,
            snippet: item.snippet.unwrap_or_default(),
            formatted_url: item.formatted_url,
            estimated_word_count: None,
            estimated_lexile_level: None,
            grade_level: None,
            length_suitability: None,
            is_complexity_appropriate: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub items: Vec<SearchResult>,
}

impl From<RawSearchResponse> for SearchResponse {
    fn from(raw: RawSearchResponse) -> Self {
        Self {
            items: raw
                .items
                .unwrap_or_default()
                .into_iter()
                .map(SearchResult::from)
                .collect(),
        }
    }
}
