use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::strip_code_fences;
use crate::recommendation::grade::GradeLevel;

pub const MISSING_PARAMETERS: &str = "Missing required parameters";
pub const PARSE_FAILURE_TITLE: &str = "Error Parsing Generated Prompts";
pub const PARSE_FAILURE_DESCRIPTION: &str = "There was an issue with the response format. \
    Please try again with a different topic or refresh the page.";

/// Body of `POST /api/recommend`. Every field is optional at the wire level;
/// `validate` decides what is actually required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub grades: Option<Vec<String>>,
    #[serde(default)]
    pub guidance: Option<String>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

/// A request that passed validation. Only the first grade is used.
#[derive(Debug, Clone, PartialEq)]
pub struct EssayPromptRequest {
    pub topic: String,
    pub grade: GradeLevel,
    pub guidance: Option<String>,
    pub exclude: Vec<String>,
}

impl RecommendationRequest {
    pub fn validate(self) -> Result<EssayPromptRequest, AppError> {
        let topic = self
            .topic
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Validation(MISSING_PARAMETERS.to_string()))?;
        let first_grade = self
            .grades
            .as_deref()
            .and_then(|grades| grades.first())
            .ok_or_else(|| AppError::Validation(MISSING_PARAMETERS.to_string()))?;

        Ok(EssayPromptRequest {
            topic,
            grade: GradeLevel::from_identifier(first_grade),
            guidance: self.guidance.filter(|g| !g.is_empty()),
            exclude: self.exclude.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtopic {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub subtopics: Vec<Subtopic>,
}

impl RecommendationResponse {
    /// Placeholder returned with a 200 when the model output is not JSON.
    pub fn parse_failure() -> Self {
        Self {
            subtopics: vec![Subtopic {
                title: PARSE_FAILURE_TITLE.to_string(),
                description: PARSE_FAILURE_DESCRIPTION.to_string(),
            }],
        }
    }
}

/// Cleans raw completion text and parses it as JSON.
///
/// `Ok` carries whatever JSON the model produced; its shape is not checked.
/// `Err` carries the soft-fail payload, which is still served as a success.
pub fn interpret_completion(raw: &str) -> Result<Value, RecommendationResponse> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(&cleaned).map_err(|e| {
        tracing::warn!("Could not parse completion as JSON ({e}); raw response: {raw}");
        RecommendationResponse::parse_failure()
    })
}
