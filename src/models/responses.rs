use serde::{Deserialize, Serialize};

use crate::core::ScoreLabel;
use crate::models::domain::MatchResult;

/// Label attached to a score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelResponse {
    pub score: i32,
    pub label: String,
    pub style_tag: String,
}

impl LabelResponse {
    pub fn new(score: i32, label: ScoreLabel) -> Self {
        Self {
            score,
            label: label.label().to_string(),
            style_tag: label.style_tag().to_string(),
        }
    }
}

/// Response for the single score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub label: LabelResponse,
}

/// One entry of a batch response, `index` refers to the request's listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredListing {
    pub index: usize,
    #[serde(flatten)]
    pub result: MatchResult,
    pub label: LabelResponse,
}

/// Response for the batch score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchScoreResponse {
    pub results: Vec<ScoredListing>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
