use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ListingAttributes, ProfileCriteria};

/// Request to score a single listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(nested)]
    pub listing: ListingAttributes,
    #[validate(nested)]
    pub profile: ProfileCriteria,
}

/// Request to score many listings against one profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BatchScoreRequest {
    #[validate(nested)]
    pub profile: ProfileCriteria,
    #[validate(nested)]
    #[serde(default)]
    pub listings: Vec<ListingAttributes>,
}

/// Query for the label endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelQuery {
    pub score: i32,
}
