// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{points, ListingAttributes, MatchResult, ProfileCriteria, ScoreBreakdown};
pub use requests::{BatchScoreRequest, LabelQuery, ScoreRequest};
pub use responses::{
    BatchScoreResponse, ErrorResponse, HealthResponse, LabelResponse, ScoreResponse, ScoredListing,
};
