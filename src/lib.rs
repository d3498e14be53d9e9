//! Casalino Match - listing-to-profile match scoring
//!
//! This library scores how well a rental listing fits a user's saved search
//! profile. Each of five dimensions (city, rooms, price, area, keywords)
//! contributes points towards a 0-100 score, together with human-readable
//! reasons and deal-breakers.

pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{label_for, score, Matcher, NumberFormat, ScoreLabel, SwissFormat};
pub use crate::models::{ListingAttributes, MatchResult, ProfileCriteria, ScoreBreakdown};
