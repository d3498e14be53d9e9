use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Attributes of a rental listing, as scraped from the listing sources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ListingAttributes {
    #[serde(default)]
    pub city: Option<String>,
    /// Room count as published, e.g. `"3.5"`; may be free text
    #[serde(default, deserialize_with = "text_or_number")]
    pub rooms: Option<String>,
    /// Monthly rent
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub price: Option<f64>,
    /// Floor area in m²
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Saved search criteria of a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCriteria {
    #[serde(default)]
    pub cities: Vec<String>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub min_rooms: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub max_rooms: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub min_price: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub max_price: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub min_area: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub max_area: Option<f64>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub exclude_keywords: Vec<String>,
}

/// Points contributed by each dimension, before the total is clamped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub city: i32,
    pub rooms: i32,
    pub price: i32,
    pub area: i32,
    pub keywords: i32,
}

impl ScoreBreakdown {
    /// Raw, unclamped sum of all dimensions
    pub fn total(&self) -> i32 {
        self.city + self.rooms + self.price + self.area + self.keywords
    }
}

/// Result of scoring one listing against one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Final score in `0..=100`
    pub score: i32,
    pub breakdown: ScoreBreakdown,
    pub match_reasons: Vec<String>,
    pub deal_breakers: Vec<String>,
}

/// Point budget per dimension
pub mod points {
    pub const CITY_MAX: i32 = 30;
    pub const CITY_NEUTRAL: i32 = 15;

    pub const ROOMS_MAX: i32 = 20;
    pub const ROOMS_NEUTRAL: i32 = 10;
    pub const ROOMS_PARTIAL: i32 = 10;

    pub const PRICE_MAX: i32 = 25;
    pub const PRICE_NEUTRAL: i32 = 12;
    pub const PRICE_BELOW_MIN: i32 = 15;
    pub const PRICE_SLIGHTLY_OVER: i32 = 10;

    pub const AREA_MAX: i32 = 10;
    pub const AREA_NEUTRAL: i32 = 5;
    pub const AREA_PARTIAL: i32 = 3;

    pub const KEYWORDS_MAX: i32 = 15;
    pub const KEYWORDS_NEUTRAL: i32 = 8;
    pub const EXCLUDE_PENALTY: i32 = 10;

    pub const SCORE_MIN: i32 = 0;
    pub const SCORE_MAX: i32 = 100;
}

/// Listing feeds publish rooms both as `"3.5"` and as `3.5`
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(f64),
    }

    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(s)) => Some(s),
        Some(TextOrNumber::Number(n)) => Some(n.to_string()),
        None => None,
    })
}
