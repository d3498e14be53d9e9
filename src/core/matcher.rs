use crate::core::format::{NumberFormat, SwissFormat};
use crate::core::scoring::{
    score_area, score_city, score_keywords, score_price, score_rooms, DimensionScore,
};
use crate::models::{points, ListingAttributes, MatchResult, ProfileCriteria, ScoreBreakdown};

/// Match scoring orchestrator
///
/// Runs every dimension scorer, then sums and clamps the points and collects
/// reasons and deal-breakers in dimension order:
/// 1. City (30)
/// 2. Rooms (20)
/// 3. Price (25)
/// 4. Area (10)
/// 5. Keywords (15, minus exclusion penalties)
///
/// Holds no state besides the number formatter, so one instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct Matcher<F = SwissFormat> {
    format: F,
}

impl Matcher<SwissFormat> {
    pub fn with_default_format() -> Self {
        Self::new(SwissFormat::default())
    }

    /// Matcher using Swiss formatting with the given currency prefix
    pub fn with_currency(currency: impl Into<String>) -> Self {
        Self::new(SwissFormat::new(currency))
    }
}

impl<F: NumberFormat> Matcher<F> {
    pub fn new(format: F) -> Self {
        Self { format }
    }

    pub fn format(&self) -> &F {
        &self.format
    }

    /// Score one listing against one profile
    ///
    /// # Arguments
    /// * `listing` - Attributes of the listing
    /// * `profile` - The user's saved search criteria
    ///
    /// # Returns
    /// MatchResult with a score in `0..=100`, the per-dimension breakdown and
    /// explanations
    pub fn score(&self, listing: &ListingAttributes, profile: &ProfileCriteria) -> MatchResult {
        let city = score_city(listing, profile);
        let rooms = score_rooms(listing, profile, &self.format);
        let price = score_price(listing, profile, &self.format);
        let area = score_area(listing, profile, &self.format);
        let keywords = score_keywords(listing, profile);

        let breakdown = ScoreBreakdown {
            city: city.points,
            rooms: rooms.points,
            price: price.points,
            area: area.points,
            keywords: keywords.points,
        };

        let mut match_reasons = Vec::new();
        let mut deal_breakers = Vec::new();
        for dimension in [city, rooms, price, area, keywords] {
            let DimensionScore {
                reasons,
                deal_breakers: found,
                ..
            } = dimension;
            match_reasons.extend(reasons);
            deal_breakers.extend(found);
        }

        let score = breakdown
            .total()
            .clamp(points::SCORE_MIN, points::SCORE_MAX);

        tracing::trace!(
            score,
            reasons = match_reasons.len(),
            deal_breakers = deal_breakers.len(),
            "scored listing"
        );

        MatchResult {
            score,
            breakdown,
            match_reasons,
            deal_breakers,
        }
    }

    /// Score a batch of listings against one profile.
    ///
    /// Results keep the order of `listings`; sorting is left to the caller.
    pub fn score_all<'a, I>(&self, profile: &ProfileCriteria, listings: I) -> Vec<MatchResult>
    where
        I: IntoIterator<Item = &'a ListingAttributes>,
    {
        listings
            .into_iter()
            .map(|listing| self.score(listing, profile))
            .collect()
    }
}

impl Default for Matcher<SwissFormat> {
    fn default() -> Self {
        Self::with_default_format()
    }
}

/// Score a listing with the default Swiss/CHF formatting
pub fn score(listing: &ListingAttributes, profile: &ProfileCriteria) -> MatchResult {
    Matcher::with_default_format().score(listing, profile)
}
