use crate::core::filters::{
    active_bound, check_range, corpus_contains, parse_rooms, present_quantity, present_text,
    round_half_up, search_corpus,
};
use crate::core::format::NumberFormat;
use crate::models::{points, ListingAttributes, ProfileCriteria};

/// Points and explanations produced by a single dimension
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionScore {
    pub points: i32,
    pub reasons: Vec<String>,
    pub deal_breakers: Vec<String>,
}

impl DimensionScore {
    fn points(points: i32) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    fn with_reason(mut self, reason: String) -> Self {
        self.reasons.push(reason);
        self
    }

    fn with_deal_breaker(mut self, deal_breaker: String) -> Self {
        self.deal_breakers.push(deal_breaker);
        self
    }
}

/// City score (max 30)
///
/// Neutral when either side has no city. Otherwise the listing city and a
/// profile city match if one contains the other, ignoring case, so that
/// `"Zürich"` matches `"Zürich Altstetten"` in both directions.
pub fn score_city(listing: &ListingAttributes, profile: &ProfileCriteria) -> DimensionScore {
    let city = match present_text(listing.city.as_deref()) {
        Some(city) if !profile.cities.is_empty() => city,
        _ => return DimensionScore::points(points::CITY_NEUTRAL),
    };

    let listing_city = city.to_lowercase();
    let matched = profile.cities.iter().any(|candidate| {
        let candidate = candidate.to_lowercase();
        listing_city.contains(&candidate) || candidate.contains(&listing_city)
    });

    if matched {
        DimensionScore::points(points::CITY_MAX)
            .with_reason(format!("{} is in your search", city))
    } else {
        DimensionScore::points(0).with_deal_breaker(format!("{} is not in your cities", city))
    }
}

/// Rooms score (max 20)
///
/// Both bounds satisfied gives full points, one violated bound half, and a
/// listing outside both bounds nothing.
pub fn score_rooms(
    listing: &ListingAttributes,
    profile: &ProfileCriteria,
    fmt: &dyn NumberFormat,
) -> DimensionScore {
    let rooms = match listing.rooms.as_deref().and_then(parse_rooms) {
        Some(rooms) => rooms,
        None => return DimensionScore::points(points::ROOMS_NEUTRAL),
    };

    let check = check_range(rooms, profile.min_rooms, profile.max_rooms);
    let shown = fmt.number(rooms);

    if check.all_ok() {
        return DimensionScore::points(points::ROOMS_MAX)
            .with_reason(format!("{} rooms fits perfectly", shown));
    }

    let min = active_bound(profile.min_rooms);
    let max = active_bound(profile.max_rooms);

    match (min, max) {
        (Some(min), Some(max)) if !check.min_ok && !check.max_ok => DimensionScore::points(0)
            .with_deal_breaker(format!(
                "{} rooms outside range ({}-{})",
                shown,
                fmt.number(min),
                fmt.number(max)
            )),
        _ => {
            let mut result = DimensionScore::points(points::ROOMS_PARTIAL);
            if let (false, Some(min)) = (check.min_ok, min) {
                result = result.with_deal_breaker(format!(
                    "{} rooms below minimum ({})",
                    shown,
                    fmt.number(min)
                ));
            }
            if let (false, Some(max)) = (check.max_ok, max) {
                result = result.with_deal_breaker(format!(
                    "{} rooms above maximum ({})",
                    shown,
                    fmt.number(max)
                ));
            }
            result
        }
    }
}

/// Price score (max 25)
///
/// Over-budget listings keep 10 points while they are at most 10% above the
/// maximum. A listing below the minimum keeps 15 points without a message.
pub fn score_price(
    listing: &ListingAttributes,
    profile: &ProfileCriteria,
    fmt: &dyn NumberFormat,
) -> DimensionScore {
    let price = match present_quantity(listing.price) {
        Some(price) => price,
        None => return DimensionScore::points(points::PRICE_NEUTRAL),
    };

    let check = check_range(price, profile.min_price, profile.max_price);
    let max_price = active_bound(profile.max_price);

    match (check.min_ok, check.max_ok, max_price) {
        (true, true, _) => {
            let mut result = DimensionScore::points(points::PRICE_MAX)
                .with_reason(format!("{} fits the budget", fmt.price(price)));

            if let Some(max) = max_price {
                if price < max * 0.8 {
                    let under = round_half_up((1.0 - price / max) * 100.0);
                    result = result.with_reason(format!("{}% under budget", under));
                }
            }
            result
        }
        (false, true, _) => DimensionScore::points(points::PRICE_BELOW_MIN),
        (_, false, Some(max)) => {
            let over = round_half_up(((price - max) / max) * 100.0);
            if over <= 10 {
                DimensionScore::points(points::PRICE_SLIGHTLY_OVER)
                    .with_deal_breaker(format!("{}% over budget", over))
            } else {
                DimensionScore::points(0).with_deal_breaker(format!(
                    "{} over budget (max. {})",
                    fmt.price(price),
                    fmt.amount(max)
                ))
            }
        }
        // max_ok only fails when a maximum is set
        (_, false, None) => DimensionScore::points(0),
    }
}

/// Area score (max 10)
pub fn score_area(
    listing: &ListingAttributes,
    profile: &ProfileCriteria,
    fmt: &dyn NumberFormat,
) -> DimensionScore {
    let has_preference =
        active_bound(profile.min_area).is_some() || active_bound(profile.max_area).is_some();

    let area = match present_quantity(listing.area) {
        Some(area) if has_preference => area,
        _ => return DimensionScore::points(points::AREA_NEUTRAL),
    };

    if check_range(area, profile.min_area, profile.max_area).all_ok() {
        DimensionScore::points(points::AREA_MAX)
            .with_reason(format!("{} m² fits", fmt.number(area)))
    } else {
        DimensionScore::points(points::AREA_PARTIAL)
    }
}

/// Keyword score (max 15), including the exclusion penalty.
///
/// Wanted keywords earn points in proportion to how many are found. Each
/// excluded term found costs 10 points; the result never drops below zero.
pub fn score_keywords(listing: &ListingAttributes, profile: &ProfileCriteria) -> DimensionScore {
    let corpus = search_corpus(listing);

    let mut result = if profile.keywords.is_empty() {
        DimensionScore::points(points::KEYWORDS_NEUTRAL)
    } else {
        let matched: Vec<&str> = profile
            .keywords
            .iter()
            .filter(|kw| corpus_contains(&corpus, kw))
            .map(String::as_str)
            .collect();

        let ratio = matched.len() as f64 / profile.keywords.len() as f64;
        let result = DimensionScore::points(round_half_up(ratio * points::KEYWORDS_MAX as f64));

        if matched.is_empty() {
            result
        } else {
            result.with_reason(format!("Has: {}", matched.join(", ")))
        }
    };

    let excluded: Vec<&str> = profile
        .exclude_keywords
        .iter()
        .filter(|kw| corpus_contains(&corpus, kw))
        .map(String::as_str)
        .collect();

    if !excluded.is_empty() {
        let penalty = excluded.len() as i32 * points::EXCLUDE_PENALTY;
        result.points = (result.points - penalty).max(0);
        result = result.with_deal_breaker(format!("Contains: {}", excluded.join(", ")));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::SwissFormat;

    fn create_test_listing() -> ListingAttributes {
        ListingAttributes {
            city: Some("Zürich".to_string()),
            rooms: Some("3.5".to_string()),
            price: Some(1650.0),
            area: Some(85.0),
            features: vec!["Balkon".to_string()],
            title: Some("Wohnung mit Balkon".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_city_neutral_without_preference() {
        let listing = create_test_listing();
        let profile = ProfileCriteria::default();

        let result = score_city(&listing, &profile);
        assert_eq!(result.points, 15);
        assert!(result.reasons.is_empty());
        assert!(result.deal_breakers.is_empty());
    }

    #[test]
    fn test_city_neutral_without_listing_city() {
        let listing = ListingAttributes {
            city: Some(String::new()),
            ..create_test_listing()
        };
        let profile = ProfileCriteria {
            cities: vec!["Bern".to_string()],
            ..Default::default()
        };

        assert_eq!(score_city(&listing, &profile).points, 15);
    }

    #[test]
    fn test_city_bidirectional_containment() {
        let profile = ProfileCriteria {
            cities: vec!["zürich".to_string()],
            ..Default::default()
        };
        let listing = ListingAttributes {
            city: Some("Zürich Altstetten".to_string()),
            ..create_test_listing()
        };
        let result = score_city(&listing, &profile);
        assert_eq!(result.points, 30);
        assert_eq!(result.reasons, vec!["Zürich Altstetten is in your search"]);

        let profile = ProfileCriteria {
            cities: vec!["Winterthur Seen".to_string()],
            ..Default::default()
        };
        let listing = ListingAttributes {
            city: Some("winterthur".to_string()),
            ..create_test_listing()
        };
        assert_eq!(score_city(&listing, &profile).points, 30);
    }

    #[test]
    fn test_city_mismatch() {
        let listing = create_test_listing();
        let profile = ProfileCriteria {
            cities: vec!["Basel".to_string(), "Bern".to_string()],
            ..Default::default()
        };

        let result = score_city(&listing, &profile);
        assert_eq!(result.points, 0);
        assert_eq!(result.deal_breakers, vec!["Zürich is not in your cities"]);
    }

    #[test]
    fn test_rooms_unparseable_is_neutral() {
        let fmt = SwissFormat::default();
        let profile = ProfileCriteria {
            min_rooms: Some(3.0),
            ..Default::default()
        };
        let listing = ListingAttributes {
            rooms: Some("auf Anfrage".to_string()),
            ..create_test_listing()
        };

        let result = score_rooms(&listing, &profile, &fmt);
        assert_eq!(result.points, 10);
        assert!(result.deal_breakers.is_empty());
    }

    #[test]
    fn test_rooms_single_bound_violated() {
        let fmt = SwissFormat::default();
        let profile = ProfileCriteria {
            min_rooms: Some(3.0),
            max_rooms: Some(4.0),
            ..Default::default()
        };
        let listing = ListingAttributes {
            rooms: Some("4.5".to_string()),
            ..create_test_listing()
        };

        let result = score_rooms(&listing, &profile, &fmt);
        assert_eq!(result.points, 10);
        assert_eq!(result.deal_breakers, vec!["4.5 rooms above maximum (4)"]);

        let profile = ProfileCriteria {
            min_rooms: Some(3.0),
            ..Default::default()
        };
        let listing = ListingAttributes {
            rooms: Some("2".to_string()),
            ..create_test_listing()
        };
        let result = score_rooms(&listing, &profile, &fmt);
        assert_eq!(result.points, 10);
        assert_eq!(result.deal_breakers, vec!["2 rooms below minimum (3)"]);
    }

    #[test]
    fn test_rooms_inverted_range_violates_both() {
        let fmt = SwissFormat::default();
        let profile = ProfileCriteria {
            min_rooms: Some(4.0),
            max_rooms: Some(2.0),
            ..Default::default()
        };
        let listing = ListingAttributes {
            rooms: Some("3".to_string()),
            ..create_test_listing()
        };

        let result = score_rooms(&listing, &profile, &fmt);
        assert_eq!(result.points, 0);
        assert_eq!(result.deal_breakers, vec!["3 rooms outside range (4-2)"]);
    }

    #[test]
    fn test_price_below_minimum() {
        let fmt = SwissFormat::default();
        let profile = ProfileCriteria {
            min_price: Some(2000.0),
            max_price: Some(3000.0),
            ..Default::default()
        };

        let result = score_price(&create_test_listing(), &profile, &fmt);
        assert_eq!(result.points, 15);
        assert!(result.reasons.is_empty());
        assert!(result.deal_breakers.is_empty());
    }

    #[test]
    fn test_price_far_over_budget() {
        let fmt = SwissFormat::default();
        let profile = ProfileCriteria {
            max_price: Some(2500.0),
            ..Default::default()
        };
        let listing = ListingAttributes {
            price: Some(3200.0),
            ..create_test_listing()
        };

        let result = score_price(&listing, &profile, &fmt);
        assert_eq!(result.points, 0);
        assert_eq!(
            result.deal_breakers,
            vec!["CHF 3’200 over budget (max. 2’500)"]
        );
    }

    #[test]
    fn test_price_within_budget_no_bonus_above_80_percent() {
        let fmt = SwissFormat::default();
        let profile = ProfileCriteria {
            max_price: Some(2000.0),
            ..Default::default()
        };

        let result = score_price(&create_test_listing(), &profile, &fmt);
        assert_eq!(result.points, 25);
        assert_eq!(result.reasons, vec!["CHF 1’650 fits the budget"]);
    }

    #[test]
    fn test_price_over_budget_rounding_boundary() {
        let fmt = SwissFormat::default();
        let profile = ProfileCriteria {
            max_price: Some(2500.0),
            ..Default::default()
        };

        // 10.48% rounds down to 10%
        let listing = ListingAttributes {
            price: Some(2762.0),
            ..create_test_listing()
        };
        let result = score_price(&listing, &profile, &fmt);
        assert_eq!(result.points, 10);
        assert_eq!(result.deal_breakers, vec!["10% over budget"]);

        // 10.52% rounds up to 11%
        let listing = ListingAttributes {
            price: Some(2763.0),
            ..create_test_listing()
        };
        let result = score_price(&listing, &profile, &fmt);
        assert_eq!(result.points, 0);
        assert_eq!(
            result.deal_breakers,
            vec!["CHF 2’763 over budget (max. 2’500)"]
        );
    }

    #[test]
    fn test_price_under_budget_bonus_is_strict() {
        let fmt = SwissFormat::default();
        let profile = ProfileCriteria {
            max_price: Some(2500.0),
            ..Default::default()
        };

        // Exactly 80% of the maximum earns no extra reason
        let listing = ListingAttributes {
            price: Some(2000.0),
            ..create_test_listing()
        };
        let result = score_price(&listing, &profile, &fmt);
        assert_eq!(result.points, 25);
        assert_eq!(result.reasons, vec!["CHF 2’000 fits the budget"]);

        let listing = ListingAttributes {
            price: Some(1999.0),
            ..create_test_listing()
        };
        let result = score_price(&listing, &profile, &fmt);
        assert_eq!(
            result.reasons,
            vec!["CHF 1’999 fits the budget", "20% under budget"]
        );
    }

    #[test]
    fn test_price_zero_is_neutral() {
        let fmt = SwissFormat::default();
        let listing = ListingAttributes {
            price: Some(0.0),
            ..create_test_listing()
        };
        let profile = ProfileCriteria {
            max_price: Some(2000.0),
            ..Default::default()
        };

        assert_eq!(score_price(&listing, &profile, &fmt).points, 12);
    }

    #[test]
    fn test_area_scores() {
        let fmt = SwissFormat::default();
        let listing = create_test_listing();

        assert_eq!(score_area(&listing, &ProfileCriteria::default(), &fmt).points, 5);

        let fits = ProfileCriteria {
            min_area: Some(70.0),
            ..Default::default()
        };
        let result = score_area(&listing, &fits, &fmt);
        assert_eq!(result.points, 10);
        assert_eq!(result.reasons, vec!["85 m² fits"]);

        let too_small = ProfileCriteria {
            min_area: Some(100.0),
            max_area: Some(140.0),
            ..Default::default()
        };
        let result = score_area(&listing, &too_small, &fmt);
        assert_eq!(result.points, 3);
        assert!(result.deal_breakers.is_empty());
    }

    #[test]
    fn test_keywords_no_match() {
        let profile = ProfileCriteria {
            keywords: vec!["Garten".to_string()],
            ..Default::default()
        };

        let result = score_keywords(&create_test_listing(), &profile);
        assert_eq!(result.points, 0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_exclusion_penalty_on_neutral_score() {
        let profile = ProfileCriteria {
            exclude_keywords: vec!["balkon".to_string(), "Keller".to_string()],
            ..Default::default()
        };

        // 8 neutral - 10 penalty, floored at 0
        let result = score_keywords(&create_test_listing(), &profile);
        assert_eq!(result.points, 0);
        assert_eq!(result.deal_breakers, vec!["Contains: balkon"]);
    }

    #[test]
    fn test_exclusion_penalty_reduces_full_score() {
        let listing = ListingAttributes {
            description: Some("Helle Wohnung im Erdgeschoss, Lift vorhanden".to_string()),
            ..create_test_listing()
        };
        let profile = ProfileCriteria {
            keywords: vec!["Balkon".to_string(), "Lift".to_string()],
            exclude_keywords: vec!["Erdgeschoss".to_string()],
            ..Default::default()
        };

        let result = score_keywords(&listing, &profile);
        assert_eq!(result.points, 5);
        assert_eq!(result.reasons, vec!["Has: Balkon, Lift"]);
        assert_eq!(result.deal_breakers, vec!["Contains: Erdgeschoss"]);
    }
}
