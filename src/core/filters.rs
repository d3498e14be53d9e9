use crate::models::ListingAttributes;

/// Outcome of checking a value against an optional inclusive `[min, max]` range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeCheck {
    pub min_ok: bool,
    pub max_ok: bool,
}

impl RangeCheck {
    #[inline]
    pub fn all_ok(&self) -> bool {
        self.min_ok && self.max_ok
    }
}

/// Returns the bound only if it is actually set.
///
/// Profiles store "no preference" as either a missing value or `0`, so both
/// count as absent. Non-finite values are treated the same way.
#[inline]
pub fn active_bound(bound: Option<f64>) -> Option<f64> {
    bound.filter(|b| b.is_finite() && *b != 0.0)
}

/// Check a value against optional inclusive bounds.
///
/// An absent bound is always satisfied; each side is checked independently.
#[inline]
pub fn check_range(value: f64, min: Option<f64>, max: Option<f64>) -> RangeCheck {
    RangeCheck {
        min_ok: active_bound(min).map_or(true, |m| value >= m),
        max_ok: active_bound(max).map_or(true, |m| value <= m),
    }
}

/// Listing quantity that is present and non-zero
#[inline]
pub fn present_quantity(value: Option<f64>) -> Option<f64> {
    active_bound(value)
}

/// Non-empty text value
#[inline]
pub fn present_text(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Parse the leading decimal number of a free-form room string.
///
/// `"3.5"` and `"3.5 Zimmer"` both yield `3.5`; strings without a leading
/// number (`"n/a"`, `""`) yield `None`.
pub fn parse_rooms(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Optional exponent, only consumed when followed by digits
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round half up (towards positive infinity), as displayed percentages and
/// keyword points expect: `7.5 -> 8`, `-2.5 -> -2`.
#[inline]
pub fn round_half_up(value: f64) -> i32 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i32
}

/// Build the lower-cased text searched for keywords.
///
/// Title, description and features are joined with single spaces; absent
/// parts contribute an empty segment.
pub fn search_corpus(listing: &ListingAttributes) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(2 + listing.features.len());
    parts.push(listing.title.as_deref().unwrap_or(""));
    parts.push(listing.description.as_deref().unwrap_or(""));
    parts.extend(listing.features.iter().map(String::as_str));

    parts.join(" ").to_lowercase()
}

/// Case-insensitive substring test against an already lower-cased corpus
#[inline]
pub fn corpus_contains(corpus: &str, term: &str) -> bool {
    corpus.contains(&term.to_lowercase())
}
