use serde::{Deserialize, Serialize};

/// Display classification of a final match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreLabel {
    TopMatch,
    GoodMatch,
    Possible,
    PoorFit,
}

impl ScoreLabel {
    pub const TOP_MATCH_THRESHOLD: i32 = 85;
    pub const GOOD_MATCH_THRESHOLD: i32 = 70;
    pub const POSSIBLE_THRESHOLD: i32 = 50;

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ScoreLabel::TopMatch => "Top Match",
            ScoreLabel::GoodMatch => "Good Match",
            ScoreLabel::Possible => "Possible",
            ScoreLabel::PoorFit => "Poor Fit",
        }
    }

    /// Badge style classes rendered next to the label
    pub fn style_tag(&self) -> &'static str {
        match self {
            ScoreLabel::TopMatch => "text-green-600 bg-green-50",
            ScoreLabel::GoodMatch => "text-blue-600 bg-blue-50",
            ScoreLabel::Possible => "text-yellow-600 bg-yellow-50",
            ScoreLabel::PoorFit => "text-gray-500 bg-gray-50",
        }
    }
}

impl std::fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a score; thresholds are checked top-down, first match wins.
#[inline]
pub fn label_for(score: i32) -> ScoreLabel {
    if score >= ScoreLabel::TOP_MATCH_THRESHOLD {
        ScoreLabel::TopMatch
    } else if score >= ScoreLabel::GOOD_MATCH_THRESHOLD {
        ScoreLabel::GoodMatch
    } else if score >= ScoreLabel::POSSIBLE_THRESHOLD {
        ScoreLabel::Possible
    } else {
        ScoreLabel::PoorFit
    }
}
