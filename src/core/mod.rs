// Core algorithm exports
pub mod filters;
pub mod format;
pub mod label;
pub mod matcher;
pub mod scoring;

pub use format::{NumberFormat, SwissFormat};
pub use label::{label_for, ScoreLabel};
pub use matcher::{score, Matcher};
pub use scoring::DimensionScore;
