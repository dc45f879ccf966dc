use crate::records::SentimentCategory;

/// Scores strictly above this are Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Scores strictly below this are Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Buckets a compound score into a sentiment category.
///
/// | Range            | Category |
/// |------------------|----------|
/// | > 0.05           | Positive |
/// | -0.05 ..= 0.05   | Neutral  |
/// | < -0.05          | Negative |
pub fn categorize(score: f64) -> SentimentCategory {
    match score {
        s if s > POSITIVE_THRESHOLD => SentimentCategory::Positive,
        s if s < NEGATIVE_THRESHOLD => SentimentCategory::Negative,
        _ => SentimentCategory::Neutral,
    }
}
