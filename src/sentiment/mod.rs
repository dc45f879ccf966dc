//! Sentiment scoring of tweet text.
//!
//! [`score`] maps optional text to a compound polarity in [-1, 1] and
//! [`categorize`] buckets that score. Both are pure.

pub mod analyzer;
pub mod category;
pub mod lexicon;

pub use analyzer::SentimentAnalyzer;
pub use category::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, categorize};

use once_cell::sync::Lazy;

use crate::records::{ScoredRecord, TweetRecord};

static ANALYZER: Lazy<SentimentAnalyzer> = Lazy::new(SentimentAnalyzer::new);

/// Compound polarity of a tweet. Missing text scores exactly 0.0.
pub fn score(text: Option<&str>) -> f64 {
    match text {
        None => 0.0,
        Some(text) => ANALYZER.polarity(text),
    }
}

pub fn score_record(tweet: TweetRecord) -> ScoredRecord {
    let sentiment_score = score(tweet.tweet_text.as_deref());
    ScoredRecord {
        tweet,
        sentiment_score,
        sentiment_category: categorize(sentiment_score),
    }
}
