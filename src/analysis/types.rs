//! Summary tables produced by the aggregation functions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{Gender, SentimentCategory, Topic};

/// Mean sentiment for one gender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderSentiment {
    pub gender: Gender,
    pub mean_score: f64,
    pub stddev: f64,
    pub tweets: usize,
}

/// Number of tweets for one (gender, sentiment category) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub gender: Gender,
    pub category: SentimentCategory,
    pub count: usize,
}

/// Number of tweets mentioning a topic for one gender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderTopicCount {
    pub gender: Gender,
    pub topic: Topic,
    pub count: usize,
}

/// Number of tweets mentioning a topic for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTopicCount {
    pub player_name: String,
    pub gender: Gender,
    pub count: usize,
}

/// Share of a player's tweets that mention a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerTopicShare {
    pub player_name: String,
    pub gender: Gender,
    pub mentions: usize,
    pub tweets: usize,
    pub share: f64,
}

/// Welch's unequal-variance t-test result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WelchTest {
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
}

/// All aggregates for a single topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub topic: Topic,
    pub by_gender: Vec<GenderTopicCount>,
    pub by_player: Vec<PlayerTopicShare>,
}

/// Complete aggregation result, written as `summary.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub schema_version: u8,
    pub generated_at: DateTime<Utc>,
    pub total_tweets: usize,
    pub sentiment_by_gender: Vec<GenderSentiment>,
    pub sentiment_categories: Vec<CategoryCount>,
    /// Men minus Women; absent when either group has fewer than two tweets.
    pub sentiment_gap: Option<WelchTest>,
    pub topics: Vec<TopicSummary>,
}
