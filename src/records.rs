//! Tweet records as they move through the pipeline.
//!
//! A [`TweetRecord`] comes out of the loader, gains a sentiment score to become
//! a [`ScoredRecord`], and gains topic flags to become a [`TaggedRecord`].

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Men, Gender::Women];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentCategory {
    Positive,
    Neutral,
    Negative,
}

impl SentimentCategory {
    pub const ALL: [SentimentCategory; 3] = [
        SentimentCategory::Positive,
        SentimentCategory::Neutral,
        SentimentCategory::Negative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentCategory::Positive => "Positive",
            SentimentCategory::Neutral => "Neutral",
            SentimentCategory::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three keyword-driven topics a tweet can be flagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Performance,
    Appearance,
    Age,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Performance, Topic::Appearance, Topic::Age];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Performance => "Performance",
            Topic::Appearance => "Appearance",
            Topic::Age => "Age",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (player, tweet) cell from a wide source table.
#[derive(Debug, Clone, PartialEq)]
pub struct TweetRecord {
    pub player_name: String,
    pub position: String,
    pub gender: Gender,
    pub tweet_index: u32,
    pub tweet_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub tweet: TweetRecord,
    pub sentiment_score: f64,
    pub sentiment_category: SentimentCategory,
}

/// Independent, non-exclusive topic indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TopicFlags {
    pub performance: bool,
    pub appearance: bool,
    pub age: bool,
}

impl TopicFlags {
    pub fn get(&self, topic: Topic) -> bool {
        match topic {
            Topic::Performance => self.performance,
            Topic::Appearance => self.appearance,
            Topic::Age => self.age,
        }
    }

    pub fn any(&self) -> bool {
        self.performance || self.appearance || self.age
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaggedRecord {
    pub scored: ScoredRecord,
    pub topics: TopicFlags,
}

impl TaggedRecord {
    pub fn tweet(&self) -> &TweetRecord {
        &self.scored.tweet
    }

    pub fn player_name(&self) -> &str {
        &self.scored.tweet.player_name
    }

    pub fn gender(&self) -> Gender {
        self.scored.tweet.gender
    }

    pub fn sentiment_score(&self) -> f64 {
        self.scored.sentiment_score
    }

    pub fn sentiment_category(&self) -> SentimentCategory {
        self.scored.sentiment_category
    }

    pub fn mentions(&self, topic: Topic) -> bool {
        self.topics.get(topic)
    }
}
