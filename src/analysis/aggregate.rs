use std::collections::{BTreeMap, BTreeSet};

use crate::analysis::types::{
    CategoryCount, GenderSentiment, GenderTopicCount, PlayerTopicCount, PlayerTopicShare,
};
use crate::analysis::utility::{mean, stddev};
use crate::records::{Gender, SentimentCategory, TaggedRecord, Topic};

/// Genders that have at least one record, in [`Gender::ALL`] order.
fn genders_present(records: &[TaggedRecord]) -> BTreeSet<Gender> {
    records.iter().map(TaggedRecord::gender).collect()
}

/// Sentiment scores for one gender.
pub fn scores_for(records: &[TaggedRecord], gender: Gender) -> Vec<f64> {
    records
        .iter()
        .filter(|r| r.gender() == gender)
        .map(TaggedRecord::sentiment_score)
        .collect()
}

/// Mean sentiment score per gender. Genders with no records are omitted.
pub fn mean_sentiment_by_gender(records: &[TaggedRecord]) -> Vec<GenderSentiment> {
    Gender::ALL
        .into_iter()
        .filter_map(|gender| {
            let scores = scores_for(records, gender);
            if scores.is_empty() {
                return None;
            }
            let avg = mean(&scores);
            Some(GenderSentiment {
                gender,
                mean_score: avg,
                stddev: stddev(&scores, avg),
                tweets: scores.len(),
            })
        })
        .collect()
}

/// Tweet counts per (gender, sentiment category).
///
/// Every category appears for each gender that has records, with zero counts
/// filled in. Genders with no records are omitted.
pub fn sentiment_category_counts(records: &[TaggedRecord]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<(Gender, SentimentCategory), usize> = BTreeMap::new();
    for gender in genders_present(records) {
        for category in SentimentCategory::ALL {
            counts.insert((gender, category), 0);
        }
    }
    for record in records {
        *counts
            .entry((record.gender(), record.sentiment_category()))
            .or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((gender, category), count)| CategoryCount {
            gender,
            category,
            count,
        })
        .collect()
}

/// Number of tweets flagged with `topic`, per gender.
///
/// Each gender that has records is reported, with zero when none of its
/// tweets mention the topic.
pub fn topic_mention_counts_by_gender(
    records: &[TaggedRecord],
    topic: Topic,
) -> Vec<GenderTopicCount> {
    genders_present(records)
        .into_iter()
        .map(|gender| GenderTopicCount {
            gender,
            topic,
            count: records
                .iter()
                .filter(|r| r.gender() == gender && r.mentions(topic))
                .count(),
        })
        .collect()
}

/// Number of tweets flagged with `topic`, per (player, gender).
///
/// Only players with at least one mention appear. Rows are ordered by
/// ascending count, then player name, then gender.
pub fn topic_mention_counts_by_player(
    records: &[TaggedRecord],
    topic: Topic,
) -> Vec<PlayerTopicCount> {
    let mut counts: BTreeMap<(&str, Gender), usize> = BTreeMap::new();
    for record in records.iter().filter(|r| r.mentions(topic)) {
        *counts
            .entry((record.player_name(), record.gender()))
            .or_default() += 1;
    }

    let mut rows: Vec<PlayerTopicCount> = counts
        .into_iter()
        .map(|((player_name, gender), count)| PlayerTopicCount {
            player_name: player_name.to_string(),
            gender,
            count,
        })
        .collect();
    rows.sort_by(|a, b| {
        a.count
            .cmp(&b.count)
            .then_with(|| a.player_name.cmp(&b.player_name))
            .then_with(|| a.gender.cmp(&b.gender))
    });
    rows
}

/// Share of each player's tweets that mention `topic`.
///
/// Covers the same players as [`topic_mention_counts_by_player`] and uses the
/// same ordering.
pub fn topic_share_by_player(records: &[TaggedRecord], topic: Topic) -> Vec<PlayerTopicShare> {
    let mut totals: BTreeMap<(&str, Gender), usize> = BTreeMap::new();
    for record in records {
        *totals
            .entry((record.player_name(), record.gender()))
            .or_default() += 1;
    }

    topic_mention_counts_by_player(records, topic)
        .into_iter()
        .map(|row| {
            let tweets = totals
                .get(&(row.player_name.as_str(), row.gender))
                .copied()
                .unwrap_or(row.count);
            PlayerTopicShare {
                share: row.count as f64 / tweets as f64,
                player_name: row.player_name,
                gender: row.gender,
                mentions: row.count,
                tweets,
            }
        })
        .collect()
}
