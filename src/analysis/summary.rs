use anyhow::Result;
use chrono::Utc;
use std::path::Path;
use tracing::info;

use crate::analysis::aggregate::{
    mean_sentiment_by_gender, sentiment_category_counts, topic_mention_counts_by_gender,
    topic_share_by_player,
};
use crate::analysis::types::{SummaryReport, TopicSummary};
use crate::analysis::welch::sentiment_gap;
use crate::output::replace_file;
use crate::records::{TaggedRecord, Topic};

pub const SCHEMA_VERSION: u8 = 1;

/// Computes every aggregate over `records` into one report.
pub fn build_summary(records: &[TaggedRecord]) -> SummaryReport {
    let topics = Topic::ALL
        .into_iter()
        .map(|topic| TopicSummary {
            topic,
            by_gender: topic_mention_counts_by_gender(records, topic),
            by_player: topic_share_by_player(records, topic),
        })
        .collect();

    SummaryReport {
        schema_version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        total_tweets: records.len(),
        sentiment_by_gender: mean_sentiment_by_gender(records),
        sentiment_categories: sentiment_category_counts(records),
        sentiment_gap: sentiment_gap(records),
        topics,
    }
}

/// Serializes the report as pretty JSON, replacing any existing file.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn write_summary_json(path: &Path, report: &SummaryReport) -> Result<()> {
    replace_file(path, |out| {
        serde_json::to_writer_pretty(out, report)?;
        Ok(())
    })?;
    info!("Wrote summary report");
    Ok(())
}

/// Logs the report's headline numbers.
pub fn log_summary(report: &SummaryReport) {
    for row in &report.sentiment_by_gender {
        info!(
            gender = %row.gender,
            mean = row.mean_score,
            stddev = row.stddev,
            tweets = row.tweets,
            "Average sentiment"
        );
    }

    for row in &report.sentiment_categories {
        info!(gender = %row.gender, category = %row.category, count = row.count, "Sentiment category");
    }

    match &report.sentiment_gap {
        Some(test) => info!(
            t_statistic = test.t_statistic,
            degrees_of_freedom = test.degrees_of_freedom,
            p_value = test.p_value,
            "Welch's t-test, men vs women"
        ),
        None => info!("Not enough tweets per gender for a t-test"),
    }

    for summary in &report.topics {
        for row in &summary.by_gender {
            info!(topic = %summary.topic, gender = %row.gender, count = row.count, "Topic mentions");
        }
        // ascending order, so the most-mentioned player is last
        if let Some(top) = summary.by_player.last() {
            info!(
                topic = %summary.topic,
                player = %top.player_name,
                gender = %top.gender,
                mentions = top.mentions,
                share = top.share,
                "Most mentioned player"
            );
        }
    }
}
