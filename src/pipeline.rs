//! The batch pipeline: load, score, tag, aggregate, export.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::analysis::summary::{build_summary, write_summary_json};
use crate::analysis::types::SummaryReport;
use crate::config::PipelineConfig;
use crate::loader::load_corpus;
use crate::output::export_records;
use crate::records::{ScoredRecord, SentimentCategory, TaggedRecord, Topic, TweetRecord};
use crate::sentiment::score_record;
use crate::topics::tag_record;

#[derive(Debug)]
pub struct PipelineOutput {
    pub records: Vec<TaggedRecord>,
    pub summary: SummaryReport,
}

pub fn score_all(tweets: Vec<TweetRecord>) -> Vec<ScoredRecord> {
    let scored: Vec<ScoredRecord> = tweets.into_iter().map(score_record).collect();
    for category in SentimentCategory::ALL {
        debug!(
            category = %category,
            count = scored.iter().filter(|r| r.sentiment_category == category).count(),
            "Scored tweets"
        );
    }
    scored
}

pub fn tag_all(scored: Vec<ScoredRecord>) -> Vec<TaggedRecord> {
    let tagged: Vec<TaggedRecord> = scored.into_iter().map(tag_record).collect();
    for topic in Topic::ALL {
        debug!(
            topic = %topic,
            count = tagged.iter().filter(|r| r.mentions(topic)).count(),
            "Tagged tweets"
        );
    }
    tagged
}

/// Scores and tags loaded tweets.
pub fn annotate(tweets: Vec<TweetRecord>) -> Vec<TaggedRecord> {
    tag_all(score_all(tweets))
}

/// Runs every stage once, in order, writing the annotated table and,
/// when configured, the summary report.
#[tracing::instrument(skip_all, fields(
    men = %config.men.display(),
    women = %config.women.display(),
    output = %config.output.display(),
))]
pub fn run(config: &PipelineConfig) -> Result<PipelineOutput> {
    let tweets = load_corpus(&config.men, &config.women).context("load tweet tables")?;
    let records = annotate(tweets);
    let summary = build_summary(&records);

    export_records(&config.output, &records)?;
    if let Some(path) = &config.summary {
        write_summary_json(path, &summary)?;
    }

    info!(tweets = records.len(), "Pipeline finished");
    Ok(PipelineOutput { records, summary })
}
