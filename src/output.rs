//! Export of the annotated tweet table, and reading it back.
//!
//! The exported CSV is the only contract with the dashboard, which indexes
//! columns by name. Column order is the field order of [`ExportRow`].

use anyhow::{Context, Result, bail};
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::records::{Gender, ScoredRecord, SentimentCategory, TaggedRecord, TopicFlags, TweetRecord};

/// Header row of the exported table, in column order.
pub const EXPORT_COLUMNS: [&str; 10] = [
    "Player Name",
    "Position",
    "Gender",
    "Tweet #",
    "Tweet Text",
    "Sentiment Score",
    "Sentiment Category",
    "Topic_Performance",
    "Topic_Appearance",
    "Topic_Age",
];

/// One row of `aggregated_data.csv`.
#[derive(Debug, Serialize, Deserialize)]
struct ExportRow {
    #[serde(rename = "Player Name")]
    player_name: String,
    #[serde(rename = "Position")]
    position: String,
    #[serde(rename = "Gender")]
    gender: Gender,
    #[serde(rename = "Tweet #")]
    tweet_index: u32,
    #[serde(rename = "Tweet Text")]
    tweet_text: Option<String>,
    #[serde(rename = "Sentiment Score")]
    sentiment_score: f64,
    #[serde(rename = "Sentiment Category")]
    sentiment_category: SentimentCategory,
    #[serde(rename = "Topic_Performance")]
    topic_performance: u8,
    #[serde(rename = "Topic_Appearance")]
    topic_appearance: u8,
    #[serde(rename = "Topic_Age")]
    topic_age: u8,
}

impl From<&TaggedRecord> for ExportRow {
    fn from(record: &TaggedRecord) -> Self {
        let tweet = record.tweet();
        ExportRow {
            player_name: tweet.player_name.clone(),
            position: tweet.position.clone(),
            gender: tweet.gender,
            tweet_index: tweet.tweet_index,
            tweet_text: tweet.tweet_text.clone(),
            sentiment_score: record.sentiment_score(),
            sentiment_category: record.sentiment_category(),
            topic_performance: record.topics.performance.into(),
            topic_appearance: record.topics.appearance.into(),
            topic_age: record.topics.age.into(),
        }
    }
}

impl ExportRow {
    fn into_record(self) -> Result<TaggedRecord> {
        let topics = TopicFlags {
            performance: flag("Topic_Performance", self.topic_performance)?,
            appearance: flag("Topic_Appearance", self.topic_appearance)?,
            age: flag("Topic_Age", self.topic_age)?,
        };
        Ok(TaggedRecord {
            scored: ScoredRecord {
                tweet: TweetRecord {
                    player_name: self.player_name,
                    position: self.position,
                    gender: self.gender,
                    tweet_index: self.tweet_index,
                    tweet_text: self.tweet_text,
                },
                sentiment_score: self.sentiment_score,
                sentiment_category: self.sentiment_category,
            },
            topics,
        })
    }
}

fn flag(column: &str, value: u8) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => bail!("{column} must be 0 or 1, found {other}"),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes a file through a sibling `.tmp` file that is renamed into place,
/// so a failed write never leaves a partial file at `path`.
pub fn replace_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    let tmp = temp_path(path);
    let written = (|| -> Result<()> {
        let file = File::create(&tmp)?;
        let mut out = BufWriter::new(file);
        write(&mut out)?;
        out.flush()?;
        out.into_inner().map_err(|e| e.into_error())?.sync_all()?;
        Ok(())
    })();

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e.context(format!("write {}", tmp.display())));
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("move output into {}", path.display()));
    }
    Ok(())
}

/// Writes every tagged record to `path` as CSV, replacing any existing file.
#[tracing::instrument(skip_all, fields(path = %path.display(), rows = records.len()))]
pub fn export_records(path: &Path, records: &[TaggedRecord]) -> Result<()> {
    replace_file(path, |out| {
        let mut writer = WriterBuilder::new().has_headers(true).from_writer(out);
        if records.is_empty() {
            writer.write_record(EXPORT_COLUMNS)?;
        }
        for record in records {
            writer.serialize(ExportRow::from(record))?;
        }
        writer.flush()?;
        Ok(())
    })?;

    info!("Exported annotated tweets");
    Ok(())
}

/// Parses an exported table back into tagged records.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<TaggedRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.iter().ne(EXPORT_COLUMNS) {
        bail!(
            "unexpected columns {:?}, expected {:?}",
            headers.iter().collect::<Vec<_>>(),
            EXPORT_COLUMNS
        );
    }

    let mut records = Vec::new();
    for (line, result) in rdr.deserialize::<ExportRow>().enumerate() {
        let row = result.with_context(|| format!("row {}", line + 1))?;
        records.push(row.into_record().with_context(|| format!("row {}", line + 1))?);
    }
    Ok(records)
}

/// Loads a previously exported `aggregated_data.csv`.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_aggregated(path: &Path) -> Result<Vec<TaggedRecord>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let records = read_records(file).with_context(|| format!("parse {}", path.display()))?;
    debug!(rows = records.len(), "Read exported tweets");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(text: Option<&str>, score: f64, topics: TopicFlags) -> TaggedRecord {
        TaggedRecord {
            scored: ScoredRecord {
                tweet: TweetRecord {
                    player_name: "Hailey Van Lith".to_string(),
                    position: "Guard".to_string(),
                    gender: Gender::Women,
                    tweet_index: 3,
                    tweet_text: text.map(str::to_string),
                },
                sentiment_score: score,
                sentiment_category: crate::sentiment::categorize(score),
            },
            topics,
        }
    }

    #[test]
    fn test_export_header_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aggregated_data.csv");

        let records = vec![tagged(
            Some("She looks great, \"really\" great"),
            0.8,
            TopicFlags {
                appearance: true,
                ..Default::default()
            },
        )];
        export_records(&path, &records).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), EXPORT_COLUMNS.join(","));
        let row = lines.next().unwrap();
        assert!(row.starts_with("Hailey Van Lith,Guard,Women,3,"));
        assert!(row.ends_with(",0.8,Positive,0,1,0"));
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale contents\nmore stale\nand more\n").unwrap();

        export_records(&path, &[tagged(None, 0.0, TopicFlags::default())]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert_eq!(content.lines().count(), 2);
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_export_empty_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        export_records(&path, &[]).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), EXPORT_COLUMNS.join(","));
        assert!(read_aggregated(&path).unwrap().is_empty());
    }

    #[test]
    fn test_export_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("aggregated_data.csv");
        export_records(&path, &[tagged(None, 0.0, TopicFlags::default())]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let result = replace_file(&path, |_| bail!("serializer blew up"));
        assert!(result.is_err());
        assert!(!path.exists());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_unwritable_destination_is_error() {
        let dir = tempfile::tempdir().unwrap();
        // the destination is an existing directory, so the rename must fail
        let path = dir.path().join("taken");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "x").unwrap();
        assert!(export_records(&path, &[]).is_err());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_read_back_null_text_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round.csv");
        let records = vec![
            tagged(None, 0.0, TopicFlags::default()),
            tagged(
                Some("young, quick, and can dribble"),
                0.1027,
                TopicFlags {
                    performance: true,
                    age: true,
                    ..Default::default()
                },
            ),
        ];
        export_records(&path, &records).unwrap();
        assert_eq!(read_aggregated(&path).unwrap(), records);
    }

    #[test]
    fn test_read_rejects_bad_flag() {
        let csv = format!(
            "{}\nA,Guard,Men,1,hi,0.0,Neutral,2,0,0\n",
            EXPORT_COLUMNS.join(",")
        );
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("Topic_Performance"));
    }

    #[test]
    fn test_read_rejects_wrong_columns() {
        let csv = "Player Name,Gender\nA,Men\n";
        assert!(read_records(csv.as_bytes()).is_err());
    }
}
