//! Wide-to-long loading of per-player tweet tables.
//!
//! Each source table has one row per player with `Player Name`, `Position`
//! and a family of `Tweet N` columns. Loading emits one [`TweetRecord`] per
//! (player row, tweet column) cell.

use once_cell::sync::Lazy;
use csv::ReaderBuilder;
use regex::Regex;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::records::{Gender, TweetRecord};

pub const PLAYER_NAME_COLUMN: &str = "Player Name";
pub const POSITION_COLUMN: &str = "Position";
pub const TWEET_COLUMN_PREFIX: &str = "Tweet";

static TWEET_COLUMN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Tweet\s*(\d+)$").expect("tweet column pattern is valid"));

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{table}: missing required column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("{table}: tweet column '{column}' has no numeric index")]
    BadTweetColumn { table: String, column: String },

    #[error("{table}: tweet column '{column}' repeats an index already seen")]
    DuplicateTweetColumn { table: String, column: String },

    #[error("{table}: no 'Tweet N' columns found")]
    NoTweetColumns { table: String },

    #[error("{table}: row {row} has {fields} fields, header has {expected}")]
    RowTooLong {
        table: String,
        row: usize,
        fields: usize,
        expected: usize,
    },

    #[error("{table}: failed to open: {source}")]
    Io {
        table: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{table}: malformed CSV: {source}")]
    Csv {
        table: String,
        #[source]
        source: csv::Error,
    },
}

/// Extracts the ordinal from a `Tweet N` header.
///
/// Returns `None` when the header does not end in a numeric index.
pub fn parse_tweet_column(name: &str) -> Option<u32> {
    TWEET_COLUMN
        .captures(name.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Reshapes one wide table into long-form records tagged with `gender`.
///
/// Records are emitted column by column: every player's `Tweet 1`, then every
/// player's `Tweet 2`, and so on, in header order.
pub fn load_wide_table<R: Read>(
    reader: R,
    table: &str,
    gender: Gender,
) -> Result<Vec<TweetRecord>, LoadError> {
    let csv_err = |source| LoadError::Csv {
        table: table.to_string(),
        source,
    };

    // short rows are allowed; their missing trailing cells read as null tweets
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers().map_err(csv_err)?.clone();

    let find = |column: &str| {
        headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| LoadError::MissingColumn {
                table: table.to_string(),
                column: column.to_string(),
            })
    };
    let name_idx = find(PLAYER_NAME_COLUMN)?;
    let position_idx = find(POSITION_COLUMN)?;

    let mut tweet_columns = Vec::new();
    let mut seen = HashSet::new();
    for (idx, header) in headers.iter().enumerate() {
        if !header.trim().starts_with(TWEET_COLUMN_PREFIX) {
            continue;
        }
        let ordinal = parse_tweet_column(header).ok_or_else(|| LoadError::BadTweetColumn {
            table: table.to_string(),
            column: header.to_string(),
        })?;
        if !seen.insert(ordinal) {
            return Err(LoadError::DuplicateTweetColumn {
                table: table.to_string(),
                column: header.to_string(),
            });
        }
        tweet_columns.push((idx, ordinal));
    }

    if tweet_columns.is_empty() {
        return Err(LoadError::NoTweetColumns {
            table: table.to_string(),
        });
    }

    let rows = rdr
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(csv_err)?;
    if let Some((row, record)) = rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() > headers.len())
    {
        return Err(LoadError::RowTooLong {
            table: table.to_string(),
            row: row + 1,
            fields: record.len(),
            expected: headers.len(),
        });
    }

    debug!(
        table,
        players = rows.len(),
        tweet_columns = tweet_columns.len(),
        "Reshaping wide table"
    );

    let mut records = Vec::with_capacity(rows.len() * tweet_columns.len());
    for &(col, ordinal) in &tweet_columns {
        for row in &rows {
            let cell = |i: usize| row.get(i).unwrap_or_default();
            let text = cell(col).trim();
            records.push(TweetRecord {
                player_name: cell(name_idx).trim().to_string(),
                position: cell(position_idx).trim().to_string(),
                gender,
                tweet_index: ordinal,
                tweet_text: (!text.is_empty()).then(|| text.to_string()),
            });
        }
    }

    Ok(records)
}

/// Loads a wide table from disk, using the file path as the table name in errors.
#[tracing::instrument(skip_all, fields(path = %path.display(), gender = %gender))]
pub fn load_wide_file(path: &Path, gender: Gender) -> Result<Vec<TweetRecord>, LoadError> {
    let table = path.display().to_string();
    let file = File::open(path).map_err(|source| LoadError::Io {
        table: table.clone(),
        source,
    })?;
    load_wide_table(file, &table, gender)
}

/// Loads both gender tables and concatenates them, men first.
pub fn load_corpus(men: &Path, women: &Path) -> Result<Vec<TweetRecord>, LoadError> {
    let mut records = load_wide_file(men, Gender::Men)?;
    let men_count = records.len();
    records.extend(load_wide_file(women, Gender::Women)?);

    info!(
        men = men_count,
        women = records.len() - men_count,
        "Loaded tweet records"
    );
    Ok(records)
}
