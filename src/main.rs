//! CLI entry point for the courtside sentiment pipeline.
//!
//! Provides subcommands for running the full pipeline over the men's and
//! women's tweet tables, recomputing the summary from an exported table, and
//! scoring a single piece of text.

use anyhow::Result;
use clap::{Parser, Subcommand};
use courtside_sentiment::analysis::summary::{build_summary, log_summary, write_summary_json};
use courtside_sentiment::config::PipelineConfig;
use courtside_sentiment::output::read_aggregated;
use courtside_sentiment::{pipeline, sentiment, topics};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "courtside_sentiment")]
#[command(about = "Sentiment and topic statistics for college basketball tweets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load both tweet tables, score and tag every tweet, and export the result
    Run {
        /// JSON file with default paths; flags below take precedence
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Wide CSV of men's players and tweets
        #[arg(long)]
        men: Option<PathBuf>,

        /// Wide CSV of women's players and tweets
        #[arg(long)]
        women: Option<PathBuf>,

        /// CSV file to write the annotated tweets to (overwritten)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Optional: JSON file to write the aggregate summary to
        #[arg(long)]
        summary: Option<PathBuf>,
    },
    /// Recompute every aggregate from a previously exported CSV
    Summarize {
        /// Exported annotated tweets
        #[arg(short, long, default_value = courtside_sentiment::config::DEFAULT_OUTPUT_PATH)]
        input: PathBuf,

        /// Optional: JSON file to write the aggregate summary to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Score and tag a single piece of text
    Score {
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/courtside_sentiment.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("courtside_sentiment.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            men,
            women,
            output,
            summary,
        } => {
            let base = match config {
                Some(path) => PipelineConfig::load(&path)?,
                None => PipelineConfig::default(),
            };
            let config = base.with_overrides(men, women, output, summary);

            let result = pipeline::run(&config)?;
            log_summary(&result.summary);
        }
        Commands::Summarize { input, output } => {
            let records = read_aggregated(&input)?;
            let report = build_summary(&records);
            log_summary(&report);

            if let Some(path) = output {
                write_summary_json(&path, &report)?;
            } else {
                info!("Summary path not specified, skipping JSON output");
            }
        }
        Commands::Score { text } => {
            let score = sentiment::score(Some(&text));
            let flags = topics::tag_text(Some(&text));

            info!(
                score,
                category = %sentiment::categorize(score),
                performance = flags.performance,
                appearance = flags.appearance,
                age = flags.age,
                "Scored text"
            );
        }
    }

    Ok(())
}
