use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_MEN_PATH: &str = "top_10_men_players.csv";
pub const DEFAULT_WOMEN_PATH: &str = "top_10_women_players.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "data/aggregated_data.csv";

/// Where the pipeline reads from and writes to.
///
/// Can be stored as a JSON file; any field left out falls back to the default:
/// ```json
/// {
///   "men": "raw/top_10_men_players.csv",
///   "women": "raw/top_10_women_players.csv",
///   "output": "basketball_dashboard/data/aggregated_data.csv",
///   "summary": "basketball_dashboard/data/summary.json"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub men: PathBuf,
    pub women: PathBuf,
    pub output: PathBuf,
    pub summary: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            men: PathBuf::from(DEFAULT_MEN_PATH),
            women: PathBuf::from(DEFAULT_WOMEN_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            summary: None,
        }
    }
}

impl PipelineConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    /// Replaces each field for which an override is given.
    pub fn with_overrides(
        mut self,
        men: Option<PathBuf>,
        women: Option<PathBuf>,
        output: Option<PathBuf>,
        summary: Option<PathBuf>,
    ) -> Self {
        if let Some(men) = men {
            self.men = men;
        }
        if let Some(women) = women {
            self.women = women;
        }
        if let Some(output) = output {
            self.output = output;
        }
        if summary.is_some() {
            self.summary = summary;
        }
        self
    }
}
