use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

const DEFAULT_DATASET_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/careers.csv");
const DEFAULT_MODEL_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/career_model.json");

/// Which matcher backend ranks careers on the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherBackend {
    Overlap,
    Classifier,
}

impl FromStr for MatcherBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overlap" => Ok(MatcherBackend::Overlap),
            "classifier" => Ok(MatcherBackend::Classifier),
            other => bail!("unknown matcher backend '{other}' (expected 'overlap' or 'classifier')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every field has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub dataset_path: PathBuf,
    pub model_path: PathBuf,
    pub matcher: MatcherBackend,
    pub confidence_boost: bool,
    pub session_idle_minutes: i64,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: "PathWise – Career Path Explorer".to_string(),
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            matcher: MatcherBackend::Overlap,
            confidence_boost: false,
            session_idle_minutes: 60,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let session_idle_minutes = optional_env("SESSION_IDLE_MINUTES")
            .map(|v| {
                v.parse::<i64>()
                    .context("SESSION_IDLE_MINUTES must be a whole number of minutes")
            })
            .transpose()?
            .unwrap_or(defaults.session_idle_minutes);
        if session_idle_minutes <= 0 {
            bail!("SESSION_IDLE_MINUTES must be positive");
        }

        Ok(Config {
            title: optional_env("PATHWISE_TITLE").unwrap_or(defaults.title),
            dataset_path: optional_env("CAREER_DATASET_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.dataset_path),
            model_path: optional_env("CAREER_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            matcher: optional_env("PATHWISE_MATCHER")
                .map(|v| v.parse::<MatcherBackend>())
                .transpose()
                .context("PATHWISE_MATCHER is invalid")?
                .unwrap_or(defaults.matcher),
            confidence_boost: optional_env("PATHWISE_CONFIDENCE_BOOST")
                .map(|v| parse_bool(&v))
                .transpose()
                .context("PATHWISE_CONFIDENCE_BOOST must be true or false")?
                .unwrap_or(defaults.confidence_boost),
            session_idle_minutes,
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("'{other}' is not a boolean"),
    }
}
