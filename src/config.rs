use crate::api::DEFAULT_BASE_URL;
use crate::error::{AppError, Result};
use crate::logger::DEFAULT_LOG_FILE;
use crate::models::AppTab;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use url::Url;

/// Terminal client for the AI Wiki Quiz Generator backend.
#[derive(Debug, Parser)]
#[command(name = "wiki-quiz", version, about)]
pub struct Cli {
    /// Origin of the quiz backend
    #[arg(long, env = "QUIZ_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// File that receives diagnostic logs
    #[arg(long, env = "QUIZ_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Tab shown at start-up
    #[arg(long, value_enum, default_value_t = AppTab::Generate)]
    pub start_tab: AppTab,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub log_file: PathBuf,
    pub start_tab: AppTab,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(&cli.base_url)?,
            log_file: cli.log_file,
            start_tab: cli.start_tab,
            log_level: if cli.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        })
    }
}

pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|source| AppError::InvalidBaseUrl {
        url: trimmed.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.trim_end_matches('/').to_string()),
        other => Err(AppError::UnsupportedScheme(other.to_string())),
    }
}
