use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Scraper configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScraperConfig {
    /// Results page; `lotteryId=<id>` is appended per request.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// CSS markers for the four fragment groups and the per-draw number count
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    #[serde(default = "default_title_selector")]
    pub title_selector: String,

    #[serde(default = "default_date_selector")]
    pub date_selector: String,

    #[serde(default = "default_number_selector")]
    pub number_selector: String,

    #[serde(default = "default_strong_number_selector")]
    pub strong_number_selector: String,

    #[serde(default = "default_numbers_per_draw")]
    pub numbers_per_draw: usize,
}

/// Pipeline configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

// ── Defaults ─────────────────────────────────────────────────────────────────

fn default_base_url() -> String {
    "https://pais.co.il/lotto/currentlotto.aspx".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    "lotto-results/0.1".to_string()
}
fn default_title_selector() -> String {
    ".archive_open_title.lotto".to_string()
}
fn default_date_selector() -> String {
    ".archive_open_dates.w-clearfix".to_string()
}
fn default_number_selector() -> String {
    // the strong number shares the loto_info_num class
    "li.loto_info_num:not(.strong)".to_string()
}
fn default_strong_number_selector() -> String {
    ".loto_info_num.strong".to_string()
}
fn default_numbers_per_draw() -> usize {
    6
}
fn default_concurrency() -> usize {
    3
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            title_selector: default_title_selector(),
            date_selector: default_date_selector(),
            number_selector: default_number_selector(),
            strong_number_selector: default_strong_number_selector(),
            numbers_per_draw: default_numbers_per_draw(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

// ── Loader ───────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration from file + environment overrides
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(
                config::File::with_name("config/default")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(
                config::File::with_name("config/local")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(
                config::Environment::with_prefix("LOTTO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        cfg.try_deserialize().context("Invalid configuration")
    }
}
