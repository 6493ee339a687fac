pub mod align;
pub mod cleaner;
pub mod http_client;
pub mod parsers;

use crate::config::{ExtractionConfig, ScraperConfig};
use crate::error::ExtractError;
use crate::models::{LotteryId, LotteryReport, RawFragment, ResultSet};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use scraper::Html;
use std::num::NonZeroUsize;
use tracing::{debug, info, warn};
use url::Url;

use self::align::align_draws;
use self::cleaner::build_record;
use self::http_client::HttpClient;
use self::parsers::{FragmentGroups, Markers, extract_fragments};

// ── Core extraction ───────────────────────────────────────────────────────────

/// Align the groups and build one record per complete draw, in title order.
///
/// Draws without a full number slice are skipped. A malformed number token
/// fails the whole call.
pub fn extract_draw_results<F: RawFragment>(
    groups: &FragmentGroups<F>,
    per_draw: NonZeroUsize,
) -> Result<ResultSet, ExtractError> {
    let draws = align_draws(
        &groups.titles,
        &groups.dates,
        &groups.strong_numbers,
        &groups.numbers,
        per_draw,
    );

    let mut results = ResultSet::new();
    for draw in &draws {
        if let Some(record) = build_record(draw)? {
            results.push(record);
        }
    }

    if results.len() < draws.len() {
        warn!("{} of {} draws skipped (missing numbers)", draws.len() - results.len(), draws.len());
    }
    Ok(results)
}

/// Compiled extraction settings for a results page.
#[derive(Debug, Clone)]
pub struct DrawExtractor {
    markers: Markers,
    per_draw: NonZeroUsize,
}

impl DrawExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self, ExtractError> {
        Ok(Self {
            markers: Markers::from_config(config)?,
            per_draw: NonZeroUsize::new(config.numbers_per_draw).ok_or(ExtractError::ZeroDrawSize)?,
        })
    }

    /// Turn a parsed results page into draw records.
    pub fn extract(&self, doc: &Html) -> Result<ResultSet, ExtractError> {
        let groups = extract_fragments(doc, &self.markers);
        debug!(
            "Fragments: {} titles, {} dates, {} numbers, {} strong",
            groups.titles.len(),
            groups.dates.len(),
            groups.numbers.len(),
            groups.strong_numbers.len()
        );
        extract_draw_results(&groups, self.per_draw)
    }

    /// Parse `html` and extract from it.
    pub fn extract_html(&self, html: &str) -> Result<ResultSet, ExtractError> {
        let doc = Html::parse_document(html);
        self.extract(&doc)
    }
}

// ── Source trait ──────────────────────────────────────────────────────────────

/// Swappable results source.
#[async_trait]
pub trait ResultsSource: Send + Sync {
    async fn fetch_draws(&self, id: LotteryId) -> Result<LotteryReport>;
}

// ── Pais scraper ──────────────────────────────────────────────────────────────

pub struct PaisScraper {
    client: HttpClient,
    base_url: Url,
    extractor: DrawExtractor,
}

impl PaisScraper {
    pub fn new(scraper: &ScraperConfig, extraction: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(scraper)?,
            base_url: Url::parse(&scraper.base_url)
                .with_context(|| format!("Invalid base_url {:?}", scraper.base_url))?,
            extractor: DrawExtractor::new(extraction).context("Invalid extraction config")?,
        })
    }

    /// URL of the results page for `id`. e.g. 3650 → currentlotto.aspx?lotteryId=3650
    pub fn lottery_url(&self, id: LotteryId) -> Url {
        lottery_url(&self.base_url, id)
    }
}

fn lottery_url(base: &Url, id: LotteryId) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("lotteryId", &id.to_string());
    url
}

#[async_trait]
impl ResultsSource for PaisScraper {
    async fn fetch_draws(&self, id: LotteryId) -> Result<LotteryReport> {
        let url = self.lottery_url(id);
        info!("Fetching lottery {} ({})", id, url);

        let html = self.client.get_text(url.as_str()).await
            .with_context(|| format!("Failed to fetch lottery {}", id))?;

        let draws = self.extractor.extract_html(&html)
            .with_context(|| format!("Failed to extract draws for lottery {}", id))?;

        if draws.is_empty() {
            warn!("Lottery {}: no draws found on page", id);
        }

        Ok(LotteryReport {
            lottery_id: Some(id),
            source: url.into(),
            fetched_at: Utc::now().naive_utc(),
            draws,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
