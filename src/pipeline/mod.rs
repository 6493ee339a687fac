//! Pipeline orchestrator: fetches several lotteries through a
//! [`ResultsSource`] and collects their reports.
//!
//! Each lottery runs in its own task, bounded by `pipeline.concurrency`.
//! A failed lottery is logged and counted; the others still complete.
//! Reports come back in the order the ids were given.

use crate::config::AppConfig;
use crate::models::{LotteryId, LotteryReport};
use crate::scraper::{PaisScraper, ResultsSource};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

pub struct Pipeline {
    source: Arc<dyn ResultsSource>,
    concurrency: usize,
}

impl Pipeline {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let scraper = PaisScraper::new(&config.scraper, &config.extraction)
            .context("Failed to build scraper")?;
        Ok(Self::with_source(Arc::new(scraper), config.pipeline.concurrency))
    }

    pub fn with_source(source: Arc<dyn ResultsSource>, concurrency: usize) -> Self {
        Self {
            source,
            concurrency: concurrency.clamp(1, Semaphore::MAX_PERMITS),
        }
    }

    pub async fn run(&self, ids: &[LotteryId]) -> Result<PipelineRun> {
        info!("=== Fetching {} lotteries ===", ids.len());

        let sem = Arc::new(Semaphore::new(self.concurrency));
        let mut handles = Vec::new();

        for &id in ids {
            let source = Arc::clone(&self.source);
            let sem = Arc::clone(&sem);

            let handle = tokio::spawn(async move {
                let _permit = sem.acquire().await?;

                let report = source.fetch_draws(id).await
                    .with_context(|| format!("fetch_draws({})", id))?;

                info!("{}: {} draws", id, report.draws.len());

                Ok::<LotteryReport, anyhow::Error>(report)
            });

            handles.push((id, handle));
        }

        let mut reports = Vec::new();
        let mut errors = 0usize;

        for (id, handle) in handles {
            match handle.await {
                Ok(Ok(report)) => reports.push(report),
                Ok(Err(e)) => { warn!("{}: {:#}", id, e); errors += 1; }
                Err(e) => { error!("Task panic for {}: {}", id, e); errors += 1; }
            }
        }

        let stats = PipelineStats {
            lotteries_processed: ids.len(),
            draws_extracted: reports.iter().map(|r| r.draws.len()).sum(),
            errors,
        };

        info!("=== Done: {} lotteries | {} draws | {} errors ===",
            stats.lotteries_processed, stats.draws_extracted, stats.errors,
        );

        Ok(PipelineRun { reports, stats })
    }
}

#[derive(Debug)]
pub struct PipelineRun {
    pub reports: Vec<LotteryReport>,
    pub stats: PipelineStats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStats {
    pub lotteries_processed: usize,
    pub draws_extracted: usize,
    pub errors: usize,
}
