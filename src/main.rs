use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use lotto_results::config::AppConfig;
use lotto_results::export::{self, OutputFormat};
use lotto_results::pipeline::Pipeline;
use lotto_results::utils::RunTimer;
use lotto_results::{DrawExtractor, LotteryId, LotteryReport};

#[derive(Parser)]
#[command(name = "lotto-results", about = "Lottery results scraper", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and extract draws for one or more lottery ids
    Fetch {
        /// Numeric lottery ids, e.g. 3650
        #[arg(required = true)]
        ids: Vec<LotteryId>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract draws from a saved results page
    Parse {
        file: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {:?}", path))?,
        )),
        None => Box::new(io::stdout().lock()),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "lotto_results=info,warn",
        1 => "lotto_results=debug,info",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
        .with(EnvFilter::new(filter))
        .init();

    let config = AppConfig::load()?;

    match cli.command {
        Command::Fetch { ids, format, output } => {
            let mut timer = RunTimer::start("fetch");
            let run = Pipeline::new(&config)?.run(&ids).await?;
            for report in &run.reports {
                timer.record(report.draws.len());
            }

            let mut out = open_output(output.as_deref())?;
            export::write_reports(&mut out, format, &run.reports)?;
            out.flush()?;

            if run.stats.errors > 0 {
                bail!("{} of {} lotteries failed", run.stats.errors, run.stats.lotteries_processed);
            }
        }

        Command::Parse { file, format, output } => {
            let mut timer = RunTimer::start("parse");
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {:?}", file))?;

            let extractor = DrawExtractor::new(&config.extraction)?;
            let draws = extractor.extract_html(&html)
                .with_context(|| format!("Failed to extract draws from {:?}", file))?;
            info!("{}: {} draws", file.display(), draws.len());
            timer.record(draws.len());

            let mut out = open_output(output.as_deref())?;
            match format {
                OutputFormat::Json => export::write_json(&mut out, &draws)?,
                _ => {
                    let report = LotteryReport {
                        lottery_id: None,
                        source: file.display().to_string(),
                        fetched_at: Utc::now().naive_utc(),
                        draws,
                    };
                    export::write_reports(&mut out, format, &[report])?;
                }
            }
            out.flush()?;
        }
    }

    Ok(())
}
