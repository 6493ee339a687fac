//! Lottery results scraper: turns a results page into structured draw records.

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod scraper;
pub mod utils;

pub use crate::error::{ExtractError, NumberFormatError};
pub use crate::models::{DrawRecord, LotteryId, LotteryReport, RawFragment, ResultSet};
pub use crate::scraper::{DrawExtractor, extract_draw_results};
