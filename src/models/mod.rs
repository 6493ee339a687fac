use chrono::NaiveDateTime;
use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Fragments ─────────────────────────────────────────────────────────────────

/// A located piece of markup the pipeline can read text from.
pub trait RawFragment {
    fn text_content(&self) -> String;
}

impl RawFragment for ElementRef<'_> {
    fn text_content(&self) -> String {
        self.text().collect()
    }
}

impl RawFragment for &str {
    fn text_content(&self) -> String {
        (*self).to_string()
    }
}

impl RawFragment for String {
    fn text_content(&self) -> String {
        self.clone()
    }
}

// ── Draw record ───────────────────────────────────────────────────────────────

/// One normalized lottery draw.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DrawRecord {
    pub title: String,
    pub date: String,
    /// Descending by integer value.
    pub numbers: Vec<String>,
    pub strong_number: String,
}

// ── Result set ────────────────────────────────────────────────────────────────

/// Draw records in document order of their titles.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ResultSet(Vec<DrawRecord>);

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: DrawRecord) {
        self.0.push(record);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawRecord> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<DrawRecord> {
        self.0
    }
}

impl IntoIterator for ResultSet {
    type Item = DrawRecord;
    type IntoIter = std::vec::IntoIter<DrawRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a DrawRecord;
    type IntoIter = std::slice::Iter<'a, DrawRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<DrawRecord>> for ResultSet {
    fn from(records: Vec<DrawRecord>) -> Self {
        Self(records)
    }
}

// ── Lottery id ────────────────────────────────────────────────────────────────

/// Positive numeric lottery identifier, as used in `?lotteryId=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub struct LotteryId(u32);

impl LotteryId {
    pub fn new(id: u32) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for LotteryId {
    type Error = String;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::new(id).ok_or_else(|| "lottery id must be greater than zero".to_string())
    }
}

impl From<LotteryId> for u32 {
    fn from(id: LotteryId) -> Self {
        id.0
    }
}

impl fmt::Display for LotteryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for LotteryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("lottery id must be a positive number, got {:?}", s));
        }
        let id: u32 = s.parse().map_err(|e| format!("lottery id {:?}: {}", s, e))?;
        Self::try_from(id)
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// Draws extracted from one page, with where and when they came from.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LotteryReport {
    pub lottery_id: Option<LotteryId>,
    pub source: String,     // URL or local file path
    pub fetched_at: NaiveDateTime,
    pub draws: ResultSet,
}
