use crate::error::{ExtractError, NumberFormatError};
use crate::models::{DrawRecord, RawFragment};
use crate::scraper::align::AlignedDraw;
use std::cmp::Reverse;
use tracing::debug;

// ── Text ──────────────────────────────────────────────────────────────────────

/// Trim, then fold every run of line breaks into one space.
/// "  Lotto\n  Draw 12 \n" → "Lotto   Draw 12"
pub fn normalize_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_break = false;
    for ch in s.trim().chars() {
        if ch == '\n' || ch == '\r' {
            if !in_break {
                out.push(' ');
                in_break = true;
            }
        } else {
            out.push(ch);
            in_break = false;
        }
    }
    out
}

// ── Numbers ───────────────────────────────────────────────────────────────────

/// Order number tokens by descending integer value. Ties keep page order.
pub fn sort_numbers_desc<F: RawFragment>(tokens: &[F]) -> Result<Vec<String>, NumberFormatError> {
    let mut parsed = tokens
        .iter()
        .map(|token| {
            let text = normalize_text(&token.text_content());
            match text.parse::<i64>() {
                Ok(value) => Ok((value, text)),
                Err(source) => Err(NumberFormatError { token: text, source }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    // sort_by_key is stable
    parsed.sort_by_key(|(value, _)| Reverse(*value));
    Ok(parsed.into_iter().map(|(_, text)| text).collect())
}

// ── Draw → record ─────────────────────────────────────────────────────────────

/// Build the record for one aligned draw.
///
/// `Ok(None)` means the draw had no number slice and is skipped.
pub fn build_record<F: RawFragment>(draw: &AlignedDraw<'_, F>) -> Result<Option<DrawRecord>, ExtractError> {
    let Some(numbers) = draw.numbers else {
        debug!("Draw {}: no number tokens left, skipping", draw.index);
        return Ok(None);
    };

    let numbers = sort_numbers_desc(numbers).map_err(|source| ExtractError::Format {
        draw: draw.index,
        source,
    })?;

    Ok(Some(DrawRecord {
        title: normalize_text(&draw.title.text_content()),
        date: normalize_text(&draw.date.text_content()),
        numbers,
        strong_number: normalize_text(&draw.strong_number.text_content()),
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
