//! Pairs the independently-located fragment groups into per-draw tuples.
//!
//! Titles, dates and strong numbers line up one-to-one, truncated to the
//! shortest group. Number tokens live in one flat group for the whole page,
//! so each draw takes the next `per_draw` tokens through a [`NumberCursor`].

use std::num::NonZeroUsize;
use tracing::{debug, warn};

/// Fragments belonging to a single draw.
#[derive(Debug)]
pub struct AlignedDraw<'g, F> {
    /// Position of the draw on the page, from 0.
    pub index: usize,
    pub title: &'g F,
    pub date: &'g F,
    pub strong_number: &'g F,
    /// `None` when the page ran out of number tokens before this draw.
    pub numbers: Option<&'g [F]>,
}

/// Read-only cursor over the page-wide number tokens.
///
/// Hands out consecutive, non-overlapping slices and never mutates the
/// underlying group.
#[derive(Debug)]
pub struct NumberCursor<'g, F> {
    tokens: &'g [F],
    pos: usize,
}

impl<'g, F> NumberCursor<'g, F> {
    pub fn new(tokens: &'g [F]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Take the next `n` tokens, or nothing if fewer than `n` remain.
    pub fn take(&mut self, n: NonZeroUsize) -> Option<&'g [F]> {
        let end = self.pos.checked_add(n.get())?;
        let slice = self.tokens.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }
}

/// Align the four groups into draws, in title order.
pub fn align_draws<'g, F>(
    titles: &'g [F],
    dates: &'g [F],
    strong_numbers: &'g [F],
    numbers: &'g [F],
    per_draw: NonZeroUsize,
) -> Vec<AlignedDraw<'g, F>> {
    let draw_count = titles.len().min(dates.len()).min(strong_numbers.len());
    if draw_count < titles.len().max(dates.len()).max(strong_numbers.len()) {
        debug!(
            "Uneven draw groups (titles={}, dates={}, strong={}); using first {}",
            titles.len(),
            dates.len(),
            strong_numbers.len(),
            draw_count
        );
    }

    let mut cursor = NumberCursor::new(numbers);
    let draws: Vec<_> = titles
        .iter()
        .zip(dates)
        .zip(strong_numbers)
        .enumerate()
        .map(|(index, ((title, date), strong_number))| AlignedDraw {
            index,
            title,
            date,
            strong_number,
            numbers: cursor.take(per_draw),
        })
        .collect();

    match draw_count.checked_mul(per_draw.get()) {
        Some(expected) if expected == numbers.len() => {}
        Some(expected) => warn!(
            "Expected {} number tokens for {} draws of {}, found {} ({} unused)",
            expected,
            draw_count,
            per_draw,
            numbers.len(),
            cursor.remaining()
        ),
        None => warn!(
            "{} draws of {} numbers is more tokens than any page holds, found {}",
            draw_count,
            per_draw,
            numbers.len()
        ),
    }

    draws
}
