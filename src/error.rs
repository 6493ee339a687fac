use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised while turning a results page into draw records.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid {marker} selector {selector:?}: {reason}")]
    InvalidSelector {
        marker: &'static str,
        selector: String,
        reason: String,
    },

    #[error("numbers_per_draw must be at least 1")]
    ZeroDrawSize,

    #[error("draw {draw}: malformed number token")]
    Format {
        draw: usize,
        #[source]
        source: NumberFormatError,
    },
}

/// A number token whose trimmed text is not a base-10 integer.
#[derive(Debug, Error)]
#[error("number token {token:?} is not an integer")]
pub struct NumberFormatError {
    pub token: String,
    #[source]
    pub source: ParseIntError,
}
