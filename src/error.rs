//! Controller error type

use thiserror::Error;

/// Errors surfaced by the timer controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// Start input was blank, not a number, not positive, or too large
    #[error("invalid duration input: {input:?}")]
    InvalidInput { input: String },
}

/// Parse the text of the input field into whole seconds.
///
/// Surrounding whitespace is ignored. The value must be a positive integer
/// whose millisecond equivalent fits in a `u64`.
pub fn parse_duration_seconds(input: &str) -> Result<u64, TimerError> {
    let invalid = || TimerError::InvalidInput {
        input: input.to_string(),
    };

    let seconds: i64 = input.trim().parse().map_err(|_| invalid())?;
    if seconds <= 0 {
        return Err(invalid());
    }
    let seconds = seconds as u64;
    seconds.checked_mul(1000).ok_or_else(invalid)?;
    Ok(seconds)
}
