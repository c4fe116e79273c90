//! Duration codec for the `<int>h<int>m` wire format.

use super::DurationFormatError;
use serde::{Deserialize, Serialize};

/// Non-negative task duration stored as a millisecond count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct TaskDuration(i64);

const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_MINUTE: i64 = 60_000;

impl TaskDuration {
    /// Wraps a raw millisecond count, clamping negative input to zero.
    ///
    /// Persistence rows are the only source of raw counts; a corrupt
    /// negative value must not leak a signed duration into formatting.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        if millis < 0 {
            Self(0)
        } else {
            Self(millis)
        }
    }

    /// Returns the millisecond count.
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Parses a duration from the `<int>h<int>m` wire format.
    ///
    /// The input must match the pattern exactly: a run of digits, `h`, a run
    /// of digits, `m`, with nothing before or after. The value is
    /// `(hours * 60 + minutes) * 60 * 1000` milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`DurationFormatError`] when the input does not match the
    /// pattern, a component is not numeric, or the computation overflows.
    pub fn parse(input: &str) -> Result<Self, DurationFormatError> {
        let malformed = || DurationFormatError(input.to_owned());

        let body = input.strip_suffix('m').ok_or_else(malformed)?;
        let (hours_text, minutes_text) = body.split_once('h').ok_or_else(malformed)?;
        let hours = parse_component(hours_text).ok_or_else(malformed)?;
        let minutes = parse_component(minutes_text).ok_or_else(malformed)?;

        hours
            .checked_mul(60)
            .and_then(|total| total.checked_add(minutes))
            .and_then(|total| total.checked_mul(MILLIS_PER_MINUTE))
            .map(Self)
            .ok_or_else(malformed)
    }

    /// Formats the duration as `"<hours> hours <minutes> minutes"`.
    ///
    /// Hours and minutes are obtained by integer division; any remaining
    /// seconds are truncated. No zero padding is applied.
    #[must_use]
    pub fn format_hours_minutes(self) -> String {
        let hours = self.0.div_euclid(MILLIS_PER_HOUR);
        let minutes = self.0.rem_euclid(MILLIS_PER_HOUR).div_euclid(MILLIS_PER_MINUTE);
        format!("{hours} hours {minutes} minutes")
    }

    /// Adds another duration, saturating at the numeric bound.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

/// Parses one digit run of the wire format, rejecting empty or signed input.
fn parse_component(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    text.parse::<i64>().ok()
}
