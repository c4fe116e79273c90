//! Uniform result envelope returned by every operation.

use crate::domain::ValidationError;
use serde::Serialize;

/// Success code carried in the envelope.
const CODE_SUCCESS: u8 = 0;
/// Failure code carried in the envelope.
const CODE_FAILURE: u8 = 1;

/// Outcome wrapper for every service operation.
///
/// Callers must inspect `code` to detect failure; business-rule failures are
/// reported here, not through the transport status. `validation_errors`
/// holds every accumulated error message for a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    /// `0` on success, `1` on failure.
    pub code: u8,
    /// Human-readable outcome message.
    pub data: String,
    /// Accumulated error messages, empty on success.
    pub validation_errors: Vec<String>,
}

impl Envelope {
    /// Creates a success envelope.
    #[must_use]
    pub fn success(data: impl Into<String>) -> Self {
        Self {
            code: CODE_SUCCESS,
            data: data.into(),
            validation_errors: Vec::new(),
        }
    }

    /// Creates a failure envelope carrying the accumulated errors.
    #[must_use]
    pub fn failure(data: impl Into<String>, errors: &[ValidationError]) -> Self {
        Self {
            code: CODE_FAILURE,
            data: data.into(),
            validation_errors: errors.iter().map(ToString::to_string).collect(),
        }
    }

    /// Returns whether the operation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }
}
