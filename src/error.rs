use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced by the draft core and the leave API clients.
///
/// None of these are fatal: the draft stays consistent and correctable
/// after every variant, and the caller decides whether to re-prompt,
/// fix the dates, or resubmit.
#[derive(Debug, Error)]
pub enum PermisoError {
    /// End date precedes start date. Derived duration fields are reset
    /// to zero and the caller shows this as a warning.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Draft is incomplete or holds a value outside the allowed set.
    /// Raised before any network call is made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The API never responded (connect/timeout/transport failure).
    #[error("no response from leave API: {0}")]
    Network(#[from] reqwest::Error),

    /// The API responded with a non-success status. The message is the
    /// server's own wording where it sent one.
    #[error("leave API rejected the request (status {status}): {message}")]
    Submission { status: u16, message: String },
}

impl PermisoError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
