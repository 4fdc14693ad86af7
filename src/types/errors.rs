use thiserror::Error;

/// Errors produced while reconciling fragment text into a timestamp.
///
/// None of these escape the accessor surface: the merge step turns every
/// variant into a no-op (or a clear, for `MissingAnchor`) on the canonical
/// value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("'{text}' does not match format '{format}'")]
    InvalidFormat { text: String, format: String },
    #[error("Not a real calendar date or time: {text}")]
    InvalidCalendarValue { text: String },
    #[error("No date fragment to anchor time '{text}'")]
    MissingAnchor { text: String },
}
