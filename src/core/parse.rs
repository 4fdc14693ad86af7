use chrono::format::ParseErrorKind;
use chrono::{NaiveDate, NaiveDateTime};

use crate::types::errors::SplitError;

/// Parses `text` against a combined date+time `format`.
///
/// The whole text must match the pattern's token layout and resolve to a
/// real calendar date and time-of-day; anything else is an error value,
/// never a panic.
pub fn date_time(text: &str, format: &str) -> Result<NaiveDateTime, SplitError> {
    NaiveDateTime::parse_from_str(text, format).map_err(|err| classify(err, text, format))
}

/// Parses `text` against a date-only `format`.
pub fn date(text: &str, format: &str) -> Result<NaiveDate, SplitError> {
    NaiveDate::parse_from_str(text, format).map_err(|err| classify(err, text, format))
}

/// Renders `value` back to text; the inverse of the parse operations.
///
/// Always succeeds for a valid timestamp and a well-formed pattern.
pub fn format(value: NaiveDateTime, format: &str) -> String {
    value.format(format).to_string()
}

// Structure mismatches and impossible calendar values are absorbed the same
// way downstream, but the distinction matters for diagnostics.
fn classify(err: chrono::ParseError, text: &str, format: &str) -> SplitError {
    match err.kind() {
        ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => {
            SplitError::InvalidCalendarValue {
                text: text.to_string(),
            }
        }
        _ => SplitError::InvalidFormat {
            text: text.to_string(),
            format: format.to_string(),
        },
    }
}
