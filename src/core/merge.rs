use chrono::{NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::core::parse;
use crate::types::config::SplitConfig;
use crate::types::errors::SplitError;
use crate::types::fragment::Fragments;

/// Outcome of one merge attempt against the stored fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Merge {
    /// The fragments parsed; the canonical value is replaced.
    Set(NaiveDateTime),
    /// A time fragment with no date fragment to anchor it; the canonical
    /// value is cleared.
    Clear,
    /// The fragments did not parse; the canonical value is left untouched.
    Keep,
}

/// Reconciles the stored fragments into a single canonical candidate.
///
/// A lone date fragment is enough to produce a value (midnight is implied);
/// a lone time fragment is not. The transition is all-or-nothing: only a
/// fully parsed result may replace the canonical value, so a failed attempt
/// never leaves a partial state behind.
pub(crate) fn resolve(fragments: &Fragments, config: &SplitConfig) -> Merge {
    let attempt: Result<NaiveDateTime, SplitError> =
        match (fragments.date.as_deref(), fragments.time.as_deref()) {
            (Some(date), Some(time)) => {
                let text: String = format!("{date} {time}");
                parse::date_time(&text, &config.combined_format())
            }
            (Some(date), None) => {
                parse::date(date, &config.date_format).map(|d| d.and_time(NaiveTime::MIN))
            }
            (None, Some(time)) => Err(SplitError::MissingAnchor {
                text: time.to_string(),
            }),
            (None, None) => return Merge::Keep,
        };

    match attempt {
        Ok(value) => Merge::Set(value),
        Err(SplitError::MissingAnchor { text }) => {
            debug!(time = %text, "time fragment with no date anchor, clearing value");
            Merge::Clear
        }
        Err(err) => {
            debug!(%err, "fragments left unmerged");
            Merge::Keep
        }
    }
}
