use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::trace;

use crate::core::merge::{self, Merge};
use crate::core::parse;
use crate::types::config::SplitConfig;
use crate::types::fragment::Fragments;
use crate::types::input::FieldInput;

/// Split date/time accessors over one canonical timestamp.
///
/// A `SplitField` stands in for a single date-time attribute of a host
/// object. The canonical value is the only source of truth; the date and
/// time sub-views write raw fragments that are merged back into it, and read
/// either their stored raw string or the canonical value rendered through
/// the configured pattern.
///
/// Bad input never surfaces as an error from these methods: a write that
/// does not parse is absorbed and the canonical value stays exactly as it
/// was. Callers that need to detect an unmerged fragment can compare the
/// fragment reader against the formatted canonical value.
#[derive(Debug, Clone, Default)]
pub struct SplitField {
    config: SplitConfig,
    fragments: Fragments,
    value: Option<NaiveDateTime>,
}

impl SplitField {
    pub fn new(config: SplitConfig) -> Self {
        Self {
            config,
            fragments: Fragments::default(),
            value: None,
        }
    }

    /// The format configuration this field was registered with.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// The canonical value.
    pub fn value(&self) -> Option<NaiveDateTime> {
        self.value
    }

    /// Replaces the canonical value unconditionally.
    ///
    /// Structured writers are trusted: nothing is parsed and stored
    /// fragments are not touched, so fragment readers keep returning their
    /// raw strings until those are overwritten or cleared.
    pub fn set_value(&mut self, value: Option<NaiveDateTime>) {
        self.value = value;
    }

    /// The canonical value truncated to its date part.
    pub fn on(&self) -> Option<NaiveDate> {
        self.value.map(|value| value.date())
    }

    /// Sets the canonical value to a date at midnight.
    ///
    /// Accepts a structured date, a structured date-time (truncated), or a
    /// string matching the date pattern. Strings always go through the
    /// parser before the canonical value moves; input that does not parse is
    /// dropped. `None` changes nothing. Fragments are not touched.
    pub fn set_on(&mut self, input: Option<FieldInput>) {
        let Some(input) = input else { return };
        let date: NaiveDate = match input {
            FieldInput::Date(date) => date,
            FieldInput::DateTime(value) => value.date(),
            FieldInput::Text(text) => match parse::date(&text, &self.config.date_format) {
                Ok(date) => date,
                Err(err) => {
                    trace!(%err, "date view write dropped");
                    return;
                }
            },
        };
        self.value = Some(date.and_time(NaiveTime::MIN));
    }

    /// The raw date fragment when one was written; otherwise the canonical
    /// value rendered through the date pattern.
    pub fn date(&self) -> Option<String> {
        self.fragments
            .date
            .clone()
            .or_else(|| self.value.map(|value| parse::format(value, &self.config.date_format)))
    }

    /// Stores the raw date fragment and attempts a merge.
    ///
    /// A structured value is normalized to text through the date pattern
    /// right away; a string is kept verbatim whether or not it parses.
    /// `None` clears the fragment without touching the canonical value.
    pub fn set_date(&mut self, input: Option<FieldInput>) {
        let Some(input) = input else {
            self.fragments.date = None;
            return;
        };
        let raw: String = match input {
            FieldInput::Text(text) => text,
            FieldInput::Date(date) => {
                parse::format(date.and_time(NaiveTime::MIN), &self.config.date_format)
            }
            FieldInput::DateTime(value) => parse::format(value, &self.config.date_format),
        };
        self.fragments.date = Some(raw);
        self.merge();
    }

    /// The raw time fragment when one was written; otherwise the canonical
    /// value rendered through the time pattern.
    pub fn time(&self) -> Option<String> {
        self.fragments
            .time
            .clone()
            .or_else(|| self.value.map(|value| parse::format(value, &self.config.time_format)))
    }

    /// Stores the raw time fragment and attempts a merge.
    ///
    /// A full date-time refreshes the date fragment as well, since it
    /// carries both halves. A structured date has no time-of-day to offer
    /// and is dropped. A string is kept verbatim whether or not it parses.
    /// `None` clears the fragment without touching the canonical value.
    pub fn set_time(&mut self, input: Option<FieldInput>) {
        let Some(input) = input else {
            self.fragments.time = None;
            return;
        };
        let raw: String = match input {
            FieldInput::Text(text) => text,
            FieldInput::DateTime(value) => {
                self.fragments.date = Some(parse::format(value, &self.config.date_format));
                parse::format(value, &self.config.time_format)
            }
            FieldInput::Date(_) => return, // no time-of-day to take
        };
        self.fragments.time = Some(raw);
        self.merge();
    }

    /// The canonical value's hour.
    pub fn hour(&self) -> Option<u32> {
        self.value.map(|value| value.hour())
    }

    /// Overwrites only the hour of the canonical value.
    ///
    /// When no canonical value exists the configured default seeds it first.
    /// Out-of-range hours are dropped; `None` changes nothing.
    pub fn set_hour(&mut self, hour: Option<u32>) {
        let Some(hour) = hour else { return };
        let base: NaiveDateTime = self.value.unwrap_or_else(|| (self.config.default_value)());
        match base.with_hour(hour) {
            Some(value) => self.value = Some(value),
            None => trace!(hour, "hour view write dropped"),
        }
    }

    /// The canonical value's minute.
    pub fn min(&self) -> Option<u32> {
        self.value.map(|value| value.minute())
    }

    /// Overwrites only the minute of the canonical value.
    ///
    /// When no canonical value exists the configured default seeds it first.
    /// Out-of-range minutes are dropped; `None` changes nothing.
    pub fn set_min(&mut self, min: Option<u32>) {
        let Some(min) = min else { return };
        let base: NaiveDateTime = self.value.unwrap_or_else(|| (self.config.default_value)());
        match base.with_minute(min) {
            Some(value) => self.value = Some(value),
            None => trace!(min, "minute view write dropped"),
        }
    }

    /// Resets fragments and canonical value; the configuration stays.
    pub fn clear(&mut self) {
        self.fragments.clear();
        self.value = None;
    }

    // One merge attempt. The canonical value only moves on a fully parsed
    // result; a time fragment with nothing to anchor it clears the value.
    fn merge(&mut self) {
        match merge::resolve(&self.fragments, &self.config) {
            Merge::Set(value) => self.value = Some(value),
            Merge::Clear => self.value = None,
            Merge::Keep => {}
        }
    }
}

/// One `SplitField` per configured attribute name.
///
/// For hosts that keep their split fields in an external map rather than as
/// named struct fields.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    fields: HashMap<String, SplitField>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `attr` with its format configuration.
    ///
    /// Re-registering an attribute resets any previously stored state.
    pub fn register(&mut self, attr: &str, config: SplitConfig) {
        self.fields.insert(attr.to_string(), SplitField::new(config));
    }

    pub fn field(&self, attr: &str) -> Option<&SplitField> {
        self.fields.get(attr)
    }

    pub fn field_mut(&mut self, attr: &str) -> Option<&mut SplitField> {
        self.fields.get_mut(attr)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if any attribute is registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Drops every registered attribute.
    pub fn clear(&mut self) {
        *self = FieldSet::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn build_test_field() -> SplitField {
        let mut field: SplitField = SplitField::default();
        field.set_date(Some("25/12/1979".into()));
        field.set_time(Some("03:00".into()));
        field
    }

    #[test]
    fn test_clear() {
        let mut field: SplitField = build_test_field();
        assert!(field.value().is_some());

        field.clear();
        assert_eq!(field.value(), None);
        assert_eq!(field.date(), None);
        assert_eq!(field.time(), None);
    }

    #[test]
    fn test_merge_is_atomic() {
        let mut field: SplitField = build_test_field();
        let before: Option<NaiveDateTime> = field.value();

        // a rejected write may not leave a partial state behind
        field.set_date(Some("31/02/1980".into()));
        assert_eq!(field.value(), before);
        assert_eq!(field.on(), Some(NaiveDate::from_ymd_opt(1979, 12, 25).unwrap()));
    }
}
