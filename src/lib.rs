//! Split date/time accessors over a single canonical timestamp field.
//!
//! One [`types::field::SplitField`] serves one date-time attribute of a host
//! object and lets it be read and written through derived sub-views:
//! * the full value (a `chrono::NaiveDateTime`),
//! * a date-only view truncated to `chrono::NaiveDate`,
//! * raw date and time fragment views backed by the exact strings a caller
//!   supplied, valid or not,
//! * hour and minute views that edit one component in place.
//!
//! Writes to the fragment views are reconciled by `core::merge` into one
//! canonical value; a write that does not parse leaves the canonical value
//! untouched. Reads of a fragment view return the raw string when one exists
//! and otherwise fall back to formatting the canonical value through the
//! configured pattern.
//!
//! ## Modules
//! * [`types`] – configuration, fragments, setter inputs, errors and the
//!   [`types::field::SplitField`] / [`types::field::FieldSet`] surface.
//! * `core` – the parse and merge operations behind the accessors.
//!
//! ## Quick start
//! ```
//! use chrono::{NaiveDate, NaiveDateTime};
//! use time_splitter::types::field::SplitField;
//!
//! let mut starts_at = SplitField::default();
//! starts_at.set_date(Some("01/01/1970".into()));
//! starts_at.set_time(Some("09:54".into()));
//!
//! let expected: NaiveDateTime = NaiveDate::from_ymd_opt(1970, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 54, 0)
//!     .unwrap();
//! assert_eq!(starts_at.value(), Some(expected));
//! ```

pub mod core;
pub mod types;
