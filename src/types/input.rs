use chrono::{NaiveDate, NaiveDateTime};

/// One setter argument: raw text or an already structured value.
///
/// Raw text is kept verbatim by the fragment store, whether or not it
/// matches the configured pattern. Structured values are trusted and are
/// normalized to text through the pattern at the moment they are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Pattern-formatted (or arbitrary) text.
    Text(String),
    /// A structured date with no time-of-day.
    Date(NaiveDate),
    /// A structured date and time.
    DateTime(NaiveDateTime),
}

impl From<&str> for FieldInput {
    fn from(text: &str) -> Self {
        FieldInput::Text(text.to_string())
    }
}
impl From<String> for FieldInput {
    fn from(text: String) -> Self {
        FieldInput::Text(text)
    }
}
impl From<NaiveDate> for FieldInput {
    fn from(date: NaiveDate) -> Self {
        FieldInput::Date(date)
    }
}
impl From<NaiveDateTime> for FieldInput {
    fn from(value: NaiveDateTime) -> Self {
        FieldInput::DateTime(value)
    }
}

impl std::fmt::Display for FieldInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldInput::Text(text) => f.write_str(text),
            FieldInput::Date(date) => write!(f, "{date}"),
            FieldInput::DateTime(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(FieldInput::from("09:54"), FieldInput::Text("09:54".into()));

        let date: NaiveDate = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(FieldInput::from(date), FieldInput::Date(date));

        let value: NaiveDateTime = date.and_hms_opt(9, 54, 0).unwrap();
        assert_eq!(FieldInput::from(value), FieldInput::DateTime(value));
    }

    #[test]
    fn test_display_shows_raw_text() {
        let input: FieldInput = "55:55".into();
        assert_eq!(input.to_string(), "55:55");
    }
}
