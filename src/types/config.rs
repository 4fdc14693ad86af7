use chrono::{NaiveDateTime, Utc};

/// Date pattern used when none is configured.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";
/// Time pattern used when none is configured.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Per-attribute format configuration, fixed at registration time.
///
/// The patterns are chrono `strftime` strings used both to parse raw
/// fragment text and to render the canonical value back to text. The
/// combined pattern is the date pattern, a single space, then the time
/// pattern.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Pattern for the date fragment.
    pub date_format: String,
    /// Pattern for the time fragment.
    pub time_format: String,
    /// Seeds hour/minute edits when no canonical value exists yet.
    pub default_value: fn() -> NaiveDateTime,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            default_value: now,
        }
    }
}

impl SplitConfig {
    /// Pattern matching a full `"date time"` string.
    pub fn combined_format(&self) -> String {
        format!("{} {}", self.date_format, self.time_format)
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: SplitConfig = SplitConfig::default();
        assert_eq!(config.date_format, "%d/%m/%Y");
        assert_eq!(config.time_format, "%H:%M");
    }

    #[test]
    fn test_combined_format() {
        let config = SplitConfig {
            date_format: "%Y-%m-%d".into(),
            ..SplitConfig::default()
        };
        assert_eq!(config.combined_format(), "%Y-%m-%d %H:%M");
    }
}
