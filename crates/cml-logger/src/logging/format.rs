//! Line formatting
//!
//! Every line has the shape `[<timestamp>] [<LEVEL>] <message>`, where the
//! timestamp is UTC with millisecond precision and a `Z` suffix
//! (`2024-03-11T08:15:30.123Z`).

use chrono::{DateTime, SecondsFormat, Utc};

use crate::types::LogLevel;

/// Render a timestamp the way it appears in log lines
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format a line (without trailing newline) for a given instant
pub fn format_line_at(at: DateTime<Utc>, level: LogLevel, message: &str) -> String {
    format!("[{}] [{}] {}", format_timestamp(at), level, message)
}

/// Format a line (without trailing newline) stamped with the current time
pub fn format_line(level: LogLevel, message: &str) -> String {
    format_line_at(Utc::now(), level, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_line_at() {
        let at = Utc.with_ymd_and_hms(2024, 3, 11, 8, 15, 30).unwrap()
            + chrono::Duration::milliseconds(123);
        assert_eq!(
            format_line_at(at, LogLevel::Info, "Server started"),
            "[2024-03-11T08:15:30.123Z] [INFO] Server started"
        );
    }

    #[test]
    fn test_timestamp_keeps_zero_millis() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(at), "2024-01-02T03:04:05.000Z");
    }

    #[test]
    fn test_format_line_now() {
        let line = format_line(LogLevel::Error, "disk full");
        assert!(line.starts_with('['));
        assert!(line.ends_with("] [ERROR] disk full"));

        let stamp = &line[1..25];
        assert_eq!(stamp.len(), 24);
        assert!(stamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn test_message_kept_verbatim() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let line = format_line_at(at, LogLevel::Debug, "  spaced [brackets] {}  ");
        assert!(line.ends_with("[DEBUG]   spaced [brackets] {}  "));
    }
}
