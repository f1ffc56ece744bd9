use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::config::TimestampConfig;
use crate::constants::timestamps::MAX_UTC_OFFSET_MINUTES;

/// Date-times without an offset are read as UTC.
const NAIVE_DATE_TIME_PATTERNS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("unparsable timestamp: {0:?}")]
    Unparsable(String),
    #[error("invalid timestamp pattern: {0:?}")]
    InvalidPattern(String),
    #[error("utc offset out of range: {0} minutes")]
    OffsetOutOfRange(i32),
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
    let value = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts);
    }
    for pattern in NAIVE_DATE_TIME_PATTERNS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, pattern) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
        .ok_or_else(|| TimestampError::Unparsable(raw.to_string()))
}

pub fn validate_pattern(pattern: &str) -> Result<(), TimestampError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(TimestampError::InvalidPattern(pattern.to_string()));
    }
    Ok(())
}

pub fn display_offset(minutes: i32) -> Result<FixedOffset, TimestampError> {
    if minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES.unsigned_abs() {
        return Err(TimestampError::OffsetOutOfRange(minutes));
    }
    FixedOffset::east_opt(minutes * 60).ok_or(TimestampError::OffsetOutOfRange(minutes))
}

pub fn render_timestamp(
    ts: &DateTime<FixedOffset>,
    config: &TimestampConfig,
) -> Result<String, TimestampError> {
    validate_pattern(&config.pattern)?;
    let offset = display_offset(config.utc_offset_minutes)?;
    let items: Vec<Item<'_>> = StrftimeItems::new(&config.pattern).collect();
    Ok(ts
        .with_timezone(&offset)
        .format_with_items(items.iter())
        .to_string())
}

/// Formats `raw` for display. Anything that cannot be parsed or rendered
/// comes back unchanged.
pub fn format_timestamp(raw: &str, config: &TimestampConfig) -> String {
    match parse_timestamp(raw).and_then(|ts| render_timestamp(&ts, config)) {
        Ok(formatted) => formatted,
        Err(err) => {
            tracing::debug!(event = "timestamp_fallback", raw = %raw, error = %err);
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> TimestampConfig {
        TimestampConfig::default()
    }

    #[test]
    fn formats_rfc3339_in_utc() {
        assert_eq!(
            format_timestamp("2024-03-05T14:07:00Z", &utc()),
            "05/03/2024 14:07"
        );
        assert_eq!(
            format_timestamp("2024-03-05T14:07:00.123+02:00", &utc()),
            "05/03/2024 12:07"
        );
    }

    #[test]
    fn accepts_naive_and_date_only_inputs() {
        assert_eq!(
            format_timestamp("2024-03-05T14:07:59", &utc()),
            "05/03/2024 14:07"
        );
        assert_eq!(
            format_timestamp("2024-03-05 14:07", &utc()),
            "05/03/2024 14:07"
        );
        assert_eq!(format_timestamp("2024-03-05", &utc()), "05/03/2024 00:00");
    }

    #[test]
    fn applies_display_offset() {
        let config = TimestampConfig {
            utc_offset_minutes: -5 * 60,
            ..TimestampConfig::default()
        };
        assert_eq!(
            format_timestamp("2024-03-05T02:30:00Z", &config),
            "04/03/2024 21:30"
        );
    }

    #[test]
    fn unparsable_input_is_returned_raw() {
        assert_eq!(format_timestamp("not a date", &utc()), "not a date");
        assert_eq!(format_timestamp("2024-13-45", &utc()), "2024-13-45");
        assert_eq!(format_timestamp("", &utc()), "");
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(TimestampError::Unparsable(_))
        ));
    }

    #[test]
    fn bad_config_falls_back_to_raw() {
        let bad_pattern = TimestampConfig {
            pattern: "%Q %d".to_string(),
            ..TimestampConfig::default()
        };
        assert_eq!(
            format_timestamp("2024-03-05T14:07:00Z", &bad_pattern),
            "2024-03-05T14:07:00Z"
        );

        let bad_offset = TimestampConfig {
            utc_offset_minutes: 24 * 60,
            ..TimestampConfig::default()
        };
        assert_eq!(
            format_timestamp("2024-03-05T14:07:00Z", &bad_offset),
            "2024-03-05T14:07:00Z"
        );
    }

    #[test]
    fn pattern_validation() {
        assert!(validate_pattern("%d/%m/%Y %H:%M").is_ok());
        assert!(validate_pattern("%Y-%m-%d").is_ok());
        assert_eq!(
            validate_pattern("%Q"),
            Err(TimestampError::InvalidPattern("%Q".to_string()))
        );
    }
}
