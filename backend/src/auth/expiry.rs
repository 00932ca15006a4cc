//! Token lifetime parsing
//!
//! Accepts the human-friendly spans operators put in `JWT_EXPIRES_IN`:
//! `"1d"`, `"12h"`, `"1 day"`, `"90 minutes"`, `"1.5h"`. A bare number is
//! read as milliseconds.

use chrono::Duration;
use thiserror::Error;

const MAX_INPUT_LEN: usize = 100;

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = SECOND_MS * 60.0;
const HOUR_MS: f64 = MINUTE_MS * 60.0;
const DAY_MS: f64 = HOUR_MS * 24.0;
const WEEK_MS: f64 = DAY_MS * 7.0;
const YEAR_MS: f64 = DAY_MS * 365.25;

/// Reasons a lifetime string is rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpiryParseError {
    #[error("expiry duration is empty")]
    Empty,

    #[error("expiry duration is longer than {} characters", MAX_INPUT_LEN)]
    TooLong,

    #[error("invalid number in expiry duration: {0:?}")]
    InvalidNumber(String),

    #[error("unknown unit in expiry duration: {0:?}")]
    UnknownUnit(String),

    #[error("expiry duration must not be negative")]
    Negative,
}

/// Parse a lifetime string into a [`Duration`]
pub fn parse_expiry(input: &str) -> Result<Duration, ExpiryParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ExpiryParseError::Empty);
    }
    if input.len() > MAX_INPUT_LEN {
        return Err(ExpiryParseError::TooLong);
    }

    let split = input
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(input.len());
    let (number, unit) = input.split_at(split);

    let value: f64 = number
        .parse()
        .map_err(|_| ExpiryParseError::InvalidNumber(number.to_string()))?;
    if !value.is_finite() {
        return Err(ExpiryParseError::InvalidNumber(number.to_string()));
    }
    if value < 0.0 {
        return Err(ExpiryParseError::Negative);
    }

    let unit = unit.trim_start().to_ascii_lowercase();
    let unit_ms = unit_millis(&unit).ok_or(ExpiryParseError::UnknownUnit(unit))?;

    Ok(Duration::milliseconds((value * unit_ms) as i64))
}

fn unit_millis(unit: &str) -> Option<f64> {
    let ms = match unit {
        "" | "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.0,
        "s" | "sec" | "secs" | "second" | "seconds" => SECOND_MS,
        "m" | "min" | "mins" | "minute" | "minutes" => MINUTE_MS,
        "h" | "hr" | "hrs" | "hour" | "hours" => HOUR_MS,
        "d" | "day" | "days" => DAY_MS,
        "w" | "week" | "weeks" => WEEK_MS,
        "y" | "yr" | "yrs" | "year" | "years" => YEAR_MS,
        _ => return None,
    };
    Some(ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1d", Duration::days(1))]
    #[case("1 day", Duration::days(1))]
    #[case("2 Days", Duration::days(2))]
    #[case("12h", Duration::hours(12))]
    #[case("90 minutes", Duration::minutes(90))]
    #[case("1.5h", Duration::minutes(90))]
    #[case("30s", Duration::seconds(30))]
    #[case("3600", Duration::milliseconds(3600))]
    #[case("120", Duration::milliseconds(120))]
    #[case("250ms", Duration::milliseconds(250))]
    #[case("1w", Duration::weeks(1))]
    #[case("1y", Duration::hours(8766))]
    #[case("0s", Duration::zero())]
    fn test_parses_supported_spans(#[case] input: &str, #[case] expected: Duration) {
        assert_eq!(parse_expiry(input).unwrap(), expected);
    }

    #[rstest]
    #[case("", ExpiryParseError::Empty)]
    #[case("   ", ExpiryParseError::Empty)]
    #[case("-1d", ExpiryParseError::Negative)]
    #[case("1 fortnight", ExpiryParseError::UnknownUnit("fortnight".to_string()))]
    #[case("day", ExpiryParseError::InvalidNumber(String::new()))]
    #[case("1..2h", ExpiryParseError::InvalidNumber("1..2".to_string()))]
    fn test_rejects_invalid_spans(#[case] input: &str, #[case] expected: ExpiryParseError) {
        assert_eq!(parse_expiry(input).unwrap_err(), expected);
    }

    #[test]
    fn test_rejects_overlong_input() {
        let input = "1".repeat(MAX_INPUT_LEN + 1);
        assert_eq!(parse_expiry(&input).unwrap_err(), ExpiryParseError::TooLong);
    }
}
