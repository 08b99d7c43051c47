use crate::errors::DateTimeParseError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, ParseResult, TimeDelta, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const NANOS_DIGITS: usize = 9;

const LOCAL_TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];
const LOCAL_DATE_FORMATS: &[&str] = &["%Y-%m-%d"];
const LOCAL_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

// [-+]P[nD][T[nH][nM][n[.f]S]], case-insensitive, every number individually signed.
static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^([-+]?)P(?:([-+]?[0-9]+)D)?(T(?:([-+]?[0-9]+)H)?(?:([-+]?[0-9]+)M)?(?:([-+]?[0-9]+)(?:[.,]([0-9]{0,9}))?S)?)?$",
    )
    .expect("duration pattern is valid")
});

// chrono's format parser tolerates padding, single digits, a signed year and
// a leap second, so the shape is checked first.
static LOCAL_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}:[0-9]{2}(?::[0-5][0-9](?:\.[0-9]{1,9})?)?$")
        .expect("local time pattern is valid")
});
static LOCAL_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("local date pattern is valid")
});
static LOCAL_DATE_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}(?::[0-5][0-9](?:\.[0-9]{1,9})?)?$")
        .expect("local date-time pattern is valid")
});

/// Parses an ISO-8601 duration such as `PT8H30M`, `P2D` or `-PT0.5S`.
///
/// Days are exactly 24 hours. Years, months and weeks are not accepted.
pub(crate) fn parse_duration(text: &str) -> Result<TimeDelta, DateTimeParseError> {
    let invalid = || DateTimeParseError::Duration {
        text: text.to_string(),
    };
    let captures = DURATION_PATTERN.captures(text).ok_or_else(invalid)?;

    let has_time_part = captures.get(3).is_some();
    let has_time_component = (4..=6).any(|i| captures.get(i).is_some());
    let has_day = captures.get(2).is_some();
    if (has_time_part && !has_time_component) || !(has_day || has_time_component) {
        return Err(invalid());
    }

    let overflow = || DateTimeParseError::DurationOverflow {
        text: text.to_string(),
    };
    let seconds = [
        (2, SECONDS_PER_DAY),
        (4, SECONDS_PER_HOUR),
        (5, SECONDS_PER_MINUTE),
        (6, 1),
    ]
    .into_iter()
    .try_fold(0i64, |total, (group, unit)| {
        let amount = number(&captures, group)?;
        amount
            .checked_mul(unit)
            .and_then(|secs| total.checked_add(secs))
    })
    .ok_or_else(overflow)?;

    let nanos = fraction_nanos(&captures);
    let delta = TimeDelta::try_seconds(seconds)
        .and_then(|d| d.checked_add(&TimeDelta::nanoseconds(nanos)))
        .ok_or_else(overflow)?;

    if &captures[1] == "-" {
        Ok(-delta)
    } else {
        Ok(delta)
    }
}

/// The signed number captured in `group`, zero if the group did not take
/// part, `None` if it does not fit an `i64`.
fn number(captures: &Captures<'_>, group: usize) -> Option<i64> {
    match captures.get(group) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    }
}

// The fraction follows the sign of the seconds it belongs to.
fn fraction_nanos(captures: &Captures<'_>) -> i64 {
    let Some(fraction) = captures.get(7).map(|m| m.as_str()) else {
        return 0;
    };
    let nanos: i64 = format!("{:0<width$}", fraction, width = NANOS_DIGITS).parse().unwrap_or(0);
    let negative = captures
        .get(6)
        .is_some_and(|seconds| seconds.as_str().starts_with('-'));
    if negative { -nanos } else { nanos }
}

pub(crate) fn parse_local_time(text: &str) -> Result<NaiveTime, DateTimeParseError> {
    parse_first_match(
        text,
        "LocalTime",
        &LOCAL_TIME_PATTERN,
        LOCAL_TIME_FORMATS,
        NaiveTime::parse_from_str,
    )
}

pub(crate) fn parse_local_date(text: &str) -> Result<NaiveDate, DateTimeParseError> {
    parse_first_match(
        text,
        "LocalDate",
        &LOCAL_DATE_PATTERN,
        LOCAL_DATE_FORMATS,
        NaiveDate::parse_from_str,
    )
}

pub(crate) fn parse_local_date_time(text: &str) -> Result<NaiveDateTime, DateTimeParseError> {
    parse_first_match(
        text,
        "LocalDateTime",
        &LOCAL_DATE_TIME_PATTERN,
        LOCAL_DATE_TIME_FORMATS,
        NaiveDateTime::parse_from_str,
    )
}

/// An RFC 3339 timestamp with an explicit offset, converted to UTC.
pub(crate) fn parse_instant(text: &str) -> Result<DateTime<Utc>, DateTimeParseError> {
    DateTime::parse_from_rfc3339(text)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| DateTimeParseError::Temporal {
            text: text.to_string(),
            kind: "Instant",
            source: Some(e),
        })
}

/// Checks `text` against `shape`, then tries each format in order. On failure
/// the error of the first format is reported, since it is the most complete
/// one. A text of the wrong shape has no chrono error to report.
fn parse_first_match<T>(
    text: &str,
    kind: &'static str,
    shape: &Regex,
    formats: &[&str],
    parse: fn(&str, &str) -> ParseResult<T>,
) -> Result<T, DateTimeParseError> {
    if !shape.is_match(text) {
        return Err(DateTimeParseError::Temporal {
            text: text.to_string(),
            kind,
            source: None,
        });
    }
    let mut first_failure = None;
    for format in formats {
        match parse(text, format) {
            Ok(value) => return Ok(value),
            Err(e) => {
                first_failure.get_or_insert(e);
            }
        }
    }
    Err(DateTimeParseError::Temporal {
        text: text.to_string(),
        kind,
        source: first_failure,
    })
}
