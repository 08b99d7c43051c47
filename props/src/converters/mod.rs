//! The built-in converters, one process-wide instance per target type.

use crate::core::{Converter, ExpectedFailure};
use crate::errors::{DateTimeParseError, UriSyntaxError};
use crate::impl_property_value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use once_cell::sync::Lazy;
use std::convert::Infallible;
use std::num::{ParseFloatError, ParseIntError};
use url::Url;

pub(crate) mod enums;
pub(crate) mod list;
pub(crate) mod temporal;
pub(crate) mod uri;

pub use uri::UriReference;

/// The raw string, unchanged.
pub static STRING: Lazy<Converter<String>> = Lazy::new(|| {
    Converter::guarding("String", ExpectedFailure::none(), |s| {
        Ok::<_, Infallible>(s.to_string())
    })
});

pub static INT: Lazy<Converter<i32>> = Lazy::new(|| {
    Converter::guarding("Int", ExpectedFailure::of::<ParseIntError>(), |s| {
        s.parse::<i32>()
    })
});

pub static LONG: Lazy<Converter<i64>> = Lazy::new(|| {
    Converter::guarding("Long", ExpectedFailure::of::<ParseIntError>(), |s| {
        s.parse::<i64>()
    })
});

/// A decimal or exponent form such as `42.5` or `-1e3`. Surrounding
/// whitespace is ignored. `nan`, `inf` and `infinity` are accepted in any
/// casing and with an optional sign.
pub static DOUBLE: Lazy<Converter<f64>> = Lazy::new(|| {
    Converter::guarding("Double", ExpectedFailure::of::<ParseFloatError>(), |s| {
        s.trim().parse::<f64>()
    })
});

/// `true` for any casing of `"true"`, `false` for every other string.
/// Never fails: `"tru"`, `"yes"` and `""` are all `false`.
pub static BOOLEAN: Lazy<Converter<bool>> = Lazy::new(|| {
    Converter::guarding("Boolean", ExpectedFailure::none(), |s| {
        Ok::<_, Infallible>(s.eq_ignore_ascii_case("true"))
    })
});

/// An absolute URI, e.g. `https://example.com/path` or `mailto:ops@example.com`.
/// Relative references are rejected, see [`URI_REFERENCE`].
pub static URI: Lazy<Converter<Url>> = Lazy::new(|| {
    Converter::guarding("URI", ExpectedFailure::of::<url::ParseError>(), Url::parse)
});

/// An absolute URI or a relative reference such as `/api/v1` or `../x`.
pub static URI_REFERENCE: Lazy<Converter<UriReference>> = Lazy::new(|| {
    Converter::guarding(
        "URI",
        ExpectedFailure::of::<UriSyntaxError>(),
        uri::parse_uri_reference,
    )
});

/// ISO-8601 duration such as `PT15M` or `P2DT3H4.5S`.
pub static DURATION: Lazy<Converter<TimeDelta>> = Lazy::new(|| {
    Converter::guarding(
        "Duration",
        ExpectedFailure::of::<DateTimeParseError>(),
        temporal::parse_duration,
    )
});

/// `HH:MM` or `HH:MM:SS[.fraction]`.
pub static LOCAL_TIME: Lazy<Converter<NaiveTime>> = Lazy::new(|| {
    Converter::guarding(
        "LocalTime",
        ExpectedFailure::of::<DateTimeParseError>(),
        temporal::parse_local_time,
    )
});

/// `YYYY-MM-DD`.
pub static LOCAL_DATE: Lazy<Converter<NaiveDate>> = Lazy::new(|| {
    Converter::guarding(
        "LocalDate",
        ExpectedFailure::of::<DateTimeParseError>(),
        temporal::parse_local_date,
    )
});

/// `YYYY-MM-DDTHH:MM[:SS[.fraction]]`.
pub static LOCAL_DATE_TIME: Lazy<Converter<NaiveDateTime>> = Lazy::new(|| {
    Converter::guarding(
        "LocalDateTime",
        ExpectedFailure::of::<DateTimeParseError>(),
        temporal::parse_local_date_time,
    )
});

/// RFC 3339 timestamp with an offset, normalised to UTC.
pub static INSTANT: Lazy<Converter<DateTime<Utc>>> = Lazy::new(|| {
    Converter::guarding(
        "Instant",
        ExpectedFailure::of::<DateTimeParseError>(),
        temporal::parse_instant,
    )
});

impl_property_value!(
    String => STRING,
    i32 => INT,
    i64 => LONG,
    f64 => DOUBLE,
    bool => BOOLEAN,
    Url => URI,
    UriReference => URI_REFERENCE,
    TimeDelta => DURATION,
    NaiveTime => LOCAL_TIME,
    NaiveDate => LOCAL_DATE,
    NaiveDateTime => LOCAL_DATE_TIME,
    DateTime<Utc> => INSTANT,
);
