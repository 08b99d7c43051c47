use crate::location::PropertyLocation;
use getset::Getters;
use std::error::Error;

/// The type-erased error every raw parser failure is funnelled through.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// The uniform error a converter reports when a raw value is not a valid
/// representation of its target type.
///
/// The message names the source, the property, the expected type and the
/// offending value. The low-level parse error is kept as [`Error::source`].
#[derive(thiserror::Error, Debug, Getters)]
#[error("{location} - invalid {type_name}: {value}")]
pub struct MisconfigurationError {
    /// `"{source description} {property name}"` of the rejected value.
    #[getset(get = "pub")]
    location: String,
    #[getset(get = "pub")]
    type_name: String,
    /// The raw string exactly as it was handed to the converter.
    #[getset(get = "pub")]
    value: String,
    #[source]
    cause: BoxError,
}

impl MisconfigurationError {
    pub(crate) fn new(
        location: &PropertyLocation,
        type_name: &str,
        value: &str,
        cause: BoxError,
    ) -> Self {
        Self {
            location: location.to_string(),
            type_name: type_name.to_string(),
            value: value.to_string(),
            cause,
        }
    }
}

/// The result error of [`Converter::convert`](crate::Converter::convert).
#[derive(thiserror::Error, Debug)]
pub enum PropertyError {
    /// The raw parser failed in the way it was declared to fail.
    #[error(transparent)]
    Misconfigured(#[from] MisconfigurationError),
    /// The raw parser failed with an error kind it was not declared to raise.
    /// The original error is carried through untouched.
    #[error(transparent)]
    Unexpected(BoxError),
}

impl PropertyError {
    pub fn misconfiguration(&self) -> Option<&MisconfigurationError> {
        match self {
            PropertyError::Misconfigured(e) => Some(e),
            PropertyError::Unexpected(_) => None,
        }
    }

    pub fn is_misconfigured(&self) -> bool {
        matches!(self, PropertyError::Misconfigured(_))
    }
}

/// The text is neither an absolute URI nor a relative reference.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Illegal URI reference: '{text}'")]
pub struct UriSyntaxError {
    pub(crate) text: String,
    #[source]
    pub(crate) source: Option<url::ParseError>,
}

/// Failure to read an ISO-8601 date, time, instant or duration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateTimeParseError {
    #[error("Text '{text}' could not be parsed as {kind}")]
    Temporal {
        text: String,
        kind: &'static str,
        #[source]
        source: Option<chrono::ParseError>,
    },
    #[error("Text '{text}' cannot be parsed to a Duration")]
    Duration { text: String },
    #[error("Text '{text}' is out of range for a Duration")]
    DurationOverflow { text: String },
}

/// A name that is not among the accepted names of an enum converter.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not one of: {}", .accepted.join(", "))]
pub struct UnknownNameError {
    value: String,
    accepted: Vec<String>,
}

impl UnknownNameError {
    pub fn new<I, S>(value: &str, accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            value: value.to_string(),
            accepted: accepted.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }
}

/// A parsed value rejected by a [`Validator`](crate::Validator).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);
