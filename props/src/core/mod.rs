use crate::errors::{BoxError, MisconfigurationError, PropertyError};
use crate::location::PropertyLocation;
use crate::validators::Validator;
use std::any;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

mod macros;

const FALLBACK_TYPE_NAME: &str = "value";

type ConvertFn<T> = dyn Fn(&PropertyLocation, &str) -> Result<T, PropertyError> + Send + Sync;

/// The one error kind a raw parser is declared to fail with on malformed input.
///
/// Matching is a runtime type test on the error object, never a look at its
/// message. Errors of any other kind are not translated.
#[derive(Clone, Copy)]
pub struct ExpectedFailure {
    name: &'static str,
    matches: fn(&(dyn Error + Send + Sync + 'static)) -> bool,
}

impl ExpectedFailure {
    /// Expect failures of the concrete error type `X`.
    pub fn of<X: Error + 'static>() -> Self {
        Self {
            name: any::type_name::<X>(),
            matches: |e| e.is::<X>(),
        }
    }

    /// For raw parsers that cannot fail: nothing is translated.
    pub fn none() -> Self {
        Self {
            name: "nothing",
            matches: |_| false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, error: &(dyn Error + Send + Sync + 'static)) -> bool {
        (self.matches)(error)
    }
}

impl fmt::Debug for ExpectedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExpectedFailure").field(&self.name).finish()
    }
}

/// Turns the raw string found at a [`PropertyLocation`] into a `T`.
///
/// A converter is a cheap, cloneable handle around a stateless function. It is
/// built once, usually into a `static`, and shared freely between threads.
///
/// Most converters come from [`Converter::guarding`], which takes care of
/// turning the raw parser's expected failure into a [`MisconfigurationError`]:
///
/// ```
/// use easy_props::prelude::*;
/// use std::num::ParseIntError;
///
/// let port = Converter::guarding("Port", ExpectedFailure::of::<ParseIntError>(), |s| {
///     s.parse::<u16>()
/// });
/// let location = PropertyLocation::in_source(PropertySource::environment(), "PORT");
///
/// assert_eq!(port.convert(&location, "8080").unwrap(), 8080);
/// assert_eq!(
///     port.convert(&location, "http").unwrap_err().to_string(),
///     "environment variable PORT - invalid Port: http"
/// );
/// ```
pub struct Converter<T> {
    type_name: Cow<'static, str>,
    convert: Arc<ConvertFn<T>>,
}

impl<T: 'static> Converter<T> {
    /// Builds a converter from a raw `&str -> T` parser.
    ///
    /// If `raw_parse` fails with an error that `expected` matches, the error is
    /// reported as [`PropertyError::Misconfigured`] with the message
    /// `"{source} {name} - invalid {type_name}: {raw}"` and the original error
    /// as its source. Any other error is returned as
    /// [`PropertyError::Unexpected`] exactly as the parser produced it.
    ///
    /// An empty `type_name` is reported as `value`.
    pub fn guarding<E, F>(
        type_name: impl Into<Cow<'static, str>>,
        expected: ExpectedFailure,
        raw_parse: F,
    ) -> Self
    where
        E: Into<BoxError>,
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
    {
        let type_name = type_name.into();
        let name = type_name.clone();
        Self::from_fn(type_name, move |location, raw| {
            raw_parse(raw).map_err(|e| {
                let cause: BoxError = e.into();
                if expected.matches(cause.as_ref()) {
                    misconfigured(location, display_name(&name), raw, cause)
                } else {
                    PropertyError::Unexpected(cause)
                }
            })
        })
    }

    /// Builds a converter from a function that already speaks [`PropertyError`].
    pub fn from_fn<F>(type_name: impl Into<Cow<'static, str>>, convert: F) -> Self
    where
        F: Fn(&PropertyLocation, &str) -> Result<T, PropertyError> + Send + Sync + 'static,
    {
        Self {
            type_name: type_name.into(),
            convert: Arc::new(convert),
        }
    }

    /// Returns a converter that also runs `validator` on every parsed value.
    /// A rejected value is reported like a malformed one.
    pub fn validated(self, validator: Box<dyn Validator<T>>) -> Self {
        let Converter { type_name, convert } = self;
        let name = type_name.clone();
        Self::from_fn(type_name, move |location, raw| {
            let value = convert(location, raw)?;
            match validator.validate(&value) {
                Ok(()) => Ok(value),
                Err(e) => Err(misconfigured(
                    location,
                    display_name(&name),
                    raw,
                    Box::new(e),
                )),
            }
        })
    }
}

impl<T> Converter<T> {
    pub fn convert(&self, location: &PropertyLocation, raw: &str) -> Result<T, PropertyError> {
        (self.convert)(location, raw)
    }

    /// The name used for this converter's target type in error messages.
    pub fn type_name(&self) -> &str {
        display_name(&self.type_name)
    }
}

impl<T> Clone for Converter<T> {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name.clone(),
            convert: Arc::clone(&self.convert),
        }
    }
}

impl<T> fmt::Debug for Converter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("type_name", &self.type_name())
            .finish_non_exhaustive()
    }
}

/// Types that have a canonical [`Converter`].
///
/// Implemented for every type in the built-in catalog, for `Vec<T>` of any
/// implementing `T`, and by `#[derive(PropertyEnum)]`. Other types can opt in
/// with [`impl_property_value!`](crate::impl_property_value).
pub trait PropertyValue: Sized + 'static {
    fn converter() -> Converter<Self>;

    fn parse(location: &PropertyLocation, raw: &str) -> Result<Self, PropertyError> {
        Self::converter().convert(location, raw)
    }
}

impl<T: PropertyValue> PropertyValue for Vec<T> {
    fn converter() -> Converter<Self> {
        crate::converters::list::list_of(&T::converter())
    }
}

fn display_name(type_name: &str) -> &str {
    if type_name.is_empty() {
        FALLBACK_TYPE_NAME
    } else {
        type_name
    }
}

fn misconfigured(
    location: &PropertyLocation,
    type_name: &str,
    raw: &str,
    cause: BoxError,
) -> PropertyError {
    debug!(
        source = %location.source().description(),
        property = %location.name_in_location(),
        type_name,
        "rejected property value"
    );
    MisconfigurationError::new(location, type_name, raw, cause).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::PropertySource;
    use std::num::ParseIntError;

    #[derive(thiserror::Error, Debug)]
    #[error("parser exploded")]
    struct Exploded;

    fn location() -> PropertyLocation {
        PropertyLocation::in_source(PropertySource::new("test source"), "test.name")
    }

    fn int_converter(type_name: &'static str) -> Converter<i32> {
        Converter::guarding(type_name, ExpectedFailure::of::<ParseIntError>(), |s| {
            s.parse::<i32>()
        })
    }

    #[test]
    fn test_success_returns_parsed_value() {
        assert_eq!(int_converter("Int").convert(&location(), "-17").unwrap(), -17);
    }

    #[test]
    fn test_expected_failure_is_translated() {
        let result = int_converter("Int").convert(&location(), "seven");

        let Err(PropertyError::Misconfigured(e)) = &result else {
            panic!("Expected Misconfigured error, but got {:?}", result);
        };
        assert_eq!(e.to_string(), "test source test.name - invalid Int: seven");
        assert_eq!(e.location(), "test source test.name");
        assert_eq!(e.type_name(), "Int");
        assert_eq!(e.value(), "seven");

        let cause = e.source().expect("cause must be kept");
        assert!(cause.is::<ParseIntError>());
        assert_eq!(cause.to_string(), "invalid digit found in string");
    }

    #[test]
    fn test_unexpected_failure_passes_through() {
        let converter: Converter<i32> =
            Converter::guarding("Int", ExpectedFailure::of::<ParseIntError>(), |_| {
                Err::<i32, _>(Exploded)
            });

        let result = converter.convert(&location(), "1");

        match result {
            Err(PropertyError::Unexpected(e)) => {
                assert!(e.is::<Exploded>());
                assert_eq!(e.to_string(), "parser exploded");
            }
            other => panic!("Expected Unexpected error, but got {:?}", other),
        }
    }

    #[test]
    fn test_none_translates_nothing() {
        let converter: Converter<i32> =
            Converter::guarding("Int", ExpectedFailure::none(), |s| s.parse::<i32>());

        let result = converter.convert(&location(), "x");

        assert!(
            matches!(&result, Err(PropertyError::Unexpected(e)) if e.is::<ParseIntError>()),
            "Expected Unexpected error, but got {:?}",
            result
        );
    }

    #[test]
    fn test_empty_type_name_falls_back_to_value() {
        let converter = int_converter("");
        assert_eq!(converter.type_name(), "value");

        let err = converter.convert(&location(), "x").unwrap_err();
        assert_eq!(err.to_string(), "test source test.name - invalid value: x");
    }

    #[test]
    fn test_expected_failure_matches_by_type() {
        let expected = ExpectedFailure::of::<ParseIntError>();
        let parse_error: BoxError = "x".parse::<i32>().unwrap_err().into();
        let other: BoxError = Box::new(Exploded);

        assert!(expected.matches(parse_error.as_ref()));
        assert!(!expected.matches(other.as_ref()));
        assert!(expected.name().ends_with("ParseIntError"));
        assert!(!ExpectedFailure::none().matches(parse_error.as_ref()));
    }

    #[test]
    fn test_from_fn_errors_are_not_rewrapped() {
        let converter: Converter<i32> = Converter::from_fn("Int", |_, _| {
            Err(PropertyError::Unexpected(Box::new(Exploded)))
        });

        let result = converter.convert(&location(), "1");

        assert!(
            matches!(&result, Err(PropertyError::Unexpected(e)) if e.is::<Exploded>()),
            "Expected Unexpected error, but got {:?}",
            result
        );
    }

    #[test]
    fn test_clones_share_the_function() {
        let converter = int_converter("Int");
        let clone = converter.clone();

        assert!(Arc::ptr_eq(&converter.convert, &clone.convert));
        assert_eq!(clone.convert(&location(), "5").unwrap(), 5);
        assert_eq!(format!("{:?}", clone), "Converter { type_name: \"Int\", .. }");
    }

    #[test]
    fn test_converter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter<i32>>();
        assert_send_sync::<Converter<Vec<String>>>();
    }
}
