//! The `easy_props` prelude.

pub use crate::converters::enums::{PropertyEnum, enum_of, enum_of_pairs, enum_type};
pub use crate::converters::list::{DEFAULT_SEPARATOR, list_of, list_of_with};
pub use crate::converters::{
    BOOLEAN, DOUBLE, DURATION, INSTANT, INT, LOCAL_DATE, LOCAL_DATE_TIME, LOCAL_TIME, LONG,
    STRING, URI, URI_REFERENCE, UriReference,
};
pub use crate::errors::{
    BoxError, DateTimeParseError, MisconfigurationError, PropertyError, UnknownNameError,
    UriSyntaxError, ValidationError,
};
pub use crate::location::{PropertyLocation, PropertySource};
pub use crate::validators::{
    Validator, distinct::Distinct, one_of::OneOf, range::Range,
};
pub use crate::{Converter, ExpectedFailure, PropertyValue};
pub use easy_props_macros::PropertyEnum;
