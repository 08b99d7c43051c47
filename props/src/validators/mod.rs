use crate::errors::ValidationError;
use std::fmt::Display;

pub(crate) mod distinct;
pub(crate) mod one_of;
pub(crate) mod range;

/// A check on an already parsed value, attached to a converter with
/// [`Converter::validated`](crate::Converter::validated).
/// It must be `Send + Sync` to live inside a shared converter.
pub trait Validator<T>: Display + Send + Sync {
    fn validate(&self, value: &T) -> Result<(), ValidationError>;
}
