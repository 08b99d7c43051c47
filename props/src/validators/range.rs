use crate::errors::ValidationError;
use crate::validators::Validator;
use std::fmt::{self, Display};

/// A validator for ordered values, e.g. ports or timeouts.
#[derive(Clone, Debug)]
pub struct Range<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> Range<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    // Creation goes through the factories.
    fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    /// Factory for a range with a lower bound. Returns a trait object.
    pub fn at_least(min: T) -> Box<dyn Validator<T>> {
        Box::new(Self::new(Some(min), None))
    }

    /// Factory for a range with an upper bound. Returns a trait object.
    pub fn at_most(max: T) -> Box<dyn Validator<T>> {
        Box::new(Self::new(None, Some(max)))
    }

    /// Factory for a range with an upper and lower bound, both inclusive.
    pub fn between(min: T, max: T) -> Box<dyn Validator<T>> {
        Box::new(Self::new(Some(min), Some(max)))
    }
}

impl<T> Validator<T> for Range<T>
where
    T: PartialOrd + Display + Send + Sync,
{
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        if let Some(min) = &self.min
            && value < min
        {
            return Err(ValidationError(format!(
                "Value {} must be at least {}",
                value, min
            )));
        }

        if let Some(max) = &self.max
            && value > max
        {
            return Err(ValidationError(format!(
                "Value {} must be no more than {}",
                value, max
            )));
        }

        Ok(())
    }
}

impl<T: Display> Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.min, &self.max) {
            (None, None) => write!(f, "[...]"),
            (None, Some(max)) => write!(f, "[..., {}]", max),
            (Some(min), None) => write!(f, "[{}, ...]", min),
            (Some(min), Some(max)) => write!(f, "[{}, ..., {}]", min, max),
        }
    }
}
