use crate::errors::ValidationError;
use crate::validators::Validator;
use std::fmt::{self, Display};

/// A validator that checks if a string is in a predefined set.
///
/// Unlike an enum converter the value stays a `String`, which suits sets that
/// are only known at runtime.
#[derive(Clone, Debug)]
pub struct OneOf {
    valid_strings: Vec<String>,
}

impl OneOf {
    /// Factory for creating a `OneOf` validator.
    ///
    /// Example: `OneOf::in_list(&["a", "b", "c"])`
    pub fn in_list<S: AsRef<str>>(valid_strings: &[S]) -> Box<dyn Validator<String>> {
        Box::new(Self {
            valid_strings: valid_strings
                .iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
        })
    }
}

impl Validator<String> for OneOf {
    fn validate(&self, value: &String) -> Result<(), ValidationError> {
        if self.valid_strings.contains(value) {
            Ok(())
        } else {
            Err(ValidationError(format!(
                "String must be one of: {}",
                self.valid_strings.join(", ")
            )))
        }
    }
}

impl Display for OneOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.valid_strings.join(", "))
    }
}
