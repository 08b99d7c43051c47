use crate::errors::ValidationError;
use crate::validators::Validator;
use std::collections::HashSet;
use std::fmt::{self, Display};
use std::hash::Hash;
use std::marker::PhantomData;

/// A validator for parsed lists: rejects duplicated elements and, unless
/// allowed, an empty list.
pub struct Distinct<T> {
    is_empty_allowed: bool,
    _element: PhantomData<fn(&T)>,
}

impl<T> Distinct<T>
where
    T: Eq + Hash + 'static,
{
    /// Factory for a validator that allows any non-duplicate values.
    pub fn values(is_empty_allowed: bool) -> Box<dyn Validator<Vec<T>>> {
        Box::new(Self {
            is_empty_allowed,
            _element: PhantomData,
        })
    }
}

impl<T: Eq + Hash> Validator<Vec<T>> for Distinct<T> {
    fn validate(&self, values: &Vec<T>) -> Result<(), ValidationError> {
        if !self.is_empty_allowed && values.is_empty() {
            return Err(ValidationError("List must not be empty".to_string()));
        }

        let mut seen = HashSet::with_capacity(values.len());
        if !values.iter().all(|v| seen.insert(v)) {
            return Err(ValidationError(
                "List values must not be duplicated".to_string(),
            ));
        }

        Ok(())
    }
}

impl<T> Display for Distinct<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "distinct values ({})",
            if self.is_empty_allowed {
                "empty list allowed"
            } else {
                "empty list not allowed"
            }
        )
    }
}
