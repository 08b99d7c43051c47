use crate::core::{Converter, ExpectedFailure};
use crate::errors::UnknownNameError;
use indexmap::IndexMap;
use std::borrow::Cow;

/// A closed set of values selected by name, usually a fieldless enum.
///
/// Derive it with `#[derive(PropertyEnum)]`: every variant is accepted under
/// its declared name, or under `#[property(rename = "...")]` when given. The
/// derive also implements [`PropertyValue`](crate::PropertyValue).
pub trait PropertyEnum: Sized + 'static {
    /// Used as the type name in error messages.
    const TYPE_NAME: &'static str;
    /// Accepted names in declaration order.
    const NAMES: &'static [&'static str];

    fn from_name(name: &str) -> Option<Self>;
}

/// Builds a converter that accepts exactly the keys of `names`.
///
/// Lookup is exact. An unknown key fails with an [`UnknownNameError`] listing
/// every accepted key in insertion order.
pub fn enum_of<T>(type_name: impl Into<Cow<'static, str>>, names: IndexMap<String, T>) -> Converter<T>
where
    T: Clone + Send + Sync + 'static,
{
    Converter::guarding(
        type_name,
        ExpectedFailure::of::<UnknownNameError>(),
        move |s: &str| {
            names
                .get(s)
                .cloned()
                .ok_or_else(|| UnknownNameError::new(s, names.keys()))
        },
    )
}

/// Same as [`enum_of`], from `(name, value)` pairs. A repeated name keeps its
/// first position and its last value.
pub fn enum_of_pairs<K, T, I>(type_name: impl Into<Cow<'static, str>>, pairs: I) -> Converter<T>
where
    K: Into<String>,
    T: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = (K, T)>,
{
    enum_of(
        type_name,
        pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
    )
}

/// The converter for a [`PropertyEnum`], keyed by its declared names.
pub fn enum_type<E: PropertyEnum>() -> Converter<E> {
    Converter::guarding(
        E::TYPE_NAME,
        ExpectedFailure::of::<UnknownNameError>(),
        |s: &str| E::from_name(s).ok_or_else(|| UnknownNameError::new(s, E::NAMES)),
    )
}
