use crate::core::Converter;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// A comma, optionally followed by whitespace.
pub static DEFAULT_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*").expect("default separator is valid"));

/// A converter for lists of `element` separated by [`DEFAULT_SEPARATOR`].
pub fn list_of<T: 'static>(element: &Converter<T>) -> Converter<Vec<T>> {
    list_of_with(element, DEFAULT_SEPARATOR.clone())
}

/// A converter for lists of `element` separated by matches of `separator`.
///
/// Every piece between separators is converted, empty ones included: `""`
/// is one empty element and `"a,"` is `"a"` followed by an empty element.
/// Elements are converted left to right with the list's location; the first
/// failure is returned unchanged and the rest of the input is not looked at.
pub fn list_of_with<T: 'static>(element: &Converter<T>, separator: Regex) -> Converter<Vec<T>> {
    let element = element.clone();
    Converter::from_fn(
        format!("List<{}>", element.type_name()),
        move |location, raw| {
            trace!(
                property = %location.name_in_location(),
                separator = separator.as_str(),
                "splitting list property"
            );
            separator
                .split(raw)
                .map(|piece| element.convert(location, piece))
                .collect()
        },
    )
}
