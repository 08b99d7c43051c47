use getset::Getters;
use std::fmt::{self, Display};
use std::path::Path;
use std::sync::Arc;

/// Where raw property values are read from, e.g. the process environment or
/// a properties file. Only its human-readable description matters here.
#[derive(Clone, Debug, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct PropertySource {
    description: String,
}

impl PropertySource {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn environment() -> Self {
        Self::new("environment variable")
    }

    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::new(format!("file {}", path.as_ref().display()))
    }
}

/// Identifies a single raw value: the source it came from and the name it was
/// found under. Built by whoever resolves the value and only borrowed by the
/// converters.
#[derive(Clone, Debug, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct PropertyLocation {
    source: Arc<PropertySource>,
    name_in_location: String,
}

impl PropertyLocation {
    pub fn new(source: Arc<PropertySource>, name_in_location: impl Into<String>) -> Self {
        Self {
            source,
            name_in_location: name_in_location.into(),
        }
    }

    /// Shorthand for a location whose source is not shared with other locations.
    pub fn in_source(source: PropertySource, name_in_location: impl Into<String>) -> Self {
        Self::new(Arc::new(source), name_in_location)
    }
}

impl Display for PropertyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.source.description(),
            self.name_in_location
        )
    }
}
