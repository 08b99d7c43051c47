//! Typed converters from raw configuration strings to Rust values.
//!
//! Whatever reads the configuration (environment, properties file, map)
//! hands a converter the [`PropertyLocation`] of a value and its raw string.
//! The converter returns the typed value, or a [`PropertyError`]:
//!
//! * [`PropertyError::Misconfigured`] when the string is not a valid
//!   representation of the target type. The message always reads
//!   `"{source} {name} - invalid {type}: {raw}"` and the low-level parse error
//!   is kept as its source.
//! * [`PropertyError::Unexpected`] when the raw parser failed in a way it was
//!   not declared to fail. The parser's error is passed through as is.
//!
//! ```
//! use easy_props::prelude::*;
//!
//! let env = std::sync::Arc::new(PropertySource::environment());
//! let port = PropertyLocation::new(env.clone(), "APP_PORT");
//! let peers = PropertyLocation::new(env, "APP_PEERS");
//!
//! assert_eq!(INT.convert(&port, "8080").unwrap(), 8080);
//! assert_eq!(
//!     INT.convert(&port, "eighty").unwrap_err().to_string(),
//!     "environment variable APP_PORT - invalid Int: eighty"
//! );
//!
//! let urls = list_of(&URI);
//! assert_eq!(urls.convert(&peers, "http://a:1, http://b:2").unwrap().len(), 2);
//! ```
//!
//! New converters are built with [`Converter::guarding`], [`enum_of`],
//! [`list_of`] and `#[derive(PropertyEnum)]`.

// Lets the derive macro's `::easy_props` paths resolve inside this crate.
extern crate self as easy_props;

pub use crate::core::{Converter, ExpectedFailure, PropertyValue};
pub use converters::enums::{PropertyEnum, enum_of, enum_of_pairs, enum_type};
pub use converters::UriReference;
pub use converters::list::{list_of, list_of_with};
pub use errors::{MisconfigurationError, PropertyError};
pub use location::{PropertyLocation, PropertySource};
pub use validators::Validator;

pub mod converters;
pub mod errors;
pub mod prelude;

mod core;
mod location;
mod validators;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use std::collections::HashMap;
    use std::error::Error;
    use std::sync::Arc;
    use std::thread;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PropertyEnum)]
    enum Compression {
        None,
        Gzip,
        #[property(rename = "zstd")]
        Zstandard,
    }

    #[derive(Debug, PartialEq, PropertyEnum)]
    #[property(type_name = "Log level")]
    enum LogLevel {
        Error,
        Warn,
        Info,
    }

    fn map_location(name: &str) -> PropertyLocation {
        PropertyLocation::in_source(PropertySource::new("test map"), name)
    }

    #[test]
    fn test_resolve_typed_values_from_a_map() {
        // Arrange: the raw properties, as an external loader would hand them over.
        let mut props = HashMap::new();
        props.insert("port", "8080");
        props.insert("ratio", "0.75");
        props.insert("verbose", "TRUE");
        props.insert("endpoint", "https://example.com/api");
        props.insert("timeout", "PT30S");
        props.insert("compression", "zstd");
        props.insert("retry.codes", "500, 502,503");

        let get = |name: &str| (map_location(name), props[name]);

        // Act
        let (loc, raw) = get("port");
        let port = INT.convert(&loc, raw).unwrap();
        let (loc, raw) = get("ratio");
        let ratio = DOUBLE.convert(&loc, raw).unwrap();
        let (loc, raw) = get("verbose");
        let verbose = BOOLEAN.convert(&loc, raw).unwrap();
        let (loc, raw) = get("endpoint");
        let endpoint = URI.convert(&loc, raw).unwrap();
        let (loc, raw) = get("timeout");
        let timeout = DURATION.convert(&loc, raw).unwrap();
        let (loc, raw) = get("compression");
        let compression = Compression::parse(&loc, raw).unwrap();
        let (loc, raw) = get("retry.codes");
        let codes = list_of(&INT).convert(&loc, raw).unwrap();

        // Assert
        assert_eq!(port, 8080);
        assert_eq!(ratio, 0.75);
        assert!(verbose);
        assert_eq!(endpoint.host_str(), Some("example.com"));
        assert_eq!(timeout, chrono::TimeDelta::seconds(30));
        assert_eq!(compression, Compression::Zstandard);
        assert_eq!(codes, vec![500, 502, 503]);
    }

    #[test]
    fn test_derived_enum_names() {
        assert_eq!(Compression::NAMES, &["None", "Gzip", "zstd"]);
        assert_eq!(Compression::TYPE_NAME, "Compression");
        assert_eq!(Compression::from_name("Gzip"), Some(Compression::Gzip));
        assert_eq!(Compression::from_name("Zstandard"), None);

        assert_eq!(LogLevel::TYPE_NAME, "Log level");
        assert_eq!(LogLevel::NAMES, &["Error", "Warn", "Info"]);
    }

    #[test]
    fn test_derived_enum_rejects_unknown_names() {
        let location = map_location("log.level");

        assert_eq!(LogLevel::parse(&location, "Warn").unwrap(), LogLevel::Warn);

        let result = LogLevel::parse(&location, "warn");
        let Err(PropertyError::Misconfigured(e)) = &result else {
            panic!("Expected Misconfigured error, but got {:?}", result);
        };
        assert_eq!(e.to_string(), "test map log.level - invalid Log level: warn");

        let cause = e
            .source()
            .and_then(|s| s.downcast_ref::<UnknownNameError>())
            .expect("cause must be the unknown name");
        assert_eq!(cause.value(), "warn");
        for name in ["Error", "Warn", "Info"] {
            assert!(cause.accepted().iter().any(|a| a == name));
        }
    }

    #[test]
    fn test_list_of_derived_enum() {
        let location = map_location("codecs");

        let codecs = Vec::<Compression>::parse(&location, "Gzip, zstd").unwrap();
        assert_eq!(codecs, vec![Compression::Gzip, Compression::Zstandard]);

        let err = Vec::<Compression>::parse(&location, "Gzip, brotli").unwrap_err();
        assert_eq!(
            err.to_string(),
            "test map codecs - invalid Compression: brotli"
        );
    }

    #[test]
    fn test_validated_converters() {
        let port = (*INT).clone().validated(Range::between(1, 65535));
        let mode = (*STRING)
            .clone()
            .validated(OneOf::in_list(&["leader", "follower"]));
        let codecs = list_of(&enum_type::<Compression>()).validated(Distinct::values(false));
        let location = map_location("validated");

        assert_eq!(port.convert(&location, "443").unwrap(), 443);
        assert_eq!(mode.convert(&location, "leader").unwrap(), "leader");
        assert_eq!(
            codecs.convert(&location, "None, Gzip").unwrap(),
            vec![Compression::None, Compression::Gzip]
        );

        let result = port.convert(&location, "70000");
        let Err(PropertyError::Misconfigured(e)) = &result else {
            panic!("Expected Misconfigured error, but got {:?}", result);
        };
        assert_eq!(e.to_string(), "test map validated - invalid Int: 70000");
        assert_eq!(
            e.source().map(|s| s.to_string()).as_deref(),
            Some("Value 70000 must be no more than 65535")
        );
        assert!(e.source().is_some_and(|s| s.is::<ValidationError>()));

        // A parse failure is still reported before any validation.
        let err = port.convert(&location, "http").unwrap_err();
        assert!(
            err.misconfiguration()
                .and_then(|e| e.source())
                .is_some_and(|s| s.is::<std::num::ParseIntError>())
        );

        assert!(mode.convert(&location, "observer").unwrap_err().is_misconfigured());
        assert!(codecs.convert(&location, "Gzip, Gzip").unwrap_err().is_misconfigured());
    }

    #[test]
    fn test_custom_converter_with_unexpected_failure() {
        #[derive(thiserror::Error, Debug)]
        #[error("keystore is locked")]
        struct KeystoreLocked;

        let secret: Converter<String> =
            Converter::guarding("Secret", ExpectedFailure::of::<UnknownNameError>(), |_| {
                Err::<String, _>(KeystoreLocked)
            });

        let err = secret.convert(&map_location("db.password"), "vault:db").unwrap_err();

        assert!(!err.is_misconfigured());
        assert_eq!(err.to_string(), "keystore is locked");
        let PropertyError::Unexpected(inner) = err else {
            panic!("Expected Unexpected error");
        };
        assert!(inner.downcast::<KeystoreLocked>().is_ok());
    }

    #[test]
    fn test_catalog_is_shared_between_threads() {
        let source = Arc::new(PropertySource::new("threaded"));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let location = PropertyLocation::new(source.clone(), format!("worker.{i}"));
                thread::spawn(move || {
                    let values = list_of(&LONG).convert(&location, &format!("{i}, {}", i * 10));
                    (values.unwrap(), INT.convert(&location, "nope").is_err())
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let (values, failed) = handle.join().unwrap();
            let i = i as i64;
            assert_eq!(values, vec![i, i * 10]);
            assert!(failed);
        }
    }
}
