use crate::errors::UriSyntaxError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use url::Url;

// Unreserved, reserved and percent-encoded characters.
static REFERENCE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9\-._~!$&'()*+,;=:@/?#\[\]]|%[0-9A-Fa-f]{2})*$")
        .expect("reference pattern is valid")
});

static CHECK_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://reference.invalid/").expect("base URL is valid"));

/// An RFC 3986 URI reference: an absolute URI, or a reference such as
/// `/api/v1`, `../x`, `?q=1` or `#frag` that is resolved against a base later.
///
/// The relative form is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UriReference {
    Absolute(Url),
    Relative(String),
}

impl UriReference {
    pub fn as_str(&self) -> &str {
        match self {
            UriReference::Absolute(url) => url.as_str(),
            UriReference::Relative(reference) => reference,
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, UriReference::Absolute(_))
    }

    /// The absolute URI this reference denotes relative to `base`.
    pub fn resolve(&self, base: &Url) -> Result<Url, url::ParseError> {
        match self {
            UriReference::Absolute(url) => Ok(url.clone()),
            UriReference::Relative(reference) => base.join(reference),
        }
    }
}

impl fmt::Display for UriReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn parse_uri_reference(text: &str) -> Result<UriReference, UriSyntaxError> {
    let invalid = |source| UriSyntaxError {
        text: text.to_string(),
        source,
    };
    match Url::parse(text) {
        Ok(url) => Ok(UriReference::Absolute(url)),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            // At most one fragment, and only legal characters.
            if !REFERENCE_CHARS.is_match(text) || text.matches('#').count() > 1 {
                return Err(invalid(None));
            }
            Url::options()
                .base_url(Some(&CHECK_BASE))
                .parse(text)
                .map_err(|e| invalid(Some(e)))?;
            Ok(UriReference::Relative(text.to_string()))
        }
        Err(e) => Err(invalid(Some(e))),
    }
}
