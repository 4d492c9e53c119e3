use crate::error::ScrapeError;
use std::fmt;
use url::Url;

/// Scheme assumed when the input does not name one
pub const DEFAULT_SCHEME: &str = "https";

/// A normalized page address: always carries a scheme and a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl {
    url: Url,
}

impl TargetUrl {
    /// Parse user input, prefixing `https://` when no scheme is given.
    ///
    /// `example.com/news` and `https://example.com/news` produce the same target.
    pub fn parse(input: &str) -> Result<Self, ScrapeError> {
        let input = input.trim();

        let url = match Url::parse(input) {
            // "localhost:8080/x" parses with "localhost" as the scheme
            Ok(url) if url.cannot_be_a_base() && !input.contains("://") => {
                Self::parse_with_default_scheme(input)?
            }
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => Self::parse_with_default_scheme(input)?,
            Err(source) => {
                return Err(ScrapeError::InvalidUrl {
                    input: input.to_string(),
                    source,
                });
            }
        };

        if url.host_str().is_none_or(str::is_empty) {
            return Err(ScrapeError::MissingHost(input.to_string()));
        }

        ::log::debug!("Normalized '{}' to {}", input, url);
        Ok(Self { url })
    }

    fn parse_with_default_scheme(input: &str) -> Result<Url, ScrapeError> {
        let prefixed = format!("{}://{}", DEFAULT_SCHEME, input);
        Url::parse(&prefixed).map_err(|source| ScrapeError::InvalidUrl {
            input: input.to_string(),
            source,
        })
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// Path component, `/` when the URL has none
    pub fn path(&self) -> &str {
        match self.url.path() {
            "" => "/",
            path => path,
        }
    }

    /// Location of the site's robots document (`/robots.txt` at the origin).
    ///
    /// Fails for schemes without a network origin, which serialize as `null`.
    pub fn robots_url(&self) -> Result<Url, url::ParseError> {
        let origin = self.url.origin().ascii_serialization();
        Url::parse(&origin)?.join("/robots.txt")
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}
