use thiserror::Error;

/// Failure to retrieve a page
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{status} returned by {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{0}")]
    Other(String),
}

/// Failure to retrieve or parse a robots document.
///
/// Never reaches the user: the permission check resolves it to "allowed".
#[derive(Error, Debug)]
pub enum RobotsError {
    #[error("robots request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("robots document returned {0}")]
    Status(reqwest::StatusCode),

    #[error("robots document could not be parsed: {0}")]
    Parse(String),
}

/// Failure to load a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to turn user input into a target
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Invalid URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL '{0}' has no host")]
    MissingHost(String),
}
