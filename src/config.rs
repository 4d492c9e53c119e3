use crate::error::ConfigError;
use crate::parsers::headlines::ExtractorOptions;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the default target URL
pub const URL_ENV: &str = "HEADLINES_URL";

/// Environment variable overriding the default output path
pub const OUTPUT_ENV: &str = "HEADLINES_OUTPUT";

/// Configuration for a scraping run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// URL scraped when none is given on the command line
    #[serde(default = "default_url")]
    pub default_url: String,

    /// File written when no output path is given
    #[serde(default = "default_output")]
    pub default_output: PathBuf,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Agent name evaluated against robots.txt rules
    #[serde(default = "default_robots_agent")]
    pub robots_agent: String,

    /// Page fetch timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Robots document retrieval timeout in seconds
    #[serde(default = "default_robots_timeout_secs")]
    pub robots_timeout_secs: u64,

    /// Headline length thresholds
    #[serde(default)]
    pub extractor: ExtractorOptions,
}

/// Default value for default_url
fn default_url() -> String {
    "https://www.bbc.com/news".to_string()
}

/// Default value for default_output
fn default_output() -> PathBuf {
    PathBuf::from("headlines.txt")
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; NewsScraper/1.0; +https://example.com/bot)".to_string()
}

fn default_robots_agent() -> String {
    "NewsScraper/1.0".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_robots_timeout_secs() -> u64 {
    5
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            default_url: default_url(),
            default_output: default_output(),
            user_agent: default_user_agent(),
            robots_agent: default_robots_agent(),
            timeout_secs: default_timeout_secs(),
            robots_timeout_secs: default_robots_timeout_secs(),
            extractor: ExtractorOptions::default(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply `HEADLINES_URL` and `HEADLINES_OUTPUT` if set and non-empty
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(URL_ENV).filter(|v| !v.is_empty()) {
            ::log::debug!("Default URL overridden by {}", URL_ENV);
            self.default_url = url;
        }
        if let Some(output) = lookup(OUTPUT_ENV).filter(|v| !v.is_empty()) {
            ::log::debug!("Default output overridden by {}", OUTPUT_ENV);
            self.default_output = PathBuf::from(output);
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn robots_timeout(&self) -> Duration {
        Duration::from_secs(self.robots_timeout_secs)
    }
}
