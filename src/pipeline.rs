use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::ScraperConfig;
use crate::error::{FetchError, ScrapeError};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::fetch::http::build_client;
use crate::output;
use crate::parsers::headlines;
use crate::permission::{HttpRobotsSource, PermissionCheck, RobotsSource};
use crate::results::HeadlineSequence;
use crate::target::TargetUrl;

/// Why a run stopped before saving anything
#[derive(Debug)]
pub enum AbortReason {
    /// The input could not be turned into a URL
    InvalidUrl(ScrapeError),
    /// robots.txt disallows the target path; the page was never fetched
    PermissionDenied,
    /// The page could not be retrieved
    FetchFailed(FetchError),
    /// No strategy produced a headline
    NoHeadlines,
    /// The output file could not be written
    WriteFailed { path: PathBuf, source: io::Error },
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::InvalidUrl(e) => write!(f, "{}", e),
            AbortReason::PermissionDenied => {
                write!(
                    f,
                    "Warning: robots.txt disallows scraping this path. Aborting."
                )
            }
            AbortReason::FetchFailed(e) => write!(f, "Failed to fetch page: {}", e),
            AbortReason::NoHeadlines => write!(
                f,
                "No headlines found. Try a different site or inspect the site's HTML structure."
            ),
            AbortReason::WriteFailed { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
        }
    }
}

/// Terminal state of a run
#[derive(Debug)]
pub enum Outcome {
    Completed { count: usize, path: PathBuf },
    Aborted(AbortReason),
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Completed { count, path } => {
                write!(f, "Saved {} headlines to {}", count, path.display())
            }
            Outcome::Aborted(reason) => write!(f, "{}", reason),
        }
    }
}

/// Progress notifications emitted while a run advances
#[derive(Debug)]
pub enum Stage<'a> {
    /// Input normalized; about to consult robots.txt
    CheckingPermission(&'a TargetUrl),
    /// Permission granted; about to request the page
    Fetching(&'a TargetUrl),
    /// Page retrieved; about to extract headlines
    Extracting { bytes: usize },
    /// Headlines found; about to write them
    Saving { count: usize, path: &'a Path },
}

/// Runs permission check, fetch, extraction and output in sequence
pub struct Pipeline {
    config: ScraperConfig,
    permission: PermissionCheck,
    fetcher: Box<dyn PageFetcher>,
}

impl Pipeline {
    /// Create a pipeline from explicit collaborators
    pub fn new(
        config: ScraperConfig,
        robots: Box<dyn RobotsSource>,
        fetcher: Box<dyn PageFetcher>,
    ) -> Self {
        Self {
            config,
            permission: PermissionCheck::new(robots),
            fetcher,
        }
    }

    /// Create a pipeline that talks HTTP using the configured agent and timeouts
    pub fn from_config(config: ScraperConfig) -> Result<Self, FetchError> {
        let client = build_client(&config.user_agent)?;

        let robots = HttpRobotsSource::new(client.clone(), config.robots_timeout());
        let fetcher = HttpFetcher::with_client(client);

        Ok(Self::new(config, Box::new(robots), Box::new(fetcher)))
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Run once; `None` arguments fall back to the configured defaults
    pub async fn run(&self, url: Option<&str>, output: Option<&Path>) -> Outcome {
        self.run_with_progress(url, output, |_| {}).await
    }

    /// Run once, reporting each stage to `progress` before it starts
    pub async fn run_with_progress<F>(
        &self,
        url: Option<&str>,
        output: Option<&Path>,
        mut progress: F,
    ) -> Outcome
    where
        F: FnMut(Stage<'_>),
    {
        let input = url.unwrap_or(self.config.default_url.as_str());
        let path = output.unwrap_or(self.config.default_output.as_path());

        let target = match TargetUrl::parse(input) {
            Ok(target) => target,
            Err(e) => return self.abort(AbortReason::InvalidUrl(e)),
        };

        progress(Stage::CheckingPermission(&target));
        let allowed = self
            .permission
            .is_allowed(&target, &self.config.robots_agent, target.path())
            .await;
        if !allowed {
            return self.abort(AbortReason::PermissionDenied);
        }

        progress(Stage::Fetching(&target));
        let page = match self.fetcher.fetch(target.as_str(), self.config.timeout()).await {
            Ok(page) => page,
            Err(e) => return self.abort(AbortReason::FetchFailed(e)),
        };

        progress(Stage::Extracting { bytes: page.len() });
        let headlines = self.extract(page);
        if headlines.is_empty() {
            return self.abort(AbortReason::NoHeadlines);
        }

        progress(Stage::Saving {
            count: headlines.len(),
            path,
        });
        if let Err(source) = output::save_headlines(path, &headlines) {
            return self.abort(AbortReason::WriteFailed {
                path: path.to_path_buf(),
                source,
            });
        }

        ::log::info!("Saved {} headlines from {}", headlines.len(), target);
        Outcome::Completed {
            count: headlines.len(),
            path: path.to_path_buf(),
        }
    }

    // Takes the page by value; it is dropped once parsed
    fn extract(&self, page: String) -> HeadlineSequence {
        headlines::extract_with_options(&page, &self.config.extractor)
    }

    fn abort(&self, reason: AbortReason) -> Outcome {
        ::log::info!("Run aborted: {}", reason);
        Outcome::Aborted(reason)
    }
}
