// Re-export modules
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod parsers;
pub mod permission;
pub mod pipeline;
pub mod results;
pub mod target;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::{FetchError, ScrapeError};
pub use parsers::headlines::{ExtractorOptions, extract};
pub use pipeline::{AbortReason, Outcome, Pipeline, Stage};
pub use results::HeadlineSequence;
pub use target::TargetUrl;
