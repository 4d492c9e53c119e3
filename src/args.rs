use clap::Parser;
use headline_scraper::ScraperConfig;
use headline_scraper::error::ConfigError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "headline-scraper")]
#[command(about = "Fetches a web page and saves its headlines, one per line")]
#[command(version)]
pub struct Args {
    /// Page to scrape; `https://` is assumed when no scheme is given
    pub url: Option<String>,

    /// File to write the headlines to
    pub output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Page fetch timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// User-Agent header sent with requests
    #[arg(long)]
    pub user_agent: Option<String>,
}

impl Args {
    /// Resolve configuration: file, then environment, then flags
    pub fn load_config(&self) -> Result<ScraperConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => ScraperConfig::from_file(path)?,
            None => ScraperConfig::default(),
        };

        let mut config = config.with_env_overrides();
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        Ok(config)
    }
}
