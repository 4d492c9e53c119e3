use clap::Parser;
use headline_scraper::{Outcome, Pipeline, Stage};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let pipeline = match Pipeline::from_config(config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = pipeline
        .run_with_progress(args.url.as_deref(), args.output.as_deref(), report_stage)
        .await;

    match outcome {
        Outcome::Completed { .. } => {
            println!("{}", outcome);
            ExitCode::SUCCESS
        }
        Outcome::Aborted(_) => {
            println!("{}", outcome);
            ExitCode::FAILURE
        }
    }
}

fn report_stage(stage: Stage<'_>) {
    match stage {
        Stage::CheckingPermission(target) => {
            println!("Target URL: {}", target);
            println!("Checking robots.txt (best-effort)...");
        }
        Stage::Fetching(target) => ::log::info!("Fetching {}", target),
        Stage::Extracting { bytes } => {
            ::log::debug!("Page is {} bytes", bytes);
            println!("Parsing HTML and extracting headlines...");
        }
        Stage::Saving { count, path } => {
            ::log::debug!("Writing {} headlines to {}", count, path.display())
        }
    }
}
