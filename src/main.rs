use std::path::Path;

use clap::Parser;
use jellysync::{AppError, Config};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "jellysync")]
#[command(version)]
#[command(
    about = "Upload local .m4v media to a remote media server and back the files up",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run() {
        tracing::error!(error = %e, "run failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    jellysync::logging::init(LevelFilter::DEBUG, Path::new(jellysync::logging::LOG_FILE))?;

    let config = Config::load_default()?;
    let summary = jellysync::run(&config)?;
    tracing::info!(
        uploaded = summary.uploaded,
        relocated = summary.relocated,
        "run complete"
    );
    Ok(())
}
