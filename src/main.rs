use clap::Parser;
use tracing_subscriber::EnvFilter;

use top_uploads::commands;
use top_uploads::config::{Query, load_env};

/// Runs one fixed query: the compiled-in channel, window and minimum length.
#[derive(Parser)]
#[command(name = "top-uploads")]
#[command(about = "Show a YouTube channel's most viewed recent uploads")]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() {
    // Load environment variables
    load_env();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("top_uploads=warn")),
        )
        .init();

    let _cli = Cli::parse();

    if let Err(e) = commands::top::run(&Query::default()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
