use std::process;

use clap::Parser;
use kintsugi::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries command output only.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute().await {
        eprintln!("Error: {e}");
        for cause in e.chain().skip(1) {
            eprintln!("  Caused by: {cause}");
        }
        process::exit(1);
    }
}
