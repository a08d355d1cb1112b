//! Main entry point for the AIWF client CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aiwf_client::cli::commands::{execute, Commands};
use aiwf_client::cli::demo::write_error;
use aiwf_client::{AiwfClient, ClientConfig};

/// AIWF Client - call agents served by `aiwf serve`
#[derive(Parser, Debug)]
#[command(name = "aiwf-client", version, about, long_about = None)]
struct Args {
    /// Server base URL (defaults to AIWF_BASE_URL or http://127.0.0.1:8080)
    #[arg(long)]
    base_url: Option<String>,

    /// API key sent as X-API-Key (defaults to AIWF_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Client config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}={}", env!("CARGO_CRATE_NAME"), default_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut stdout = std::io::stdout();

    if let Err(err) = run(args, &mut stdout).await {
        if let Err(io_err) = write_error(&mut stdout, &err) {
            eprintln!("Failed to write error report: {}", io_err);
        }
        std::process::exit(1);
    }
}

async fn run(args: Args, out: &mut std::io::Stdout) -> anyhow::Result<()> {
    let mut config = ClientConfig::load_from(args.config.as_deref())?;

    // Override config with CLI args if provided
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(api_key) = args.api_key {
        config.api_key = Some(api_key);
    }

    let client = AiwfClient::new(config)?;
    let command = args.command.unwrap_or(Commands::Demo);

    execute(&client, command, out).await
}
