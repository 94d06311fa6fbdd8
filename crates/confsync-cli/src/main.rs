//! confsync CLI
//!
//! Reconciles a local configuration file against the version published in
//! a remote bucket, prints what changed, and publishes the new version
//! unless running dry.

mod cli;
mod error;
mod output;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use confsync_core::{SyncEngine, SyncInputs};
use confsync_store::{S3Config, S3Store};

use cli::Cli;
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let store = S3Store::new(S3Config {
        access_key: cli.access_key.clone(),
        secret_key: cli.secret_key.clone(),
        region: cli.region.clone(),
        endpoint: cli.endpoint.clone(),
    });

    let inputs = SyncInputs {
        bucket: cli.bucket,
        source: cli.source,
        destination: cli.destination,
        access_key: cli.access_key,
        secret_key: cli.secret_key,
        region: cli.region,
        dry_run: cli.dry_run,
    };

    let engine = SyncEngine::new(inputs, Box::new(store))?;
    let report = engine.run().await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report);
    }

    Ok(())
}
