//! CLI argument parsing using clap derive

use clap::Parser;

/// Reconcile a local configuration file against its published version
///
/// Computes what changed since the last publish and, unless --dry-run is
/// set, uploads the new configuration as a full replacement.
#[derive(Parser, Debug)]
#[command(name = "confsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Required inputs default to empty: the engine's validation is the
    // authority on missing fields and names the first empty one.
    /// Bucket holding the published configuration
    #[arg(long, env = "CONFSYNC_BUCKET", default_value = "", hide_default_value = true)]
    pub bucket: String,

    /// Path of the local desired-state configuration file
    #[arg(long, env = "CONFSYNC_SOURCE", default_value = "", hide_default_value = true)]
    pub source: String,

    /// Object key to publish the configuration under
    #[arg(long, env = "CONFSYNC_DESTINATION", default_value = "", hide_default_value = true)]
    pub destination: String,

    /// Access key for the remote store
    #[arg(
        long,
        env = "AWS_ACCESS_KEY_ID",
        default_value = "",
        hide_default_value = true,
        hide_env_values = true
    )]
    pub access_key: String,

    /// Secret key for the remote store
    #[arg(
        long,
        env = "AWS_SECRET_ACCESS_KEY",
        default_value = "",
        hide_default_value = true,
        hide_env_values = true
    )]
    pub secret_key: String,

    /// Region of the bucket
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// S3-compatible endpoint override (path-style addressing)
    #[arg(long, env = "CONFSYNC_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Compute and print the diff without publishing
    #[arg(long)]
    pub dry_run: bool,

    /// Print the diff as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
