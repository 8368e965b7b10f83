//! dabuild-config - inspect the Debathena build configuration

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dabuild_cli::cmd;
use dabuild_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let json = cli.json;

    match &cli.command {
        Commands::Releases => cmd::releases::releases(&config, json),
        Commands::Arches { release } => cmd::arches::arches(&config, release, json),
        Commands::Packages { name } => cmd::packages::packages(&config, name.as_deref(), json),
        Commands::Paths => cmd::paths::paths(&config, json),
        Commands::Dump => cmd::dump::dump(&config),
    }
}
