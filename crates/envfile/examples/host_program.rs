//! A host program embedding envfile.
//!
//! Run from a directory containing a `.env` such as:
//!
//! ```text
//! HOST=localhost
//! PORT=8080
//! DEBUG=true
//! ```
//!
//! Set `RUST_LOG=envfile=debug` to see which variables were applied.

use anyhow::Context;
use envfile::{EnvRecord, LoadOutcome};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(EnvRecord, Debug, Default)]
struct ServerConfig {
    #[env("HOST")]
    host: String,
    #[env("PORT")]
    port: u16,
    #[env("DEBUG")]
    debug: bool,
    // Not bound to a variable; keeps its default.
    workers: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    match envfile::load().context("Failed to load environment")? {
        LoadOutcome::Loaded { path, variables } => {
            tracing::info!("Applied {} variables from {}", variables, path.display());
        }
        LoadOutcome::NotFound { .. } => tracing::info!("No .env file, using process environment"),
        LoadOutcome::Disabled => tracing::info!("Env file loading disabled"),
    }

    let mut config = ServerConfig {
        workers: 4,
        ..ServerConfig::default()
    };
    envfile::populate(&mut config).context("Failed to read server configuration")?;

    println!("HOST: {}", config.host);
    println!("PORT: {}", config.port);
    println!("DEBUG: {}", config.debug);
    println!("WORKERS: {}", config.workers);
    Ok(())
}
