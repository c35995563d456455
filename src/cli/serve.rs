//! `taskwell serve` command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::serve::Server;

#[derive(Parser)]
pub struct ServeArgs {
    /// Listen host
    #[arg(long, env = "TASKWELL_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Listen port
    #[arg(long, env = "TASKWELL_PORT", default_value_t = 5000)]
    port: u16,
}

impl ServeArgs {
    /// Defaults plus `TASKWELL_*` env overrides, for when no subcommand
    /// is given.
    pub fn from_env() -> Self {
        Self::parse_from(["taskwell"])
    }
}

pub async fn run(data_file: &Option<PathBuf>, args: ServeArgs) -> Result<()> {
    let store = super::open_store(data_file)?;
    tracing::info!("task file: {}", store.path().display());

    let server = Server::start(&args.host, args.port, store).await?;
    server.wait().await
}
