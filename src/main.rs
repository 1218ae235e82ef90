mod config;
mod error;
mod protocol;
mod server;
mod store;

use anyhow::Context;
use clap::Parser;
use config::{Args, Config};
use server::Server;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let args = Args::parse();
  let config = Config::from_args(&args)?;

  // Initialize logging
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level)),
    )
    .with_target(true)
    .with_thread_ids(true)
    .init();

  info!("Starting memkv - in-memory key-value store");
  info!("Version: {}", env!("CARGO_PKG_VERSION"));

  let server = Server::bind(&config.server_addr)
    .await
    .with_context(|| format!("failed to bind {}", config.server_addr))?;
  info!("Server listening on: {}", server.local_addr());

  let store = server.store();
  server.run(server::shutdown_signal()).await?;
  info!("Discarding {} entries on shutdown", store.len());

  Ok(())
}
