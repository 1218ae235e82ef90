use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Port used when neither `--port` nor `PORT` is set
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable selecting the listen port
pub const PORT_ENV: &str = "PORT";

/// Command line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "memkv", version, about = "In-memory key-value store over HTTP")]
pub struct Args {
  /// Address to listen on
  #[arg(long, default_value = "0.0.0.0")]
  pub host: String,

  /// Port to listen on, overrides the PORT environment variable
  #[arg(short, long)]
  pub port: Option<u16>,

  /// Log level, used when RUST_LOG is not set
  #[arg(long, default_value_t = default_log_level())]
  pub log_level: String,
}

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
  /// Log level, default is "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
    }
  }
}

/// memkv server configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
  /// Server listening address (HTTP)
  pub server_addr: String,

  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,
}

impl Config {
  /// Build configuration from command line arguments and the process environment
  pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
    Self::resolve(args, |name| std::env::var(name).ok())
  }

  /// Build configuration, reading environment variables through `lookup`.
  ///
  /// `--port` wins over `PORT`; an unset or empty `PORT` falls back to
  /// [`DEFAULT_PORT`].
  pub fn resolve<F>(args: &Args, lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let port = match args.port {
      Some(port) => port,
      None => match lookup(PORT_ENV).filter(|v| !v.is_empty()) {
        Some(value) => value
          .trim()
          .parse::<u16>()
          .map_err(|source| ConfigError::InvalidPort { value, source })?,
        None => DEFAULT_PORT,
      },
    };

    Ok(Config {
      server_addr: format!("{}:{}", args.host, port),
      log: LogConfig {
        level: args.log_level.clone(),
      },
    })
  }
}
