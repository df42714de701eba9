//! CLI argument definitions using clap
//!
//! planetlocal [--user <u>] [--password <p>] [--database <db>] [--port <n>]

use clap::Parser;

use crate::gateway::DatabaseConfig;
use crate::http_server::config::{HttpServerConfig, DEFAULT_PORT};
use crate::observability::Severity;

/// planetlocal - serve the PlanetScale HTTP protocol from a local MySQL
#[derive(Parser, Debug)]
#[command(name = "planetlocal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// MySQL user
    #[arg(long)]
    pub user: Option<String>,

    /// MySQL password
    #[arg(long)]
    pub password: Option<String>,

    /// Default database
    #[arg(long)]
    pub database: Option<String>,

    /// HTTP port; non-numeric values fall back to 4545
    #[arg(long)]
    pub port: Option<String>,

    /// MySQL host
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Minimum log severity (trace, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: Severity,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// HTTP port, falling back to the default on missing or bad input
    pub fn http_port(&self) -> u16 {
        parse_port(self.port.as_deref())
    }

    pub fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig::with_port(self.http_port())
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            host: self.host.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
            database: self.database.clone(),
            ..Default::default()
        }
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
