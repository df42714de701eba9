//! CLI command implementation
//!
//! Boot sequence:
//! 1. Apply log level
//! 2. Build a single-threaded tokio runtime
//! 3. Connect to MySQL (once; never re-created)
//! 4. Serve HTTP until Ctrl-C
//! 5. Close the connection

use std::sync::Arc;

use crate::gateway::{DatabaseConfig, MySqlConnection, QueryDispatcher, SqlConnection};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{Event, Logger};

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and runs the gateway. This is the only function that
/// main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    serve(&cli)
}

/// Run the gateway with the given arguments
pub fn serve(cli: &Cli) -> CliResult<()> {
    Logger::set_min_severity(cli.log_level);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(serve_gateway(cli.database_config(), cli.http_config()))
}

async fn serve_gateway(database: DatabaseConfig, http: HttpServerConfig) -> CliResult<()> {
    Logger::info(
        Event::BootStart,
        &[("mysql_host", database.host.as_str()), ("port", &http.port.to_string())],
    );

    let connection = MySqlConnection::connect(&database)
        .await
        .map_err(CliError::connect_failed)?;
    let connection_id = connection.connection_id();
    Logger::info(
        Event::ConnectionEstablished,
        &[(
            "connection_id",
            &connection_id.map(|id| id.to_string()).unwrap_or_default(),
        )],
    );

    let dispatcher = Arc::new(QueryDispatcher::new(Box::new(connection)));
    let server = HttpServer::new(http, dispatcher.clone());

    server
        .start(connection_id, shutdown_signal())
        .await
        .map_err(CliError::serve_failed)?;

    dispatcher.close().await;
    Logger::info(Event::ShutdownComplete, &[]);
    Ok(())
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    Logger::info(Event::ShutdownStart, &[]);
}
