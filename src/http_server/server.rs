//! # HTTP Server
//!
//! Binds the protocol router behind a permissive CORS layer.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use super::config::HttpServerConfig;
use super::query_routes::query_routes;
use crate::gateway::QueryDispatcher;
use crate::observability::{Event, Logger};

/// HTTP server exposing the serverless protocol
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server in front of `dispatcher`
    pub fn new(config: HttpServerConfig, dispatcher: Arc<QueryDispatcher>) -> Self {
        let router = Self::build_router(dispatcher);
        Self { config, router }
    }

    /// Build the router with CORS applied to every route
    pub fn build_router(dispatcher: Arc<QueryDispatcher>) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        query_routes(dispatcher).layer(cors)
    }

    /// Serve until `shutdown` resolves.
    ///
    /// `connection_id` only feeds the startup log line.
    pub async fn start<F>(
        self,
        connection_id: Option<u32>,
        shutdown: F,
    ) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;

        let url = self.config.public_url();
        let connection_id = connection_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Logger::info(
            Event::ServerListening,
            &[("url", url.as_str()), ("mysql_connection_id", connection_id.as_str())],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
