//! # HTTP Server Module
//!
//! The request router in front of the query dispatcher.
//!
//! # Endpoints
//!
//! - `GET /` - Health check
//! - `POST /` - Execute `{"query": "<SQL>"}`
//! - `OPTIONS *` - Empty 200
//! - anything else - Empty 404

pub mod config;
pub mod errors;
pub mod query_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::ErrorResponse;
pub use query_routes::parse_query_body;
pub use server::HttpServer;
