//! Query gateway
//!
//! Runs protocol queries against the single shared MySQL connection:
//! - `transaction`: at-most-one-open-transaction guard
//! - `connection`: execution seam and the live MySQL implementation
//! - `dispatcher`: guard + execute + result assembly

pub mod config;
pub mod connection;
pub mod dispatcher;
pub mod errors;
pub mod transaction;

pub use config::DatabaseConfig;
pub use connection::{Execution, MySqlConnection, SqlConnection};
pub use dispatcher::QueryDispatcher;
pub use errors::{ConnectionError, GatewayError, GatewayResult};
pub use transaction::{guard, TransactionBoundary, TransactionState};
