//! # Gateway Errors
//!
//! Error types for query dispatch and the underlying connection.

use thiserror::Error;

use crate::protocol::QueryError;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Outcome of a dispatch that did not produce a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    // ==================
    // Client Errors
    // ==================
    /// Request body unparseable, or `query` absent or empty
    #[error("Invalid query")]
    InvalidQuery,

    // ==================
    // Execution Errors
    // ==================
    /// Nested `BEGIN` on the shared connection
    #[error("Transaction in progress!")]
    TransactionInProgress,

    /// Native database failure
    #[error("{}", .0.message)]
    Execution(QueryError),

    /// The shared connection was lost and is never re-created
    #[error("Database connection unavailable")]
    ConnectionUnavailable,
}

/// Failure reported by a [`SqlConnection`](super::SqlConnection)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// Error packet returned by the server
    #[error("{message}")]
    Server {
        code: u16,
        state: String,
        message: String,
    },

    /// Client-side driver failure; the connection is still usable
    #[error("{0}")]
    Client(String),

    /// Transport lost; the connection is unusable
    #[error("connection lost: {0}")]
    Disconnected(String),
}

impl ConnectionError {
    pub fn is_disconnect(&self) -> bool {
        matches!(self, ConnectionError::Disconnected(_))
    }

    /// Build the client-facing error for a failed statement
    pub fn to_query_error(&self, sql: &str) -> QueryError {
        match self {
            ConnectionError::Server {
                code,
                state,
                message,
            } => QueryError::native(message, *code, state, sql),
            ConnectionError::Client(message) | ConnectionError::Disconnected(message) => {
                QueryError::client(message, sql)
            }
        }
    }
}

impl From<mysql_async::Error> for ConnectionError {
    fn from(err: mysql_async::Error) -> Self {
        match err {
            mysql_async::Error::Server(server) => ConnectionError::Server {
                code: server.code,
                state: server.state,
                message: server.message,
            },
            mysql_async::Error::Io(io) => ConnectionError::Disconnected(io.to_string()),
            mysql_async::Error::Driver(mysql_async::DriverError::ConnectionClosed) => {
                ConnectionError::Disconnected("connection closed".to_string())
            }
            other => ConnectionError::Client(other.to_string()),
        }
    }
}
