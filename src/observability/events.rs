//! Observable gateway events
//!
//! Every log line names exactly one of these.

use std::fmt;

/// Observable events in the gateway lifecycle and request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Process startup begins
    BootStart,
    /// MySQL handshake succeeded
    ConnectionEstablished,
    /// HTTP listener bound, ready to serve
    ServerListening,
    /// Shutdown initiated
    ShutdownStart,
    /// Shutdown complete
    ShutdownComplete,
    /// Closing the MySQL connection failed during shutdown
    DisconnectFailed,

    // Request path
    /// Query executed successfully
    QueryComplete,
    /// Request carried no usable query
    QueryRejected,
    /// Native database error
    QueryFailed,
    /// Nested BEGIN refused
    TransactionRejected,
    /// Shared connection lost; every later query fails
    ConnectionLost,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConnectionEstablished => "CONNECTION_ESTABLISHED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::DisconnectFailed => "DISCONNECT_FAILED",

            Event::QueryComplete => "QUERY_COMPLETE",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::QueryFailed => "QUERY_FAILED",
            Event::TransactionRejected => "TRANSACTION_REJECTED",
            Event::ConnectionLost => "CONNECTION_LOST",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
