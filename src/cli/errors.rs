//! CLI-specific error types
//!
//! All CLI errors are fatal: printed to stderr, exit status 1.

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Runtime or listener could not start
    BootFailed,
    /// MySQL handshake failed
    ConnectFailed,
    /// HTTP server stopped with an error
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::BootFailed => "PLANETLOCAL_CLI_BOOT_FAILED",
            Self::ConnectFailed => "PLANETLOCAL_CLI_CONNECT_FAILED",
            Self::ServeFailed => "PLANETLOCAL_CLI_SERVE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Handshake with MySQL failed
    pub fn connect_failed(msg: impl fmt::Display) -> Self {
        Self::new(
            CliErrorCode::ConnectFailed,
            format!("Error connecting: {}", msg),
        )
    }

    /// HTTP server failed
    pub fn serve_failed(msg: impl fmt::Display) -> Self {
        Self::new(CliErrorCode::ServeFailed, format!("HTTP server failed: {}", msg))
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
