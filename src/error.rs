//! Error handling module
//!
//! Provides the error types shared by the connection lifecycle and the
//! driver adapters.

use thiserror::Error;

/// Any failure communicating with, or managing, a database connection
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Database error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("TLS error: {0}")]
    Tls(String),

    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("Invalid connection string: {0}")]
    InvalidUrl(String),

    #[error("Driver error: {0}")]
    Driver(String),

    #[error("Connection is closed")]
    Closed,

    #[error("No connection is attached")]
    NotAttached,

    #[error("A connection is already attached")]
    AlreadyAttached,
}

/// Result type alias for connection operations
pub type ConnectionResult<T> = Result<T, ConnectionError>;

/// Helper function to create a driver error
pub fn driver_error(msg: impl Into<String>) -> ConnectionError {
    ConnectionError::Driver(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ConnectionError::Closed.to_string(), "Connection is closed");
        assert_eq!(
            driver_error("socket reset").to_string(),
            "Driver error: socket reset"
        );
        assert_eq!(
            ConnectionError::InvalidUrl("missing host".into()).to_string(),
            "Invalid connection string: missing host"
        );
    }
}
