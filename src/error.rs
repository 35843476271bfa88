//! Error types for geoquery
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using GeoQueryError
pub type Result<T> = std::result::Result<T, GeoQueryError>;

/// Unified error type for geoquery operations
#[derive(Debug, Error)]
pub enum GeoQueryError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Database Errors
    // -------------------------------------------------------------------------
    #[error("Database error: {0}")]
    Database(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),
}
