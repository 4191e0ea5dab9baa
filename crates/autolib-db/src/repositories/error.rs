//! Error handling utilities for repositories

use autolib_core::StoreError;
use sqlx::Error as SqlxError;

/// Convert a SQLx error to a StoreError
///
/// Connectivity and configuration failures become `BackendUnavailable` so
/// callers can distinguish "the backend is down/misconfigured" from a query
/// that genuinely failed.
pub fn map_db_error(e: SqlxError) -> StoreError {
    match e {
        SqlxError::Configuration(_)
        | SqlxError::Io(_)
        | SqlxError::Tls(_)
        | SqlxError::PoolTimedOut
        | SqlxError::PoolClosed => StoreError::BackendUnavailable(e.to_string()),
        _ => StoreError::Database(e.to_string()),
    }
}
