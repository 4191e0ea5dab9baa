//! Store errors - the failure taxonomy shared by every backend
//!
//! "Not found" is deliberately absent: lookups for a missing id return
//! `Ok(None)` so callers can branch without error-handling machinery.

use thiserror::Error;

/// Store layer errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Required text fields missing or blank on create/update; raised before
    /// any write occurs
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration or connectivity failure (missing credentials, pool
    /// timeout, I/O); fatal to the operation, never retried internally
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Any other storage-layer failure, propagated unchanged
    #[error("Database error: {0}")]
    Database(String),
}

impl StoreError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BackendUnavailable(_) => "BACKEND_UNAVAILABLE",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a configuration/connectivity failure
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::BackendUnavailable(_))
    }
}
