//! Error types for the store contract

mod store_error;

pub use store_error::StoreError;
