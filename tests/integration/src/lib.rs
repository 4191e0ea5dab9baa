//! Integration test utilities for the automation library
//!
//! This crate provides fixtures for exercising the store contract
//! end-to-end against the in-memory backend. The PostgreSQL twin of these
//! assertions lives in `autolib-db/tests` and runs when DATABASE_URL is set.

pub mod fixtures;

pub use fixtures::*;
