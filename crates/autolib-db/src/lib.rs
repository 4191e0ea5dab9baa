//! # autolib-db
//!
//! Database layer implementing the `AutomationStore` contract with
//! PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers, including batch child-row grouping
//! - The `PgAutomationStore` repository
//!
//! The table layout is fixed (see `schema.sql`): an `automations` parent
//! table with array-typed `tags`/`images`, an `automation_links` child
//! table, and a `reactions` child table with one counter row per
//! `(automation_id, emoji)` pair.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use autolib_db::{create_pool, DatabaseConfig, PgAutomationStore};
//! use autolib_core::AutomationStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let store = PgAutomationStore::new(pool);
//!
//!     let all = store.list_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::PgAutomationStore;
