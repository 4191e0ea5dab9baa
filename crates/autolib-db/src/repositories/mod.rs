//! Repository implementations
//!
//! PostgreSQL implementation of the `AutomationStore` contract defined in
//! autolib-core.

mod automation;
mod error;

pub use automation::PgAutomationStore;
