//! Traits (ports) - define the interface for data access

mod store;

pub use store::{AutomationStore, StoreResult};
