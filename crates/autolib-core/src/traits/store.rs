//! Store trait (port) - the contract between callers and persistence
//!
//! The domain layer defines what it needs, and each backend (in-memory,
//! PostgreSQL) provides an implementation. Both must uphold the same
//! invariants: unique ids, immutable submission timestamps, one reaction
//! entry per distinct emoji, and a derived tag index.

use async_trait::async_trait;

use crate::entities::{Automation, NewAutomation};
use crate::error::StoreError;
use crate::value_objects::AutomationId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Sole gateway between the view layer and persisted automation data
#[async_trait]
pub trait AutomationStore: Send + Sync {
    /// List every automation, newest submission first
    async fn list_all(&self) -> StoreResult<Vec<Automation>>;

    /// List automations carrying `tag`, preserving the `list_all` order
    async fn list_by_tag(&self, tag: &str) -> StoreResult<Vec<Automation>>;

    /// Find one automation by id; `None` when no record matches
    async fn find_by_id(&self, id: AutomationId) -> StoreResult<Option<Automation>>;

    /// Validate and persist a new automation; assigns a fresh id, stamps the
    /// submission time, and starts with no reactions
    async fn create(&self, input: NewAutomation) -> StoreResult<Automation>;

    /// Replace all mutable fields of the identified record, preserving id,
    /// submission time, and reactions; `None` when no record matches
    async fn update(&self, id: AutomationId, input: NewAutomation)
        -> StoreResult<Option<Automation>>;

    /// Increment the reaction counter for `emoji` by exactly one (inserting
    /// it at 1 if absent); `None` when no record matches
    async fn add_reaction(&self, id: AutomationId, emoji: &str)
        -> StoreResult<Option<Automation>>;

    /// Sorted, de-duplicated union of every tag on any automation
    async fn all_tags(&self) -> StoreResult<Vec<String>>;
}
