//! In-memory implementation of AutomationStore

use async_trait::async_trait;
use std::collections::BTreeSet;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use autolib_core::{
    Automation, AutomationId, AutomationIdGenerator, AutomationStore, NewAutomation, StoreResult,
};

use crate::seed::seed_automations;

/// In-memory implementation of AutomationStore
///
/// One instance owns all records for the lifetime of the process. Reads take
/// the shared guard; every mutation takes the exclusive guard, so a
/// read-modify-write like `add_reaction` cannot interleave with another
/// writer.
pub struct MemoryAutomationStore {
    records: RwLock<Vec<Automation>>,
    ids: AutomationIdGenerator,
}

impl MemoryAutomationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store pre-loaded with the reference dataset
    pub fn seeded() -> Self {
        Self::with_records(seed_automations())
    }

    /// Create a store holding the given records
    pub fn with_records(records: Vec<Automation>) -> Self {
        Self {
            records: RwLock::new(records),
            ids: AutomationIdGenerator::new(),
        }
    }

    fn newest_first(mut records: Vec<Automation>) -> Vec<Automation> {
        records.sort_by(|a, b| {
            b.submission_date
                .cmp(&a.submission_date)
                .then(b.id.cmp(&a.id))
        });
        records
    }
}

impl Default for MemoryAutomationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AutomationStore for MemoryAutomationStore {
    #[instrument(skip(self))]
    async fn list_all(&self) -> StoreResult<Vec<Automation>> {
        let records = self.records.read().await;
        Ok(Self::newest_first(records.clone()))
    }

    #[instrument(skip(self))]
    async fn list_by_tag(&self, tag: &str) -> StoreResult<Vec<Automation>> {
        let all = self.list_all().await?;
        Ok(all.into_iter().filter(|a| a.has_tag(tag)).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: AutomationId) -> StoreResult<Option<Automation>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|a| a.id == id).cloned())
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: NewAutomation) -> StoreResult<Automation> {
        input.validated()?;

        let id = self.ids.generate();
        let automation = Automation::submitted(id, input);

        let mut records = self.records.write().await;
        records.push(automation.clone());

        info!(id = %id, title = %automation.title, "Automation created");
        Ok(automation)
    }

    #[instrument(skip(self, input))]
    async fn update(
        &self,
        id: AutomationId,
        input: NewAutomation,
    ) -> StoreResult<Option<Automation>> {
        input.validated()?;

        let mut records = self.records.write().await;
        let Some(existing) = records.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        existing.apply(input);
        let updated = existing.clone();

        info!(id = %id, "Automation updated");
        Ok(Some(updated))
    }

    #[instrument(skip(self))]
    async fn add_reaction(
        &self,
        id: AutomationId,
        emoji: &str,
    ) -> StoreResult<Option<Automation>> {
        let mut records = self.records.write().await;
        let Some(existing) = records.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        existing.react(emoji);
        let updated = existing.clone();

        info!(id = %id, emoji = %emoji, "Reaction added");
        Ok(Some(updated))
    }

    #[instrument(skip(self))]
    async fn all_tags(&self) -> StoreResult<Vec<String>> {
        let records = self.records.read().await;
        let tags: BTreeSet<String> = records
            .iter()
            .flat_map(|a| a.tags.iter().cloned())
            .collect();
        Ok(tags.into_iter().collect())
    }
}
