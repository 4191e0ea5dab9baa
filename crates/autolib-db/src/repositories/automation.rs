//! PostgreSQL implementation of AutomationStore

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, instrument};

use autolib_core::{
    Automation, AutomationId, AutomationIdGenerator, AutomationStore, NewAutomation, StoreError,
    StoreResult,
};

use crate::mappers::group_children;
use crate::models::{AutomationModel, LinkModel, ReactionModel};

use super::error::map_db_error;

/// PostgreSQL implementation of AutomationStore
///
/// Reads re-assemble the denormalized `Automation` view from normalized
/// storage: one parent query plus one batch query per child table, grouped
/// in memory. Writes that span tables run inside a transaction.
#[derive(Clone)]
pub struct PgAutomationStore {
    pool: PgPool,
    ids: Arc<AutomationIdGenerator>,
}

impl PgAutomationStore {
    /// Create a new PgAutomationStore
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            ids: Arc::new(AutomationIdGenerator::new()),
        }
    }

    /// Batch-fetch child rows for a set of parent ids
    async fn fetch_children(
        &self,
        ids: &[i64],
    ) -> StoreResult<(Vec<LinkModel>, Vec<ReactionModel>)> {
        let links = sqlx::query_as::<_, LinkModel>(
            r#"
            SELECT automation_id, title, url
            FROM automation_links
            WHERE automation_id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let reactions = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT automation_id, emoji, count
            FROM reactions
            WHERE automation_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok((links, reactions))
    }

    /// Join a page of parent rows with their children
    async fn assemble_page(&self, models: Vec<AutomationModel>) -> StoreResult<Vec<Automation>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let (links, reactions) = self.fetch_children(&ids).await?;
        Ok(group_children(models, links, reactions))
    }

    /// Re-read one automation after a write, treating absence as a
    /// storage-level failure (the row was just written)
    async fn reload(&self, id: AutomationId) -> StoreResult<Automation> {
        self.find_by_id(id).await?.ok_or_else(|| {
            StoreError::Database(format!("automation {id} missing after write"))
        })
    }
}

#[async_trait]
impl AutomationStore for PgAutomationStore {
    #[instrument(skip(self))]
    async fn list_all(&self) -> StoreResult<Vec<Automation>> {
        let models = sqlx::query_as::<_, AutomationModel>(
            r#"
            SELECT id, title, description, student_name, submission_date,
                   tags, images, setup_instructions, installation_code
            FROM automations
            ORDER BY submission_date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.assemble_page(models).await
    }

    #[instrument(skip(self))]
    async fn list_by_tag(&self, tag: &str) -> StoreResult<Vec<Automation>> {
        let models = sqlx::query_as::<_, AutomationModel>(
            r#"
            SELECT id, title, description, student_name, submission_date,
                   tags, images, setup_instructions, installation_code
            FROM automations
            WHERE $1 = ANY(tags)
            ORDER BY submission_date DESC, id DESC
            "#,
        )
        .bind(tag)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.assemble_page(models).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: AutomationId) -> StoreResult<Option<Automation>> {
        let model = sqlx::query_as::<_, AutomationModel>(
            r#"
            SELECT id, title, description, student_name, submission_date,
                   tags, images, setup_instructions, installation_code
            FROM automations
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(model) = model else {
            return Ok(None);
        };

        Ok(self.assemble_page(vec![model]).await?.into_iter().next())
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: NewAutomation) -> StoreResult<Automation> {
        input.validated()?;

        let id = self.ids.generate();
        let submission_date = Utc::now();

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO automations
                (id, title, description, student_name, submission_date,
                 tags, images, setup_instructions, installation_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(id.into_inner())
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.student_name)
        .bind(submission_date)
        .bind(&input.tags)
        .bind(&input.images)
        .bind(&input.setup_instructions)
        .bind(&input.installation_code)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for link in &input.links {
            sqlx::query(
                r#"
                INSERT INTO automation_links (automation_id, title, url)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(id.into_inner())
            .bind(&link.title)
            .bind(&link.url)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        info!(id = %id, title = %input.title, "Automation created");

        self.reload(id).await
    }

    #[instrument(skip(self, input))]
    async fn update(
        &self,
        id: AutomationId,
        input: NewAutomation,
    ) -> StoreResult<Option<Automation>> {
        input.validated()?;

        // Field update and link replacement commit together: a failure
        // anywhere rolls the whole operation back, so the record can never
        // be observed linkless mid-replacement.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE automations
            SET title = $2, description = $3, student_name = $4,
                tags = $5, images = $6, setup_instructions = $7,
                installation_code = $8
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.student_name)
        .bind(&input.tags)
        .bind(&input.images)
        .bind(&input.setup_instructions)
        .bind(&input.installation_code)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(None);
        }

        sqlx::query("DELETE FROM automation_links WHERE automation_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        for link in &input.links {
            sqlx::query(
                r#"
                INSERT INTO automation_links (automation_id, title, url)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(id.into_inner())
            .bind(&link.title)
            .bind(&link.url)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        info!(id = %id, "Automation updated");

        self.reload(id).await.map(Some)
    }

    #[instrument(skip(self))]
    async fn add_reaction(
        &self,
        id: AutomationId,
        emoji: &str,
    ) -> StoreResult<Option<Automation>> {
        let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM automations WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        if exists.is_none() {
            return Ok(None);
        }

        // Check-and-increment as one statement: concurrent first reactions
        // for the same emoji collapse onto the unique (automation_id, emoji)
        // row instead of double-inserting, and concurrent increments each
        // land exactly once.
        sqlx::query(
            r#"
            INSERT INTO reactions (automation_id, emoji, count)
            VALUES ($1, $2, 1)
            ON CONFLICT (automation_id, emoji)
            DO UPDATE SET count = reactions.count + 1
            "#,
        )
        .bind(id.into_inner())
        .bind(emoji)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        info!(id = %id, emoji = %emoji, "Reaction added");

        self.reload(id).await.map(Some)
    }

    #[instrument(skip(self))]
    async fn all_tags(&self) -> StoreResult<Vec<String>> {
        let tags = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT t.tag
            FROM automations a
            CROSS JOIN LATERAL unnest(a.tags) AS t(tag)
            ORDER BY t.tag
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(tags)
    }
}
