//! Tutorial store on PostgreSQL.

use super::TutorialStore;
use crate::error::AppError;
use crate::model::Tutorial;
use crate::sql::{like_contains_pattern, TutorialTable};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgTutorialStore {
    pool: PgPool,
    table: TutorialTable,
}

impl PgTutorialStore {
    /// Table lives in `schema`; see [`crate::migration::ensure_tutorials_table`].
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgTutorialStore {
            pool,
            table: TutorialTable::new(schema),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn insert(&self, tutorial: &Tutorial) -> Result<Tutorial, AppError> {
        let sql = self.table.insert();
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Tutorial>(&sql)
            .bind(&tutorial.title)
            .bind(&tutorial.description)
            .bind(tutorial.published)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl TutorialStore for PgTutorialStore {
    async fn find_all(&self) -> Result<Vec<Tutorial>, AppError> {
        let sql = self.table.select_all();
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Tutorial>(&sql).fetch_all(&self.pool).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tutorial>, AppError> {
        let sql = self.table.select_by_id();
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Tutorial>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_by_title_containing(&self, substring: &str) -> Result<Vec<Tutorial>, AppError> {
        let sql = self.table.select_by_title_containing();
        let pattern = like_contains_pattern(substring);
        tracing::debug!(sql = %sql, pattern = %pattern, "query");
        Ok(sqlx::query_as::<_, Tutorial>(&sql)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>, AppError> {
        let sql = self.table.select_by_published();
        tracing::debug!(sql = %sql, published, "query");
        Ok(sqlx::query_as::<_, Tutorial>(&sql)
            .bind(published)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn save(&self, tutorial: Tutorial) -> Result<Tutorial, AppError> {
        if tutorial.is_new() {
            return self.insert(&tutorial).await;
        }
        match self.update(&tutorial).await? {
            Some(row) => Ok(row),
            None => self.insert(&tutorial).await,
        }
    }

    async fn update(&self, tutorial: &Tutorial) -> Result<Option<Tutorial>, AppError> {
        let sql = self.table.update_by_id();
        tracing::debug!(sql = %sql, id = tutorial.id, "query");
        Ok(sqlx::query_as::<_, Tutorial>(&sql)
            .bind(tutorial.id)
            .bind(&tutorial.title)
            .bind(&tutorial.description)
            .bind(tutorial.published)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let sql = self.table.delete_by_id();
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        let sql = self.table.delete_all();
        tracing::debug!(sql = %sql, "query");
        let done = sqlx::query(&sql).execute(&self.pool).await?;
        tracing::info!(rows = done.rows_affected(), "deleted all tutorials");
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
