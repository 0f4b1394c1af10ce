//! Business rules for tutorials on top of a [`TutorialStore`].

use crate::error::AppError;
use crate::model::Tutorial;
use crate::store::TutorialStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct TutorialService {
    store: Arc<dyn TutorialStore>,
}

impl TutorialService {
    pub fn new(store: Arc<dyn TutorialStore>) -> Self {
        TutorialService { store }
    }

    pub fn store(&self) -> &Arc<dyn TutorialStore> {
        &self.store
    }

    /// All tutorials, or those whose title contains `title` when given. The filter is used verbatim.
    pub async fn get_all_tutorials(&self, title: Option<&str>) -> Result<Vec<Tutorial>, AppError> {
        tracing::debug!(title = ?title, "list tutorials");
        match title {
            None => self.store.find_all().await,
            Some(t) => self.store.find_by_title_containing(t).await,
        }
    }

    pub async fn get_tutorial_by_id(&self, id: i64) -> Result<Option<Tutorial>, AppError> {
        tracing::debug!(id, "get tutorial");
        self.store.find_by_id(id).await
    }

    pub async fn get_published_tutorials(&self) -> Result<Vec<Tutorial>, AppError> {
        tracing::debug!("list published tutorials");
        self.store.find_by_published(true).await
    }

    /// Always inserts: any id on the incoming record is discarded.
    pub async fn create_tutorial(&self, mut tutorial: Tutorial) -> Result<Tutorial, AppError> {
        tutorial.id = 0;
        let created = self.store.save(tutorial).await?;
        tracing::info!(id = created.id, "created tutorial");
        Ok(created)
    }

    /// `None` when no tutorial has `id`, including when it disappears between the
    /// lookup and the write. The store is left untouched in that case.
    pub async fn update_tutorial(&self, id: i64, patch: &Tutorial) -> Result<Option<Tutorial>, AppError> {
        let Some(mut existing) = self.store.find_by_id(id).await? else {
            tracing::debug!(id, "update skipped, tutorial not found");
            return Ok(None);
        };
        existing.overwrite_from(patch);
        let updated = self.store.update(&existing).await?;
        match &updated {
            Some(saved) => tracing::info!(id = saved.id, "updated tutorial"),
            None => tracing::debug!(id, "update skipped, tutorial deleted concurrently"),
        }
        Ok(updated)
    }

    pub async fn delete_tutorial(&self, id: i64) -> Result<(), AppError> {
        self.store.delete_by_id(id).await?;
        tracing::info!(id, "deleted tutorial");
        Ok(())
    }

    pub async fn delete_all_tutorials(&self) -> Result<(), AppError> {
        self.store.delete_all().await?;
        tracing::info!("deleted all tutorials");
        Ok(())
    }
}
