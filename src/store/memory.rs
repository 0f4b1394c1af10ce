//! In-process tutorial store. Same contract as the PostgreSQL store; nothing survives a restart.

use super::TutorialStore;
use crate::error::AppError;
use crate::model::Tutorial;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Tutorial>,
    last_id: i64,
}

#[derive(Default)]
pub struct MemoryTutorialStore {
    inner: RwLock<Inner>,
}

impl MemoryTutorialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TutorialStore for MemoryTutorialStore {
    async fn find_all(&self) -> Result<Vec<Tutorial>, AppError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tutorial>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_by_title_containing(&self, substring: &str) -> Result<Vec<Tutorial>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .filter(|t| t.title.contains(substring))
            .cloned()
            .collect())
    }

    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .filter(|t| t.published == published)
            .cloned()
            .collect())
    }

    async fn save(&self, mut tutorial: Tutorial) -> Result<Tutorial, AppError> {
        let mut inner = self.inner.write().await;
        if tutorial.is_new() || !inner.rows.contains_key(&tutorial.id) {
            inner.last_id += 1;
            tutorial.id = inner.last_id;
        }
        inner.rows.insert(tutorial.id, tutorial.clone());
        Ok(tutorial)
    }

    async fn update(&self, tutorial: &Tutorial) -> Result<Option<Tutorial>, AppError> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&tutorial.id) {
            Some(row) => {
                *row = tutorial.clone();
                Ok(Some(tutorial.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        self.inner.write().await.rows.clear();
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_assigns_increasing_ids() {
        let store = MemoryTutorialStore::new();
        let a = store.save(Tutorial::new("a", "", false)).await.unwrap();
        let b = store.save(Tutorial::new("b", "", false)).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn save_with_unknown_id_inserts_fresh() {
        let store = MemoryTutorialStore::new();
        let mut t = Tutorial::new("ghost", "", true);
        t.id = 99;
        let saved = store.save(t).await.unwrap();
        assert_eq!(saved.id, 1);
        assert!(store.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_with_existing_id_overwrites() {
        let store = MemoryTutorialStore::new();
        let mut t = store.save(Tutorial::new("first", "d", false)).await.unwrap();
        t.title = "second".into();
        let saved = store.save(t.clone()).await.unwrap();
        assert_eq!(saved, t);
        assert_eq!(store.find_all().await.unwrap(), vec![t]);
    }

    #[tokio::test]
    async fn update_never_inserts() {
        let store = MemoryTutorialStore::new();
        let mut t = Tutorial::new("gone", "", false);
        t.id = 5;
        assert!(store.update(&t).await.unwrap().is_none());
        assert!(store.find_all().await.unwrap().is_empty());

        let mut kept = store.save(Tutorial::new("kept", "", false)).await.unwrap();
        kept.published = true;
        assert_eq!(store.update(&kept).await.unwrap(), Some(kept.clone()));
        assert_eq!(store.find_by_id(kept.id).await.unwrap(), Some(kept));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryTutorialStore::new();
        let a = store.save(Tutorial::new("a", "", false)).await.unwrap();
        store.delete_by_id(a.id).await.unwrap();
        store.delete_all().await.unwrap();
        let b = store.save(Tutorial::new("b", "", false)).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn title_match_is_literal_and_case_sensitive() {
        let store = MemoryTutorialStore::new();
        store.save(Tutorial::new("Rust basics", "", false)).await.unwrap();
        store.save(Tutorial::new("100% async", "", false)).await.unwrap();
        assert_eq!(store.find_by_title_containing("rust").await.unwrap().len(), 0);
        assert_eq!(store.find_by_title_containing("Rust").await.unwrap().len(), 1);
        assert_eq!(store.find_by_title_containing("%").await.unwrap()[0].title, "100% async");
        assert_eq!(store.find_by_title_containing("").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_missing_id_is_noop() {
        let store = MemoryTutorialStore::new();
        store.save(Tutorial::new("keep", "", false)).await.unwrap();
        store.delete_by_id(12345).await.unwrap();
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }
}
