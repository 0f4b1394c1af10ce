//! Persistence abstraction over the tutorials table.

mod memory;
mod postgres;

pub use memory::MemoryTutorialStore;
pub use postgres::PgTutorialStore;

use crate::error::AppError;
use crate::model::Tutorial;
use async_trait::async_trait;

/// Table-backed CRUD plus the two derived queries the service needs.
///
/// List operations return records ordered by ascending id. Faults from the
/// underlying database come back as [`AppError::Db`] and are not retried.
#[async_trait]
pub trait TutorialStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Tutorial>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Tutorial>, AppError>;

    /// Records whose title contains `substring` literally (no wildcards).
    async fn find_by_title_containing(&self, substring: &str) -> Result<Vec<Tutorial>, AppError>;

    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>, AppError>;

    /// Overwrites the record with `tutorial.id` if one exists, otherwise inserts
    /// under a freshly assigned id. Returns what was persisted.
    async fn save(&self, tutorial: Tutorial) -> Result<Tutorial, AppError>;

    /// Overwrites the record with `tutorial.id` only. `None` if no such record
    /// exists at write time; never inserts.
    async fn update(&self, tutorial: &Tutorial) -> Result<Option<Tutorial>, AppError>;

    /// No-op when the id is absent.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    async fn delete_all(&self) -> Result<(), AppError>;

    /// Cheap reachability check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;
}
