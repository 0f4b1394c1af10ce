//! Tutorials API: CRUD and search over a single `tutorials` table.
//!
//! Requests flow handler -> [`TutorialService`] -> [`TutorialStore`]; the
//! store is chosen and wired once at startup.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, StoreKind};
pub use error::{AppError, ConfigError};
pub use migration::{ensure_database_exists, ensure_tutorials_table};
pub use model::Tutorial;
pub use routes::{app, common_routes, tutorial_routes};
pub use service::TutorialService;
pub use state::AppState;
pub use store::{MemoryTutorialStore, PgTutorialStore, TutorialStore};
