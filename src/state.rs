//! Shared application state for all routes. Built once at startup.

use crate::service::TutorialService;
use crate::store::TutorialStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub tutorials: TutorialService,
}

impl AppState {
    pub fn new(store: Arc<dyn TutorialStore>) -> Self {
        AppState {
            tutorials: TutorialService::new(store),
        }
    }
}
