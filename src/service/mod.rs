//! TutorialService: business rules over the store.

mod tutorial;
pub use tutorial::TutorialService;
