//! HTTP handlers for the tutorial resource.

pub mod tutorial;
pub use tutorial::*;
