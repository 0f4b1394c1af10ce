//! Safe SQL builder: identifiers from config only, values as parameters.

mod tutorial;
pub use tutorial::*;
