//! Test fixtures shared by the unit and integration tests.

mod fixtures;

pub use fixtures::{TempViews, TestModel};
