//! Daily Diet Shared Library
//!
//! Wire models, request schemas and validation helpers shared by the
//! backend and its tests.

pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::{Meal, MealMetrics, User, IN_DIET, OUT_OF_DIET};
pub use types::*;
