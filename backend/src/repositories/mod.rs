//! Database repositories
//!
//! Provides the SQL for the PostgreSQL store adapter.

pub mod meal;
pub mod user;

pub use meal::{CreateMeal, MealRecord, MealRepository, UpdateMeal};
pub use user::{CreateUser, UserRecord, UserRepository};
