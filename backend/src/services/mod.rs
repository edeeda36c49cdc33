//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the store ports and the HTTP layer.

pub mod meal;
pub mod user;

pub use meal::MealService;
pub use user::UserService;
