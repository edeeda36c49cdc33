//! API request and response types
//!
//! Each entity has exactly one request schema. Handlers that accept the
//! same shape (create, edit, ownership-checked edit) all reuse it.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Meal, User};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

// ============================================================================
// User Types
// ============================================================================

/// Registration request
///
/// Usernames are not unique; duplicates are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    pub username: String,
    pub name: String,
    #[validate(range(min = 0, message = "age cannot be negative"))]
    pub age: i32,
    #[validate(range(min = 0.0, message = "weight cannot be negative"))]
    pub weight: f64,
}

/// `{"user": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// `{"users": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersEnvelope {
    pub users: Vec<User>,
}

// ============================================================================
// Meal Types
// ============================================================================

/// Meal fields supplied by the caller on create and on both edit endpoints
///
/// Edits replace every field; there is no partial merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MealPayload {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "isInDiet")]
    #[validate(range(min = 0, max = 1, message = "isInDiet must be 0 or 1"))]
    pub is_in_diet: i32,
}

/// `{"meal": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEnvelope {
    pub meal: Meal,
}

/// `{"meals": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealsEnvelope {
    pub meals: Vec<Meal>,
}

/// `{"updatedMeal": {...}}`, returned by the unscoped edit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedMealEnvelope {
    #[serde(rename = "updatedMeal")]
    pub updated_meal: MealPayload,
}
