//! Data models for the Daily Diet application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `isInDiet` value of a meal that follows the diet
pub const IN_DIET: i32 = 1;
/// `isInDiet` value of a meal outside the diet
pub const OUT_OF_DIET: i32 = 0;

/// Registered user
///
/// Users are immutable once created; there is no update endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub age: i32,
    pub weight: f64,
    pub created_at: DateTime<Utc>,
}

/// Logged meal
///
/// `user_id` is whatever the caller sent in the `user_id` header. It is not
/// checked against the users table, so orphan meals are possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "isInDiet")]
    pub is_in_diet: i32,
    pub created_at: DateTime<Utc>,
}

/// Adherence metrics for one owner's meals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealMetrics {
    pub total_registered_meals: usize,
    pub total_meals_inside_diet: usize,
    pub total_meals_outside_diet: usize,
    /// Longest run of consecutive meals sharing the same `isInDiet` value
    pub best_sequence_of_meals: usize,
}
