//! Meal repository for database operations
//!
//! Every update and delete is keyed by the meal id. The ownership-checked
//! variants add the owner predicate on top of it.

use anyhow::Result;
use chrono::{DateTime, Utc};
use daily_diet_shared::{Meal, MealPayload};
use sqlx::PgPool;
use uuid::Uuid;

/// Meal record from database
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MealRecord {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub is_in_diet: i32,
    pub created_at: DateTime<Utc>,
}

impl From<MealRecord> for Meal {
    fn from(r: MealRecord) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            title: r.title,
            description: r.description,
            date: r.date,
            time: r.time,
            is_in_diet: r.is_in_diet,
            created_at: r.created_at,
        }
    }
}

/// Input for creating a meal
#[derive(Debug, Clone)]
pub struct CreateMeal {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub is_in_diet: i32,
}

/// Full replacement of a meal's editable fields
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateMeal {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub is_in_diet: i32,
}

impl From<MealPayload> for UpdateMeal {
    fn from(p: MealPayload) -> Self {
        Self {
            title: p.title,
            description: p.description,
            date: p.date,
            time: p.time,
            is_in_diet: p.is_in_diet,
        }
    }
}

/// Meal repository for database operations
pub struct MealRepository;

impl MealRepository {
    /// Insert a new meal
    pub async fn create(pool: &PgPool, input: CreateMeal) -> Result<MealRecord> {
        let record = sqlx::query_as::<_, MealRecord>(
            r#"
            INSERT INTO meals (id, user_id, title, description, date, time, is_in_diet)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, title, description, date, time, is_in_diet, created_at
            "#,
        )
        .bind(input.id)
        .bind(&input.user_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.date)
        .bind(&input.time)
        .bind(input.is_in_diet)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get meal by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<MealRecord>> {
        let record = sqlx::query_as::<_, MealRecord>(
            r#"
            SELECT id, user_id, title, description, date, time, is_in_diet, created_at
            FROM meals
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Get meal by ID, only if it belongs to `owner_id`
    pub async fn get_owned(
        pool: &PgPool,
        id: Uuid,
        owner_id: &str,
    ) -> Result<Option<MealRecord>> {
        let record = sqlx::query_as::<_, MealRecord>(
            r#"
            SELECT id, user_id, title, description, date, time, is_in_diet, created_at
            FROM meals
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Get every meal of an owner in insertion order
    pub async fn list_by_owner(pool: &PgPool, owner_id: &str) -> Result<Vec<MealRecord>> {
        let records = sqlx::query_as::<_, MealRecord>(
            r#"
            SELECT id, user_id, title, description, date, time, is_in_diet, created_at
            FROM meals
            WHERE user_id = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Replace the editable fields of one meal, returning affected rows
    pub async fn update(pool: &PgPool, id: Uuid, changes: &UpdateMeal) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE meals
            SET title = $2, description = $3, date = $4, time = $5, is_in_diet = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.date)
        .bind(&changes.time)
        .bind(changes.is_in_diet)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Replace the editable fields of one meal owned by `owner_id`
    pub async fn update_owned(
        pool: &PgPool,
        id: Uuid,
        owner_id: &str,
        changes: &UpdateMeal,
    ) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE meals
            SET title = $3, description = $4, date = $5, time = $6, is_in_diet = $7
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.date)
        .bind(&changes.time)
        .bind(changes.is_in_diet)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a meal, returning affected rows
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM meals
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Queries are exercised through PgStore by the ignored integration tests.

    #[test]
    fn test_update_from_payload_copies_every_field() {
        let payload = MealPayload {
            title: "Soup".to_string(),
            description: "Pumpkin soup".to_string(),
            date: "10/10/2023".to_string(),
            time: "19:00".to_string(),
            is_in_diet: 1,
        };

        let update = UpdateMeal::from(payload);

        assert_eq!(update.title, "Soup");
        assert_eq!(update.description, "Pumpkin soup");
        assert_eq!(update.date, "10/10/2023");
        assert_eq!(update.time, "19:00");
        assert_eq!(update.is_in_diet, 1);
    }

    #[test]
    fn test_record_keeps_missing_owner() {
        let record = MealRecord {
            id: Uuid::new_v4(),
            user_id: None,
            title: "Snack".to_string(),
            description: String::new(),
            date: "10/10/2023".to_string(),
            time: "10:00".to_string(),
            is_in_diet: 0,
            created_at: Utc::now(),
        };

        let meal = Meal::from(record.clone());

        assert_eq!(meal.id, record.id);
        assert!(meal.user_id.is_none());
        assert_eq!(meal.is_in_diet, 0);
    }
}
