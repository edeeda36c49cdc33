//! User repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use daily_diet_shared::User;
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub age: i32,
    pub weight: f64,
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        Self {
            id: r.id,
            username: r.username,
            name: r.name,
            age: r.age,
            weight: r.weight,
            created_at: r.created_at,
        }
    }
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub age: i32,
    pub weight: f64,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user
    pub async fn create(pool: &PgPool, input: CreateUser) -> Result<UserRecord> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (id, username, name, age, weight)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, name, age, weight, created_at
            "#,
        )
        .bind(input.id)
        .bind(&input.username)
        .bind(&input.name)
        .bind(input.age)
        .bind(input.weight)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get every user in insertion order
    pub async fn list(pool: &PgPool) -> Result<Vec<UserRecord>> {
        let records = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, name, age, weight, created_at
            FROM users
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get user by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, name, age, weight, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
