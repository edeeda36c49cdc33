//! PostgreSQL-backed store adapter

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::{MealStore, Store, UserStore};
use crate::db;
use crate::repositories::{
    CreateMeal, CreateUser, MealRecord, MealRepository, UpdateMeal, UserRecord, UserRepository,
};

/// Store backed by a `sqlx` connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a new store over an already connected pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, input: CreateUser) -> Result<UserRecord> {
        UserRepository::create(&self.pool, input).await
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        UserRepository::list(&self.pool).await
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<UserRecord>> {
        UserRepository::get_by_id(&self.pool, id).await
    }
}

#[async_trait]
impl MealStore for PgStore {
    async fn insert_meal(&self, input: CreateMeal) -> Result<MealRecord> {
        MealRepository::create(&self.pool, input).await
    }

    async fn find_meal(&self, id: Uuid) -> Result<Option<MealRecord>> {
        MealRepository::get_by_id(&self.pool, id).await
    }

    async fn find_owned_meal(&self, id: Uuid, owner_id: &str) -> Result<Option<MealRecord>> {
        MealRepository::get_owned(&self.pool, id, owner_id).await
    }

    async fn list_meals_by_owner(&self, owner_id: &str) -> Result<Vec<MealRecord>> {
        MealRepository::list_by_owner(&self.pool, owner_id).await
    }

    async fn update_meal(&self, id: Uuid, changes: &UpdateMeal) -> Result<u64> {
        MealRepository::update(&self.pool, id, changes).await
    }

    async fn update_owned_meal(
        &self,
        id: Uuid,
        owner_id: &str,
        changes: &UpdateMeal,
    ) -> Result<u64> {
        MealRepository::update_owned(&self.pool, id, owner_id, changes).await
    }

    async fn delete_meal(&self, id: Uuid) -> Result<u64> {
        MealRepository::delete(&self.pool, id).await
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<()> {
        db::health_check(&self.pool).await
    }

    async fn close(&self) {
        info!("Closing database pool");
        self.pool.close().await;
    }
}
