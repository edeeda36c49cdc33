//! Data store ports
//!
//! Services are written against these traits. `PgStore` backs them with
//! PostgreSQL; `InMemoryStore` keeps everything in process for local runs
//! and tests. The store is opened once at startup and handed to every
//! handler through [`AppState`](crate::state::AppState).

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{DatabaseConfig, StoreBackend};
use crate::db;
use crate::repositories::{CreateMeal, CreateUser, MealRecord, UpdateMeal, UserRecord};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgStore;

/// Access to the `users` table
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, input: CreateUser) -> Result<UserRecord>;

    /// All users in store order
    async fn list_users(&self) -> Result<Vec<UserRecord>>;

    async fn find_user(&self, id: Uuid) -> Result<Option<UserRecord>>;
}

/// Access to the `meals` table
#[async_trait]
pub trait MealStore: Send + Sync {
    async fn insert_meal(&self, input: CreateMeal) -> Result<MealRecord>;

    async fn find_meal(&self, id: Uuid) -> Result<Option<MealRecord>>;

    /// Meal matching both `id` and `owner_id`
    async fn find_owned_meal(&self, id: Uuid, owner_id: &str) -> Result<Option<MealRecord>>;

    /// Meals whose owner equals `owner_id`, in insertion order
    async fn list_meals_by_owner(&self, owner_id: &str) -> Result<Vec<MealRecord>>;

    /// Returns the number of rows changed (0 or 1)
    async fn update_meal(&self, id: Uuid, changes: &UpdateMeal) -> Result<u64>;

    /// Returns the number of rows changed (0 or 1)
    async fn update_owned_meal(
        &self,
        id: Uuid,
        owner_id: &str,
        changes: &UpdateMeal,
    ) -> Result<u64>;

    /// Returns the number of rows removed; absent ids remove nothing
    async fn delete_meal(&self, id: Uuid) -> Result<u64>;
}

/// A complete store with lifecycle hooks
#[async_trait]
pub trait Store: UserStore + MealStore {
    /// Cheap round trip used by the readiness probe
    async fn ping(&self) -> Result<()>;

    /// Release connections; called once after the server stops
    async fn close(&self);
}

/// Open the store selected by configuration
pub async fn open(config: &DatabaseConfig, migrate: bool) -> Result<Arc<dyn Store>> {
    match config.backend {
        StoreBackend::Postgres => {
            info!("Connecting to database...");
            let pool = db::create_pool(config).await?;
            if migrate {
                db::run_migrations(&pool).await?;
            }
            Ok(Arc::new(PgStore::new(pool)))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store; data will not survive a restart");
            Ok(Arc::new(InMemoryStore::default()))
        }
    }
}
