//! In-memory store adapter
//!
//! Rows are kept in insertion order, which is the order listings return.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{MealStore, Store, UserStore};
use crate::repositories::{CreateMeal, CreateUser, MealRecord, UpdateMeal, UserRecord};

/// Store that lives for the duration of the process
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<UserRecord>>,
    meals: RwLock<Vec<MealRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn apply(meal: &mut MealRecord, changes: &UpdateMeal) {
    meal.title = changes.title.clone();
    meal.description = changes.description.clone();
    meal.date = changes.date.clone();
    meal.time = changes.time.clone();
    meal.is_in_diet = changes.is_in_diet;
}

fn owned_by(meal: &MealRecord, owner_id: &str) -> bool {
    meal.user_id.as_deref() == Some(owner_id)
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn insert_user(&self, input: CreateUser) -> Result<UserRecord> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.id == input.id) {
            anyhow::bail!("duplicate user id {}", input.id);
        }
        let record = UserRecord {
            id: input.id,
            username: input.username,
            name: input.name,
            age: input.age,
            weight: input.weight,
            created_at: Utc::now(),
        };
        users.push(record.clone());
        Ok(record)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<UserRecord>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl MealStore for InMemoryStore {
    async fn insert_meal(&self, input: CreateMeal) -> Result<MealRecord> {
        let mut meals = self.meals.write().await;
        if meals.iter().any(|m| m.id == input.id) {
            anyhow::bail!("duplicate meal id {}", input.id);
        }
        let record = MealRecord {
            id: input.id,
            user_id: input.user_id,
            title: input.title,
            description: input.description,
            date: input.date,
            time: input.time,
            is_in_diet: input.is_in_diet,
            created_at: Utc::now(),
        };
        meals.push(record.clone());
        Ok(record)
    }

    async fn find_meal(&self, id: Uuid) -> Result<Option<MealRecord>> {
        Ok(self.meals.read().await.iter().find(|m| m.id == id).cloned())
    }

    async fn find_owned_meal(&self, id: Uuid, owner_id: &str) -> Result<Option<MealRecord>> {
        Ok(self
            .meals
            .read()
            .await
            .iter()
            .find(|m| m.id == id && owned_by(m, owner_id))
            .cloned())
    }

    async fn list_meals_by_owner(&self, owner_id: &str) -> Result<Vec<MealRecord>> {
        Ok(self
            .meals
            .read()
            .await
            .iter()
            .filter(|m| owned_by(m, owner_id))
            .cloned()
            .collect())
    }

    async fn update_meal(&self, id: Uuid, changes: &UpdateMeal) -> Result<u64> {
        let mut meals = self.meals.write().await;
        let mut affected = 0;
        for meal in meals.iter_mut().filter(|m| m.id == id) {
            apply(meal, changes);
            affected += 1;
        }
        Ok(affected)
    }

    async fn update_owned_meal(
        &self,
        id: Uuid,
        owner_id: &str,
        changes: &UpdateMeal,
    ) -> Result<u64> {
        let mut meals = self.meals.write().await;
        let mut affected = 0;
        for meal in meals
            .iter_mut()
            .filter(|m| m.id == id && owned_by(m, owner_id))
        {
            apply(meal, changes);
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete_meal(&self, id: Uuid) -> Result<u64> {
        let mut meals = self.meals.write().await;
        let before = meals.len();
        meals.retain(|m| m.id != id);
        Ok((before - meals.len()) as u64)
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn close(&self) {}
}
