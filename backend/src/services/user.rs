//! User service for registration and lookups

use crate::error::ApiError;
use crate::repositories::CreateUser;
use crate::store::UserStore;
use daily_diet_shared::{CreateUserRequest, User};
use tracing::info;
use uuid::Uuid;

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Register a new user under a fresh id
    ///
    /// Duplicate usernames are accepted; the id is the only identity key.
    pub async fn create_user<S: UserStore + ?Sized>(
        store: &S,
        request: CreateUserRequest,
    ) -> Result<User, ApiError> {
        let input = CreateUser {
            id: Uuid::new_v4(),
            username: request.username,
            name: request.name,
            age: request.age,
            weight: request.weight,
        };

        let record = store.insert_user(input).await?;
        info!(user_id = %record.id, "User registered");

        Ok(record.into())
    }

    /// Get all users in store order
    pub async fn list_users<S: UserStore + ?Sized>(store: &S) -> Result<Vec<User>, ApiError> {
        let records = store.list_users().await?;
        Ok(records.into_iter().map(User::from).collect())
    }

    /// Get one user; `None` when no user has this id
    pub async fn get_user<S: UserStore + ?Sized>(
        store: &S,
        id: Uuid,
    ) -> Result<Option<User>, ApiError> {
        let record = store.find_user(id).await?;
        Ok(record.map(User::from))
    }
}
