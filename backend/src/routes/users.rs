//! User API routes

use crate::error::{ApiError, ApiResult};
use crate::extract::{uuid_param, ValidatedJson};
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use daily_diet_shared::types::{CreateUserRequest, UserEnvelope, UsersEnvelope};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user).get(list_users))
        .route("/:id", get(get_user))
}

/// POST /users - Register a user
async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserEnvelope>)> {
    let user = UserService::create_user(state.store(), req).await?;
    Ok((StatusCode::CREATED, Json(UserEnvelope { user })))
}

/// GET /users - List every user
async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UsersEnvelope>> {
    let users = UserService::list_users(state.store()).await?;
    Ok(Json(UsersEnvelope { users }))
}

/// GET /users/:id - Get one user
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserEnvelope>> {
    let id = uuid_param(&id)?;
    let user = UserService::get_user(state.store(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(UserEnvelope { user }))
}
