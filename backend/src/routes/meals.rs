//! Meal API routes

use crate::error::ApiError;
use crate::extract::{uuid_param, CallerId, OptionalJson, ValidatedJson};
use crate::services::MealService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use daily_diet_shared::types::{MealEnvelope, MealPayload, MealsEnvelope, UpdatedMealEnvelope};
use daily_diet_shared::{Meal, MealMetrics};

/// Create meal routes
///
/// The ownership-checked edit is `/:userId/meal/:mealId` on the wire; its
/// first segment shares the `:id` name with `/:id` because the router does
/// not allow two parameter names at one position.
pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_meal))
        .route("/:id", get(get_meal).put(edit_meal).delete(delete_meal))
        .route("/user/:id", get(list_user_meals))
        .route("/user/:id/metrics", get(get_user_metrics))
        .route("/:id/meal/:meal_id", put(edit_owned_meal))
}

/// POST /meals - Log a meal for the caller in the `user_id` header
async fn create_meal(
    State(state): State<AppState>,
    CallerId(owner): CallerId,
    ValidatedJson(req): ValidatedJson<MealPayload>,
) -> Result<(StatusCode, Json<MealEnvelope>), ApiError> {
    let meal = MealService::create_meal(state.store(), owner, req).await?;
    Ok((StatusCode::CREATED, Json(MealEnvelope { meal })))
}

/// GET /meals/:id - Get one meal
async fn get_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MealEnvelope>, ApiError> {
    let id = uuid_param(&id)?;
    let meal = MealService::get_meal(state.store(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Meal not found".to_string()))?;
    Ok(Json(MealEnvelope { meal }))
}

/// PUT /meals/:id - Replace every field of one meal
async fn edit_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<MealPayload>,
) -> Result<(StatusCode, Json<UpdatedMealEnvelope>), ApiError> {
    let id = uuid_param(&id)?;
    let updated_meal = MealService::edit_meal(state.store(), id, req).await?;
    Ok((StatusCode::CREATED, Json(UpdatedMealEnvelope { updated_meal })))
}

/// DELETE /meals/:id - Delete one meal
async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = uuid_param(&id)?;
    MealService::delete_meal(state.store(), id).await?;
    Ok(StatusCode::ACCEPTED)
}

/// GET /meals/user/:id - List an owner's meals
async fn list_user_meals(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> Result<Json<MealsEnvelope>, ApiError> {
    let meals = MealService::list_meals_for_user(state.store(), &owner_id).await?;
    Ok(Json(MealsEnvelope { meals }))
}

/// GET /meals/user/:id/metrics - Adherence metrics for an owner
async fn get_user_metrics(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> Result<Json<MealMetrics>, ApiError> {
    let metrics = MealService::compute_metrics(state.store(), &owner_id).await?;
    Ok(Json(metrics))
}

/// PUT /meals/:userId/meal/:mealId - Ownership-checked get-or-update
async fn edit_owned_meal(
    State(state): State<AppState>,
    Path((owner_id, meal_id)): Path<(String, String)>,
    OptionalJson(changes): OptionalJson<MealPayload>,
) -> Result<(StatusCode, Json<Vec<Meal>>), ApiError> {
    let meals = MealService::edit_owned_meal(state.store(), &owner_id, &meal_id, changes).await?;
    Ok((StatusCode::CREATED, Json(meals)))
}
