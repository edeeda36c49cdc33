//! Meal service
//!
//! Provides business logic for meal logging including:
//! - Meal CRUD keyed by meal id
//! - Adherence metrics per owner
//! - Ownership-checked edits

use crate::error::ApiError;
use crate::repositories::{CreateMeal, MealRecord, UpdateMeal};
use crate::store::MealStore;
use daily_diet_shared::validation::normalize_owner_id;
use daily_diet_shared::{Meal, MealMetrics, MealPayload, IN_DIET};
use tracing::{info, warn};
use uuid::Uuid;

const OWNERSHIP_MESSAGE: &str = "Only the owning user may edit this meal";

/// Meal service for business logic
pub struct MealService;

impl MealService {
    /// Log a meal for `owner_id`
    ///
    /// The owner is recorded as given; it is not checked against the
    /// users table.
    pub async fn create_meal<S: MealStore + ?Sized>(
        store: &S,
        owner_id: Option<String>,
        payload: MealPayload,
    ) -> Result<Meal, ApiError> {
        let input = CreateMeal {
            id: Uuid::new_v4(),
            user_id: owner_id,
            title: payload.title,
            description: payload.description,
            date: payload.date,
            time: payload.time,
            is_in_diet: payload.is_in_diet,
        };

        let record = store.insert_meal(input).await?;
        info!(meal_id = %record.id, owner = ?record.user_id, "Meal logged");

        Ok(record.into())
    }

    /// Get one meal; `None` when no meal has this id
    pub async fn get_meal<S: MealStore + ?Sized>(
        store: &S,
        id: Uuid,
    ) -> Result<Option<Meal>, ApiError> {
        let record = store.find_meal(id).await?;
        Ok(record.map(Meal::from))
    }

    /// Replace every editable field of the meal `id`
    ///
    /// Returns the supplied fields. Fails with `NotFound` when no meal has
    /// this id.
    pub async fn edit_meal<S: MealStore + ?Sized>(
        store: &S,
        id: Uuid,
        payload: MealPayload,
    ) -> Result<MealPayload, ApiError> {
        let changes = UpdateMeal::from(payload.clone());
        let affected = store.update_meal(id, &changes).await?;

        if affected == 0 {
            return Err(ApiError::NotFound("Meal not found".to_string()));
        }

        info!(meal_id = %id, "Meal updated");
        Ok(payload)
    }

    /// Delete the meal `id`; deleting an absent meal still succeeds
    pub async fn delete_meal<S: MealStore + ?Sized>(store: &S, id: Uuid) -> Result<(), ApiError> {
        let affected = store.delete_meal(id).await?;
        info!(meal_id = %id, affected, "Meal deleted");
        Ok(())
    }

    /// Get all meals logged under `owner_id`
    pub async fn list_meals_for_user<S: MealStore + ?Sized>(
        store: &S,
        owner_id: &str,
    ) -> Result<Vec<Meal>, ApiError> {
        let records = store.list_meals_by_owner(owner_id).await?;
        Ok(records.into_iter().map(Meal::from).collect())
    }

    /// Compute adherence metrics over the owner's meals in store order
    pub async fn compute_metrics<S: MealStore + ?Sized>(
        store: &S,
        owner_id: &str,
    ) -> Result<MealMetrics, ApiError> {
        let records = store.list_meals_by_owner(owner_id).await?;
        let flags: Vec<i32> = records.iter().map(|m| m.is_in_diet).collect();
        Ok(Self::summarize(&flags))
    }

    /// Ownership-checked get-or-update
    ///
    /// Fails with `Forbidden` unless `owner_id` is the stored owner of
    /// `meal_id`. With `changes`, applies them scoped by both ids and
    /// returns the re-read rows; without, returns the current rows.
    pub async fn edit_owned_meal<S: MealStore + ?Sized>(
        store: &S,
        owner_id: &str,
        meal_id: &str,
        changes: Option<MealPayload>,
    ) -> Result<Vec<Meal>, ApiError> {
        let (owner, current) = match (normalize_owner_id(owner_id), Uuid::parse_str(meal_id.trim())) {
            (Some(owner), Ok(id)) => {
                let found = store.find_owned_meal(id, &owner).await?;
                let current = Self::check_ownership(&owner, found)?;
                (owner, current)
            }
            _ => {
                warn!(owner = owner_id, meal = meal_id, "Rejected edit with unusable ids");
                return Err(ApiError::Forbidden(OWNERSHIP_MESSAGE.to_string()));
            }
        };

        let Some(payload) = changes else {
            return Ok(vec![current.into()]);
        };

        store.update_owned_meal(current.id, &owner, &UpdateMeal::from(payload)).await?;
        info!(meal_id = %current.id, owner = %owner, "Owned meal updated");

        let updated = store.find_owned_meal(current.id, &owner).await?;
        Ok(updated.into_iter().map(Meal::from).collect())
    }

    /// Accept `meal` only if it exists and its stored owner equals `owner_id`
    pub fn check_ownership(owner_id: &str, meal: Option<MealRecord>) -> Result<MealRecord, ApiError> {
        match meal {
            Some(meal) if !owner_id.is_empty() && meal.user_id.as_deref() == Some(owner_id) => {
                Ok(meal)
            }
            Some(meal) => {
                warn!(owner = owner_id, meal_id = %meal.id, "Ownership violation");
                Err(ApiError::Forbidden(OWNERSHIP_MESSAGE.to_string()))
            }
            None => {
                warn!(owner = owner_id, "Edit of a meal the caller does not own");
                Err(ApiError::Forbidden(OWNERSHIP_MESSAGE.to_string()))
            }
        }
    }

    /// Totals and best sequence for a list of `isInDiet` flags
    pub fn summarize(flags: &[i32]) -> MealMetrics {
        let total = flags.len();
        let inside = flags.iter().filter(|&&flag| flag == IN_DIET).count();

        MealMetrics {
            total_registered_meals: total,
            total_meals_inside_diet: inside,
            total_meals_outside_diet: total - inside,
            best_sequence_of_meals: Self::longest_sequence(flags),
        }
    }

    /// Length of the longest run of equal consecutive flags
    ///
    /// Runs of either value count, not only runs inside the diet.
    pub fn longest_sequence(flags: &[i32]) -> usize {
        let mut previous: Option<i32> = None;
        let mut current = 0;
        let mut longest = 0;

        for &flag in flags {
            current = if previous == Some(flag) { current + 1 } else { 1 };
            previous = Some(flag);
            longest = longest.max(current);
        }

        longest
    }
}
