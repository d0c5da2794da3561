// ABOUTME: Persistence abstraction for the nutrition engine
// ABOUTME: Declares the NutritionStore trait every storage backend implements

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use remy_core::models::{
    ConsumptionEntry, DayPlan, Ingredient, Meal, NutritionConfig, ShoppingList, WeightLog,
};
use uuid::Uuid;

pub mod memory;

pub use memory::InMemoryStore;

/// Storage backend for all engine state.
///
/// Services validate and derive before calling in; no business rules live
/// behind this trait. Errors are backend faults, never domain outcomes:
/// absence is expressed as `Option` on reads, and every listing comes back in
/// a deterministic order so callers never re-sort.
#[async_trait]
pub trait NutritionStore: Send + Sync + Clone {
    // ================================
    // Ingredient Catalog
    // ================================

    /// Insert a new catalog ingredient (fails if the id already exists)
    async fn create_ingredient(&self, ingredient: &Ingredient) -> Result<()>;

    /// Get an ingredient by id
    async fn get_ingredient(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>>;

    /// Replace a stored ingredient (fails if the id is unknown)
    async fn update_ingredient(&self, ingredient: &Ingredient) -> Result<()>;

    /// Remove an ingredient; removing an absent id is a no-op
    async fn delete_ingredient(&self, ingredient_id: Uuid) -> Result<()>;

    /// All ingredients for a user, sorted by name
    async fn list_ingredients(&self, user_id: Uuid) -> Result<Vec<Ingredient>>;

    // ================================
    // Meal Templates
    // ================================

    /// Insert a new meal template (fails if the id already exists)
    async fn create_meal(&self, meal: &Meal) -> Result<()>;

    /// Get a meal template by id
    async fn get_meal(&self, meal_id: Uuid) -> Result<Option<Meal>>;

    /// Replace a stored meal template (fails if the id is unknown)
    async fn update_meal(&self, meal: &Meal) -> Result<()>;

    /// Remove a meal template; removing an absent id is a no-op
    async fn delete_meal(&self, meal_id: Uuid) -> Result<()>;

    /// All meal templates for a user, sorted by name
    async fn list_meals(&self, user_id: Uuid) -> Result<Vec<Meal>>;

    // ================================
    // Nutrition Config
    // ================================

    /// Get the user's nutrition config, if one has been initialized
    async fn get_nutrition_config(&self, user_id: Uuid) -> Result<Option<NutritionConfig>>;

    /// Insert or replace the user's nutrition config
    async fn upsert_nutrition_config(&self, config: &NutritionConfig) -> Result<()>;

    // ================================
    // Day Plans
    // ================================

    /// Get the plan for one (user, date), if any
    async fn get_day_plan(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<DayPlan>>;

    /// Insert or replace the plan for its (user, date)
    async fn upsert_day_plan(&self, plan: &DayPlan) -> Result<()>;

    /// Remove the plan for one (user, date); removing an absent plan is a no-op
    async fn delete_day_plan(&self, user_id: Uuid, date: NaiveDate) -> Result<()>;

    /// Plans for a user within an inclusive date range, sorted by date
    async fn list_day_plans(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DayPlan>>;

    // ================================
    // Consumption Log
    // ================================

    /// Append one consumption entry
    async fn insert_consumption_entry(&self, entry: &ConsumptionEntry) -> Result<()>;

    /// Consumption entries for a user within an inclusive date range, sorted
    /// by date then consumption time
    async fn list_consumption_entries(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ConsumptionEntry>>;

    // ================================
    // Shopping Lists
    // ================================

    /// Get the shopping list for one (user, week start), if any
    async fn get_shopping_list(
        &self,
        user_id: Uuid,
        week_start: NaiveDate,
    ) -> Result<Option<ShoppingList>>;

    /// Insert or replace the shopping list for its (user, week start)
    async fn upsert_shopping_list(&self, list: &ShoppingList) -> Result<()>;

    // ================================
    // Weight Logs
    // ================================

    /// Get the weight log for one (user, date), if any
    async fn get_weight_log(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<WeightLog>>;

    /// Insert or replace the weight log for its (user, date)
    async fn upsert_weight_log(&self, log: &WeightLog) -> Result<()>;

    /// Remove the weight log for one (user, date); removing an absent log is
    /// a no-op
    async fn delete_weight_log(&self, user_id: Uuid, date: NaiveDate) -> Result<()>;

    /// The most recent `limit` weight logs for a user, in ascending date order
    async fn list_weight_logs(&self, user_id: Uuid, limit: usize) -> Result<Vec<WeightLog>>;
}
