// ABOUTME: In-memory NutritionStore backed by sharded concurrent maps
// ABOUTME: Request-scoped consistency only; every handle clones cheaply and shares state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use remy_core::models::{
    ConsumptionEntry, DayPlan, Ingredient, Meal, NutritionConfig, ShoppingList, WeightLog,
};
use std::cmp::Reverse;
use std::sync::Arc;
use uuid::Uuid;

use super::NutritionStore;

/// Concurrent in-memory state shared by every cloned store handle.
///
/// `DashMap` gives sharded locking so unrelated users never contend. Keys
/// mirror the record identities: ids for catalog records, (user, date) pairs
/// for the per-day records.
#[derive(Default)]
struct MemoryState {
    ingredients: DashMap<Uuid, Ingredient>,
    meals: DashMap<Uuid, Meal>,
    configs: DashMap<Uuid, NutritionConfig>,
    plans: DashMap<(Uuid, NaiveDate), DayPlan>,
    consumption: DashMap<Uuid, ConsumptionEntry>,
    shopping_lists: DashMap<(Uuid, NaiveDate), ShoppingList>,
    weight_logs: DashMap<(Uuid, NaiveDate), WeightLog>,
}

/// In-memory storage backend.
///
/// The reference backend for tests and single-process deployments. Map
/// iteration order is arbitrary, so every listing sorts before returning to
/// honor the deterministic-order contract.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<MemoryState>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NutritionStore for InMemoryStore {
    // ================================
    // Ingredient Catalog
    // ================================

    async fn create_ingredient(&self, ingredient: &Ingredient) -> Result<()> {
        if self.state.ingredients.contains_key(&ingredient.id) {
            bail!("ingredient {} already exists", ingredient.id);
        }
        self.state
            .ingredients
            .insert(ingredient.id, ingredient.clone());
        Ok(())
    }

    async fn get_ingredient(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>> {
        Ok(self
            .state
            .ingredients
            .get(&ingredient_id)
            .map(|entry| entry.clone()))
    }

    async fn update_ingredient(&self, ingredient: &Ingredient) -> Result<()> {
        if !self.state.ingredients.contains_key(&ingredient.id) {
            bail!("ingredient {} not found", ingredient.id);
        }
        self.state
            .ingredients
            .insert(ingredient.id, ingredient.clone());
        Ok(())
    }

    async fn delete_ingredient(&self, ingredient_id: Uuid) -> Result<()> {
        self.state.ingredients.remove(&ingredient_id);
        Ok(())
    }

    async fn list_ingredients(&self, user_id: Uuid) -> Result<Vec<Ingredient>> {
        let mut ingredients: Vec<Ingredient> = self
            .state
            .ingredients
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.clone())
            .collect();
        ingredients.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(ingredients)
    }

    // ================================
    // Meal Templates
    // ================================

    async fn create_meal(&self, meal: &Meal) -> Result<()> {
        if self.state.meals.contains_key(&meal.id) {
            bail!("meal {} already exists", meal.id);
        }
        self.state.meals.insert(meal.id, meal.clone());
        Ok(())
    }

    async fn get_meal(&self, meal_id: Uuid) -> Result<Option<Meal>> {
        Ok(self.state.meals.get(&meal_id).map(|entry| entry.clone()))
    }

    async fn update_meal(&self, meal: &Meal) -> Result<()> {
        if !self.state.meals.contains_key(&meal.id) {
            bail!("meal {} not found", meal.id);
        }
        self.state.meals.insert(meal.id, meal.clone());
        Ok(())
    }

    async fn delete_meal(&self, meal_id: Uuid) -> Result<()> {
        self.state.meals.remove(&meal_id);
        Ok(())
    }

    async fn list_meals(&self, user_id: Uuid) -> Result<Vec<Meal>> {
        let mut meals: Vec<Meal> = self
            .state
            .meals
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.clone())
            .collect();
        meals.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(meals)
    }

    // ================================
    // Nutrition Config
    // ================================

    async fn get_nutrition_config(&self, user_id: Uuid) -> Result<Option<NutritionConfig>> {
        Ok(self
            .state
            .configs
            .get(&user_id)
            .map(|entry| entry.clone()))
    }

    async fn upsert_nutrition_config(&self, config: &NutritionConfig) -> Result<()> {
        self.state.configs.insert(config.user_id, config.clone());
        Ok(())
    }

    // ================================
    // Day Plans
    // ================================

    async fn get_day_plan(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<DayPlan>> {
        Ok(self
            .state
            .plans
            .get(&(user_id, date))
            .map(|entry| entry.clone()))
    }

    async fn upsert_day_plan(&self, plan: &DayPlan) -> Result<()> {
        self.state
            .plans
            .insert((plan.user_id, plan.date), plan.clone());
        Ok(())
    }

    async fn delete_day_plan(&self, user_id: Uuid, date: NaiveDate) -> Result<()> {
        self.state.plans.remove(&(user_id, date));
        Ok(())
    }

    async fn list_day_plans(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DayPlan>> {
        let mut plans: Vec<DayPlan> = self
            .state
            .plans
            .iter()
            .filter(|entry| {
                let (owner, date) = *entry.key();
                owner == user_id && date >= start && date <= end
            })
            .map(|entry| entry.clone())
            .collect();
        plans.sort_by_key(|plan| plan.date);
        Ok(plans)
    }

    // ================================
    // Consumption Log
    // ================================

    async fn insert_consumption_entry(&self, entry: &ConsumptionEntry) -> Result<()> {
        self.state.consumption.insert(entry.id, entry.clone());
        Ok(())
    }

    async fn list_consumption_entries(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ConsumptionEntry>> {
        let mut entries: Vec<ConsumptionEntry> = self
            .state
            .consumption
            .iter()
            .filter(|entry| {
                entry.user_id == user_id && entry.date >= start && entry.date <= end
            })
            .map(|entry| entry.clone())
            .collect();
        entries.sort_by_key(|entry| (entry.date, entry.consumed_at));
        Ok(entries)
    }

    // ================================
    // Shopping Lists
    // ================================

    async fn get_shopping_list(
        &self,
        user_id: Uuid,
        week_start: NaiveDate,
    ) -> Result<Option<ShoppingList>> {
        Ok(self
            .state
            .shopping_lists
            .get(&(user_id, week_start))
            .map(|entry| entry.clone()))
    }

    async fn upsert_shopping_list(&self, list: &ShoppingList) -> Result<()> {
        self.state
            .shopping_lists
            .insert((list.user_id, list.week_start), list.clone());
        Ok(())
    }

    // ================================
    // Weight Logs
    // ================================

    async fn get_weight_log(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<WeightLog>> {
        Ok(self
            .state
            .weight_logs
            .get(&(user_id, date))
            .map(|entry| entry.clone()))
    }

    async fn upsert_weight_log(&self, log: &WeightLog) -> Result<()> {
        self.state
            .weight_logs
            .insert((log.user_id, log.date), log.clone());
        Ok(())
    }

    async fn delete_weight_log(&self, user_id: Uuid, date: NaiveDate) -> Result<()> {
        self.state.weight_logs.remove(&(user_id, date));
        Ok(())
    }

    async fn list_weight_logs(&self, user_id: Uuid, limit: usize) -> Result<Vec<WeightLog>> {
        let mut logs: Vec<WeightLog> = self
            .state
            .weight_logs
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.clone())
            .collect();
        // Most recent window first, then flip to ascending for presentation
        logs.sort_by_key(|log| Reverse(log.date));
        logs.truncate(limit);
        logs.reverse();
        Ok(logs)
    }
}
