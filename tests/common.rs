// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common store, catalog, and meal creation helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Remy Nutrition Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `remy_nutrition_engine`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use chrono::NaiveDate;
use remy_nutrition_engine::models::{
    Ingredient, IngredientCategory, Meal, MealComponent, NewIngredient, NewMeal, NutrientTotals,
};
use remy_nutrition_engine::services::{ingredients, meals};
use remy_nutrition_engine::storage::InMemoryStore;
use std::env;
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Shorthand for building calendar dates in tests
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Per-100 g profile of raw salmon fillet
pub fn salmon_per_100g() -> NutrientTotals {
    NutrientTotals {
        calories: 208.0,
        protein_g: 20.4,
        fat_g: 13.4,
        carbohydrates_g: 0.0,
        fiber_g: 0.0,
        sodium_mg: 59.0,
        potassium_mg: 363.0,
    }
}

/// Per-100 g profile of raw spinach
pub fn spinach_per_100g() -> NutrientTotals {
    NutrientTotals {
        calories: 23.0,
        protein_g: 2.9,
        fat_g: 0.4,
        carbohydrates_g: 3.6,
        fiber_g: 2.2,
        sodium_mg: 79.0,
        potassium_mg: 558.0,
    }
}

/// Per-100 g profile of extra virgin olive oil
pub fn olive_oil_per_100g() -> NutrientTotals {
    NutrientTotals {
        calories: 884.0,
        protein_g: 0.0,
        fat_g: 100.0,
        carbohydrates_g: 0.0,
        fiber_g: 0.0,
        sodium_mg: 2.0,
        potassium_mg: 1.0,
    }
}

/// Build an ingredient creation request with sensible defaults
pub fn new_ingredient(
    name: &str,
    per_100g: NutrientTotals,
    category: IngredientCategory,
    is_pantry_essential: bool,
) -> NewIngredient {
    NewIngredient {
        name: name.to_owned(),
        description: None,
        fdc_id: None,
        per_100g,
        is_pantry_essential,
        medical_tags: Vec::new(),
        preparation_methods: Vec::new(),
        category,
        is_cooked: false,
        yield_factor: None,
    }
}

/// Build a meal component referencing an ingredient by weight
pub fn meal_component(ingredient_id: Uuid, weight_grams: f64) -> MealComponent {
    MealComponent {
        slot: "protein_anchor".to_owned(),
        ingredient_id,
        weight_grams,
        preparation_method: None,
        notes: None,
    }
}

/// The three-ingredient catalog most flow tests cook from
pub struct BasicCatalog {
    pub salmon: Ingredient,
    pub spinach: Ingredient,
    pub olive_oil: Ingredient,
}

/// Create salmon, spinach, and olive oil for a user
pub async fn create_basic_catalog(store: &InMemoryStore, user_id: Uuid) -> BasicCatalog {
    init_test_logging();

    let salmon = ingredients::create_ingredient(
        store,
        user_id,
        new_ingredient(
            "Salmon Fillet (raw)",
            salmon_per_100g(),
            IngredientCategory::Protein,
            false,
        ),
    )
    .await
    .unwrap();

    let spinach = ingredients::create_ingredient(
        store,
        user_id,
        new_ingredient(
            "Spinach (raw)",
            spinach_per_100g(),
            IngredientCategory::Vegetable,
            false,
        ),
    )
    .await
    .unwrap();

    let olive_oil = ingredients::create_ingredient(
        store,
        user_id,
        new_ingredient(
            "Olive Oil (extra virgin)",
            olive_oil_per_100g(),
            IngredientCategory::Fat,
            true,
        ),
    )
    .await
    .unwrap();

    BasicCatalog {
        salmon,
        spinach,
        olive_oil,
    }
}

/// Create a meal from weighed components through the meal service
pub async fn create_meal_from(
    store: &InMemoryStore,
    user_id: Uuid,
    name: &str,
    components: Vec<(Uuid, f64)>,
) -> Meal {
    let components = components
        .into_iter()
        .map(|(ingredient_id, weight_grams)| meal_component(ingredient_id, weight_grams))
        .collect();

    meals::create_meal(
        store,
        user_id,
        NewMeal {
            name: name.to_owned(),
            description: None,
            components,
            tags: Vec::new(),
        },
    )
    .await
    .unwrap()
}
