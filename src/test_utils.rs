// ABOUTME: Test utilities for creating ingredients, meals, and nutrient profiles consistently
// ABOUTME: Centralizes test data creation to avoid duplication across unit and integration tests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Remy Nutrition Intelligence

use chrono::Utc;
use remy_core::models::{Ingredient, IngredientCategory, Meal, MealComponent, NutrientTotals};
use uuid::Uuid;

/// Per-100 g profile of raw salmon fillet
#[must_use]
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
#[must_use]
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
#[must_use]
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

/// Create a test ingredient with default values
#[must_use]
pub fn create_test_ingredient(user_id: Uuid, name: &str, per_100g: NutrientTotals) -> Ingredient {
    create_test_ingredient_with_fields(user_id, name, per_100g, IngredientCategory::Protein, false)
}

/// Create a test ingredient with custom category and pantry flag
#[must_use]
pub fn create_test_ingredient_with_fields(
    user_id: Uuid,
    name: &str,
    per_100g: NutrientTotals,
    category: IngredientCategory,
    is_pantry_essential: bool,
) -> Ingredient {
    let now = Utc::now();
    Ingredient {
        id: Uuid::new_v4(),
        user_id,
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
        created_at: now,
        updated_at: now,
    }
}

/// Create a meal component referencing an ingredient by weight
#[must_use]
pub fn create_test_component(ingredient_id: Uuid, weight_grams: f64) -> MealComponent {
    MealComponent {
        slot: "protein_anchor".to_owned(),
        ingredient_id,
        weight_grams,
        preparation_method: None,
        notes: None,
    }
}

/// Create a test meal with zeroed cached totals
#[must_use]
pub fn create_test_meal(user_id: Uuid, name: &str, components: Vec<MealComponent>) -> Meal {
    let now = Utc::now();
    Meal {
        id: Uuid::new_v4(),
        user_id,
        name: name.to_owned(),
        description: None,
        components,
        totals: NutrientTotals::zero(),
        is_favorite: false,
        tags: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}
