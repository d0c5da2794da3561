// ABOUTME: Ingredient catalog business logic: create, update, list, delete, summarize
// ABOUTME: Validates nutrient profiles at the boundary before records reach storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use chrono::Utc;
use remy_core::errors::{AppError, AppResult};
use remy_core::models::{
    Ingredient, IngredientCategory, IngredientFilter, IngredientUpdate, NewIngredient,
    NutrientTotals,
};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

use crate::storage::NutritionStore;

/// Ingredient count for one taxonomy category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    /// Taxonomy category
    pub category: IngredientCategory,
    /// Number of catalog ingredients in it
    pub count: usize,
}

fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_input("Ingredient name cannot be empty"));
    }
    Ok(())
}

fn validate_profile(per_100g: &NutrientTotals) -> AppResult<()> {
    let fields = [
        ("calories", per_100g.calories),
        ("protein_g", per_100g.protein_g),
        ("fat_g", per_100g.fat_g),
        ("carbohydrates_g", per_100g.carbohydrates_g),
        ("fiber_g", per_100g.fiber_g),
        ("sodium_mg", per_100g.sodium_mg),
        ("potassium_mg", per_100g.potassium_mg),
    ];

    for (field, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Nutrient field {field} must be a non-negative number"
            )));
        }
    }
    Ok(())
}

fn validate_yield_factor(yield_factor: Option<f64>) -> AppResult<()> {
    if let Some(factor) = yield_factor {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(AppError::invalid_input(
                "Yield factor must be a positive number",
            ));
        }
    }
    Ok(())
}

/// Create a catalog ingredient from a validated request.
///
/// # Errors
///
/// Returns an error when the name is empty, any nutrient field is negative or
/// non-finite, the yield factor is non-positive, or the storage write fails.
pub async fn create_ingredient<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    request: NewIngredient,
) -> AppResult<Ingredient> {
    validate_name(&request.name)?;
    validate_profile(&request.per_100g)?;
    validate_yield_factor(request.yield_factor)?;

    let now = Utc::now();
    let ingredient = Ingredient {
        id: Uuid::new_v4(),
        user_id,
        name: request.name,
        description: request.description,
        fdc_id: request.fdc_id,
        per_100g: request.per_100g,
        is_pantry_essential: request.is_pantry_essential,
        medical_tags: request.medical_tags,
        preparation_methods: request.preparation_methods,
        category: request.category,
        is_cooked: request.is_cooked,
        yield_factor: request.yield_factor,
        created_at: now,
        updated_at: now,
    };

    store.create_ingredient(&ingredient).await?;
    debug!(
        "Created ingredient '{}' ({})",
        ingredient.name, ingredient.id
    );
    Ok(ingredient)
}

/// Fetch one catalog ingredient.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the id is unknown, or an error when the
/// storage read fails.
pub async fn get_ingredient<S: NutritionStore>(
    store: &S,
    ingredient_id: Uuid,
) -> AppResult<Ingredient> {
    store
        .get_ingredient(ingredient_id)
        .await?
        .ok_or_else(|| AppError::not_found("Ingredient").with_resource_id(ingredient_id.to_string()))
}

/// Apply a partial update to a catalog ingredient.
///
/// Absent fields are left untouched. Identity and the owning user never
/// change.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the id is unknown, `InvalidInput` when a
/// supplied field fails validation, or an error when the storage write fails.
pub async fn update_ingredient<S: NutritionStore>(
    store: &S,
    ingredient_id: Uuid,
    update: IngredientUpdate,
) -> AppResult<Ingredient> {
    let mut ingredient = get_ingredient(store, ingredient_id).await?;

    if let Some(name) = update.name {
        validate_name(&name)?;
        ingredient.name = name;
    }
    if let Some(description) = update.description {
        ingredient.description = Some(description);
    }
    if let Some(fdc_id) = update.fdc_id {
        ingredient.fdc_id = Some(fdc_id);
    }
    if let Some(per_100g) = update.per_100g {
        validate_profile(&per_100g)?;
        ingredient.per_100g = per_100g;
    }
    if let Some(is_pantry_essential) = update.is_pantry_essential {
        ingredient.is_pantry_essential = is_pantry_essential;
    }
    if let Some(medical_tags) = update.medical_tags {
        ingredient.medical_tags = medical_tags;
    }
    if let Some(preparation_methods) = update.preparation_methods {
        ingredient.preparation_methods = preparation_methods;
    }
    if let Some(category) = update.category {
        ingredient.category = category;
    }
    if let Some(is_cooked) = update.is_cooked {
        ingredient.is_cooked = is_cooked;
    }
    if let Some(yield_factor) = update.yield_factor {
        validate_yield_factor(Some(yield_factor))?;
        ingredient.yield_factor = Some(yield_factor);
    }

    ingredient.updated_at = Utc::now();
    store.update_ingredient(&ingredient).await?;
    debug!(
        "Updated ingredient '{}' ({})",
        ingredient.name, ingredient.id
    );
    Ok(ingredient)
}

/// Delete a catalog ingredient.
///
/// No referential-integrity check runs against meals or plans: denormalized
/// totals keep historical data intact, and live references resolve to a zero
/// contribution afterward.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the id is unknown, or an error when the
/// storage write fails.
pub async fn delete_ingredient<S: NutritionStore>(
    store: &S,
    ingredient_id: Uuid,
) -> AppResult<()> {
    let ingredient = get_ingredient(store, ingredient_id).await?;
    store.delete_ingredient(ingredient.id).await?;
    debug!(
        "Deleted ingredient '{}' ({})",
        ingredient.name, ingredient.id
    );
    Ok(())
}

/// List a user's catalog, optionally filtered by category and name substring.
///
/// Results stay sorted by name. The substring match is case-insensitive.
///
/// # Errors
///
/// Returns an error when the storage read fails.
pub async fn list_ingredients<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    filter: &IngredientFilter,
) -> AppResult<Vec<Ingredient>> {
    let mut ingredients = store.list_ingredients(user_id).await?;

    if let Some(category) = filter.category {
        ingredients.retain(|ingredient| ingredient.category == category);
    }
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        ingredients.retain(|ingredient| ingredient.name.to_lowercase().contains(&needle));
    }

    Ok(ingredients)
}

/// Count a user's catalog ingredients per category, sorted by category name.
///
/// Only categories with at least one ingredient appear.
///
/// # Errors
///
/// Returns an error when the storage read fails.
pub async fn category_summary<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
) -> AppResult<Vec<CategoryCount>> {
    let ingredients = store.list_ingredients(user_id).await?;

    let mut counts: BTreeMap<&'static str, CategoryCount> = BTreeMap::new();
    for ingredient in &ingredients {
        counts
            .entry(ingredient.category.as_str())
            .or_insert(CategoryCount {
                category: ingredient.category,
                count: 0,
            })
            .count += 1;
    }

    Ok(counts.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;

    fn salmon_request() -> NewIngredient {
        NewIngredient {
            name: "Salmon Fillet (raw)".to_owned(),
            description: None,
            fdc_id: None,
            per_100g: NutrientTotals {
                calories: 208.0,
                protein_g: 20.4,
                fat_g: 13.4,
                carbohydrates_g: 0.0,
                fiber_g: 0.0,
                sodium_mg: 59.0,
                potassium_mg: 363.0,
            },
            is_pantry_essential: false,
            medical_tags: vec!["renal_safe".to_owned()],
            preparation_methods: vec!["grilled".to_owned(), "baked".to_owned()],
            category: IngredientCategory::Protein,
            is_cooked: false,
            yield_factor: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch_ingredient() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();

        let created = create_ingredient(&store, user_id, salmon_request())
            .await
            .unwrap();
        let fetched = get_ingredient(&store, created.id).await.unwrap();

        assert_eq!(fetched.name, "Salmon Fillet (raw)");
        assert_eq!(fetched.user_id, user_id);
        assert!((fetched.per_100g.protein_g - 20.4).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let store = InMemoryStore::new();
        let mut request = salmon_request();
        request.name = "   ".to_owned();

        let result = create_ingredient(&store, Uuid::new_v4(), request).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_negative_nutrients() {
        let store = InMemoryStore::new();
        let mut request = salmon_request();
        request.per_100g.sodium_mg = -1.0;

        let result = create_ingredient(&store, Uuid::new_v4(), request).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_partial_update_preserves_other_fields() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        let created = create_ingredient(&store, user_id, salmon_request())
            .await
            .unwrap();

        let update = IngredientUpdate {
            is_pantry_essential: Some(true),
            ..IngredientUpdate::default()
        };
        let updated = update_ingredient(&store, created.id, update).await.unwrap();

        assert!(updated.is_pantry_essential);
        assert_eq!(updated.name, "Salmon Fillet (raw)");
        assert!((updated.per_100g.calories - 208.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_search_filter_is_case_insensitive() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        create_ingredient(&store, user_id, salmon_request())
            .await
            .unwrap();
        let mut butter = salmon_request();
        butter.name = "Butter (unsalted)".to_owned();
        butter.category = IngredientCategory::Fat;
        create_ingredient(&store, user_id, butter).await.unwrap();

        let filter = IngredientFilter {
            category: None,
            search: Some("SALMON".to_owned()),
        };
        let found = list_ingredients(&store, user_id, &filter).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Salmon Fillet (raw)");
    }

    #[tokio::test]
    async fn test_category_summary_counts_sorted_by_category() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        create_ingredient(&store, user_id, salmon_request())
            .await
            .unwrap();
        let mut tuna = salmon_request();
        tuna.name = "Tuna Steak (raw)".to_owned();
        create_ingredient(&store, user_id, tuna).await.unwrap();
        let mut butter = salmon_request();
        butter.name = "Butter (unsalted)".to_owned();
        butter.category = IngredientCategory::Fat;
        create_ingredient(&store, user_id, butter).await.unwrap();

        let summary = category_summary(&store, user_id).await.unwrap();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].category, IngredientCategory::Fat);
        assert_eq!(summary[0].count, 1);
        assert_eq!(summary[1].category, IngredientCategory::Protein);
        assert_eq!(summary[1].count, 2);
    }

    #[tokio::test]
    async fn test_delete_missing_ingredient_is_loud() {
        let store = InMemoryStore::new();

        let result = delete_ingredient(&store, Uuid::new_v4()).await;

        assert!(result.is_err());
    }
}
