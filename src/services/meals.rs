// ABOUTME: Meal template business logic: create, update, duplicate, delete, preview
// ABOUTME: Keeps cached meal totals synchronized with component edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use chrono::Utc;
use remy_core::errors::{AppError, AppResult};
use remy_core::models::{Ingredient, Meal, MealComponent, MealUpdate, NewMeal, NutrientTotals};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::intelligence::totals;
use crate::storage::NutritionStore;

/// Resolve (ingredient id, weight) pairs against the catalog and aggregate
/// their totals. References that no longer resolve are logged and contribute
/// zero, keeping template math tolerant of catalog deletions.
pub(crate) async fn resolved_totals<S: NutritionStore>(
    store: &S,
    parts: &[(Uuid, f64)],
) -> AppResult<NutrientTotals> {
    let mut resolved: Vec<(Option<Ingredient>, f64)> = Vec::with_capacity(parts.len());
    for (ingredient_id, weight_grams) in parts {
        let ingredient = store.get_ingredient(*ingredient_id).await?;
        if ingredient.is_none() {
            warn!("Component references missing ingredient {ingredient_id}; contributing zero");
        }
        resolved.push((ingredient, *weight_grams));
    }

    Ok(totals::component_totals(
        resolved
            .iter()
            .map(|(ingredient, weight_grams)| (ingredient.as_ref(), *weight_grams)),
    ))
}

fn component_parts(components: &[MealComponent]) -> Vec<(Uuid, f64)> {
    components
        .iter()
        .map(|component| (component.ingredient_id, component.weight_grams))
        .collect()
}

fn validate_components(components: &[MealComponent]) -> AppResult<()> {
    for component in components {
        if !component.weight_grams.is_finite() || component.weight_grams < 0.0 {
            return Err(AppError::invalid_input(
                "Component weight must be a non-negative number",
            ));
        }
    }
    Ok(())
}

fn validate_meal_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_input("Meal name cannot be empty"));
    }
    Ok(())
}

/// Create a meal template, computing cached totals from its components.
///
/// # Errors
///
/// Returns `InvalidInput` when the name is empty or a component weight is
/// negative or non-finite, or an error when a storage operation fails.
pub async fn create_meal<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    request: NewMeal,
) -> AppResult<Meal> {
    validate_meal_name(&request.name)?;
    validate_components(&request.components)?;

    let meal_totals = resolved_totals(store, &component_parts(&request.components)).await?;
    let now = Utc::now();
    let meal = Meal {
        id: Uuid::new_v4(),
        user_id,
        name: request.name,
        description: request.description,
        components: request.components,
        totals: meal_totals,
        is_favorite: false,
        tags: request.tags,
        created_at: now,
        updated_at: now,
    };

    store.create_meal(&meal).await?;
    debug!("Created meal '{}' ({})", meal.name, meal.id);
    Ok(meal)
}

/// Fetch one meal template.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the id is unknown, or an error when the
/// storage read fails.
pub async fn get_meal<S: NutritionStore>(store: &S, meal_id: Uuid) -> AppResult<Meal> {
    store
        .get_meal(meal_id)
        .await?
        .ok_or_else(|| AppError::not_found("Meal").with_resource_id(meal_id.to_string()))
}

/// List a user's meal templates sorted by name, optionally favorites only.
///
/// # Errors
///
/// Returns an error when the storage read fails.
pub async fn list_meals<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    favorites_only: bool,
) -> AppResult<Vec<Meal>> {
    let mut meals = store.list_meals(user_id).await?;
    if favorites_only {
        meals.retain(|meal| meal.is_favorite);
    }
    Ok(meals)
}

/// Apply a partial update to a meal template.
///
/// A present `components` list replaces the old one and recomputes the cached
/// totals in the same write; any other combination of fields leaves the
/// totals alone.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the id is unknown, `InvalidInput` when a
/// supplied field fails validation, or an error when a storage operation
/// fails.
pub async fn update_meal<S: NutritionStore>(
    store: &S,
    meal_id: Uuid,
    update: MealUpdate,
) -> AppResult<Meal> {
    let mut meal = get_meal(store, meal_id).await?;

    if let Some(name) = update.name {
        validate_meal_name(&name)?;
        meal.name = name;
    }
    if let Some(description) = update.description {
        meal.description = Some(description);
    }
    if let Some(components) = update.components {
        validate_components(&components)?;
        meal.totals = resolved_totals(store, &component_parts(&components)).await?;
        meal.components = components;
    }
    if let Some(is_favorite) = update.is_favorite {
        meal.is_favorite = is_favorite;
    }
    if let Some(tags) = update.tags {
        meal.tags = tags;
    }

    meal.updated_at = Utc::now();
    store.update_meal(&meal).await?;
    debug!("Updated meal '{}' ({})", meal.name, meal.id);
    Ok(meal)
}

/// Duplicate a meal template into a fully independent copy.
///
/// The copy gets a fresh id, `" (copy)"` appended to the name, a reset
/// favorite flag, and fresh timestamps. Components and cached totals carry
/// over verbatim.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the id is unknown, or an error when a
/// storage operation fails.
pub async fn duplicate_meal<S: NutritionStore>(store: &S, meal_id: Uuid) -> AppResult<Meal> {
    let source = get_meal(store, meal_id).await?;

    let now = Utc::now();
    let copy = Meal {
        id: Uuid::new_v4(),
        user_id: source.user_id,
        name: format!("{} (copy)", source.name),
        description: source.description.clone(),
        components: source.components.clone(),
        totals: source.totals,
        is_favorite: false,
        tags: source.tags.clone(),
        created_at: now,
        updated_at: now,
    };

    store.create_meal(&copy).await?;
    debug!("Duplicated meal {} into {}", source.id, copy.id);
    Ok(copy)
}

/// Delete a meal template.
///
/// No referential-integrity check runs against day plans: slots that
/// referenced the meal keep their denormalized totals, and snapshot or
/// shopping expansion skips the dangling reference.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the id is unknown, or an error when a
/// storage operation fails.
pub async fn delete_meal<S: NutritionStore>(store: &S, meal_id: Uuid) -> AppResult<()> {
    let meal = get_meal(store, meal_id).await?;
    store.delete_meal(meal.id).await?;
    debug!("Deleted meal '{}' ({})", meal.name, meal.id);
    Ok(())
}

/// Compute totals for an unpersisted component list, exactly as creation
/// would.
///
/// # Errors
///
/// Returns `InvalidInput` when a component weight is negative or non-finite,
/// or an error when the storage read fails.
pub async fn preview_totals<S: NutritionStore>(
    store: &S,
    components: &[MealComponent],
) -> AppResult<NutrientTotals> {
    validate_components(components)?;
    resolved_totals(store, &component_parts(components)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ingredients;
    use crate::storage::InMemoryStore;
    use remy_core::models::{IngredientCategory, NewIngredient};

    async fn seed_salmon(store: &InMemoryStore, user_id: Uuid) -> Ingredient {
        ingredients::create_ingredient(
            store,
            user_id,
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
                preparation_methods: vec!["grilled".to_owned()],
                category: IngredientCategory::Protein,
                is_cooked: false,
                yield_factor: None,
            },
        )
        .await
        .unwrap()
    }

    fn salmon_component(ingredient_id: Uuid, weight_grams: f64) -> MealComponent {
        MealComponent {
            slot: "protein_anchor".to_owned(),
            ingredient_id,
            weight_grams,
            preparation_method: Some("grilled".to_owned()),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_meal_computes_totals() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        let salmon = seed_salmon(&store, user_id).await;

        let meal = create_meal(
            &store,
            user_id,
            NewMeal {
                name: "Grilled Salmon Dinner".to_owned(),
                description: None,
                components: vec![salmon_component(salmon.id, 150.0)],
                tags: vec!["dinner".to_owned()],
            },
        )
        .await
        .unwrap();

        assert!((meal.totals.calories - 312.0).abs() < f64::EPSILON);
        assert!((meal.totals.protein_g - 30.6).abs() < f64::EPSILON);
        assert!((meal.totals.fat_g - 20.1).abs() < f64::EPSILON);
        assert!(!meal.is_favorite);
    }

    #[tokio::test]
    async fn test_update_components_recomputes_totals() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        let salmon = seed_salmon(&store, user_id).await;
        let meal = create_meal(
            &store,
            user_id,
            NewMeal {
                name: "Salmon".to_owned(),
                description: None,
                components: vec![salmon_component(salmon.id, 150.0)],
                tags: Vec::new(),
            },
        )
        .await
        .unwrap();

        let updated = update_meal(
            &store,
            meal.id,
            MealUpdate {
                components: Some(vec![salmon_component(salmon.id, 200.0)]),
                ..MealUpdate::default()
            },
        )
        .await
        .unwrap();

        assert!((updated.totals.calories - 416.0).abs() < f64::EPSILON);
        assert!((updated.totals.protein_g - 40.8).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_rename_leaves_totals_untouched() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        let salmon = seed_salmon(&store, user_id).await;
        let meal = create_meal(
            &store,
            user_id,
            NewMeal {
                name: "Salmon".to_owned(),
                description: None,
                components: vec![salmon_component(salmon.id, 150.0)],
                tags: Vec::new(),
            },
        )
        .await
        .unwrap();

        // Deleting the ingredient makes any recomputation visible as zeros
        ingredients::delete_ingredient(&store, salmon.id)
            .await
            .unwrap();
        let renamed = update_meal(
            &store,
            meal.id,
            MealUpdate {
                name: Some("Salmon Supper".to_owned()),
                ..MealUpdate::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(renamed.name, "Salmon Supper");
        assert!((renamed.totals.calories - 312.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_duplicate_appends_copy_and_resets_favorite() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        let salmon = seed_salmon(&store, user_id).await;
        let meal = create_meal(
            &store,
            user_id,
            NewMeal {
                name: "Salmon".to_owned(),
                description: Some("Weeknight staple".to_owned()),
                components: vec![salmon_component(salmon.id, 150.0)],
                tags: Vec::new(),
            },
        )
        .await
        .unwrap();
        update_meal(
            &store,
            meal.id,
            MealUpdate {
                is_favorite: Some(true),
                ..MealUpdate::default()
            },
        )
        .await
        .unwrap();

        let copy = duplicate_meal(&store, meal.id).await.unwrap();

        assert_eq!(copy.name, "Salmon (copy)");
        assert!(!copy.is_favorite);
        assert_ne!(copy.id, meal.id);
        assert!((copy.totals.calories - 312.0).abs() < f64::EPSILON);

        // Copies are independent: editing the copy leaves the source alone
        update_meal(
            &store,
            copy.id,
            MealUpdate {
                name: Some("Salmon Again".to_owned()),
                ..MealUpdate::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(get_meal(&store, meal.id).await.unwrap().name, "Salmon");
    }

    #[tokio::test]
    async fn test_meal_with_deleted_ingredient_computes_zero() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        let salmon = seed_salmon(&store, user_id).await;
        ingredients::delete_ingredient(&store, salmon.id)
            .await
            .unwrap();

        let meal = create_meal(
            &store,
            user_id,
            NewMeal {
                name: "Ghost Meal".to_owned(),
                description: None,
                components: vec![salmon_component(salmon.id, 150.0)],
                tags: Vec::new(),
            },
        )
        .await
        .unwrap();

        assert_eq!(meal.totals, NutrientTotals::zero());
    }

    #[tokio::test]
    async fn test_preview_matches_create() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        let salmon = seed_salmon(&store, user_id).await;
        let components = vec![salmon_component(salmon.id, 150.0)];

        let preview = preview_totals(&store, &components).await.unwrap();
        let meal = create_meal(
            &store,
            user_id,
            NewMeal {
                name: "Salmon".to_owned(),
                description: None,
                components,
                tags: Vec::new(),
            },
        )
        .await
        .unwrap();

        assert_eq!(preview, meal.totals);
    }

    #[tokio::test]
    async fn test_negative_weight_rejected() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        let salmon = seed_salmon(&store, user_id).await;

        let result = create_meal(
            &store,
            user_id,
            NewMeal {
                name: "Broken".to_owned(),
                description: None,
                components: vec![salmon_component(salmon.id, -10.0)],
                tags: Vec::new(),
            },
        )
        .await;

        assert!(result.is_err());
    }
}
