// ABOUTME: Shopping list derivation: weekly aggregation, check-off, formatted views
// ABOUTME: Merges meal-backed plan slots by ingredient and denormalizes catalog metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use chrono::{NaiveDate, Utc};
use remy_core::errors::{AppError, AppResult};
use remy_core::models::{
    format_weight, FormattedShoppingItem, FormattedShoppingList, ShoppingCategoryGroup,
    ShoppingItem, ShoppingList,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::intelligence::schedule;
use crate::storage::NutritionStore;

/// Generate (or regenerate) the shopping list for an inclusive week window.
///
/// Every meal-backed slot across the window's plans is expanded against the
/// current catalog; repeated ingredients sum their weights, and the name,
/// category, and pantry flag are denormalized from the first occurrence.
/// Slots holding inline custom components are not aggregated. Meals or
/// ingredients that no longer resolve are skipped. The result is sorted by
/// category then ingredient name, every `checked` flag starts false, and the
/// write replaces any existing list for the same week start while keeping
/// its identity.
///
/// # Errors
///
/// Returns `InvalidInput` when the window is inverted, or an error when a
/// storage operation fails.
pub async fn generate<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    week_start: NaiveDate,
    week_end: NaiveDate,
) -> AppResult<ShoppingList> {
    if week_start > week_end {
        return Err(AppError::invalid_input(
            "Week start must not be after week end",
        ));
    }

    let plans = store.list_day_plans(user_id, week_start, week_end).await?;

    // Merge by ingredient id; BTreeMap only for deterministic iteration,
    // the final order comes from the sort below
    let mut merged: BTreeMap<Uuid, ShoppingItem> = BTreeMap::new();
    for plan in &plans {
        for slot in &plan.slots {
            let Some(meal_id) = slot.meal_id else {
                continue;
            };
            let Some(meal) = store.get_meal(meal_id).await? else {
                warn!("Shopping aggregation skipping missing meal {meal_id}");
                continue;
            };
            for component in &meal.components {
                let Some(ingredient) = store.get_ingredient(component.ingredient_id).await? else {
                    warn!(
                        "Shopping aggregation skipping missing ingredient {}",
                        component.ingredient_id
                    );
                    continue;
                };
                merged
                    .entry(ingredient.id)
                    .and_modify(|item| item.total_weight_grams += component.weight_grams)
                    .or_insert(ShoppingItem {
                        ingredient_id: ingredient.id,
                        ingredient_name: ingredient.name,
                        total_weight_grams: component.weight_grams,
                        is_pantry_essential: ingredient.is_pantry_essential,
                        category: ingredient.category,
                        checked: false,
                    });
            }
        }
    }

    let mut items: Vec<ShoppingItem> = merged.into_values().collect();
    items.sort_by(|a, b| {
        a.category
            .as_str()
            .cmp(b.category.as_str())
            .then_with(|| a.ingredient_name.cmp(&b.ingredient_name))
    });

    let existing = store.get_shopping_list(user_id, week_start).await?;
    let list = ShoppingList {
        id: existing.map_or_else(Uuid::new_v4, |list| list.id),
        user_id,
        week_start,
        week_end,
        items,
        generated_at: Utc::now(),
    };
    store.upsert_shopping_list(&list).await?;

    debug!(
        "Generated shopping list for week of {} ({} items)",
        week_start,
        list.items.len()
    );
    Ok(list)
}

/// Generate the shopping list for the Monday-first week containing `date`
///
/// # Errors
///
/// Returns an error when a storage operation fails.
pub async fn generate_for_week<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    date: NaiveDate,
) -> AppResult<ShoppingList> {
    let (week_start, week_end) = schedule::week_bounds(date);
    generate(store, user_id, week_start, week_end).await
}

/// Flip one item's checked state on a stored shopping list.
///
/// # Errors
///
/// Returns `ResourceNotFound` when no list exists for the week start or the
/// ingredient is not on it, or an error when a storage operation fails.
pub async fn toggle_item<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    week_start: NaiveDate,
    ingredient_id: Uuid,
) -> AppResult<ShoppingList> {
    let mut list = store
        .get_shopping_list(user_id, week_start)
        .await?
        .ok_or_else(|| AppError::not_found("List"))?;

    let item = list
        .items
        .iter_mut()
        .find(|item| item.ingredient_id == ingredient_id)
        .ok_or_else(|| {
            AppError::not_found("Shopping list item").with_resource_id(ingredient_id.to_string())
        })?;
    item.checked = !item.checked;

    store.upsert_shopping_list(&list).await?;
    Ok(list)
}

/// Build the display-ready view of a stored shopping list.
///
/// Items group by category in category order (they are already sorted that
/// way), weights render through `format_weight`, and the summary counts
/// reflect whatever pantry filtering was applied.
///
/// # Errors
///
/// Returns `ResourceNotFound` when no list exists for the week start, or an
/// error when the storage read fails.
pub async fn formatted<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    week_start: NaiveDate,
    exclude_pantry: bool,
) -> AppResult<FormattedShoppingList> {
    let list = store
        .get_shopping_list(user_id, week_start)
        .await?
        .ok_or_else(|| AppError::not_found("List"))?;

    let items: Vec<&ShoppingItem> = if exclude_pantry {
        list.items
            .iter()
            .filter(|item| !item.is_pantry_essential)
            .collect()
    } else {
        list.items.iter().collect()
    };

    let total_items = items.len();
    let checked_items = items.iter().filter(|item| item.checked).count();

    let mut groups: Vec<ShoppingCategoryGroup> = Vec::new();
    for item in items {
        let formatted_item = FormattedShoppingItem {
            ingredient_id: item.ingredient_id,
            ingredient_name: item.ingredient_name.clone(),
            display_weight: format_weight(item.total_weight_grams),
            is_pantry_essential: item.is_pantry_essential,
            checked: item.checked,
        };
        match groups.last_mut() {
            Some(group) if group.category == item.category => group.items.push(formatted_item),
            _ => groups.push(ShoppingCategoryGroup {
                category: item.category,
                items: vec![formatted_item],
            }),
        }
    }

    Ok(FormattedShoppingList {
        week_start: list.week_start,
        week_end: list.week_end,
        groups,
        total_items,
        checked_items,
    })
}
