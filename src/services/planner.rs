// ABOUTME: Day plan assembly: slot writes, day copies, consumption, and calendar queries
// ABOUTME: Recomputes day totals and warnings in the same write as every slot mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use chrono::{NaiveDate, Utc};
use remy_core::errors::{AppError, AppResult};
use remy_core::models::{
    ComponentSnapshot, ConsumptionEntry, ConsumptionSnapshot, CustomComponent, DayPlan,
    NutrientTotals, NutritionConfig, PlanSlot, PlanStatus, SlotSource, TargetSnapshot,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::intelligence::{schedule, totals, validation, DaySchedule};
use crate::storage::NutritionStore;

use super::meals;

fn validate_custom_components(components: &[CustomComponent]) -> AppResult<()> {
    for component in components {
        if !component.weight_grams.is_finite() || component.weight_grams < 0.0 {
            return Err(AppError::invalid_input(
                "Component weight must be a non-negative number",
            ));
        }
    }
    Ok(())
}

/// Derived state refresh run after every slot mutation: day totals are the
/// field-wise sum of slot totals, warnings follow from the totals.
fn refresh_derived(plan: &mut DayPlan, config: Option<&NutritionConfig>) {
    plan.totals = totals::day_totals(&plan.slots);
    plan.warnings = validation::validate_day(&plan.totals, config);
}

async fn build_slot<S: NutritionStore>(
    store: &S,
    slot_index: u32,
    source: SlotSource,
) -> AppResult<PlanSlot> {
    match source {
        SlotSource::Meal(meal_id) => {
            let meal = store
                .get_meal(meal_id)
                .await?
                .ok_or_else(|| AppError::not_found("Meal").with_resource_id(meal_id.to_string()))?;
            Ok(PlanSlot {
                slot_index,
                meal_id: Some(meal.id),
                custom_components: None,
                totals: meal.totals,
            })
        }
        SlotSource::Custom(components) => {
            validate_custom_components(&components)?;
            let parts: Vec<(Uuid, f64)> = components
                .iter()
                .map(|component| (component.ingredient_id, component.weight_grams))
                .collect();
            let slot_totals = meals::resolved_totals(store, &parts).await?;
            Ok(PlanSlot {
                slot_index,
                meal_id: None,
                custom_components: Some(components),
                totals: slot_totals,
            })
        }
    }
}

/// Assign a slot on a day plan, creating the plan when none exists.
///
/// A meal source must reference a live template (its cached totals are
/// denormalized into the slot at assignment time); a custom source runs its
/// components through totals computation, tolerating stale ingredient
/// references. An existing slot with the same index is replaced, otherwise
/// the slot is appended. Day totals and warnings are refreshed in the same
/// write. The plan's status is left alone, so re-planning a consumed day does
/// not un-consume it.
///
/// # Errors
///
/// Returns `ResourceNotFound` when a meal source references an unknown meal,
/// `InvalidInput` when a custom component weight is invalid, or an error when
/// a storage operation fails.
pub async fn set_slot<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    date: NaiveDate,
    slot_index: u32,
    source: SlotSource,
) -> AppResult<DayPlan> {
    let slot = build_slot(store, slot_index, source).await?;
    let config = store.get_nutrition_config(user_id).await?;
    let now = Utc::now();

    let mut plan = match store.get_day_plan(user_id, date).await? {
        Some(plan) => plan,
        None => DayPlan {
            id: Uuid::new_v4(),
            user_id,
            date,
            day_of_week: schedule::day_of_week(date),
            slots: Vec::new(),
            totals: NutrientTotals::zero(),
            warnings: Vec::new(),
            status: PlanStatus::Planned,
            consumed_at: None,
            notes: None,
            created_at: now,
            updated_at: now,
        },
    };

    match plan
        .slots
        .iter_mut()
        .find(|existing| existing.slot_index == slot_index)
    {
        Some(existing) => *existing = slot,
        None => plan.slots.push(slot),
    }

    refresh_derived(&mut plan, config.as_ref());
    plan.updated_at = now;
    store.upsert_day_plan(&plan).await?;

    debug!(
        "Set slot {} on {} ({} warnings)",
        slot_index,
        date,
        plan.warnings.len()
    );
    Ok(plan)
}

/// Remove a slot from a day plan.
///
/// Clearing the last slot deletes the plan record entirely, so empty plans
/// are never stored; `None` signals that outcome. Clearing a slot index that
/// is not present, or a day with no plan at all, succeeds as a no-op.
///
/// # Errors
///
/// Returns an error when a storage operation fails.
pub async fn clear_slot<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    date: NaiveDate,
    slot_index: u32,
) -> AppResult<Option<DayPlan>> {
    let Some(mut plan) = store.get_day_plan(user_id, date).await? else {
        return Ok(None);
    };

    plan.slots.retain(|slot| slot.slot_index != slot_index);

    if plan.slots.is_empty() {
        store.delete_day_plan(user_id, date).await?;
        debug!("Cleared last slot on {date}; plan deleted");
        return Ok(None);
    }

    let config = store.get_nutrition_config(user_id).await?;
    refresh_derived(&mut plan, config.as_ref());
    plan.updated_at = Utc::now();
    store.upsert_day_plan(&plan).await?;

    debug!("Cleared slot {slot_index} on {date}");
    Ok(Some(plan))
}

/// Copy a day plan wholesale onto another date.
///
/// Slots, totals, and warnings carry over verbatim (warnings are not
/// re-validated against the current config). Any existing target plan is
/// deleted first. The copy starts its own lifecycle: status `planned`, no
/// consumption timestamp, no notes, fresh record timestamps, and day of week
/// derived from the target date.
///
/// # Errors
///
/// Returns `PreconditionFailed` when the source date has no plan, or an error
/// when a storage operation fails.
pub async fn copy_day<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    source_date: NaiveDate,
    target_date: NaiveDate,
) -> AppResult<DayPlan> {
    let source = store
        .get_day_plan(user_id, source_date)
        .await?
        .ok_or_else(|| AppError::precondition_failed("Source day has no plan"))?;

    store.delete_day_plan(user_id, target_date).await?;

    let now = Utc::now();
    let copy = DayPlan {
        id: Uuid::new_v4(),
        user_id,
        date: target_date,
        day_of_week: schedule::day_of_week(target_date),
        slots: source.slots.clone(),
        totals: source.totals,
        warnings: source.warnings.clone(),
        status: PlanStatus::Planned,
        consumed_at: None,
        notes: None,
        created_at: now,
        updated_at: now,
    };
    store.upsert_day_plan(&copy).await?;

    debug!("Copied plan from {source_date} to {target_date}");
    Ok(copy)
}

/// Build the frozen snapshot for a plan as it stands right now.
///
/// Totals come verbatim from the plan aggregate. The component breakdown
/// re-expands each meal-backed slot against the current catalog, unrounded;
/// meals or ingredients that no longer resolve are skipped. Slots holding
/// inline custom components produce no breakdown lines.
///
/// # Errors
///
/// Returns an error when a storage read fails.
pub async fn build_snapshot<S: NutritionStore>(
    store: &S,
    plan: &DayPlan,
) -> AppResult<ConsumptionSnapshot> {
    let mut components = Vec::new();

    for slot in &plan.slots {
        let Some(meal_id) = slot.meal_id else {
            continue;
        };
        let Some(meal) = store.get_meal(meal_id).await? else {
            warn!("Snapshot skipping missing meal {meal_id}");
            continue;
        };
        for component in &meal.components {
            let Some(ingredient) = store.get_ingredient(component.ingredient_id).await? else {
                warn!(
                    "Snapshot skipping missing ingredient {}",
                    component.ingredient_id
                );
                continue;
            };
            let contribution = ingredient.contribution(component.weight_grams);
            components.push(ComponentSnapshot {
                ingredient_name: ingredient.name,
                weight_grams: component.weight_grams,
                calories: contribution.calories,
                protein_g: contribution.protein_g,
                fat_g: contribution.fat_g,
                carbohydrates_g: contribution.carbohydrates_g,
            });
        }
    }

    Ok(ConsumptionSnapshot {
        totals: plan.totals,
        components,
    })
}

/// Mark a day's plan consumed, appending a frozen consumption entry.
///
/// The entry freezes the plan totals, a re-derived component breakdown, and
/// the four targets in force (defaults when no config exists). The plan
/// flips to `consumed` with a timestamp. There is no double-invocation
/// guard: marking the same day again appends another entry.
///
/// # Errors
///
/// Returns `PreconditionFailed` when the date has no plan, or an error when a
/// storage operation fails.
pub async fn mark_consumed<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    date: NaiveDate,
) -> AppResult<ConsumptionEntry> {
    let mut plan = store
        .get_day_plan(user_id, date)
        .await?
        .ok_or_else(|| AppError::precondition_failed("No plan for this day"))?;

    let snapshot = build_snapshot(store, &plan).await?;
    let config = store.get_nutrition_config(user_id).await?;
    let now = Utc::now();

    let entry = ConsumptionEntry {
        id: Uuid::new_v4(),
        user_id,
        plan_id: plan.id,
        date,
        snapshot,
        targets: TargetSnapshot::from_config(config.as_ref()),
        consumed_at: now,
    };
    store.insert_consumption_entry(&entry).await?;

    plan.status = PlanStatus::Consumed;
    plan.consumed_at = Some(now);
    plan.updated_at = now;
    store.upsert_day_plan(&plan).await?;

    info!("Marked {date} consumed for user {user_id}");
    Ok(entry)
}

/// Resolve the slot layout a date offers under the user's current config
///
/// # Errors
///
/// Returns an error when the storage read fails.
pub async fn day_schedule<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    date: NaiveDate,
) -> AppResult<DaySchedule> {
    let config = store.get_nutrition_config(user_id).await?;
    Ok(schedule::resolve_slot_count(date, config.as_ref()))
}

/// Fetch the plan for one date, if any
///
/// # Errors
///
/// Returns an error when the storage read fails.
pub async fn get_day<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    date: NaiveDate,
) -> AppResult<Option<DayPlan>> {
    Ok(store.get_day_plan(user_id, date).await?)
}

/// Fetch all plans in an inclusive date range, sorted by date.
///
/// # Errors
///
/// Returns `InvalidInput` when the range is inverted, or an error when the
/// storage read fails.
pub async fn get_range<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<DayPlan>> {
    if start > end {
        return Err(AppError::invalid_input(
            "Range start must not be after range end",
        ));
    }
    Ok(store.list_day_plans(user_id, start, end).await?)
}

/// Fetch consumption entries in an inclusive date range, ordered by date
/// then consumption time.
///
/// # Errors
///
/// Returns `InvalidInput` when the range is inverted, or an error when the
/// storage read fails.
pub async fn consumption_history<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<ConsumptionEntry>> {
    if start > end {
        return Err(AppError::invalid_input(
            "Range start must not be after range end",
        ));
    }
    Ok(store.list_consumption_entries(user_id, start, end).await?)
}
