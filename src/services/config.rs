// ABOUTME: Nutrition config lifecycle: lazy defaults, idempotent initialize, partial update
// ABOUTME: Reads substitute the renal-keto default protocol when no record exists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use chrono::Utc;
use remy_core::errors::{AppError, AppResult};
use remy_core::models::{ConfigView, NutritionConfig, NutritionConfigUpdate};
use tracing::{debug, info};
use uuid::Uuid;

use crate::storage::NutritionStore;

fn validate_target(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(())
}

/// Read the user's effective config.
///
/// The stored record when one exists, otherwise the default renal-keto
/// protocol with `initialized: false`; callers that need to distinguish
/// check the flag.
///
/// # Errors
///
/// Returns an error when the storage read fails.
pub async fn get_config<S: NutritionStore>(store: &S, user_id: Uuid) -> AppResult<ConfigView> {
    let stored = store.get_nutrition_config(user_id).await?;
    Ok(stored.map_or_else(
        || ConfigView {
            config: NutritionConfig::renal_keto_defaults(user_id),
            initialized: false,
        },
        |config| ConfigView {
            config,
            initialized: true,
        },
    ))
}

/// Create the user's config record with the default protocol.
///
/// Idempotent: an existing record is returned untouched.
///
/// # Errors
///
/// Returns an error when a storage operation fails.
pub async fn initialize_config<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
) -> AppResult<NutritionConfig> {
    if let Some(existing) = store.get_nutrition_config(user_id).await? {
        return Ok(existing);
    }

    let config = NutritionConfig::renal_keto_defaults(user_id);
    store.upsert_nutrition_config(&config).await?;
    info!("Initialized nutrition config for user {user_id}");
    Ok(config)
}

/// Apply a partial update to the user's config record.
///
/// Absent fields are untouched. Unlike reads, updates never substitute
/// defaults: the record must have been initialized first.
///
/// # Errors
///
/// Returns `ConfigMissing` when no record exists, `InvalidInput` when a
/// supplied target is non-positive or the weekend slot count is zero, or an
/// error when a storage operation fails.
pub async fn update_config<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    update: NutritionConfigUpdate,
) -> AppResult<NutritionConfig> {
    let mut config = store
        .get_nutrition_config(user_id)
        .await?
        .ok_or_else(AppError::config_missing)?;

    if let Some(caloric_ceiling) = update.caloric_ceiling {
        validate_target("Caloric ceiling", caloric_ceiling)?;
        config.caloric_ceiling = caloric_ceiling;
    }
    if let Some(protein_target_g) = update.protein_target_g {
        validate_target("Protein target", protein_target_g)?;
        config.protein_target_g = protein_target_g;
    }
    if let Some(fat_target_g) = update.fat_target_g {
        validate_target("Fat target", fat_target_g)?;
        config.fat_target_g = fat_target_g;
    }
    if let Some(net_carb_limit_g) = update.net_carb_limit_g {
        validate_target("Net carb limit", net_carb_limit_g)?;
        config.net_carb_limit_g = net_carb_limit_g;
    }
    if let Some(renal_protection) = update.renal_protection {
        config.renal_protection = renal_protection;
    }
    if let Some(hypertension_management) = update.hypertension_management {
        config.hypertension_management = hypertension_management;
    }
    if let Some(keto_protocol) = update.keto_protocol {
        config.keto_protocol = keto_protocol;
    }
    if let Some(sodium_daily_limit_mg) = update.sodium_daily_limit_mg {
        validate_target("Sodium limit", sodium_daily_limit_mg)?;
        config.sodium_daily_limit_mg = Some(sodium_daily_limit_mg);
    }
    if let Some(potassium_daily_minimum_mg) = update.potassium_daily_minimum_mg {
        validate_target("Potassium minimum", potassium_daily_minimum_mg)?;
        config.potassium_daily_minimum_mg = Some(potassium_daily_minimum_mg);
    }
    if let Some(schedule_mode) = update.schedule_mode {
        config.schedule_mode = schedule_mode;
    }
    if let Some(weekend_meal_slots) = update.weekend_meal_slots {
        if weekend_meal_slots == 0 {
            return Err(AppError::invalid_input(
                "Weekend meal slots must be at least 1",
            ));
        }
        config.weekend_meal_slots = Some(weekend_meal_slots);
    }
    if let Some(current_weight_kg) = update.current_weight_kg {
        validate_target("Current weight", current_weight_kg)?;
        config.current_weight_kg = Some(current_weight_kg);
    }
    if let Some(goal_weight_kg) = update.goal_weight_kg {
        validate_target("Goal weight", goal_weight_kg)?;
        config.goal_weight_kg = Some(goal_weight_kg);
    }

    config.updated_at = Utc::now();
    store.upsert_nutrition_config(&config).await?;
    debug!("Updated nutrition config for user {user_id}");
    Ok(config)
}
