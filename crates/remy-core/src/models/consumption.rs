// ABOUTME: Append-only consumption log models with frozen totals and targets
// ABOUTME: ConsumptionEntry, ConsumptionSnapshot, ComponentSnapshot, TargetSnapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use crate::constants::targets;
use crate::models::config::NutritionConfig;
use crate::models::nutrient::NutrientTotals;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One resolved component line in a consumption snapshot.
///
/// Denormalized at snapshot time: carries the ingredient name and the
/// unrounded macro contribution, so later catalog edits never rewrite it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSnapshot {
    /// Ingredient name at snapshot time
    pub ingredient_name: String,
    /// Raw weight in grams
    pub weight_grams: f64,
    /// Energy contribution (kcal)
    pub calories: f64,
    /// Protein contribution (g)
    pub protein_g: f64,
    /// Fat contribution (g)
    pub fat_g: f64,
    /// Carbohydrate contribution (g)
    pub carbohydrates_g: f64,
}

/// Frozen picture of what a day plan contained when it was consumed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionSnapshot {
    /// Day totals copied verbatim from the plan
    pub totals: NutrientTotals,
    /// Per-component breakdown (meal-backed slots only)
    pub components: Vec<ComponentSnapshot>,
}

/// The four targets in force when a day was consumed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetSnapshot {
    /// Daily caloric ceiling (kcal)
    pub caloric_ceiling: f64,
    /// Daily protein target (g)
    pub protein_target_g: f64,
    /// Daily fat target (g)
    pub fat_target_g: f64,
    /// Daily net carb limit (g)
    pub net_carb_limit_g: f64,
}

impl TargetSnapshot {
    /// The default targets (1650 / 120 / 120 / 25)
    #[must_use]
    pub const fn defaults() -> Self {
        Self {
            caloric_ceiling: targets::DEFAULT_CALORIC_CEILING,
            protein_target_g: targets::DEFAULT_PROTEIN_TARGET_G,
            fat_target_g: targets::DEFAULT_FAT_TARGET_G,
            net_carb_limit_g: targets::DEFAULT_NET_CARB_LIMIT_G,
        }
    }

    /// Capture the four targets from a config, substituting the defaults
    /// when no config exists. Medical flags and thresholds are deliberately
    /// not captured.
    #[must_use]
    pub fn from_config(config: Option<&NutritionConfig>) -> Self {
        config.map_or_else(Self::defaults, |c| Self {
            caloric_ceiling: c.caloric_ceiling,
            protein_target_g: c.protein_target_g,
            fat_target_g: c.fat_target_g,
            net_carb_limit_g: c.net_carb_limit_g,
        })
    }
}

/// One append-only consumption log entry.
///
/// Back-references the plan it was derived from; never mutated or deleted by
/// normal flow, and never updated when the plan, its meals, or the config
/// change afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// The day plan this entry was derived from
    pub plan_id: Uuid,
    /// Calendar date consumed
    pub date: NaiveDate,
    /// Frozen day snapshot
    pub snapshot: ConsumptionSnapshot,
    /// Frozen targets in force at consumption time
    pub targets: TargetSnapshot,
    /// When the entry was created
    pub consumed_at: DateTime<Utc>,
}
