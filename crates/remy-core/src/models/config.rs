// ABOUTME: Per-user nutrition config with targets, medical flags, and schedule policy
// ABOUTME: NutritionConfig, ScheduleMode, ConfigView, and partial update types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use crate::constants::{schedule, targets, thresholds};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Meal slot scheduling policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleMode {
    /// One meal a day, weekends included
    Omad,
    /// One meal on weekdays, `weekend_meal_slots` on weekend days
    WeekendIf,
    /// Flat `weekend_meal_slots` override regardless of day
    Custom,
}

impl ScheduleMode {
    /// Parse a schedule mode from string, mapping unknown values to `Omad`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "weekend_if" => Self::WeekendIf,
            "custom" => Self::Custom,
            _ => Self::Omad,
        }
    }

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Omad => "omad",
            Self::WeekendIf => "weekend_if",
            Self::Custom => "custom",
        }
    }
}

/// Per-user nutrition targets, medical flags, and schedule policy.
///
/// A per-user singleton, lazily created on first explicit initialization.
/// When absent, readers substitute [`NutritionConfig::renal_keto_defaults`]
/// at the boundary; day validation is the exception and short-circuits to no
/// warnings instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Owning user (also the record identity)
    pub user_id: Uuid,
    /// Daily caloric ceiling (kcal)
    pub caloric_ceiling: f64,
    /// Daily protein target (g)
    pub protein_target_g: f64,
    /// Daily fat target (g)
    pub fat_target_g: f64,
    /// Daily net carb limit (g)
    pub net_carb_limit_g: f64,
    /// Renal protection protocol active
    pub renal_protection: bool,
    /// Hypertension management active (enables the mineral thresholds)
    pub hypertension_management: bool,
    /// Ketogenic protocol active
    pub keto_protocol: bool,
    /// Daily sodium limit (mg), meaningful under hypertension management
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium_daily_limit_mg: Option<f64>,
    /// Daily potassium minimum (mg), meaningful under hypertension management
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potassium_daily_minimum_mg: Option<f64>,
    /// Meal slot scheduling policy
    pub schedule_mode: ScheduleMode,
    /// Weekend slot override for `weekend_if`, flat override for `custom`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekend_meal_slots: Option<u32>,
    /// Current body weight (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_weight_kg: Option<f64>,
    /// Goal body weight (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_weight_kg: Option<f64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl NutritionConfig {
    /// The renal-safe ketogenic default protocol for a user with no stored
    /// config: 1650 kcal ceiling, 120 g protein and fat targets, 25 g net
    /// carbs, all medical flags on, 2300 mg sodium limit, 3500 mg potassium
    /// minimum, OMAD schedule.
    #[must_use]
    pub fn renal_keto_defaults(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            caloric_ceiling: targets::DEFAULT_CALORIC_CEILING,
            protein_target_g: targets::DEFAULT_PROTEIN_TARGET_G,
            fat_target_g: targets::DEFAULT_FAT_TARGET_G,
            net_carb_limit_g: targets::DEFAULT_NET_CARB_LIMIT_G,
            renal_protection: true,
            hypertension_management: true,
            keto_protocol: true,
            sodium_daily_limit_mg: Some(thresholds::DEFAULT_SODIUM_LIMIT_MG),
            potassium_daily_minimum_mg: Some(thresholds::DEFAULT_POTASSIUM_MINIMUM_MG),
            schedule_mode: ScheduleMode::Omad,
            weekend_meal_slots: Some(schedule::DEFAULT_WEEKEND_MEAL_SLOTS),
            current_weight_kg: None,
            goal_weight_kg: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A config read with provenance: the stored record, or the default
/// substitution when none exists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigView {
    /// The effective config
    #[serde(flatten)]
    pub config: NutritionConfig,
    /// Whether a stored record backs it
    pub initialized: bool,
}

/// Partial update for a nutrition config; `None` fields are untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfigUpdate {
    /// New caloric ceiling (kcal)
    #[serde(default)]
    pub caloric_ceiling: Option<f64>,
    /// New protein target (g)
    #[serde(default)]
    pub protein_target_g: Option<f64>,
    /// New fat target (g)
    #[serde(default)]
    pub fat_target_g: Option<f64>,
    /// New net carb limit (g)
    #[serde(default)]
    pub net_carb_limit_g: Option<f64>,
    /// New renal protection flag
    #[serde(default)]
    pub renal_protection: Option<bool>,
    /// New hypertension management flag
    #[serde(default)]
    pub hypertension_management: Option<bool>,
    /// New keto protocol flag
    #[serde(default)]
    pub keto_protocol: Option<bool>,
    /// New sodium limit (mg)
    #[serde(default)]
    pub sodium_daily_limit_mg: Option<f64>,
    /// New potassium minimum (mg)
    #[serde(default)]
    pub potassium_daily_minimum_mg: Option<f64>,
    /// New schedule mode
    #[serde(default)]
    pub schedule_mode: Option<ScheduleMode>,
    /// New weekend slot count
    #[serde(default)]
    pub weekend_meal_slots: Option<u32>,
    /// New current weight (kg)
    #[serde(default)]
    pub current_weight_kg: Option<f64>,
    /// New goal weight (kg)
    #[serde(default)]
    pub goal_weight_kg: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renal_keto_defaults_match_protocol() {
        let config = NutritionConfig::renal_keto_defaults(Uuid::new_v4());

        assert!((config.caloric_ceiling - 1650.0).abs() < f64::EPSILON);
        assert!((config.protein_target_g - 120.0).abs() < f64::EPSILON);
        assert!((config.net_carb_limit_g - 25.0).abs() < f64::EPSILON);
        assert!(config.hypertension_management);
        assert_eq!(config.schedule_mode, ScheduleMode::Omad);
        assert_eq!(config.sodium_daily_limit_mg, Some(2300.0));
    }

    #[test]
    fn test_schedule_mode_from_str_lossy_defaults_to_omad() {
        assert_eq!(ScheduleMode::from_str_lossy("weekend_if"), ScheduleMode::WeekendIf);
        assert_eq!(ScheduleMode::from_str_lossy("5:2"), ScheduleMode::Omad);
    }
}
