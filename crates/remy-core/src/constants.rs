// ABOUTME: Default nutrition targets and schedule constants organized by domain
// ABOUTME: Pure data constants shared by models, validation, and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

//! Constants module
//!
//! Default targets applied when a user has no stored nutrition config, plus
//! the fixed factors used by validation and scheduling. Grouped by domain so
//! a target change touches exactly one place.

/// Default daily targets substituted when no nutrition config exists
pub mod targets {
    /// Default daily caloric ceiling (kcal)
    pub const DEFAULT_CALORIC_CEILING: f64 = 1650.0;
    /// Default daily protein target (g)
    pub const DEFAULT_PROTEIN_TARGET_G: f64 = 120.0;
    /// Default daily fat target (g)
    pub const DEFAULT_FAT_TARGET_G: f64 = 120.0;
    /// Default daily net carb limit (g)
    pub const DEFAULT_NET_CARB_LIMIT_G: f64 = 25.0;
}

/// Default medical thresholds (meaningful under hypertension management)
pub mod thresholds {
    /// Default daily sodium limit (mg)
    pub const DEFAULT_SODIUM_LIMIT_MG: f64 = 2300.0;
    /// Default daily potassium minimum (mg)
    pub const DEFAULT_POTASSIUM_MINIMUM_MG: f64 = 3500.0;
}

/// Validation rule factors
pub mod validation {
    /// Protein warnings fire below this fraction of the target (10% tolerance band)
    pub const PROTEIN_TOLERANCE_FACTOR: f64 = 0.9;
}

/// Schedule resolution defaults
pub mod schedule {
    /// Weekend slot count when `weekend_if` mode has no explicit override
    pub const DEFAULT_WEEKEND_MEAL_SLOTS: u32 = 2;
    /// Flat slot count when `custom` mode has no explicit override
    pub const DEFAULT_CUSTOM_MEAL_SLOTS: u32 = 1;
}

/// Measurement bases
pub mod units {
    /// Nutrient profiles are stored per this many grams of ingredient
    pub const REFERENCE_PORTION_GRAMS: f64 = 100.0;
    /// Shopping list weights at or above this render in kilograms
    pub const KILOGRAM_THRESHOLD_GRAMS: f64 = 1000.0;
}

/// History query defaults
pub mod history {
    /// Default number of weight log entries returned by recent queries
    pub const DEFAULT_RECENT_LIMIT: usize = 30;
}
