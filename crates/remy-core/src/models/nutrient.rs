// ABOUTME: Seven-field nutrient profile shared by ingredients, meals, and day plans
// ABOUTME: NutrientTotals with scaling, accumulation, rounding, and net carb helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use serde::{Deserialize, Serialize};

/// The seven-field nutrient profile used everywhere in the engine.
///
/// The same shape serves as an ingredient's per-100g density, a meal's cached
/// aggregate, a day plan slot's totals, and a day plan's day-level totals.
/// Quantities are grams except `calories` (kcal) and the two minerals (mg).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Carbohydrates, gross (g)
    pub carbohydrates_g: f64,
    /// Dietary fiber (g)
    pub fiber_g: f64,
    /// Sodium (mg)
    pub sodium_mg: f64,
    /// Potassium (mg)
    pub potassium_mg: f64,
}

impl NutrientTotals {
    /// An all-zero profile
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            calories: 0.0,
            protein_g: 0.0,
            fat_g: 0.0,
            carbohydrates_g: 0.0,
            fiber_g: 0.0,
            sodium_mg: 0.0,
            potassium_mg: 0.0,
        }
    }

    /// Multiply every field by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            fat_g: self.fat_g * factor,
            carbohydrates_g: self.carbohydrates_g * factor,
            fiber_g: self.fiber_g * factor,
            sodium_mg: self.sodium_mg * factor,
            potassium_mg: self.potassium_mg * factor,
        }
    }

    /// Add `other` into this profile field-wise
    pub fn accumulate(&mut self, other: &Self) {
        self.calories += other.calories;
        self.protein_g += other.protein_g;
        self.fat_g += other.fat_g;
        self.carbohydrates_g += other.carbohydrates_g;
        self.fiber_g += other.fiber_g;
        self.sodium_mg += other.sodium_mg;
        self.potassium_mg += other.potassium_mg;
    }

    /// Round every field to one decimal place (half-up on the summed value)
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            calories: round_one_decimal(self.calories),
            protein_g: round_one_decimal(self.protein_g),
            fat_g: round_one_decimal(self.fat_g),
            carbohydrates_g: round_one_decimal(self.carbohydrates_g),
            fiber_g: round_one_decimal(self.fiber_g),
            sodium_mg: round_one_decimal(self.sodium_mg),
            potassium_mg: round_one_decimal(self.potassium_mg),
        }
    }

    /// Net carbohydrates (g): gross carbohydrates minus fiber
    #[must_use]
    pub fn net_carbs_g(&self) -> f64 {
        self.carbohydrates_g - self.fiber_g
    }
}

/// Half-up rounding at one decimal. Nutrient quantities are non-negative,
/// so `round()` (half away from zero) gives half-up.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
