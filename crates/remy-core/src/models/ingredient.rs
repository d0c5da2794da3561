// ABOUTME: Ingredient catalog models with per-100g nutrient density
// ABOUTME: Ingredient, IngredientCategory taxonomy, and catalog request types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use crate::constants::units;
use crate::models::nutrient::NutrientTotals;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed ingredient taxonomy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Protein anchors (fish, meat, eggs)
    Protein,
    /// Fat sources (oils, butter, nuts)
    Fat,
    /// Vegetables
    Vegetable,
    /// Condiments and sauces
    Condiment,
    /// Spices and seasonings
    Spice,
    /// Anything outside the fixed taxonomy
    Other,
}

impl IngredientCategory {
    /// Parse a category from string, mapping unknown values to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "protein" => Self::Protein,
            "fat" => Self::Fat,
            "vegetable" => Self::Vegetable,
            "condiment" => Self::Condiment,
            "spice" => Self::Spice,
            _ => Self::Other,
        }
    }

    /// Canonical snake_case name, also the shopping list sort key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Fat => "fat",
            Self::Vegetable => "vegetable",
            Self::Condiment => "condiment",
            Self::Spice => "spice",
            Self::Other => "other",
        }
    }
}

/// A catalog ingredient with per-100g nutrient density.
///
/// Read-only input to totals computation; maintained through the catalog
/// service. Historical snapshots denormalize what they need from it, so
/// later edits or deletion never rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Display name (unique per user by convention, enforced by seeding only)
    pub name: String,
    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// External food-database identifier, opaque to the engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fdc_id: Option<i64>,
    /// Nutrient density per 100 g
    pub per_100g: NutrientTotals,
    /// Excluded from shopping lists by default (assumed always on hand)
    pub is_pantry_essential: bool,
    /// Medical suitability tags (e.g. `renal_safe`, `high_potassium`)
    pub medical_tags: Vec<String>,
    /// Known preparation methods (e.g. `grilled`, `steamed`)
    pub preparation_methods: Vec<String>,
    /// Taxonomy category
    pub category: IngredientCategory,
    /// Whether the density describes the cooked form
    pub is_cooked: bool,
    /// Raw to cooked weight ratio, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yield_factor: Option<f64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Ingredient {
    /// Nutrient contribution of `weight_grams` of this ingredient (unrounded)
    #[must_use]
    pub fn contribution(&self, weight_grams: f64) -> NutrientTotals {
        self.per_100g
            .scaled(weight_grams / units::REFERENCE_PORTION_GRAMS)
    }
}

/// Input for creating a catalog ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIngredient {
    /// Display name
    pub name: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// External food-database identifier
    #[serde(default)]
    pub fdc_id: Option<i64>,
    /// Nutrient density per 100 g
    pub per_100g: NutrientTotals,
    /// Excluded from shopping lists by default
    #[serde(default)]
    pub is_pantry_essential: bool,
    /// Medical suitability tags
    #[serde(default)]
    pub medical_tags: Vec<String>,
    /// Known preparation methods
    #[serde(default)]
    pub preparation_methods: Vec<String>,
    /// Taxonomy category
    pub category: IngredientCategory,
    /// Whether the density describes the cooked form
    #[serde(default)]
    pub is_cooked: bool,
    /// Raw to cooked weight ratio
    #[serde(default)]
    pub yield_factor: Option<f64>,
}

/// Partial update for a catalog ingredient; `None` fields are untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientUpdate {
    /// New display name
    #[serde(default)]
    pub name: Option<String>,
    /// New description
    #[serde(default)]
    pub description: Option<String>,
    /// New external food-database identifier
    #[serde(default)]
    pub fdc_id: Option<i64>,
    /// New nutrient density per 100 g
    #[serde(default)]
    pub per_100g: Option<NutrientTotals>,
    /// New pantry-essential flag
    #[serde(default)]
    pub is_pantry_essential: Option<bool>,
    /// New medical tags
    #[serde(default)]
    pub medical_tags: Option<Vec<String>>,
    /// New preparation methods
    #[serde(default)]
    pub preparation_methods: Option<Vec<String>>,
    /// New category
    #[serde(default)]
    pub category: Option<IngredientCategory>,
    /// New cooked flag
    #[serde(default)]
    pub is_cooked: Option<bool>,
    /// New yield factor
    #[serde(default)]
    pub yield_factor: Option<f64>,
}

/// Filter for catalog listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientFilter {
    /// Restrict to one category
    #[serde(default)]
    pub category: Option<IngredientCategory>,
    /// Case-insensitive name substring
    #[serde(default)]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_lossy() {
        assert_eq!(
            IngredientCategory::from_str_lossy("Protein"),
            IngredientCategory::Protein
        );
        assert_eq!(
            IngredientCategory::from_str_lossy("charcuterie"),
            IngredientCategory::Other
        );
    }

    #[test]
    fn test_category_round_trips_through_as_str() {
        for category in [
            IngredientCategory::Protein,
            IngredientCategory::Fat,
            IngredientCategory::Vegetable,
            IngredientCategory::Condiment,
            IngredientCategory::Spice,
            IngredientCategory::Other,
        ] {
            assert_eq!(IngredientCategory::from_str_lossy(category.as_str()), category);
        }
    }
}
