// ABOUTME: Meal template models with component lists and cached totals
// ABOUTME: Meal, MealComponent, and meal create/update request types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use crate::models::nutrient::NutrientTotals;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One weighed ingredient inside a meal.
///
/// The `slot` label is an open vocabulary (`protein_anchor`, `fat_source`,
/// `micronutrient_veg`, `condiment`, ...) rather than a closed enum; it
/// describes the component's role, not its category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealComponent {
    /// Role label within the meal
    pub slot: String,
    /// Catalog ingredient reference
    pub ingredient_id: Uuid,
    /// Raw weight in grams
    pub weight_grams: f64,
    /// Preparation method override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_method: Option<String>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A reusable named meal template.
///
/// `totals` is a cached aggregate and must equal the component totals at all
/// times; every write path that replaces `components` recomputes it in the
/// same operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered component list
    pub components: Vec<MealComponent>,
    /// Cached aggregate nutrient totals (one decimal per field)
    pub totals: NutrientTotals,
    /// Favorite flag
    pub is_favorite: bool,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a meal template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMeal {
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered component list
    pub components: Vec<MealComponent>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update for a meal template; `None` fields are untouched.
///
/// A present `components` triggers synchronous totals recomputation; any other
/// combination of fields leaves the cached totals alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealUpdate {
    /// New display name
    #[serde(default)]
    pub name: Option<String>,
    /// New description
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement component list
    #[serde(default)]
    pub components: Option<Vec<MealComponent>>,
    /// New favorite flag
    #[serde(default)]
    pub is_favorite: Option<bool>,
    /// New tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}
