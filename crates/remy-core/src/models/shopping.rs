// ABOUTME: Shopping list models with denormalized items and display formatting
// ABOUTME: ShoppingList, ShoppingItem, grouped formatted views, and weight display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use crate::constants::units;
use crate::models::ingredient::IngredientCategory;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One aggregated ingredient demand line.
///
/// Name, category, and pantry flag are denormalized from the catalog at
/// generation time (first occurrence wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Catalog ingredient reference
    pub ingredient_id: Uuid,
    /// Ingredient name at generation time
    pub ingredient_name: String,
    /// Summed demand across the week (g)
    pub total_weight_grams: f64,
    /// Assumed always on hand
    pub is_pantry_essential: bool,
    /// Taxonomy category at generation time
    pub category: IngredientCategory,
    /// Ticked off by the shopper; reset to false on regeneration
    pub checked: bool,
}

/// Aggregated ingredient demand for one week window, one list per
/// (user, `week_start`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingList {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// First day of the window (inclusive)
    pub week_start: NaiveDate,
    /// Last day of the window (inclusive)
    pub week_end: NaiveDate,
    /// Sorted items (category, then ingredient name)
    pub items: Vec<ShoppingItem>,
    /// When the list was last generated
    pub generated_at: DateTime<Utc>,
}

/// One item in a formatted shopping view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedShoppingItem {
    /// Catalog ingredient reference
    pub ingredient_id: Uuid,
    /// Ingredient name
    pub ingredient_name: String,
    /// Human-readable weight (`"450g"`, `"1.2kg"`)
    pub display_weight: String,
    /// Assumed always on hand
    pub is_pantry_essential: bool,
    /// Ticked off by the shopper
    pub checked: bool,
}

/// Items of one category in a formatted shopping view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingCategoryGroup {
    /// Taxonomy category
    pub category: IngredientCategory,
    /// Items in the category, sorted by name
    pub items: Vec<FormattedShoppingItem>,
}

/// Display-ready shopping list grouped by category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedShoppingList {
    /// First day of the window (inclusive)
    pub week_start: NaiveDate,
    /// Last day of the window (inclusive)
    pub week_end: NaiveDate,
    /// Category groups in category order
    pub groups: Vec<ShoppingCategoryGroup>,
    /// Item count after any pantry filtering
    pub total_items: usize,
    /// Checked item count after any pantry filtering
    pub checked_items: usize,
}

/// Render a gram weight for display: kilograms with one decimal at or above
/// 1000 g, otherwise whole grams
#[must_use]
pub fn format_weight(grams: f64) -> String {
    if grams >= units::KILOGRAM_THRESHOLD_GRAMS {
        format!("{:.1}kg", grams / units::KILOGRAM_THRESHOLD_GRAMS)
    } else {
        format!("{}g", grams.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_weight_under_a_kilogram() {
        assert_eq!(format_weight(450.0), "450g");
        assert_eq!(format_weight(449.6), "450g");
        assert_eq!(format_weight(0.0), "0g");
    }

    #[test]
    fn test_format_weight_kilograms_with_one_decimal() {
        assert_eq!(format_weight(1000.0), "1.0kg");
        assert_eq!(format_weight(1234.0), "1.2kg");
        assert_eq!(format_weight(2550.0), "2.5kg");
    }
}
