// ABOUTME: Staple ingredient catalog seeding for new users
// ABOUTME: Curated USDA-derived ketogenic staples with renal and hypertension tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

//! Staple catalog seeder.
//!
//! Loads a curated set of ketogenic staple ingredients (proteins, fats,
//! vegetables, condiments, spices) with per-100 g nutrient profiles and
//! medical suitability tags. Seeding is idempotent by ingredient name, so
//! re-running never overwrites profiles the user has edited.

use std::collections::HashSet;

use remy_core::errors::AppResult;
use remy_core::models::IngredientCategory::{Condiment, Fat, Other, Protein, Spice, Vegetable};
use remy_core::models::{IngredientCategory, NewIngredient, NutrientTotals};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::services::ingredients;
use crate::storage::NutritionStore;

/// Outcome of a staple catalog seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    /// Ingredients created by this run
    pub imported: usize,
    /// Catalog entries skipped because the name already exists
    pub skipped: usize,
    /// Catalog size
    pub total: usize,
}

// ============================================================================
// Staple Catalog Data
// ============================================================================

struct StapleRow {
    name: &'static str,
    category: IngredientCategory,
    // (calories, protein g, fat g, carbs g, fiber g, sodium mg, potassium mg) per 100 g
    per_100g: (f64, f64, f64, f64, f64, f64, f64),
    tags: &'static [&'static str],
    pantry: bool,
}

impl StapleRow {
    fn to_new_ingredient(&self) -> NewIngredient {
        let (calories, protein_g, fat_g, carbohydrates_g, fiber_g, sodium_mg, potassium_mg) =
            self.per_100g;
        NewIngredient {
            name: self.name.to_owned(),
            description: None,
            fdc_id: None,
            per_100g: NutrientTotals {
                calories,
                protein_g,
                fat_g,
                carbohydrates_g,
                fiber_g,
                sodium_mg,
                potassium_mg,
            },
            is_pantry_essential: self.pantry,
            medical_tags: self.tags.iter().map(|&tag| tag.to_owned()).collect(),
            preparation_methods: Vec::new(),
            category: self.category,
            is_cooked: false,
            yield_factor: None,
        }
    }
}

const KETO_STAPLES: &[StapleRow] = &[
    // Proteins
    StapleRow {
        name: "Chicken Breast (raw)",
        category: Protein,
        per_100g: (120.0, 22.5, 2.6, 0.0, 0.0, 45.0, 370.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Chicken Thigh (raw)",
        category: Protein,
        per_100g: (177.0, 19.7, 10.9, 0.0, 0.0, 84.0, 222.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Ground Beef 80/20 (raw)",
        category: Protein,
        per_100g: (254.0, 17.2, 20.0, 0.0, 0.0, 75.0, 270.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Ground Beef 90/10 (raw)",
        category: Protein,
        per_100g: (176.0, 20.0, 10.0, 0.0, 0.0, 66.0, 315.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Ribeye Steak (raw)",
        category: Protein,
        per_100g: (291.0, 18.6, 23.7, 0.0, 0.0, 59.0, 284.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Salmon Fillet (raw)",
        category: Protein,
        per_100g: (208.0, 20.4, 13.4, 0.0, 0.0, 59.0, 363.0),
        tags: &["renal_safe", "high_potassium"],
        pantry: false,
    },
    StapleRow {
        name: "Tuna Steak (raw)",
        category: Protein,
        per_100g: (109.0, 24.0, 0.5, 0.0, 0.0, 45.0, 323.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Shrimp (raw)",
        category: Protein,
        per_100g: (85.0, 20.1, 0.5, 0.0, 0.0, 119.0, 182.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Pork Tenderloin (raw)",
        category: Protein,
        per_100g: (120.0, 22.2, 3.0, 0.0, 0.0, 53.0, 399.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Pork Belly (raw)",
        category: Protein,
        per_100g: (518.0, 9.3, 53.0, 0.0, 0.0, 32.0, 127.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Bacon (raw)",
        category: Protein,
        per_100g: (417.0, 13.0, 40.0, 1.3, 0.0, 662.0, 198.0),
        tags: &["high_sodium"],
        pantry: false,
    },
    StapleRow {
        name: "Lamb Chop (raw)",
        category: Protein,
        per_100g: (282.0, 16.6, 23.4, 0.0, 0.0, 59.0, 264.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Turkey Breast (raw)",
        category: Protein,
        per_100g: (104.0, 24.6, 0.6, 0.0, 0.0, 46.0, 293.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Duck Breast (raw)",
        category: Protein,
        per_100g: (132.0, 19.3, 5.9, 0.0, 0.0, 63.0, 271.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Eggs (whole, raw)",
        category: Protein,
        per_100g: (143.0, 12.6, 9.5, 0.7, 0.0, 142.0, 138.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    // Oils and fats
    StapleRow {
        name: "Olive Oil (extra virgin)",
        category: Fat,
        per_100g: (884.0, 0.0, 100.0, 0.0, 0.0, 2.0, 1.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Avocado Oil",
        category: Fat,
        per_100g: (884.0, 0.0, 100.0, 0.0, 0.0, 1.0, 0.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Coconut Oil",
        category: Fat,
        per_100g: (892.0, 0.0, 99.0, 0.0, 0.0, 0.0, 0.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Butter (unsalted)",
        category: Fat,
        per_100g: (717.0, 0.9, 81.0, 0.1, 0.0, 11.0, 24.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Ghee",
        category: Fat,
        per_100g: (900.0, 0.0, 100.0, 0.0, 0.0, 0.0, 0.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "MCT Oil",
        category: Fat,
        per_100g: (864.0, 0.0, 100.0, 0.0, 0.0, 0.0, 0.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Avocado (whole)",
        category: Fat,
        per_100g: (160.0, 2.0, 15.0, 9.0, 7.0, 7.0, 485.0),
        tags: &["high_potassium"],
        pantry: false,
    },
    StapleRow {
        name: "Cream Cheese",
        category: Fat,
        per_100g: (342.0, 6.0, 34.0, 4.1, 0.0, 321.0, 132.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Heavy Cream",
        category: Fat,
        per_100g: (340.0, 2.1, 36.0, 2.8, 0.0, 38.0, 95.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Sour Cream",
        category: Fat,
        per_100g: (193.0, 2.4, 19.4, 4.6, 0.0, 53.0, 141.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Mayonnaise",
        category: Fat,
        per_100g: (680.0, 1.0, 75.0, 0.6, 0.0, 635.0, 20.0),
        tags: &["high_sodium"],
        pantry: true,
    },
    // Cheeses
    StapleRow {
        name: "Cheddar Cheese",
        category: Fat,
        per_100g: (403.0, 23.0, 33.0, 1.3, 0.0, 621.0, 76.0),
        tags: &["high_sodium"],
        pantry: false,
    },
    StapleRow {
        name: "Parmesan Cheese",
        category: Fat,
        per_100g: (431.0, 38.0, 29.0, 4.1, 0.0, 1529.0, 92.0),
        tags: &["high_sodium"],
        pantry: false,
    },
    StapleRow {
        name: "Mozzarella Cheese",
        category: Fat,
        per_100g: (280.0, 28.0, 17.0, 3.1, 0.0, 627.0, 95.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Feta Cheese",
        category: Fat,
        per_100g: (264.0, 14.0, 21.0, 4.1, 0.0, 917.0, 62.0),
        tags: &["high_sodium"],
        pantry: false,
    },
    StapleRow {
        name: "Brie Cheese",
        category: Fat,
        per_100g: (334.0, 21.0, 28.0, 0.5, 0.0, 629.0, 152.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Goat Cheese",
        category: Fat,
        per_100g: (364.0, 22.0, 30.0, 0.1, 0.0, 515.0, 158.0),
        tags: &[],
        pantry: false,
    },
    // Low-carb vegetables
    StapleRow {
        name: "Spinach (raw)",
        category: Vegetable,
        per_100g: (23.0, 2.9, 0.4, 3.6, 2.2, 79.0, 558.0),
        tags: &["high_potassium", "renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Kale (raw)",
        category: Vegetable,
        per_100g: (35.0, 2.9, 0.5, 6.7, 4.1, 43.0, 348.0),
        tags: &["high_potassium"],
        pantry: false,
    },
    StapleRow {
        name: "Broccoli (raw)",
        category: Vegetable,
        per_100g: (34.0, 2.8, 0.4, 7.0, 2.6, 33.0, 316.0),
        tags: &["high_potassium", "renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Cauliflower (raw)",
        category: Vegetable,
        per_100g: (25.0, 1.9, 0.3, 5.0, 2.0, 30.0, 299.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Zucchini (raw)",
        category: Vegetable,
        per_100g: (17.0, 1.2, 0.3, 3.1, 1.0, 8.0, 261.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Asparagus (raw)",
        category: Vegetable,
        per_100g: (20.0, 2.2, 0.1, 3.9, 2.1, 2.0, 202.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Green Beans (raw)",
        category: Vegetable,
        per_100g: (31.0, 1.8, 0.1, 7.0, 2.7, 6.0, 211.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Bell Pepper (raw)",
        category: Vegetable,
        per_100g: (26.0, 1.0, 0.3, 6.0, 2.1, 4.0, 211.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Mushrooms (raw)",
        category: Vegetable,
        per_100g: (22.0, 3.1, 0.3, 3.3, 1.0, 5.0, 318.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Celery (raw)",
        category: Vegetable,
        per_100g: (14.0, 0.7, 0.2, 3.0, 1.6, 80.0, 260.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Cucumber (raw)",
        category: Vegetable,
        per_100g: (15.0, 0.7, 0.1, 3.6, 0.5, 2.0, 147.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Lettuce Romaine (raw)",
        category: Vegetable,
        per_100g: (17.0, 1.2, 0.3, 3.3, 2.1, 8.0, 247.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Cabbage (raw)",
        category: Vegetable,
        per_100g: (25.0, 1.3, 0.1, 5.8, 2.5, 18.0, 170.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    StapleRow {
        name: "Brussels Sprouts (raw)",
        category: Vegetable,
        per_100g: (43.0, 3.4, 0.3, 9.0, 3.8, 25.0, 389.0),
        tags: &["high_potassium"],
        pantry: false,
    },
    StapleRow {
        name: "Arugula (raw)",
        category: Vegetable,
        per_100g: (25.0, 2.6, 0.7, 3.7, 1.6, 27.0, 369.0),
        tags: &["high_potassium"],
        pantry: false,
    },
    StapleRow {
        name: "Bok Choy (raw)",
        category: Vegetable,
        per_100g: (13.0, 1.5, 0.2, 2.2, 1.0, 65.0, 252.0),
        tags: &["renal_safe"],
        pantry: false,
    },
    // Condiments
    StapleRow {
        name: "Soy Sauce (low sodium)",
        category: Condiment,
        per_100g: (53.0, 5.5, 0.0, 4.9, 0.4, 3333.0, 212.0),
        tags: &["high_sodium"],
        pantry: true,
    },
    StapleRow {
        name: "Fish Sauce",
        category: Condiment,
        per_100g: (35.0, 5.0, 0.0, 3.6, 0.0, 7850.0, 390.0),
        tags: &["high_sodium"],
        pantry: true,
    },
    StapleRow {
        name: "Hot Sauce (Frank's)",
        category: Condiment,
        per_100g: (0.0, 0.0, 0.0, 0.0, 0.0, 2400.0, 0.0),
        tags: &["high_sodium"],
        pantry: true,
    },
    StapleRow {
        name: "Mustard (yellow)",
        category: Condiment,
        per_100g: (66.0, 4.4, 4.0, 5.3, 3.3, 1135.0, 152.0),
        tags: &["high_sodium"],
        pantry: true,
    },
    StapleRow {
        name: "Dijon Mustard",
        category: Condiment,
        per_100g: (66.0, 3.9, 3.3, 5.8, 2.8, 1135.0, 138.0),
        tags: &["high_sodium"],
        pantry: true,
    },
    StapleRow {
        name: "Apple Cider Vinegar",
        category: Condiment,
        per_100g: (21.0, 0.0, 0.0, 0.9, 0.0, 5.0, 73.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Red Wine Vinegar",
        category: Condiment,
        per_100g: (19.0, 0.0, 0.0, 0.3, 0.0, 8.0, 39.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Balsamic Vinegar",
        category: Condiment,
        per_100g: (88.0, 0.5, 0.0, 17.0, 0.0, 23.0, 112.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Lemon Juice",
        category: Condiment,
        per_100g: (22.0, 0.4, 0.2, 6.9, 0.3, 1.0, 103.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Lime Juice",
        category: Condiment,
        per_100g: (25.0, 0.4, 0.1, 8.4, 0.4, 2.0, 117.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Tahini",
        category: Condiment,
        per_100g: (595.0, 17.0, 54.0, 21.0, 9.3, 115.0, 414.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Pesto (basil)",
        category: Condiment,
        per_100g: (490.0, 5.0, 48.0, 6.0, 1.6, 750.0, 160.0),
        tags: &["high_sodium"],
        pantry: true,
    },
    // Spices, profiled per 100 g but used in small amounts
    StapleRow {
        name: "Salt (table)",
        category: Spice,
        per_100g: (0.0, 0.0, 0.0, 0.0, 0.0, 38758.0, 8.0),
        tags: &["high_sodium"],
        pantry: true,
    },
    StapleRow {
        name: "Black Pepper (ground)",
        category: Spice,
        per_100g: (251.0, 10.4, 3.3, 64.0, 25.0, 20.0, 1329.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Garlic Powder",
        category: Spice,
        per_100g: (331.0, 16.6, 0.7, 73.0, 9.0, 60.0, 1193.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Onion Powder",
        category: Spice,
        per_100g: (341.0, 10.4, 1.0, 79.0, 15.0, 73.0, 985.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Paprika",
        category: Spice,
        per_100g: (282.0, 14.1, 13.0, 54.0, 35.0, 68.0, 2280.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Cumin (ground)",
        category: Spice,
        per_100g: (375.0, 18.0, 22.0, 44.0, 11.0, 168.0, 1788.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Oregano (dried)",
        category: Spice,
        per_100g: (265.0, 9.0, 4.3, 69.0, 43.0, 25.0, 1260.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Thyme (dried)",
        category: Spice,
        per_100g: (276.0, 9.1, 7.4, 64.0, 37.0, 55.0, 814.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Rosemary (dried)",
        category: Spice,
        per_100g: (331.0, 4.9, 15.0, 64.0, 43.0, 50.0, 955.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Cayenne Pepper",
        category: Spice,
        per_100g: (318.0, 12.0, 17.0, 57.0, 27.0, 30.0, 2014.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Turmeric (ground)",
        category: Spice,
        per_100g: (312.0, 9.7, 3.2, 67.0, 22.0, 27.0, 2080.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Cinnamon (ground)",
        category: Spice,
        per_100g: (247.0, 4.0, 1.2, 81.0, 53.0, 10.0, 431.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Italian Seasoning",
        category: Spice,
        per_100g: (265.0, 9.0, 4.3, 69.0, 43.0, 25.0, 1200.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Chili Powder",
        category: Spice,
        per_100g: (282.0, 13.5, 14.0, 50.0, 35.0, 1010.0, 1916.0),
        tags: &["high_sodium"],
        pantry: true,
    },
    // Nuts and seeds
    StapleRow {
        name: "Almonds (raw)",
        category: Fat,
        per_100g: (579.0, 21.0, 50.0, 22.0, 12.5, 1.0, 733.0),
        tags: &["high_potassium"],
        pantry: false,
    },
    StapleRow {
        name: "Macadamia Nuts",
        category: Fat,
        per_100g: (718.0, 8.0, 76.0, 14.0, 9.0, 5.0, 368.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Pecans",
        category: Fat,
        per_100g: (691.0, 9.0, 72.0, 14.0, 10.0, 0.0, 410.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Walnuts",
        category: Fat,
        per_100g: (654.0, 15.0, 65.0, 14.0, 7.0, 2.0, 441.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Chia Seeds",
        category: Fat,
        per_100g: (486.0, 17.0, 31.0, 42.0, 34.0, 16.0, 407.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Flax Seeds",
        category: Fat,
        per_100g: (534.0, 18.0, 42.0, 29.0, 27.0, 30.0, 813.0),
        tags: &["high_potassium"],
        pantry: false,
    },
    StapleRow {
        name: "Pumpkin Seeds",
        category: Fat,
        per_100g: (559.0, 30.0, 49.0, 11.0, 6.0, 7.0, 809.0),
        tags: &["high_potassium"],
        pantry: false,
    },
    StapleRow {
        name: "Sunflower Seeds",
        category: Fat,
        per_100g: (584.0, 21.0, 51.0, 20.0, 9.0, 9.0, 645.0),
        tags: &[],
        pantry: false,
    },
    // Aromatics, flours, and specialty items
    StapleRow {
        name: "Garlic (raw)",
        category: Vegetable,
        per_100g: (149.0, 6.4, 0.5, 33.0, 2.1, 17.0, 401.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Ginger (raw)",
        category: Vegetable,
        per_100g: (80.0, 1.8, 0.8, 18.0, 2.0, 13.0, 415.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Onion (raw)",
        category: Vegetable,
        per_100g: (40.0, 1.1, 0.1, 9.3, 1.7, 4.0, 146.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Shallots (raw)",
        category: Vegetable,
        per_100g: (72.0, 2.5, 0.1, 17.0, 3.2, 12.0, 334.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Jalapeño Pepper",
        category: Vegetable,
        per_100g: (29.0, 0.9, 0.4, 6.5, 2.8, 3.0, 248.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Coconut Milk (canned)",
        category: Fat,
        per_100g: (197.0, 2.2, 21.0, 3.0, 0.0, 13.0, 220.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Almond Flour",
        category: Other,
        per_100g: (571.0, 21.0, 50.0, 20.0, 10.0, 1.0, 659.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Coconut Flour",
        category: Other,
        per_100g: (400.0, 13.0, 13.0, 60.0, 39.0, 37.0, 447.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Psyllium Husk",
        category: Other,
        per_100g: (200.0, 0.0, 0.0, 89.0, 78.0, 36.0, 260.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Erythritol",
        category: Other,
        per_100g: (0.0, 0.0, 0.0, 100.0, 0.0, 0.0, 0.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Stevia",
        category: Other,
        per_100g: (0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        tags: &[],
        pantry: true,
    },
    StapleRow {
        name: "Bone Broth (chicken)",
        category: Other,
        per_100g: (15.0, 3.0, 0.5, 0.0, 0.0, 360.0, 150.0),
        tags: &[],
        pantry: false,
    },
    StapleRow {
        name: "Collagen Peptides",
        category: Other,
        per_100g: (350.0, 90.0, 0.0, 0.0, 0.0, 90.0, 30.0),
        tags: &["renal_safe"],
        pantry: false,
    },
];

// ============================================================================
// Seeding
// ============================================================================

/// The full staple catalog as ingredient creation requests
#[must_use]
pub fn staple_catalog() -> Vec<NewIngredient> {
    KETO_STAPLES
        .iter()
        .map(StapleRow::to_new_ingredient)
        .collect()
}

/// Seed the staple catalog into a user's ingredient collection.
///
/// Catalog entries whose name already exists for the user are skipped, never
/// overwritten, so the operation is safe to repeat.
///
/// # Errors
///
/// Returns an error when a storage operation fails.
pub async fn seed_staple_ingredients<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
) -> AppResult<SeedSummary> {
    let existing: HashSet<String> = store
        .list_ingredients(user_id)
        .await?
        .into_iter()
        .map(|ingredient| ingredient.name)
        .collect();

    let mut imported = 0;
    let mut skipped = 0;
    for row in KETO_STAPLES {
        if existing.contains(row.name) {
            skipped += 1;
            continue;
        }
        ingredients::create_ingredient(store, user_id, row.to_new_ingredient()).await?;
        imported += 1;
    }

    info!("Seeded staple catalog for {user_id}: {imported} imported, {skipped} skipped");
    Ok(SeedSummary {
        imported,
        skipped,
        total: KETO_STAPLES.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;

    #[test]
    fn test_catalog_spot_values() {
        let catalog = staple_catalog();

        let salmon = catalog
            .iter()
            .find(|entry| entry.name == "Salmon Fillet (raw)")
            .unwrap();
        assert!((salmon.per_100g.calories - 208.0).abs() < f64::EPSILON);
        assert!((salmon.per_100g.protein_g - 20.4).abs() < f64::EPSILON);
        assert_eq!(salmon.medical_tags, ["renal_safe", "high_potassium"]);
        assert!(!salmon.is_pantry_essential);

        let salt = catalog
            .iter()
            .find(|entry| entry.name == "Salt (table)")
            .unwrap();
        assert!((salt.per_100g.sodium_mg - 38758.0).abs() < f64::EPSILON);
        assert!(salt.is_pantry_essential);

        let olive_oil = catalog
            .iter()
            .find(|entry| entry.name == "Olive Oil (extra virgin)")
            .unwrap();
        assert!(olive_oil.is_pantry_essential);
        assert!(olive_oil.preparation_methods.is_empty());
        assert!(!olive_oil.is_cooked);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();

        let first = seed_staple_ingredients(&store, user_id).await.unwrap();
        assert_eq!(first.imported, first.total);
        assert_eq!(first.skipped, 0);

        let second = seed_staple_ingredients(&store, user_id).await.unwrap();
        assert_eq!(second.imported, 0);
        assert_eq!(second.skipped, second.total);

        let listed = store.list_ingredients(user_id).await.unwrap();
        assert_eq!(listed.len(), first.total);
    }

    #[tokio::test]
    async fn test_seed_preserves_edited_ingredient() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();

        let mut custom = staple_catalog()
            .into_iter()
            .find(|entry| entry.name == "Butter (unsalted)")
            .unwrap();
        custom.per_100g.calories = 700.0;
        ingredients::create_ingredient(&store, user_id, custom)
            .await
            .unwrap();

        let summary = seed_staple_ingredients(&store, user_id).await.unwrap();
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.imported, summary.total - 1);

        let kept = store
            .list_ingredients(user_id)
            .await
            .unwrap()
            .into_iter()
            .find(|ingredient| ingredient.name == "Butter (unsalted)")
            .unwrap();
        assert!((kept.per_100g.calories - 700.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_seed_scoped_to_user() {
        let store = InMemoryStore::new();
        let first_user = Uuid::new_v4();
        let second_user = Uuid::new_v4();

        seed_staple_ingredients(&store, first_user).await.unwrap();

        let summary = seed_staple_ingredients(&store, second_user).await.unwrap();
        assert_eq!(summary.imported, summary.total);
    }
}
