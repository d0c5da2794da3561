// ABOUTME: Pure nutrient aggregation over weighed ingredient components
// ABOUTME: Scales raw per-100g densities by weight and rounds each field once, at the end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use remy_core::models::{Ingredient, NutrientTotals, PlanSlot};

/// Aggregate nutrient totals for a list of resolved components.
///
/// Each entry pairs the resolved catalog ingredient (when the reference still
/// points at a live record) with the component weight in grams. Entries whose
/// ingredient no longer resolves contribute zero to every field, so a meal
/// referencing a deleted ingredient still produces totals instead of failing.
/// Scaling happens on the raw per-100g densities; each field is rounded to
/// one decimal only after the full sum, never per component.
#[must_use]
pub fn component_totals<'a, I>(parts: I) -> NutrientTotals
where
    I: IntoIterator<Item = (Option<&'a Ingredient>, f64)>,
{
    let mut sum = NutrientTotals::zero();
    for (ingredient, weight_grams) in parts {
        if let Some(ingredient) = ingredient {
            sum.accumulate(&ingredient.contribution(weight_grams));
        }
    }
    sum.rounded()
}

/// Sum per-slot totals into day totals.
///
/// Slot totals are already rounded to one decimal; the day sum adds them
/// field-wise as-is and is not rounded again.
#[must_use]
pub fn day_totals(slots: &[PlanSlot]) -> NutrientTotals {
    let mut sum = NutrientTotals::zero();
    for slot in slots {
        sum.accumulate(&slot.totals);
    }
    sum
}
