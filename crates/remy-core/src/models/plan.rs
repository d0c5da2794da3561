// ABOUTME: Day plan models with indexed slots, derived totals, and advisory warnings
// ABOUTME: DayPlan, PlanSlot, SlotSource, CustomComponent, and PlanStatus definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use crate::models::nutrient::NutrientTotals;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a day plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Planned but not yet eaten
    Planned,
    /// Marked consumed (a consumption entry exists)
    Consumed,
    /// Deliberately skipped
    Skipped,
}

/// An inline ad hoc component inside a plan slot (no role label or notes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomComponent {
    /// Catalog ingredient reference
    pub ingredient_id: Uuid,
    /// Raw weight in grams
    pub weight_grams: f64,
    /// Preparation method override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_method: Option<String>,
}

/// One meal-sized allocation within a day plan.
///
/// Exactly one of `meal_id` / `custom_components` is populated by the
/// assembler. Meal-backed slots hold totals denormalized from the template at
/// assignment time; later template edits do not flow back into the slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSlot {
    /// Position within the day (not necessarily dense)
    pub slot_index: u32,
    /// Meal template reference for template-driven slots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_id: Option<Uuid>,
    /// Inline components for ad hoc slots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_components: Option<Vec<CustomComponent>>,
    /// Per-slot nutrient totals (one decimal per field)
    pub totals: NutrientTotals,
}

/// What a slot is assigned from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotSource {
    /// A meal template whose cached totals are copied in at assignment time
    Meal(Uuid),
    /// Inline ad hoc components, run through totals computation
    Custom(Vec<CustomComponent>),
}

/// One calendar day of planned eating.
///
/// `totals` and `warnings` are derived state: every slot mutation recomputes
/// both in the same write. A plan with zero slots is never stored; clearing
/// the last slot deletes the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar date (unique per user)
    pub date: NaiveDate,
    /// Day of week, 0=Sunday..6=Saturday
    pub day_of_week: u8,
    /// Slots indexed by `slot_index`
    pub slots: Vec<PlanSlot>,
    /// Field-wise sum of slot totals (never re-rounded)
    pub totals: NutrientTotals,
    /// Ordered advisory warnings from day validation
    pub warnings: Vec<String>,
    /// Lifecycle status
    pub status: PlanStatus,
    /// When the plan was marked consumed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_at: Option<DateTime<Utc>>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}
