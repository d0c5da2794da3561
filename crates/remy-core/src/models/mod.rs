// ABOUTME: Core data models for the Remy nutrition planning engine
// ABOUTME: Re-exports NutrientTotals, Ingredient, Meal, DayPlan and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

//! # Data Models
//!
//! Core data structures shared by the engine's intelligence functions,
//! services, and storage boundary.
//!
//! ## Design Principles
//!
//! - **Denormalized history**: plan slots, consumption snapshots, and shopping
//!   items copy what they need from their sources at write time, so catalog
//!   and template edits never rewrite the past
//! - **Derived state is explicit**: cached totals and warnings are recomputed
//!   inside every mutator, never lazily
//! - **Serializable**: every model supports JSON serialization with
//!   snake_case enum encodings

// Domain modules
mod config;
mod consumption;
mod ingredient;
mod meal;
mod nutrient;
mod plan;
mod shopping;
mod weight;

// Re-export all public types for convenience
// Nutrient profile
pub use nutrient::NutrientTotals;

// Ingredient catalog
pub use ingredient::{
    Ingredient, IngredientCategory, IngredientFilter, IngredientUpdate, NewIngredient,
};

// Meal templates
pub use meal::{Meal, MealComponent, MealUpdate, NewMeal};

// Day plans
pub use plan::{CustomComponent, DayPlan, PlanSlot, PlanStatus, SlotSource};

// Nutrition config
pub use config::{ConfigView, NutritionConfig, NutritionConfigUpdate, ScheduleMode};

// Consumption log
pub use consumption::{
    ComponentSnapshot, ConsumptionEntry, ConsumptionSnapshot, TargetSnapshot,
};

// Shopping lists
pub use shopping::{
    format_weight, FormattedShoppingItem, FormattedShoppingList, ShoppingCategoryGroup,
    ShoppingItem, ShoppingList,
};

// Weight tracking
pub use weight::WeightLog;
