// ABOUTME: Domain service layer for nutrition planning business logic
// ABOUTME: Free async functions generic over the storage trait, one module per domain area
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

//! Domain service layer
//!
//! This module contains the business logic of the engine as free async
//! functions generic over [`crate::storage::NutritionStore`]. Services own
//! validation, derived-data recomputation, and cross-record workflows, so
//! callers get consistent rules regardless of the entry point.

/// Nutrition config lifecycle: defaults, initialization, partial updates
pub mod config;

/// Ingredient catalog CRUD, filtered listing, and category summaries
pub mod ingredients;

/// Meal template CRUD, duplication, and component total resolution
pub mod meals;

/// Day planning: slot assignment, day copies, and consumption snapshots
pub mod planner;

/// Shopping list generation, item toggling, and formatted output
pub mod shopping;

/// Body weight tracking: daily upsert, recent history, latest reading
pub mod weight_logs;
