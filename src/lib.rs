// ABOUTME: Main library entry point for the Remy nutrition engine
// ABOUTME: Provides meal planning, day validation, and shopping-list derivation services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy across the engine
#![deny(unsafe_code)]

//! # Remy Nutrition Engine
//!
//! A meal-planning engine for medically constrained ketogenic diets. The
//! engine keeps an ingredient catalog with per-100 g nutrient profiles,
//! composes meals and day plans from it, validates every day against the
//! user's medical protocol, and derives shopping lists and immutable
//! consumption history from the plans.
//!
//! ## Features
//!
//! - **Ingredient catalog**: per-100 g profiles with medical suitability tags
//! - **Meal templates**: weighed component lists with cached nutrient totals
//! - **Day planning**: slot scheduling, protocol warnings, day copies
//! - **Consumption history**: point-in-time snapshots that survive later edits
//! - **Shopping lists**: week-scoped aggregation with pantry-aware formatting
//!
//! ## Architecture
//!
//! The engine is split into focused layers:
//! - **Intelligence**: pure nutrient math, schedule resolution, day validation
//! - **Services**: business logic as free async functions over the store trait
//! - **Storage**: the [`storage::NutritionStore`] trait and in-memory backend
//! - **Seed**: the curated staple ingredient catalog for new users
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use remy_nutrition_engine::errors::AppResult;
//! use remy_nutrition_engine::models::IngredientFilter;
//! use remy_nutrition_engine::storage::InMemoryStore;
//! use remy_nutrition_engine::{seed, services};
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = InMemoryStore::new();
//!     let user_id = Uuid::new_v4();
//!
//!     // Load the staple catalog, then browse it
//!     let summary = seed::seed_staple_ingredients(&store, user_id).await?;
//!     println!("Seeded {} staple ingredients", summary.imported);
//!
//!     let catalog =
//!         services::ingredients::list_ingredients(&store, user_id, &IngredientFilter::default())
//!             .await?;
//!     println!("Catalog now holds {} entries", catalog.len());
//!
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by integration tests (tests/) and downstream
// consumers. They must remain `pub`.

/// Pure nutrient aggregation, schedule resolution, and day validation
pub mod intelligence;

/// Staple ingredient catalog seeding for new users
pub mod seed;

/// Domain service layer for nutrition planning business logic
pub mod services;

/// Storage abstraction and the in-memory reference backend
pub mod storage;

/// Test utilities for creating consistent test data
#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

// ── Core re-exports ─────────────────────────────────────────────────────
// The shared core crate carries the domain model; re-export its surface so
// consumers need only this crate.

pub use remy_core::{constants, errors, models};
