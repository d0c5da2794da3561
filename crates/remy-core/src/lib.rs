// ABOUTME: Core types and constants for the Remy nutrition planning engine
// ABOUTME: Foundation crate with error handling, domain models, and default targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

#![deny(unsafe_code)]

//! # Remy Core
//!
//! Foundation crate providing shared types for the Remy nutrition planning
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and response formatting
//! - **constants**: Default nutrition targets and schedule constants
//! - **models**: Domain models (ingredients, meals, day plans, consumption log, shopping lists)

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Default nutrition targets and schedule constants organized by domain
pub mod constants;

/// Core data models (`Ingredient`, `Meal`, `DayPlan`, `NutritionConfig`, etc.)
pub mod models;
