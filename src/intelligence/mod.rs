// ABOUTME: Pure computation layer for nutrient math, slot scheduling, and day validation
// ABOUTME: Takes resolved data in and returns derived values; never touches storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

//! # Intelligence Module
//!
//! The deterministic heart of the engine. Everything in here is a pure
//! function over already-resolved data: services load records from storage,
//! hand them in, and persist whatever comes back. Keeping this layer free of
//! I/O makes the nutrient math trivially testable and reusable across every
//! write path that has to refresh derived state.

/// Meal slot resolution and calendar week math
pub mod schedule;
/// Nutrient aggregation over weighed components
pub mod totals;
/// Day-level validation against configured targets
pub mod validation;

pub use schedule::DaySchedule;
