// ABOUTME: Body weight tracking model, one entry per user and date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One body weight measurement; logging twice for the same date upserts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightLog {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Measurement date
    pub date: NaiveDate,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
