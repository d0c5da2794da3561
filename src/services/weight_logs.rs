// ABOUTME: Body weight tracking: daily upsert, recent history, latest reading
// ABOUTME: One log per (user, date); re-logging a day replaces the reading in place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use chrono::{NaiveDate, Utc};
use remy_core::constants::history;
use remy_core::errors::{AppError, AppResult};
use remy_core::models::WeightLog;
use tracing::debug;
use uuid::Uuid;

use crate::storage::NutritionStore;

/// Record a weight reading for a date, replacing any existing reading.
///
/// A same-day re-log keeps the record's identity and creation timestamp and
/// swaps the reading and note.
///
/// # Errors
///
/// Returns `InvalidInput` when the weight is non-positive or non-finite, or
/// an error when a storage operation fails.
pub async fn log_weight<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    date: NaiveDate,
    weight_kg: f64,
    note: Option<String>,
) -> AppResult<WeightLog> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be a positive number"));
    }

    let existing = store.get_weight_log(user_id, date).await?;
    let log = match existing {
        Some(mut log) => {
            log.weight_kg = weight_kg;
            log.note = note;
            log
        }
        None => WeightLog {
            id: Uuid::new_v4(),
            user_id,
            date,
            weight_kg,
            note,
            created_at: Utc::now(),
        },
    };

    store.upsert_weight_log(&log).await?;
    debug!("Logged weight {weight_kg}kg on {date}");
    Ok(log)
}

/// The most recent weight readings, in ascending date order.
///
/// `limit` defaults to 30 when not supplied.
///
/// # Errors
///
/// Returns an error when the storage read fails.
pub async fn recent_weights<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    limit: Option<usize>,
) -> AppResult<Vec<WeightLog>> {
    let limit = limit.unwrap_or(history::DEFAULT_RECENT_LIMIT);
    Ok(store.list_weight_logs(user_id, limit).await?)
}

/// The single most recent weight reading, if any
///
/// # Errors
///
/// Returns an error when the storage read fails.
pub async fn latest_weight<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
) -> AppResult<Option<WeightLog>> {
    let mut logs = store.list_weight_logs(user_id, 1).await?;
    Ok(logs.pop())
}

/// Remove the weight reading for a date.
///
/// # Errors
///
/// Returns `ResourceNotFound` when no reading exists for the date, or an
/// error when a storage operation fails.
pub async fn remove_weight<S: NutritionStore>(
    store: &S,
    user_id: Uuid,
    date: NaiveDate,
) -> AppResult<()> {
    store
        .get_weight_log(user_id, date)
        .await?
        .ok_or_else(|| AppError::not_found("Log"))?;

    store.delete_weight_log(user_id, date).await?;
    debug!("Removed weight log for {date}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use chrono::Datelike;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[tokio::test]
    async fn test_same_day_relog_replaces_in_place() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();

        let first = log_weight(&store, user_id, date(10), 82.4, None)
            .await
            .unwrap();
        let second = log_weight(
            &store,
            user_id,
            date(10),
            82.1,
            Some("after workout".to_owned()),
        )
        .await
        .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);
        assert!((second.weight_kg - 82.1).abs() < f64::EPSILON);

        let logs = recent_weights(&store, user_id, None).await.unwrap();
        assert_eq!(logs.len(), 1);
    }

    #[tokio::test]
    async fn test_recent_weights_limit_and_order() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        for day in [12, 10, 14, 11, 13] {
            log_weight(&store, user_id, date(day), 80.0, None)
                .await
                .unwrap();
        }

        let recent = recent_weights(&store, user_id, Some(3)).await.unwrap();
        let days: Vec<u32> = recent.iter().map(|log| log.date.day()).collect();

        assert_eq!(days, [12, 13, 14]);
    }

    #[tokio::test]
    async fn test_latest_weight_picks_newest_date() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        log_weight(&store, user_id, date(10), 82.0, None)
            .await
            .unwrap();
        log_weight(&store, user_id, date(12), 81.5, None)
            .await
            .unwrap();

        let latest = latest_weight(&store, user_id).await.unwrap().unwrap();

        assert_eq!(latest.date, date(12));
    }

    #[tokio::test]
    async fn test_remove_missing_log_is_loud() {
        let store = InMemoryStore::new();

        let result = remove_weight(&store, Uuid::new_v4(), date(10)).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_nonpositive_weight_rejected() {
        let store = InMemoryStore::new();

        assert!(log_weight(&store, Uuid::new_v4(), date(10), 0.0, None)
            .await
            .is_err());
        assert!(log_weight(&store, Uuid::new_v4(), date(10), -5.0, None)
            .await
            .is_err());
    }
}
