// ABOUTME: Meal slot resolution from schedule mode and calendar position
// ABOUTME: Also owns Monday-first week math shared by range queries and shopping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use chrono::{Datelike, NaiveDate, Weekday};
use remy_core::constants::schedule;
use remy_core::models::{NutritionConfig, ScheduleMode};

/// Resolved slot layout for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySchedule {
    /// Number of meal slots the day offers
    pub slot_count: u32,
    /// Whether the date falls on Saturday or Sunday
    pub is_weekend: bool,
    /// Day of week, 0 = Sunday .. 6 = Saturday
    pub day_of_week: u8,
}

/// Resolve how many meal slots a date offers under a config.
///
/// `omad` is one slot on every day of the week. `weekend_if` offers the
/// configured weekend count on Saturday and Sunday and one slot on weekdays.
/// `custom` applies the configured count uniformly. A user with no stored
/// config gets one slot, same as `omad`.
#[must_use]
pub fn resolve_slot_count(date: NaiveDate, config: Option<&NutritionConfig>) -> DaySchedule {
    let day_of_week = day_of_week(date);
    let is_weekend = day_of_week == 0 || day_of_week == 6;

    let slot_count = config.map_or(1, |config| match config.schedule_mode {
        ScheduleMode::Omad => 1,
        ScheduleMode::WeekendIf => {
            if is_weekend {
                config
                    .weekend_meal_slots
                    .unwrap_or(schedule::DEFAULT_WEEKEND_MEAL_SLOTS)
            } else {
                1
            }
        }
        ScheduleMode::Custom => config
            .weekend_meal_slots
            .unwrap_or(schedule::DEFAULT_CUSTOM_MEAL_SLOTS),
    });

    DaySchedule {
        slot_count,
        is_weekend,
        day_of_week,
    }
}

/// Day of week with Sunday as zero, the convention stored on plan records
#[must_use]
pub fn day_of_week(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// The Monday-first week window containing `date`, both bounds inclusive
#[must_use]
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = date.week(Weekday::Mon);
    (week.first_day(), week.last_day())
}
