// ABOUTME: Day-level validation of nutrient totals against configured targets
// ABOUTME: Produces ordered advisory warning strings; never blocks a write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

use remy_core::constants::validation;
use remy_core::models::{NutrientTotals, NutritionConfig};

/// Evaluate a day's totals against the user's config and return the warnings
/// that apply, in rule order.
///
/// Rules run in a fixed sequence: caloric ceiling, protein minimum, net carb
/// limit, sodium limit, potassium minimum. The two mineral rules only apply
/// while hypertension management is active and the corresponding threshold is
/// set. Comparisons are strict, so a day sitting exactly on a limit passes.
/// Measured values render rounded to the nearest integer; configured limits
/// render as stored. A user with no stored config gets no warnings.
///
/// The protein rule tolerates a shortfall down to 90% of the target before
/// warning.
#[must_use]
pub fn validate_day(totals: &NutrientTotals, config: Option<&NutritionConfig>) -> Vec<String> {
    let Some(config) = config else {
        return Vec::new();
    };

    let mut warnings = Vec::new();

    if totals.calories > config.caloric_ceiling {
        let measured = totals.calories.round();
        let limit = config.caloric_ceiling;
        warnings.push(format!("Exceeds caloric limit ({measured}/{limit} kcal)"));
    }

    if totals.protein_g < config.protein_target_g * validation::PROTEIN_TOLERANCE_FACTOR {
        let measured = totals.protein_g.round();
        let target = config.protein_target_g;
        warnings.push(format!("Below protein minimum ({measured}/{target}g)"));
    }

    let net_carbs = totals.net_carbs_g();
    if net_carbs > config.net_carb_limit_g {
        let measured = net_carbs.round();
        let limit = config.net_carb_limit_g;
        warnings.push(format!("Exceeds net carb limit ({measured}/{limit}g)"));
    }

    if config.hypertension_management {
        if let Some(limit) = config.sodium_daily_limit_mg {
            if totals.sodium_mg > limit {
                let measured = totals.sodium_mg.round();
                warnings.push(format!("Exceeds sodium limit ({measured}/{limit}mg)"));
            }
        }

        if let Some(minimum) = config.potassium_daily_minimum_mg {
            if totals.potassium_mg < minimum {
                let measured = totals.potassium_mg.round();
                warnings.push(format!("Below potassium minimum ({measured}/{minimum}mg)"));
            }
        }
    }

    warnings
}
