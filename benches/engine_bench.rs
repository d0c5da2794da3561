// ABOUTME: Criterion benchmarks for the nutrition engine hot paths
// ABOUTME: Measures totals aggregation, day validation, schedule resolution, and list generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Nutrition Intelligence

//! Criterion benchmarks for the nutrition engine.
//!
//! Measures the pure intelligence functions (component totals, day
//! validation, schedule resolution) and the full async shopping list
//! aggregation over a seeded week of plans.

#![allow(clippy::missing_docs_in_private_items, missing_docs, clippy::unwrap_used)]

use chrono::{Duration, NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use remy_nutrition_engine::intelligence::{schedule, totals, validation};
use remy_nutrition_engine::models::{
    Ingredient, IngredientCategory, MealComponent, NewIngredient, NewMeal, NutrientTotals,
    NutritionConfig, SlotSource,
};
use remy_nutrition_engine::services::{ingredients, meals, planner, shopping};
use remy_nutrition_engine::storage::InMemoryStore;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Component counts to sweep in the totals benchmarks
const COMPONENT_COUNTS: [usize; 3] = [4, 16, 64];

fn bench_ingredient(index: usize) -> Ingredient {
    let now = Utc::now();
    Ingredient {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        name: format!("Bench Ingredient {index}"),
        description: None,
        fdc_id: None,
        per_100g: NutrientTotals {
            calories: 100.0 + (index * 13 % 300) as f64,
            protein_g: (index * 7 % 30) as f64,
            fat_g: (index * 11 % 40) as f64,
            carbohydrates_g: (index * 5 % 20) as f64,
            fiber_g: (index * 3 % 8) as f64,
            sodium_mg: (index * 29 % 500) as f64,
            potassium_mg: (index * 41 % 900) as f64,
        },
        is_pantry_essential: index % 5 == 0,
        medical_tags: Vec::new(),
        preparation_methods: Vec::new(),
        category: match index % 4 {
            0 => IngredientCategory::Protein,
            1 => IngredientCategory::Fat,
            2 => IngredientCategory::Vegetable,
            _ => IngredientCategory::Condiment,
        },
        is_cooked: false,
        yield_factor: None,
        created_at: now,
        updated_at: now,
    }
}

fn bench_component_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("component_totals");

    for count in COMPONENT_COUNTS {
        let catalog: Vec<Ingredient> = (0..count).map(bench_ingredient).collect();
        let parts: Vec<(Option<&Ingredient>, f64)> = catalog
            .iter()
            .enumerate()
            .map(|(index, ingredient)| (Some(ingredient), 50.0 + (index * 17 % 200) as f64))
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &parts, |b, parts| {
            b.iter(|| totals::component_totals(black_box(parts.iter().copied())));
        });
    }

    group.finish();
}

fn bench_validate_day(c: &mut Criterion) {
    let config = NutritionConfig::renal_keto_defaults(Uuid::new_v4());
    // Breaches every rule so all five warning paths run
    let day = NutrientTotals {
        calories: 2400.0,
        protein_g: 60.0,
        fat_g: 180.0,
        carbohydrates_g: 45.0,
        fiber_g: 5.0,
        sodium_mg: 3100.0,
        potassium_mg: 1800.0,
    };

    c.bench_function("validate_day/all_rules_firing", |b| {
        b.iter(|| validation::validate_day(black_box(&day), black_box(Some(&config))));
    });
}

fn bench_resolve_slot_count(c: &mut Criterion) {
    let config = NutritionConfig::renal_keto_defaults(Uuid::new_v4());
    let start = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();

    c.bench_function("resolve_slot_count/week_sweep", |b| {
        b.iter(|| {
            for offset in 0..7 {
                let date = start + Duration::days(offset);
                black_box(schedule::resolve_slot_count(date, Some(&config)));
            }
        });
    });
}

/// Seed a catalog, a set of meals, and a fully planned Monday-to-Sunday week
async fn seed_week(store: &InMemoryStore, user_id: Uuid) -> NaiveDate {
    let mut ingredient_ids = Vec::new();
    for index in 0..24 {
        let template = bench_ingredient(index);
        let created = ingredients::create_ingredient(
            store,
            user_id,
            NewIngredient {
                name: template.name,
                description: None,
                fdc_id: None,
                per_100g: template.per_100g,
                is_pantry_essential: template.is_pantry_essential,
                medical_tags: Vec::new(),
                preparation_methods: Vec::new(),
                category: template.category,
                is_cooked: false,
                yield_factor: None,
            },
        )
        .await
        .unwrap();
        ingredient_ids.push(created.id);
    }

    let mut meal_ids = Vec::new();
    for meal_index in 0..6 {
        let components = (0..4)
            .map(|part| MealComponent {
                slot: "protein_anchor".to_owned(),
                ingredient_id: ingredient_ids[(meal_index * 4 + part) % ingredient_ids.len()],
                weight_grams: 80.0 + (part * 40) as f64,
                preparation_method: None,
                notes: None,
            })
            .collect();
        let meal = meals::create_meal(
            store,
            user_id,
            NewMeal {
                name: format!("Bench Meal {meal_index}"),
                description: None,
                components,
                tags: Vec::new(),
            },
        )
        .await
        .unwrap();
        meal_ids.push(meal.id);
    }

    let monday = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
    for offset in 0..7 {
        let date = monday + Duration::days(offset);
        planner::set_slot(
            store,
            user_id,
            date,
            0,
            SlotSource::Meal(meal_ids[offset as usize % meal_ids.len()]),
        )
        .await
        .unwrap();
        planner::set_slot(
            store,
            user_id,
            date,
            1,
            SlotSource::Meal(meal_ids[(offset as usize + 1) % meal_ids.len()]),
        )
        .await
        .unwrap();
    }
    monday
}

fn bench_shopping_generation(c: &mut Criterion) {
    let runtime = Runtime::new().unwrap();
    let store = InMemoryStore::new();
    let user_id = Uuid::new_v4();
    let monday = runtime.block_on(seed_week(&store, user_id));

    c.bench_function("shopping/generate_full_week", |b| {
        b.to_async(&runtime).iter(|| {
            let store = store.clone();
            async move {
                shopping::generate_for_week(&store, user_id, black_box(monday))
                    .await
                    .unwrap()
            }
        });
    });
}

criterion_group!(
    benches,
    bench_component_totals,
    bench_validate_day,
    bench_resolve_slot_count,
    bench_shopping_generation
);
criterion_main!(benches);
