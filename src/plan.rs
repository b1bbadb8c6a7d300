//! Meal-plan ingestion: turn a generated plan file into day records.
//!
//! A plan file is the JSON produced by the plan-generation service: either
//! one day object with the four category arrays, or an array of such
//! objects. Meals arrive without `tracked` state (they are suggestions,
//! untracked until confirmed) and usually without ids; ids are minted here
//! so the records are ready for [`populate_store`](crate::ledger::MealLedger::populate_store).

use crate::errors::{AppError, AppResult};
use crate::models::{DayRecord, Meal, MealCategory};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct PlanMeal {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    calories: f64,
    #[serde(default)]
    protein: f64,
    #[serde(default)]
    carbs: f64,
    #[serde(default)]
    fat: f64,
    #[serde(default)]
    serving: String,
    #[serde(default)]
    tracked: bool,
}

#[derive(Debug, Deserialize)]
struct PlanDay {
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    breakfast: Vec<PlanMeal>,
    #[serde(default)]
    lunch: Vec<PlanMeal>,
    #[serde(default)]
    snack: Vec<PlanMeal>,
    #[serde(default)]
    dinner: Vec<PlanMeal>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlanFile {
    Single(Box<PlanDay>),
    Multi(Vec<PlanDay>),
}

/// Parse a plan file into day records for `user_id`.
/// Days without an explicit date fall back to `default_date`.
pub fn load_plan(path: &Path, user_id: &str, default_date: NaiveDate) -> AppResult<Vec<DayRecord>> {
    let raw = fs::read_to_string(path)?;

    let parsed: PlanFile = serde_json::from_str(&raw)
        .map_err(|e| AppError::InvalidPlan(format!("{}: {}", path.display(), e)))?;

    let days = match parsed {
        PlanFile::Single(day) => vec![*day],
        PlanFile::Multi(days) => days,
    };

    days.into_iter()
        .map(|day| convert_day(day, user_id, default_date))
        .collect()
}

fn convert_day(day: PlanDay, user_id: &str, default_date: NaiveDate) -> AppResult<DayRecord> {
    let mut record = DayRecord::new(day.date.unwrap_or(default_date), user_id);

    let buckets = [
        (MealCategory::Breakfast, day.breakfast),
        (MealCategory::Lunch, day.lunch),
        (MealCategory::Snack, day.snack),
        (MealCategory::Dinner, day.dinner),
    ];

    for (category, meals) in buckets {
        for meal in meals {
            record
                .categories
                .bucket_mut(category)
                .push(convert_meal(meal)?);
        }
    }

    Ok(record)
}

fn convert_meal(meal: PlanMeal) -> AppResult<Meal> {
    if meal.calories < 0.0 || meal.protein < 0.0 || meal.carbs < 0.0 || meal.fat < 0.0 {
        return Err(AppError::InvalidPlan(format!(
            "negative macro value for meal '{}'",
            meal.name
        )));
    }

    Ok(Meal {
        id: meal.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: meal.name,
        calories: meal.calories,
        protein: meal.protein,
        carbs: meal.carbs,
        fat: meal.fat,
        serving: meal.serving,
        tracked: meal.tracked,
    })
}
