// src/export/model.rs

use crate::ledger::LedgerState;
use serde::Serialize;

/// Struttura "piatta" per export dei pasti.
#[derive(Serialize, Clone, Debug)]
pub struct MealExport {
    pub date: String,
    pub user_id: String,
    pub category: String,
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub serving: String,
    pub tracked: bool,
}

/// Flatten the ledger into one row per meal, ordered by date then slot.
/// `user` limits the rows to a single user id.
pub(crate) fn ledger_to_rows(state: &LedgerState, user: Option<&str>) -> Vec<MealExport> {
    let mut days: Vec<_> = state
        .days
        .iter()
        .filter(|d| user.is_none_or(|u| d.user_id == u))
        .collect();
    days.sort_by(|a, b| (a.date, &a.user_id).cmp(&(b.date, &b.user_id)));

    let mut rows = Vec::new();
    for day in days {
        for (category, meal) in day.categories.iter_all() {
            rows.push(MealExport {
                date: day.date_str(),
                user_id: day.user_id.clone(),
                category: category.mc_as_str().to_string(),
                id: meal.id.clone(),
                name: meal.name.clone(),
                calories: meal.calories,
                protein: meal.protein,
                carbs: meal.carbs,
                fat: meal.fat,
                serving: meal.serving.clone(),
                tracked: meal.tracked,
            });
        }
    }
    rows
}
