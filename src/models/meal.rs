use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged meal entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub serving: String,
    #[serde(default)]
    pub tracked: bool,
}

/// Input payload for a new meal. The ledger mints a UUID when the caller
/// does not supply an id of its own.
#[derive(Debug, Clone, Default)]
pub struct MealDraft {
    pub id: Option<String>,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub serving: String,
    pub tracked: bool,
}

impl MealDraft {
    pub fn into_meal(self) -> Meal {
        Meal {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            serving: self.serving,
            tracked: self.tracked,
        }
    }
}
