use super::category::MealCategory;
use super::meal::Meal;
use super::totals::MacroTotals;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The meals of one day, split across the four fixed slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MealsByCategory {
    #[serde(default)]
    pub breakfast: Vec<Meal>,
    #[serde(default)]
    pub lunch: Vec<Meal>,
    #[serde(default)]
    pub snack: Vec<Meal>,
    #[serde(default)]
    pub dinner: Vec<Meal>,
}

impl MealsByCategory {
    pub fn bucket(&self, category: MealCategory) -> &Vec<Meal> {
        match category {
            MealCategory::Breakfast => &self.breakfast,
            MealCategory::Lunch => &self.lunch,
            MealCategory::Snack => &self.snack,
            MealCategory::Dinner => &self.dinner,
        }
    }

    pub fn bucket_mut(&mut self, category: MealCategory) -> &mut Vec<Meal> {
        match category {
            MealCategory::Breakfast => &mut self.breakfast,
            MealCategory::Lunch => &mut self.lunch,
            MealCategory::Snack => &mut self.snack,
            MealCategory::Dinner => &mut self.dinner,
        }
    }

    /// Iterate every meal of the day together with its slot.
    pub fn iter_all(&self) -> impl Iterator<Item = (MealCategory, &Meal)> {
        MealCategory::ALL
            .iter()
            .flat_map(move |c| self.bucket(*c).iter().map(move |m| (*c, m)))
    }

    pub fn meal_count(&self) -> usize {
        MealCategory::ALL.iter().map(|c| self.bucket(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.meal_count() == 0
    }
}

/// One ledger entry per (date, user) pair holding that day's meals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub user_id: String,
    #[serde(default)]
    pub categories: MealsByCategory,
}

impl DayRecord {
    pub fn new(date: NaiveDate, user_id: &str) -> Self {
        Self {
            date,
            user_id: user_id.to_string(),
            categories: MealsByCategory::default(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn find_meal(&self, id: &str) -> Option<(MealCategory, &Meal)> {
        self.categories.iter_all().find(|(_, m)| m.id == id)
    }

    /// Remove a meal by id, returning it when it was present.
    pub fn remove_meal(&mut self, id: &str) -> Option<Meal> {
        for category in MealCategory::ALL {
            let bucket = self.categories.bucket_mut(category);
            if let Some(pos) = bucket.iter().position(|m| m.id == id) {
                return Some(bucket.remove(pos));
            }
        }
        None
    }

    /// Flip the tracked flag of a meal by id. Returns false when no meal
    /// with that id lives in this record.
    pub fn set_tracked(&mut self, id: &str, tracked: bool) -> bool {
        for category in MealCategory::ALL {
            if let Some(meal) = self
                .categories
                .bucket_mut(category)
                .iter_mut()
                .find(|m| m.id == id)
            {
                meal.tracked = tracked;
                return true;
            }
        }
        false
    }

    /// Macro sum over the tracked meals of this day only.
    pub fn tracked_totals(&self) -> MacroTotals {
        let mut totals = MacroTotals::default();
        for (_, meal) in self.categories.iter_all() {
            if meal.tracked {
                totals.add_meal(meal);
            }
        }
        totals
    }
}
