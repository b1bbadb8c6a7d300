use serde::{Deserialize, Serialize};

/// The four fixed meal slots of a day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealCategory {
    pub const ALL: [MealCategory; 4] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Snack,
        MealCategory::Dinner,
    ];

    pub fn mc_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "snack" => Some(Self::Snack),
            "dinner" => Some(Self::Dinner),
            _ => None,
        }
    }

    pub fn mc_as_str(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Lunch => "lunch",
            MealCategory::Snack => "snack",
            MealCategory::Dinner => "dinner",
        }
    }

    /// Slot assigned to a meal logged at the given local hour:
    /// before 11 breakfast, before 14 lunch, before 17 snack, dinner after.
    pub fn for_hour(hour: u32) -> Self {
        if hour < 11 {
            MealCategory::Breakfast
        } else if hour < 14 {
            MealCategory::Lunch
        } else if hour < 17 {
            MealCategory::Snack
        } else {
            MealCategory::Dinner
        }
    }
}
