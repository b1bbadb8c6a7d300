pub mod category;
pub mod day_record;
pub mod meal;
pub mod totals;

pub use category::MealCategory;
pub use day_record::{DayRecord, MealsByCategory};
pub use meal::{Meal, MealDraft};
pub use totals::MacroTotals;
