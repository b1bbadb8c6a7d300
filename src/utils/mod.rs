pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::describe_category;
pub use formatting::fmt_grams;
pub use formatting::fmt_kcal;
