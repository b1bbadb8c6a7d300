use crate::cli::commands::{active_user, open_ledger, short_id};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{MealCategory, MealDraft};
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::fmt_kcal;
use crate::utils::time::parse_optional_time;
use chrono::{Local, Timelike};

/// Log a meal into today's record.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        calories,
        protein,
        carbs,
        fat,
        serving,
        tracked,
        id,
        at,
    } = &cli.command
    {
        //
        // 1. Validate macro values (non-negative)
        //
        for (label, value) in [
            ("calories", calories),
            ("protein", protein),
            ("carbs", carbs),
            ("fat", fat),
        ] {
            if *value < 0.0 {
                return Err(AppError::InvalidMacro(format!(
                    "--{} must be non-negative, got {}",
                    label, value
                )));
            }
        }

        //
        // 2. Parse --at (optional HH:MM)
        //
        let at_parsed = parse_optional_time(at.as_ref())?;

        //
        // 3. Resolve the acting user
        //
        let user = active_user(cli, cfg);

        //
        // 4. Open ledger (runs stale-day pruning)
        //
        let mut ledger = open_ledger(cfg)?;

        //
        // 5. Build the draft and insert it
        //
        let when = match at_parsed {
            Some(t) => date::today().and_time(t),
            None => Local::now().naive_local(),
        };
        let category = MealCategory::for_hour(when.hour());

        let draft = MealDraft {
            id: id.clone(),
            name: name.clone(),
            calories: *calories,
            protein: *protein,
            carbs: *carbs,
            fat: *fat,
            serving: serving.clone().unwrap_or_default(),
            tracked: *tracked,
        };

        let meal = ledger.add_meal_at(draft, &user, when)?;

        success(format!(
            "Added '{}' ({}) under {} for user {} [id {}].",
            meal.name,
            fmt_kcal(meal.calories),
            category.mc_as_str(),
            user,
            short_id(&meal.id)
        ));

        if !meal.tracked {
            info("Meal is not tracked yet: run 'nutrilog track <id>' once eaten.");
        }
    }

    Ok(())
}
