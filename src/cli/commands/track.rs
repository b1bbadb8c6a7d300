use crate::cli::commands::{active_user, open_ledger, resolve_meal_id, short_id};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::fmt_kcal;

/// Mark a meal as eaten so it counts toward the totals.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Track { id } = &cli.command {
        let user = active_user(cli, cfg);
        let mut ledger = open_ledger(cfg)?;

        let full_id = match resolve_meal_id(ledger.today_record(&user), id) {
            Ok(full_id) => full_id,
            Err(AppError::MealNotFound(_)) => {
                warning(format!("No meal matching '{}' in today's record.", id));
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if ledger.track_meal(&full_id, &user)? {
            success(format!("Meal {} is now tracked.", short_id(&full_id)));

            let totals = ledger.macro_totals(&user);
            info(format!(
                "Tracked today for {}: {}.",
                user,
                fmt_kcal(totals.calories)
            ));
        } else {
            warning(format!("No meal matching '{}' in today's record.", id));
        }
    }

    Ok(())
}
