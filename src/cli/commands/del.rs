use crate::cli::commands::{active_user, ask_confirmation, open_ledger, resolve_meal_id, short_id};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

/// Remove a meal from today's record.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = &cli.command {
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

        let name = ledger
            .today_record(&user)
            .and_then(|d| d.find_meal(&full_id))
            .map(|(_, m)| m.name.clone())
            .unwrap_or_default();

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete '{}' [{}]? This action is irreversible.",
            name,
            short_id(&full_id)
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        if ledger.remove_meal(&full_id, &user)? {
            success(format!("Meal '{}' has been deleted.", name));
        } else {
            warning(format!("No meal matching '{}' in today's record.", id));
        }
    }

    Ok(())
}
