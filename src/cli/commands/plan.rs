use crate::cli::commands::{active_user, open_ledger};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::plan::load_plan;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::path::expand_tilde;

/// Ingest a generated meal plan for the active user.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan { file, replace } = &cli.command {
        let user = active_user(cli, cfg);
        let mut ledger = open_ledger(cfg)?;

        //
        // Gate: a non-empty day means the user already has data for today.
        // Mirrors the "only fetch a plan when the store is empty" contract.
        //
        if !*replace && !ledger.is_store_empty(&user) {
            warning(format!(
                "Today's record for {} is not empty; use --replace to ingest anyway.",
                user
            ));
            return Ok(());
        }

        let path = expand_tilde(file);
        let records = load_plan(&path, &user, date::today())?;

        let n_days = records.len();
        let n_meals: usize = records.iter().map(|r| r.categories.meal_count()).sum();

        ledger.populate_store(records, &user)?;

        success(format!(
            "Plan ingested: {} meal(s) across {} day(s) for user {}.",
            n_meals, n_days, user
        ));
    }

    Ok(())
}
