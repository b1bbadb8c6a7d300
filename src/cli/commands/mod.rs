pub mod add;
pub mod clear;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod plan;
pub mod totals;
pub mod track;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ledger::MealLedger;
use crate::models::DayRecord;
use crate::storage::SqliteStore;
use crate::ui::messages::{info, warning};

use std::io::{self, Write};

/// User id the command acts for: --user wins over the configured profile.
pub(crate) fn active_user(cli: &Cli, cfg: &Config) -> String {
    cli.user.clone().unwrap_or_else(|| cfg.user.clone())
}

/// Open the ledger on the configured database and run the once-per-run
/// pruning of stale day records, mirroring an app-foreground cycle.
pub(crate) fn open_ledger(cfg: &Config) -> AppResult<MealLedger<SqliteStore>> {
    let store = SqliteStore::open_and_init(&cfg.database)?;
    let mut ledger = MealLedger::open(store)?;

    let pruned = ledger.remove_old_meals()?;
    if pruned > 0 {
        info(format!("Pruned {} stale day record(s).", pruned));
    }

    Ok(ledger)
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// First characters of a meal id, enough to recognize it in output.
pub(crate) fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Resolve a user-supplied id against a day record: exact match first,
/// then a unique prefix. An ambiguous prefix is an error; no match at all
/// is reported as [`AppError::MealNotFound`].
pub(crate) fn resolve_meal_id(day: Option<&DayRecord>, given: &str) -> AppResult<String> {
    let Some(day) = day else {
        return Err(AppError::MealNotFound(given.to_string()));
    };

    if day.find_meal(given).is_some() {
        return Ok(given.to_string());
    }

    let matches: Vec<&str> = day
        .categories
        .iter_all()
        .filter(|(_, m)| m.id.starts_with(given))
        .map(|(_, m)| m.id.as_str())
        .collect();

    match matches.as_slice() {
        [] => Err(AppError::MealNotFound(given.to_string())),
        [only] => Ok((*only).to_string()),
        _ => Err(AppError::AmbiguousMealId(given.to_string())),
    }
}
