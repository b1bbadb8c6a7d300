use crate::cli::commands::{ask_confirmation, open_ledger};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Reset the whole ledger. Used on logout or to start over.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = &cli.command {
        let mut ledger = open_ledger(cfg)?;

        let prompt = "Clear ALL meal data for every user? This action is irreversible.";
        if !*yes && !ask_confirmation(prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        ledger.clear_store()?;
        success("Ledger cleared.");
    }

    Ok(())
}
