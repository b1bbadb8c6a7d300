use crate::cli::commands::{active_user, open_ledger};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        mine,
        force,
    } = &cli.command
    {
        let user = active_user(cli, cfg);
        let ledger = open_ledger(cfg)?;

        let filter = if *mine { Some(user.as_str()) } else { None };
        ExportLogic::export(ledger.state(), format.clone(), file, filter, *force)?;
    }
    Ok(())
}
