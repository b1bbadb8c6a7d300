use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::SqliteStore;
use crate::storage::oplog::LogLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if matches!(cli.command, Commands::Log { print: true }) {
        let mut store = SqliteStore::open(&cfg.database)?;
        LogLogic::print_log(&mut store)?;
    }

    Ok(())
}
