use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::storage::{SqliteStore, StateStore};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARA CONFIGURAZIONE
    //
    // Config::init_all crea:
    //   ~/.nutrilog/
    //   ~/.nutrilog/nutrilog.conf
    // e scrive il path del DB configurato.
    //
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let db_path = if let Some(custom) = &cli.db {
        custom.clone()
    } else {
        Config::load().database
    };

    println!("⚙️  Initializing nutrilog…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2️⃣ APERTURA DB + MIGRAZIONI
    //
    let mut store = SqliteStore::open_and_init(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);

    //
    // 3️⃣ LOG INTERNO (non bloccante)
    //
    if let Err(e) = store.record_op("init", "", &format!("Database initialized at {}", &db_path)) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 nutrilog initialization completed!");
    Ok(())
}
