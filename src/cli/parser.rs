use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for nutrilog
/// CLI application to track meals and macro totals with SQLite
#[derive(Parser)]
#[command(
    name = "nutrilog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple meal logging CLI: track meals and daily macro totals using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user id instead of the configured active profile
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log a meal for today
    Add {
        /// Display name of the meal
        name: String,

        #[arg(long, allow_negative_numbers = true, help = "Calories (kcal)")]
        calories: f64,

        #[arg(long, allow_negative_numbers = true, help = "Protein (g)")]
        protein: f64,

        #[arg(long, allow_negative_numbers = true, help = "Carbohydrates (g)")]
        carbs: f64,

        #[arg(long, allow_negative_numbers = true, help = "Fat (g)")]
        fat: f64,

        #[arg(long, help = "Serving description, e.g. '1 bowl'")]
        serving: Option<String>,

        #[arg(long, help = "Count the meal toward the daily totals right away")]
        tracked: bool,

        /// Meal id supplied by an upstream flow (e.g. food detection)
        #[arg(long, help = "Use this meal id instead of generating one")]
        id: Option<String>,

        #[arg(
            long = "at",
            help = "Log the meal as if eaten at HH:MM (slot follows the hour)"
        )]
        at: Option<String>,
    },

    /// Mark a meal as eaten so it counts toward the totals
    Track {
        /// Meal id (a unique prefix is enough)
        id: String,
    },

    /// Remove a meal from today's record
    Del {
        /// Meal id (a unique prefix is enough)
        id: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List meals by category
    List {
        #[arg(long = "date", help = "Show the record for a date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "all", help = "List every resident day record, any user")]
        all: bool,
    },

    /// Show the tracked macro totals against the daily targets
    Totals,

    /// Ingest a generated meal plan, replacing the user's records
    Plan {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long = "replace",
            help = "Ingest even when today's record is not empty"
        )]
        replace: bool,
    },

    /// Reset the whole ledger (all users, all days)
    Clear {
        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Export meal data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "mine", help = "Export only the active user's records")]
        mine: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
