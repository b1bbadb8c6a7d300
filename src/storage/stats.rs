use crate::ledger::LedgerState;
use crate::storage::{LEDGER_SLOT, SqliteStore};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW, colorize_optional};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(store: &mut SqliteStore, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) LEDGER SLOT
    //
    let row: Option<(String, String)> = store
        .conn
        .query_row(
            "SELECT payload, updated_at FROM kv_state WHERE slot = ?1",
            [LEDGER_SLOT],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match &row {
        None => println!("{}• Ledger slot:{} {}empty{}", CYAN, RESET, GREY, RESET),
        Some((payload, updated_at)) => {
            println!(
                "{}• Ledger slot:{} {} bytes, last written {}",
                CYAN,
                RESET,
                payload.len(),
                colorize_optional(if updated_at.is_empty() {
                    "--"
                } else {
                    updated_at.as_str()
                })
            );
        }
    }

    //
    // 3) DAYS / MEALS / DATE RANGE
    //
    if let Some((payload, _)) = &row
        && let Ok(state) = serde_json::from_str::<LedgerState>(payload)
    {
        let meal_count: usize = state.days.iter().map(|d| d.categories.meal_count()).sum();
        println!(
            "{}• Day records:{} {}{}{}",
            CYAN,
            RESET,
            GREEN,
            state.days.len(),
            RESET
        );
        println!("{}• Meals:{} {}{}{}", CYAN, RESET, GREEN, meal_count, RESET);

        let first = state.days.iter().map(|d| d.date).min();
        let last = state.days.iter().map(|d| d.date).max();
        let fmt_first = first
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"));
        let fmt_last = last
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"));

        println!("{}• Date range:{}", CYAN, RESET);
        println!("    from: {}", fmt_first);
        println!("    to:   {}", fmt_last);
    }

    //
    // 4) LOG LINES
    //
    let log_lines: i64 = store
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!(
        "{}• Log lines:{} {}{}{}",
        CYAN, RESET, GREEN, log_lines, RESET
    );

    println!();
    Ok(())
}
