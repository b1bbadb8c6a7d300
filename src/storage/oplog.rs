use crate::errors::AppResult;
use crate::storage::SqliteStore;
use ansi_term::Colour;

/// Larghezza massima della colonna operazione+target.
const OP_COL_CAP: usize = 60;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add_meal" => Colour::Green,
        "remove_meal" | "clear_store" => Colour::Red,
        "track_meal" => Colour::Yellow,
        "populate_store" => Colour::Cyan,
        "remove_old_meals" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

struct LogEntry {
    id: i32,
    stamp: String,
    operation: String,
    label: String,
    message: String,
}

impl LogEntry {
    /// Colonna op+target troncata, con la sola operazione colorata.
    fn render_label(&self) -> String {
        let mut visible = self.label.clone();
        if visible.len() > OP_COL_CAP {
            visible = visible.chars().take(OP_COL_CAP - 3).collect();
            visible.push_str("...");
        }

        let color = color_for_operation(&self.operation);
        match visible.split_once(' ') {
            Some((op, rest)) => format!("{} {}", color.paint(op), rest),
            None => color.paint(visible).to_string(),
        }
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &mut SqliteStore) -> AppResult<()> {
        let mut stmt = store.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i32 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let stamp = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            // Unica colonna op+target
            let label = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            Ok(LogEntry {
                id,
                stamp,
                operation,
                label,
                message,
            })
        })?;

        let entries: Vec<LogEntry> = rows.collect::<Result<_, _>>()?;

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(2);
        let stamp_w = entries.iter().map(|e| e.stamp.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.label.len().min(OP_COL_CAP))
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for entry in entries {
            let label = entry.render_label();
            // il colore spezza i width specifier, padding a mano sul testo nudo
            let pad = " ".repeat(op_w.saturating_sub(strip_ansi(&label).len()));

            println!(
                "{:>id_w$}: {:<stamp_w$} | {label}{pad} => {}",
                entry.id,
                entry.stamp,
                entry.message,
                id_w = id_w,
                stamp_w = stamp_w
            );
        }

        Ok(())
    }
}
