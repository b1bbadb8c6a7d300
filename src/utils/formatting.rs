//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Kilocalories, rendered without decimals: `412 kcal`.
pub fn fmt_kcal(value: f64) -> String {
    format!("{:.0} kcal", value)
}

/// Grams with one decimal: `12.5 g`.
pub fn fmt_grams(value: f64) -> String {
    format!("{:.1} g", value)
}

/// Restituisce una descrizione testuale e un colore ANSI per la categoria.
/// Usata nei test e in eventuali output human-readable.
pub fn describe_category(code: &str) -> (String, &'static str) {
    match code.to_lowercase().as_str() {
        "breakfast" => ("Breakfast".into(), "\x1b[33m"),
        "lunch" => ("Lunch".into(), "\x1b[32m"),
        "snack" => ("Snack".into(), "\x1b[36m"),
        "dinner" => ("Dinner".into(), "\x1b[35m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}
