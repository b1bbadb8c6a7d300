// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::MealExport;
use crate::ui::messages::success;
use std::fs::{self, File};
use std::path::Path;

/// Serializza i pasti come array JSON indentato.
pub(crate) fn export_json(meals: &[MealExport], path: &Path) -> AppResult<()> {
    let payload = serde_json::to_vec_pretty(meals)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {e}")))?;
    fs::write(path, payload)?;

    success(format!("JSON export completed: {}", path.display()));
    Ok(())
}

/// Scrive i pasti in CSV, intestazione derivata dai nomi dei campi serde.
pub(crate) fn export_csv(meals: &[MealExport], path: &Path) -> AppResult<()> {
    let mut writer = csv::Writer::from_writer(File::create(path)?);

    for row in meals {
        writer
            .serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write failed: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::Export(format!("CSV flush failed: {e}")))?;

    success(format!("CSV export completed: {}", path.display()));
    Ok(())
}
