// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ledger_to_rows;
use crate::ledger::LedgerState;
use crate::ui::messages::{info, warning};
use std::io;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export dei pasti residenti nel ledger.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: path assoluto del file di output
    /// - `user`: limita l'export a un singolo utente
    pub fn export(
        state: &LedgerState,
        format: ExportFormat,
        file: &str,
        user: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let rows = ledger_to_rows(state, user);

        if rows.is_empty() {
            warning("⚠️  No meals found to export.");
            return Ok(());
        }

        info(format!(
            "Exporting {} meal(s) as {} to {}",
            rows.len(),
            format.as_str(),
            path.display()
        ));

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}
