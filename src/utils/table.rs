//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right};

pub struct Column {
    pub header: String,
    pub width: usize,
    /// Right-align the column (numeric values).
    pub numeric: bool,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            numeric: false,
        }
    }

    pub fn numeric(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            numeric: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Underline
        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = if col.numeric {
                    pad_left(&row[i], col.width)
                } else {
                    pad_right(&row[i], col.width)
                };
                out.push_str(&cell);
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
