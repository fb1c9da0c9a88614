use crate::error::{DashboardError, Result};
use crate::utils::constants::NA_VALUES;
use serde::Serialize;

/// Parse a raw cell into a number. Empty and NA tokens are missing values.
pub fn parse_numeric_cell(raw: &str) -> std::result::Result<Option<f64>, ()> {
    let trimmed = raw.trim();
    if is_missing(trimmed) {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(()),
    }
}

fn is_missing(trimmed: &str) -> bool {
    NA_VALUES.contains(&trimmed)
}

/// Column-oriented view of a CSV file: ordered column names and string cells.
///
/// Columns are addressed by name because every consumer must check for the
/// presence of a column before using it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, padding or truncating rows to the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn from_str_rows(columns: &[&str], rows: &[&[&str]]) -> Self {
        Self::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Names from `required` that this table does not have, in request order.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| !self.has_column(name))
            .map(|name| name.to_string())
            .collect()
    }

    pub fn require_columns(&self, required: &[&str]) -> Result<()> {
        let missing = self.missing_columns(required);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DashboardError::missing_column(&missing, &self.columns))
        }
    }

    /// Rename a column in place, keeping its position. Returns false when
    /// `from` is absent or `to` already exists.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        if self.has_column(to) {
            return false;
        }
        match self.column_index(from) {
            Some(idx) => {
                self.columns[idx] = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Cell text for a row, `None` when the column is absent or the cell is missing.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        let value = self.rows.get(row)?.get(idx)?.trim();
        if is_missing(value) {
            None
        } else {
            Some(value)
        }
    }

    /// A column is numeric when the table has rows and every non-missing
    /// cell parses as a finite float. An entirely missing column counts as
    /// numeric; no column of a header-only table does.
    pub fn is_numeric_column(&self, name: &str) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        match self.column_index(name) {
            Some(idx) => self
                .rows
                .iter()
                .all(|row| parse_numeric_cell(&row[idx]).is_ok()),
            None => false,
        }
    }

    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|name| self.is_numeric_column(name))
            .collect()
    }

    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| DashboardError::missing_column(&[name], &self.columns))?;

        self.rows
            .iter()
            .enumerate()
            .map(|(row_no, row)| {
                parse_numeric_cell(&row[idx]).map_err(|_| {
                    DashboardError::InvalidFormat(format!(
                        "Column '{}' row {}: '{}' is not a number",
                        name,
                        row_no + 1,
                        row[idx]
                    ))
                })
            })
            .collect()
    }

    /// Set a column's values, appending it when absent and replacing it in place otherwise.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(DashboardError::InvalidFormat(format!(
                "Column '{}' has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }

        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }

    /// First `n` rows.
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Render as an aligned plain-text grid with a leading row index.
    pub fn render(&self) -> String {
        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                self.rows
                    .iter()
                    .map(|row| row[idx].chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        out.push_str(&" ".repeat(index_width));
        for (name, width) in self.columns.iter().zip(&widths) {
            out.push_str(&format!("  {:>width$}", name, width = width));
        }
        out.push('\n');

        for (row_no, row) in self.rows.iter().enumerate() {
            out.push_str(&format!("{:<width$}", row_no, width = index_width));
            for (cell, width) in row.iter().zip(&widths) {
                out.push_str(&format!("  {:>width$}", cell, width = width));
            }
            out.push('\n');
        }
        out
    }
}
