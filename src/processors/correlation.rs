use crate::error::Result;
use crate::models::Table;
use serde::Serialize;
use tracing::debug;

/// Pearson correlation matrix over a table's numeric columns.
///
/// Cells are `NaN` when fewer than two paired observations exist or either
/// side has zero variance, which includes any all-missing column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == row)?;
        let j = self.columns.iter().position(|c| c == column)?;
        Some(self.values[i][j])
    }

    /// Text heatmap: one row per column, two decimals per cell, `NaN` for undefined cells.
    pub fn render(&self) -> String {
        let label_width = self.columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let cell_width = self.columns.iter().map(|c| c.len()).max().unwrap_or(0).max(5);

        let mut out = String::new();
        out.push_str(&" ".repeat(label_width));
        for name in &self.columns {
            out.push_str(&format!("  {:>width$}", name, width = cell_width));
        }
        out.push('\n');

        for (name, row) in self.columns.iter().zip(&self.values) {
            out.push_str(&format!("{:<width$}", name, width = label_width));
            for value in row {
                let cell = if value.is_nan() {
                    "NaN".to_string()
                } else {
                    format!("{:.2}", value)
                };
                out.push_str(&format!("  {:>width$}", cell, width = cell_width));
            }
            out.push('\n');
        }
        out
    }
}

/// Correlate the requested columns of `table`.
///
/// Requested columns that are absent or non-numeric are skipped. An empty
/// request selects every numeric column in table order.
pub fn compute_correlation(table: &Table, columns: &[&str]) -> Result<CorrelationMatrix> {
    let selected: Vec<&str> = if columns.is_empty() {
        table.numeric_columns()
    } else {
        columns
            .iter()
            .copied()
            .filter(|name| table.is_numeric_column(name))
            .collect()
    };

    let series: Vec<Vec<Option<f64>>> = selected
        .iter()
        .map(|name| table.numeric_column(name))
        .collect::<Result<_>>()?;

    let n = series.len();
    let mut values = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = pearson(&series[i], &series[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    debug!(columns = n, rows = table.len(), "Computed correlation matrix");
    Ok(CorrelationMatrix {
        columns: selected.iter().map(|s| s.to_string()).collect(),
        values,
    })
}

/// Pearson's r over the rows where both series have a value.
pub fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let count = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / count;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / count;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }

    (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
}
