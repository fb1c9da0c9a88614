use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::models::weather::date_range;
use crate::models::{Table, WeatherFactor, WeatherRecord};
use crate::processors::{attach_synthetic_rentals, compute_correlation, linear_fit, CorrelationMatrix, LinearFit};
use crate::settings::SyntheticSettings;
use crate::utils::constants::{REQUIRED_WEATHER_COLUMN, RENTALS_COLUMN};
use crate::views::notice::Notice;

const SYNTHETIC_NOTICE: &str =
    "Rental counts are synthetic (seeded random values), not real rental data";

/// Weather against (synthetic) rentals: regression on one factor plus the
/// correlation matrix of every numeric weather column.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherView {
    pub notices: Vec<Notice>,
    pub factor: WeatherFactor,
    pub records: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub synthetic_rentals: bool,
    pub regression: Option<LinearFit>,
    pub correlation: Option<CorrelationMatrix>,
}

impl WeatherView {
    /// Build the view. Without `tavg` the view carries only a warning notice
    /// and neither regression nor heatmap.
    pub fn build(weather: &Table, factor: WeatherFactor, synthetic: &SyntheticSettings) -> Result<Self> {
        let mut view = WeatherView {
            notices: Vec::new(),
            factor,
            records: weather.len(),
            date_range: None,
            synthetic_rentals: false,
            regression: None,
            correlation: None,
        };

        if !weather.has_column(REQUIRED_WEATHER_COLUMN) {
            view.notices.push(
                Notice::warning("'tavg' column not found in the weather data; skipping trends")
                    .with_available_columns(weather.columns()),
            );
            return Ok(view);
        }
        view.notices.push(Notice::success("Weather data loaded successfully"));

        let weather = attach_synthetic_rentals(
            weather.clone(),
            synthetic.seed,
            synthetic.low,
            synthetic.high,
        )?;
        view.synthetic_rentals = true;
        view.notices.push(Notice::warning(SYNTHETIC_NOTICE));

        let records = WeatherRecord::from_table(&weather)?;
        view.date_range = date_range(&records);

        if let Err(e) = weather.require_columns(&[factor.column()]) {
            view.notices.push(Notice::from_error(&e));
        } else if !weather.is_numeric_column(factor.column()) {
            view.notices.push(Notice::warning(format!(
                "Column '{}' is not numeric; skipping regression",
                factor
            )));
        } else {
            let x: Vec<Option<f64>> = records.iter().map(|r| r.factor(factor)).collect();
            let y: Vec<Option<f64>> = records.iter().map(|r| r.rentals.map(|v| v as f64)).collect();
            view.regression = linear_fit(&x, &y);
            if view.regression.is_none() {
                view.notices.push(Notice::warning(format!(
                    "Not enough varying '{}' values for a regression",
                    factor
                )));
            }
        }

        view.correlation = Some(compute_correlation(&weather, &[])?);
        Ok(view)
    }

    pub fn render(&self) -> String {
        let mut out = String::from("=== Weather and bike rentals ===\n");
        for notice in &self.notices {
            out.push_str(&notice.render());
            out.push('\n');
        }

        if let Some((start, end)) = self.date_range {
            out.push_str(&format!(
                "Date range: {} to {} ({} records)\n",
                start, end, self.records
            ));
        }

        if let Some(ref fit) = self.regression {
            out.push_str(&format!(
                "\nRegression: {} vs. {} (synthetic)\n",
                self.factor, RENTALS_COLUMN
            ));
            out.push_str(&format!(
                "  {} = {:.2} + {:.2} * {}\n",
                RENTALS_COLUMN, fit.intercept, fit.slope, self.factor
            ));
            let r = if fit.r.is_nan() {
                "NaN".to_string()
            } else {
                format!("{:.3}", fit.r)
            };
            out.push_str(&format!("  r = {}, n = {}\n", r, fit.points));
        }

        if let Some(ref matrix) = self.correlation {
            out.push_str("\nCorrelation matrix (weather data)\n");
            if matrix.is_empty() {
                out.push_str("No numeric columns\n");
            } else {
                out.push_str(&matrix.render());
            }
        }
        out
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        info!(path = %path.display(), "Wrote weather analysis");
        Ok(())
    }
}
