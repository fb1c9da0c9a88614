use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::models::Table;
use crate::utils::constants::{DATE_COLUMN, RENTALS_COLUMN};

/// Weather variables the trends view can regress rentals against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeatherFactor {
    /// Average temperature
    Tavg,
    /// Minimum temperature
    Tmin,
    /// Maximum temperature
    Tmax,
    /// Precipitation
    Prcp,
    /// Sunshine duration
    Tsun,
}

impl WeatherFactor {
    pub const ALL: [WeatherFactor; 5] = [
        WeatherFactor::Tavg,
        WeatherFactor::Tmin,
        WeatherFactor::Tmax,
        WeatherFactor::Prcp,
        WeatherFactor::Tsun,
    ];

    pub fn column(&self) -> &'static str {
        match self {
            WeatherFactor::Tavg => "tavg",
            WeatherFactor::Tmin => "tmin",
            WeatherFactor::Tmax => "tmax",
            WeatherFactor::Prcp => "prcp",
            WeatherFactor::Tsun => "tsun",
        }
    }
}

impl fmt::Display for WeatherFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// One day of London weather. Every measurement may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub date: Option<NaiveDate>,
    pub tavg: Option<f64>,
    pub tmin: Option<f64>,
    pub tmax: Option<f64>,
    pub prcp: Option<f64>,
    pub tsun: Option<f64>,
    /// Synthetic rental count, never real data.
    pub rentals: Option<i64>,
}

impl WeatherRecord {
    pub fn factor(&self, factor: WeatherFactor) -> Option<f64> {
        match factor {
            WeatherFactor::Tavg => self.tavg,
            WeatherFactor::Tmin => self.tmin,
            WeatherFactor::Tmax => self.tmax,
            WeatherFactor::Prcp => self.prcp,
            WeatherFactor::Tsun => self.tsun,
        }
    }

    /// Extract typed records from a weather table.
    ///
    /// Absent or non-numeric factor columns leave the field empty on every
    /// record; presence checks belong to the caller.
    pub fn from_table(table: &Table) -> Result<Vec<WeatherRecord>> {
        let mut records = vec![WeatherRecord::default(); table.len()];

        for factor in WeatherFactor::ALL {
            if !table.is_numeric_column(factor.column()) {
                continue;
            }
            let values = table.numeric_column(factor.column())?;
            for (record, value) in records.iter_mut().zip(values) {
                match factor {
                    WeatherFactor::Tavg => record.tavg = value,
                    WeatherFactor::Tmin => record.tmin = value,
                    WeatherFactor::Tmax => record.tmax = value,
                    WeatherFactor::Prcp => record.prcp = value,
                    WeatherFactor::Tsun => record.tsun = value,
                }
            }
        }

        if table.is_numeric_column(RENTALS_COLUMN) {
            let values = table.numeric_column(RENTALS_COLUMN)?;
            for (record, value) in records.iter_mut().zip(values) {
                record.rentals = value.map(|v| v as i64);
            }
        }

        if table.has_column(DATE_COLUMN) {
            for (row, record) in records.iter_mut().enumerate() {
                record.date = table.cell(row, DATE_COLUMN).and_then(parse_date);
            }
        }

        Ok(records)
    }
}

/// Parse a weather date, accepting a plain date or a date with a midnight timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
}

/// Earliest and latest parseable dates, if any.
pub fn date_range(records: &[WeatherRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = records.iter().filter_map(|r| r.date);
    let first = dates.next()?;
    Some(dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d))))
}
