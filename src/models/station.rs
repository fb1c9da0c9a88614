use crate::error::{DashboardError, Result};
use crate::models::Table;
use crate::utils::constants::{LATITUDE_COLUMN, LONGITUDE_COLUMN, STATION_NAME_COLUMN};
use serde::{Deserialize, Serialize};
use tracing::warn;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StationRecord {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub bike_count: u32,
}

impl StationRecord {
    pub fn new(name: String, latitude: f64, longitude: f64, bike_count: u32) -> Self {
        Self {
            name,
            latitude,
            longitude,
            bike_count,
        }
    }

    /// Popup markup shown on the station's map marker.
    pub fn popup_html(&self) -> String {
        format!("<b>{}</b><br>Bikes: {}", self.name, self.bike_count)
    }

    /// Extract typed stations from a normalized station table.
    ///
    /// The table must carry `name`, `lat`, `lon` and `bike_column`. Rows
    /// that do not parse or fail validation are skipped with a warning.
    pub fn from_table(table: &Table, bike_column: &str) -> Result<Vec<StationRecord>> {
        table.require_columns(&[
            STATION_NAME_COLUMN,
            LATITUDE_COLUMN,
            LONGITUDE_COLUMN,
            bike_column,
        ])?;

        let mut stations = Vec::with_capacity(table.len());
        for row in 0..table.len() {
            match Self::parse_row(table, row, bike_column) {
                Ok(station) => stations.push(station),
                Err(e) => warn!(row = row + 1, error = %e, "Skipping station row"),
            }
        }

        Ok(stations)
    }

    fn parse_row(table: &Table, row: usize, bike_column: &str) -> Result<StationRecord> {
        let name = table.cell(row, STATION_NAME_COLUMN).unwrap_or_default();
        let latitude = parse_field::<f64>(table, row, LATITUDE_COLUMN)?;
        let longitude = parse_field::<f64>(table, row, LONGITUDE_COLUMN)?;

        // Counts often arrive as "12.0" once a column has passed through a float dtype
        let raw_count = parse_field::<f64>(table, row, bike_column)?;
        if raw_count < 0.0 || raw_count.fract() != 0.0 {
            return Err(DashboardError::InvalidFormat(format!(
                "Invalid bike count: '{}'",
                raw_count
            )));
        }

        let station = StationRecord::new(
            name.to_string(),
            latitude,
            longitude,
            raw_count as u32,
        );
        station.validate()?;
        Ok(station)
    }
}

fn parse_field<T: std::str::FromStr>(table: &Table, row: usize, column: &str) -> Result<T> {
    let raw = table.cell(row, column).ok_or_else(|| {
        DashboardError::InvalidFormat(format!("Missing value in column '{}'", column))
    })?;
    raw.parse::<T>().map_err(|_| {
        DashboardError::InvalidFormat(format!("Invalid value in column '{}': '{}'", column, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_validation() {
        let station = StationRecord::new("River Street".to_string(), 51.5291, -0.1099, 12);
        assert!(station.validate().is_ok());

        let invalid = StationRecord::new("Nowhere".to_string(), 91.0, -0.1099, 3);
        assert!(invalid.validate().is_err());

        let unnamed = StationRecord::new(String::new(), 51.5, -0.1, 3);
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn test_from_table_skips_bad_rows() {
        let table = Table::from_str_rows(
            &["name", "lat", "lon", "nbBikes"],
            &[
                &["A", "51.5", "-0.1", "10"],
                &["B", "not-a-lat", "-0.2", "20"],
                &["C", "51.7", "-0.3", "-4"],
                &["D", "51.8", "-0.4", "7.0"],
            ],
        );

        let stations = StationRecord::from_table(&table, "nbBikes").unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name, "A");
        assert_eq!(stations[1].bike_count, 7);
    }

    #[test]
    fn test_from_table_requires_columns() {
        let table = Table::from_str_rows(&["name", "lat", "long"], &[&["A", "51.5", "-0.1"]]);
        let err = StationRecord::from_table(&table, "nbBikes").unwrap_err();
        assert!(matches!(err, DashboardError::MissingColumn { .. }));
    }

    #[test]
    fn test_popup_html() {
        let station = StationRecord::new("Hyde Park Corner".to_string(), 51.503, -0.153, 4);
        assert_eq!(station.popup_html(), "<b>Hyde Park Corner</b><br>Bikes: 4");
    }
}
