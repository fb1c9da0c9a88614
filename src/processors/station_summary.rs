use crate::error::Result;
use crate::models::{StationRecord, Table};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSummary {
    /// Mean bike count rounded to one decimal, `None` without any counts.
    pub average_bikes: Option<f64>,
    pub total_bikes: i64,
    pub station_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeographicBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Average and total of `bike_field` over the station table.
///
/// Missing cells are skipped for both figures. Fails with `MissingColumn`
/// when the column is absent.
pub fn compute_station_summary(stations: &Table, bike_field: &str) -> Result<StationSummary> {
    let counts = stations.numeric_column(bike_field)?;
    let present: Vec<f64> = counts.into_iter().flatten().collect();

    let sum: f64 = present.iter().sum();
    let average_bikes = if present.is_empty() {
        None
    } else {
        Some(round_to_one_decimal(sum / present.len() as f64))
    };

    Ok(StationSummary {
        average_bikes,
        total_bikes: sum as i64,
        station_count: stations.len(),
    })
}

/// Round to one decimal, half to even: 1.25 becomes 1.2.
pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Bounding box of the station markers.
pub fn geographic_bounds(stations: &[StationRecord]) -> Option<GeographicBounds> {
    let first = stations.first()?;
    let mut bounds = GeographicBounds {
        min_lat: first.latitude,
        max_lat: first.latitude,
        min_lon: first.longitude,
        max_lon: first.longitude,
    };

    for station in &stations[1..] {
        bounds.min_lat = bounds.min_lat.min(station.latitude);
        bounds.max_lat = bounds.max_lat.max(station.latitude);
        bounds.min_lon = bounds.min_lon.min(station.longitude);
        bounds.max_lon = bounds.max_lon.max(station.longitude);
    }

    Some(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::processors::normalize_station_columns;

    #[test]
    fn test_two_station_scenario() {
        let table = normalize_station_columns(Table::from_str_rows(
            &["name", "lat", "long", "nbBikes"],
            &[&["A", "51.5", "-0.1", "10"], &["B", "51.6", "-0.2", "20"]],
        ));

        let summary = compute_station_summary(&table, "nbBikes").unwrap();
        assert_eq!(summary.average_bikes, Some(15.0));
        assert_eq!(summary.total_bikes, 30);
        assert_eq!(table.columns(), &["name", "lat", "lon", "nbBikes"]);
    }

    #[test]
    fn test_average_rounded_to_one_decimal() {
        let table = Table::from_str_rows(&["nbBikes"], &[&["1"], &["2"], &["2"]]);
        let summary = compute_station_summary(&table, "nbBikes").unwrap();
        assert_eq!(summary.average_bikes, Some(1.7));
        assert_eq!(summary.total_bikes, 5);
        assert_eq!(summary.station_count, 3);
    }

    #[test]
    fn test_average_ties_round_to_even() {
        let table = Table::from_str_rows(&["nbBikes"], &[&["1"], &["1"], &["1"], &["2"]]);
        let summary = compute_station_summary(&table, "nbBikes").unwrap();
        assert_eq!(summary.average_bikes, Some(1.2));

        let table = Table::from_str_rows(&["nbBikes"], &[&["0"], &["0"], &["0"], &["1"]]);
        let summary = compute_station_summary(&table, "nbBikes").unwrap();
        assert_eq!(summary.average_bikes, Some(0.2));

        let table = Table::from_str_rows(&["nbBikes"], &[&["1"], &["1"], &["1"], &["3"]]);
        let summary = compute_station_summary(&table, "nbBikes").unwrap();
        assert_eq!(summary.average_bikes, Some(1.5));
    }

    #[test]
    fn test_infinite_count_is_rejected() {
        let table = Table::from_str_rows(&["nbBikes"], &[&["4"], &["inf"]]);
        assert!(matches!(
            compute_station_summary(&table, "nbBikes"),
            Err(DashboardError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_missing_cells_skipped() {
        let table = Table::from_str_rows(&["nbBikes"], &[&["4"], &[""], &["8"]]);
        let summary = compute_station_summary(&table, "nbBikes").unwrap();
        assert_eq!(summary.average_bikes, Some(6.0));
        assert_eq!(summary.total_bikes, 12);
    }

    #[test]
    fn test_empty_table_has_no_average() {
        let table = Table::from_str_rows(&["nbBikes"], &[]);
        let summary = compute_station_summary(&table, "nbBikes").unwrap();
        assert_eq!(summary.average_bikes, None);
        assert_eq!(summary.total_bikes, 0);
    }

    #[test]
    fn test_missing_bike_column() {
        let table = Table::from_str_rows(&["name", "lat"], &[&["A", "51.5"]]);
        match compute_station_summary(&table, "nbBikes") {
            Err(DashboardError::MissingColumn {
                required,
                available,
            }) => {
                assert_eq!(required, vec!["nbBikes"]);
                assert_eq!(available, vec!["name", "lat"]);
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_geographic_bounds() {
        let stations = vec![
            StationRecord::new("A".into(), 51.5, -0.1, 1),
            StationRecord::new("B".into(), 51.6, -0.3, 1),
            StationRecord::new("C".into(), 51.4, 0.05, 1),
        ];
        let bounds = geographic_bounds(&stations).unwrap();
        assert_eq!(bounds.min_lat, 51.4);
        assert_eq!(bounds.max_lat, 51.6);
        assert_eq!(bounds.min_lon, -0.3);
        assert_eq!(bounds.max_lon, 0.05);
        assert!(geographic_bounds(&[]).is_none());
    }
}
