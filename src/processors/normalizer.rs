use crate::models::Table;
use crate::utils::constants::{LONGITUDE_ALIAS, LONGITUDE_COLUMN};
use tracing::{debug, warn};

/// Resolve the station longitude alias to the canonical `lon` column.
///
/// Renames `long` to `lon` when only `long` is present. Tables that already
/// have `lon`, or have neither, are returned unchanged; callers check for
/// the columns they need.
pub fn normalize_station_columns(mut stations: Table) -> Table {
    let has_alias = stations.has_column(LONGITUDE_ALIAS);
    let has_canonical = stations.has_column(LONGITUDE_COLUMN);

    match (has_alias, has_canonical) {
        (true, false) => {
            stations.rename_column(LONGITUDE_ALIAS, LONGITUDE_COLUMN);
            debug!("Renamed station column 'long' to 'lon'");
        }
        (true, true) => {
            warn!("Station table has both 'long' and 'lon'; using 'lon'");
        }
        (false, false) => {
            debug!("Station table has no longitude column");
        }
        (false, true) => {}
    }

    stations
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_long_renamed_to_lon() {
        let table = Table::from_str_rows(
            &["name", "lat", "long", "nbBikes"],
            &[&["A", "51.5", "-0.1", "10"], &["B", "51.6", "-0.2", "20"]],
        );
        let rows_before = table.rows().to_vec();

        let normalized = normalize_station_columns(table);

        assert_eq!(normalized.columns(), &["name", "lat", "lon", "nbBikes"]);
        assert_eq!(normalized.rows(), rows_before.as_slice());
    }

    #[test]
    fn test_lon_untouched() {
        let table = Table::from_str_rows(&["name", "lat", "lon"], &[&["A", "51.5", "-0.1"]]);
        let normalized = normalize_station_columns(table.clone());
        assert_eq!(normalized, table);
    }

    #[test]
    fn test_both_present_is_noop() {
        let table = Table::from_str_rows(&["lon", "long"], &[&["-0.1", "-0.2"]]);
        let normalized = normalize_station_columns(table.clone());
        assert_eq!(normalized, table);
    }

    #[test]
    fn test_neither_present_is_noop() {
        let table = Table::from_str_rows(&["name", "nbBikes"], &[&["A", "3"]]);
        let normalized = normalize_station_columns(table.clone());
        assert_eq!(normalized, table);
        assert!(!normalized.has_column("lon"));
    }

    #[test]
    fn test_idempotent() {
        let table = Table::from_str_rows(&["long"], &[&["-0.1"]]);
        let once = normalize_station_columns(table);
        let twice = normalize_station_columns(once.clone());
        assert_eq!(once, twice);
    }
}
