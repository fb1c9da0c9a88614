use serde_json::{json, Value};
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::models::{StationRecord, Table};
use crate::processors::{compute_station_summary, geographic_bounds, GeographicBounds, StationSummary};
use crate::utils::constants::{
    LATITUDE_COLUMN, LONGITUDE_COLUMN, MAP_CENTER_LAT, MAP_CENTER_LON, MAP_TILES, MAP_ZOOM,
    MARKER_COLOR, MARKER_FILL_OPACITY, MARKER_RADIUS,
};
use crate::views::notice::{quote_all, Notice};

/// Station metrics and map markers.
#[derive(Debug, Clone)]
pub struct StationView {
    pub notices: Vec<Notice>,
    pub summary: Option<StationSummary>,
    pub markers: Vec<StationRecord>,
    pub bounds: Option<GeographicBounds>,
}

impl StationView {
    /// Build the view from a normalized station table.
    ///
    /// Without `lat` and `lon` the view holds a single error notice naming the
    /// missing columns and listing the available ones.
    pub fn build(stations: &Table, bike_column: &str) -> Self {
        let mut view = StationView {
            notices: Vec::new(),
            summary: None,
            markers: Vec::new(),
            bounds: None,
        };

        let missing = stations.missing_columns(&[LATITUDE_COLUMN, LONGITUDE_COLUMN]);
        if !missing.is_empty() {
            view.notices.push(
                Notice::error(format!(
                    "Could not find column(s) {}. Check that 'lat' and 'lon' exist.",
                    quote_all(&missing)
                ))
                .with_available_columns(stations.columns()),
            );
            return view;
        }

        view.notices
            .push(Notice::success("Columns found: 'lat' and 'lon'"));

        match compute_station_summary(stations, bike_column) {
            Ok(summary) => view.summary = Some(summary),
            Err(e) => {
                view.notices.push(Notice::from_error(&e));
                return view;
            }
        }

        match StationRecord::from_table(stations, bike_column) {
            Ok(markers) => {
                if markers.len() < stations.len() {
                    view.notices.push(Notice::warning(format!(
                        "{} of {} stations could not be placed on the map",
                        stations.len() - markers.len(),
                        stations.len()
                    )));
                }
                view.bounds = geographic_bounds(&markers);
                view.markers = markers;
            }
            Err(e) => view.notices.push(Notice::from_error(&e)),
        }

        view
    }

    pub fn render(&self) -> String {
        let mut out = String::from("=== Cycle hire stations in London ===\n");
        for notice in &self.notices {
            out.push_str(&notice.render());
            out.push('\n');
        }

        if let Some(ref summary) = self.summary {
            let average = summary
                .average_bikes
                .map(|a| format!("{:.1}", a))
                .unwrap_or_else(|| "n/a".to_string());
            out.push_str(&format!("Average bikes per station: {}\n", average));
            out.push_str(&format!("Total bikes: {}\n", summary.total_bikes));
        }

        if !self.markers.is_empty() {
            out.push_str(&format!(
                "Map: {} markers around ({:.4}, {:.4}), zoom {}, tiles '{}'\n",
                self.markers.len(),
                MAP_CENTER_LAT,
                MAP_CENTER_LON,
                MAP_ZOOM,
                MAP_TILES
            ));
        }

        if let Some(ref b) = self.bounds {
            out.push_str(&format!(
                "Coverage: {:.4}°N to {:.4}°N, {:.4}° to {:.4}° longitude\n",
                b.min_lat, b.max_lat, b.min_lon, b.max_lon
            ));
        }
        out
    }

    /// Station markers as a GeoJSON FeatureCollection carrying the map and
    /// marker styling in foreign members and feature properties.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .markers
            .iter()
            .map(|station| {
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [station.longitude, station.latitude],
                    },
                    "properties": {
                        "name": station.name,
                        "bikes": station.bike_count,
                        "popup": station.popup_html(),
                        "radius": MARKER_RADIUS,
                        "color": MARKER_COLOR,
                        "fill": true,
                        "fill_opacity": MARKER_FILL_OPACITY,
                    },
                })
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "map": {
                "center": [MAP_CENTER_LAT, MAP_CENTER_LON],
                "zoom": MAP_ZOOM,
                "tiles": MAP_TILES,
            },
            "features": features,
        })
    }

    pub fn write_geojson(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &self.to_geojson())?;
        info!(path = %path.display(), markers = self.markers.len(), "Wrote station map");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::normalize_station_columns;
    use crate::views::NoticeLevel;

    fn stations() -> Table {
        normalize_station_columns(Table::from_str_rows(
            &["name", "lat", "long", "nbBikes"],
            &[&["A", "51.5", "-0.1", "10"], &["B", "51.6", "-0.2", "20"]],
        ))
    }

    #[test]
    fn test_full_view() {
        let view = StationView::build(&stations(), "nbBikes");

        assert_eq!(view.notices.len(), 1);
        assert_eq!(view.notices[0].level, NoticeLevel::Success);
        assert_eq!(view.summary.as_ref().unwrap().average_bikes, Some(15.0));
        assert_eq!(view.markers.len(), 2);

        let rendered = view.render();
        assert!(rendered.contains("Average bikes per station: 15.0"));
        assert!(rendered.contains("Total bikes: 30"));
    }

    #[test]
    fn test_no_coordinates_reports_both() {
        let table = Table::from_str_rows(&["name", "nbBikes"], &[&["A", "3"]]);
        let view = StationView::build(&table, "nbBikes");

        assert_eq!(view.notices.len(), 1);
        let notice = &view.notices[0];
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("'lat', 'lon'"));
        assert_eq!(
            notice.available_columns,
            Some(vec!["name".to_string(), "nbBikes".to_string()])
        );
        assert!(view.summary.is_none());
        assert!(view.markers.is_empty());
    }

    #[test]
    fn test_missing_bike_column_warns() {
        let table = Table::from_str_rows(&["name", "lat", "lon"], &[&["A", "51.5", "-0.1"]]);
        let view = StationView::build(&table, "nbBikes");

        assert_eq!(view.notices.len(), 2);
        assert_eq!(view.notices[1].level, NoticeLevel::Warning);
        assert!(view.summary.is_none());
        assert!(view.render().contains("Available columns: 'name', 'lat', 'lon'"));
    }

    #[test]
    fn test_unplaceable_rows_are_counted() {
        let table = Table::from_str_rows(
            &["name", "lat", "lon", "nbBikes"],
            &[&["A", "51.5", "-0.1", "10"], &["B", "", "-0.2", "20"]],
        );
        let view = StationView::build(&table, "nbBikes");
        assert_eq!(view.markers.len(), 1);
        assert!(view
            .notices
            .iter()
            .any(|n| n.message.contains("1 of 2 stations")));
    }

    #[test]
    fn test_geojson_shape() {
        let view = StationView::build(&stations(), "nbBikes");
        let geojson = view.to_geojson();

        assert_eq!(geojson["type"], "FeatureCollection");
        assert_eq!(geojson["map"]["tiles"], "CartoDB dark_matter");
        let feature = &geojson["features"][1];
        assert_eq!(feature["geometry"]["coordinates"][0], -0.2);
        assert_eq!(feature["geometry"]["coordinates"][1], 51.6);
        assert_eq!(feature["properties"]["popup"], "<b>B</b><br>Bikes: 20");
        assert_eq!(feature["properties"]["color"], "yellow");
    }
}
