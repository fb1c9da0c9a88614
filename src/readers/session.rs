use crate::error::Result;
use crate::models::Table;
use crate::processors::normalize_station_columns;
use crate::readers::TableReader;
use crate::settings::DashboardSettings;
use crate::utils::progress::ProgressReporter;
use tracing::info;

/// The three datasets of one dashboard session.
///
/// Loaded once through [`Session::load`] and borrowed by every view. Station
/// columns are normalized here so nothing downstream sees the `long` alias.
#[derive(Debug, Clone)]
pub struct Session {
    pub settings: DashboardSettings,
    pub stations: Table,
    pub rentals: Table,
    pub weather: Table,
}

impl Session {
    /// Read all three files. A missing or unreadable file fails the whole session.
    pub fn load(settings: DashboardSettings, progress: &ProgressReporter) -> Result<Self> {
        let reader = TableReader::new();

        progress.set_message(&format!("Reading {}...", settings.stations_file));
        let stations = reader.read_table(&settings.stations_path())?;

        progress.set_message(&format!("Reading {}...", settings.rentals_file));
        let rentals = reader.read_table(&settings.rentals_path())?;

        progress.set_message(&format!("Reading {}...", settings.weather_file));
        let weather = reader.read_table(&settings.weather_path())?;

        info!(
            stations = stations.len(),
            rentals = rentals.len(),
            weather = weather.len(),
            "Session data loaded"
        );
        progress.finish_with_message(&format!(
            "Loaded {} stations, {} rentals, {} weather records",
            stations.len(),
            rentals.len(),
            weather.len()
        ));

        Ok(Self::from_tables(settings, stations, rentals, weather))
    }

    /// Assemble a session from tables already in memory.
    pub fn from_tables(
        settings: DashboardSettings,
        stations: Table,
        rentals: Table,
        weather: Table,
    ) -> Self {
        Self {
            settings,
            stations: normalize_station_columns(stations),
            rentals,
            weather,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_normalizes_stations() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(
            dir.path().join("cycle_stations.csv"),
            "name,lat,long,nbBikes\nA,51.5,-0.1,10\n",
        )?;
        fs::write(dir.path().join("bike_rentals.csv"), "id,duration\n1,300\n")?;
        fs::write(dir.path().join("weather_london.csv"), "date,tavg\n2023-01-01,4.5\n")?;

        let settings = DashboardSettings::default().with_data_dir(dir.path().to_path_buf());
        let session = Session::load(settings, &ProgressReporter::silent())?;

        assert_eq!(session.stations.columns(), &["name", "lat", "lon", "nbBikes"]);
        assert_eq!(session.rentals.len(), 1);
        assert_eq!(session.weather.len(), 1);
        Ok(())
    }

    #[test]
    fn test_missing_file_fails_session() {
        let dir = TempDir::new().unwrap();
        let settings = DashboardSettings::default().with_data_dir(dir.path().to_path_buf());
        assert!(Session::load(settings, &ProgressReporter::silent()).is_err());
    }
}
