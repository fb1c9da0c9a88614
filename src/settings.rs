use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::utils::constants::{
    CONFIG_FILE, DEFAULT_BIKE_COLUMN, DEFAULT_PREVIEW_ROWS, DEFAULT_SEED, ENV_PREFIX,
    RENTALS_FILE, STATIONS_FILE, SYNTHETIC_RENTALS_HIGH, SYNTHETIC_RENTALS_LOW, WEATHER_FILE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSettings {
    pub seed: u64,
    pub low: i64,
    pub high: i64,
}

impl Default for SyntheticSettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            low: SYNTHETIC_RENTALS_LOW,
            high: SYNTHETIC_RENTALS_HIGH,
        }
    }
}

/// Runtime settings, layered as defaults, then the TOML file, then
/// `CYCLE_DASHBOARD_*` environment variables. CLI flags are applied last by
/// the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub data_dir: PathBuf,
    pub stations_file: String,
    pub rentals_file: String,
    pub weather_file: String,
    pub bike_column: String,
    pub preview_rows: usize,
    pub synthetic: SyntheticSettings,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            stations_file: STATIONS_FILE.to_string(),
            rentals_file: RENTALS_FILE.to_string(),
            weather_file: WEATHER_FILE.to_string(),
            bike_column: DEFAULT_BIKE_COLUMN.to_string(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            synthetic: SyntheticSettings::default(),
        }
    }
}

impl DashboardSettings {
    /// Load settings. An explicit `config_path` must exist; otherwise
    /// `cycle-dashboard.{toml,json,yaml}` in the working directory is optional.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("data_dir", defaults.data_dir.to_string_lossy().to_string())?
            .set_default("stations_file", defaults.stations_file)?
            .set_default("rentals_file", defaults.rentals_file)?
            .set_default("weather_file", defaults.weather_file)?
            .set_default("bike_column", defaults.bike_column)?
            .set_default("preview_rows", defaults.preview_rows as i64)?
            .set_default("synthetic.seed", defaults.synthetic.seed as i64)?
            .set_default("synthetic.low", defaults.synthetic.low)?
            .set_default("synthetic.high", defaults.synthetic.high)?;

        builder = match config_path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(CONFIG_FILE).required(false)),
        };

        let settings: DashboardSettings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        debug!(?settings, "Loaded dashboard settings");
        Ok(settings)
    }

    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.synthetic.seed = seed;
        self
    }

    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.synthetic.low >= self.synthetic.high {
            return Err(DashboardError::InvalidRange {
                low: self.synthetic.low,
                high: self.synthetic.high,
            });
        }
        if self.bike_column.trim().is_empty() {
            return Err(DashboardError::InvalidFormat(
                "bike_column must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn stations_path(&self) -> PathBuf {
        self.data_dir.join(&self.stations_file)
    }

    pub fn rentals_path(&self) -> PathBuf {
        self.data_dir.join(&self.rentals_file)
    }

    pub fn weather_path(&self) -> PathBuf {
        self.data_dir.join(&self.weather_file)
    }
}
