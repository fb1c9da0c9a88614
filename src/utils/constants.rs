/// File names
pub const STATIONS_FILE: &str = "cycle_stations.csv";
pub const RENTALS_FILE: &str = "bike_rentals.csv";
pub const WEATHER_FILE: &str = "weather_london.csv";

/// Default configuration file
pub const CONFIG_FILE: &str = "cycle-dashboard";
pub const ENV_PREFIX: &str = "CYCLE_DASHBOARD";

/// Station columns
pub const STATION_NAME_COLUMN: &str = "name";
pub const LATITUDE_COLUMN: &str = "lat";
pub const LONGITUDE_COLUMN: &str = "lon";
pub const LONGITUDE_ALIAS: &str = "long";
pub const DEFAULT_BIKE_COLUMN: &str = "nbBikes";

/// Weather columns
pub const DATE_COLUMN: &str = "date";
pub const REQUIRED_WEATHER_COLUMN: &str = "tavg";
pub const RENTALS_COLUMN: &str = "rentals";

/// Synthetic rental signal
pub const DEFAULT_SEED: u64 = 42;
pub const SYNTHETIC_RENTALS_LOW: i64 = 5000;
pub const SYNTHETIC_RENTALS_HIGH: i64 = 55000;

/// Cell values read as missing
pub const NA_VALUES: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL"];

/// Preview defaults
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Station map
pub const MAP_CENTER_LAT: f64 = 51.5074;
pub const MAP_CENTER_LON: f64 = -0.1278;
pub const MAP_ZOOM: u8 = 11;
pub const MAP_TILES: &str = "CartoDB dark_matter";
pub const MARKER_RADIUS: u32 = 4;
pub const MARKER_COLOR: &str = "yellow";
pub const MARKER_FILL_OPACITY: f64 = 0.9;
