pub mod station;
pub mod table;
pub mod weather;

pub use station::StationRecord;
pub use table::Table;
pub use weather::{WeatherFactor, WeatherRecord};
