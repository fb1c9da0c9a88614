pub mod correlation;
pub mod normalizer;
pub mod regression;
pub mod station_summary;
pub mod synthetic;

pub use correlation::{compute_correlation, CorrelationMatrix};
pub use normalizer::normalize_station_columns;
pub use regression::{linear_fit, LinearFit};
pub use station_summary::{compute_station_summary, geographic_bounds, GeographicBounds, StationSummary};
pub use synthetic::{attach_synthetic_rentals, synthetic_rentals};
