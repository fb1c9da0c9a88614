//! Synthetic rental counts for the weather trends view.
//!
//! The rental and weather files are never joined by date, so the trends view
//! correlates weather against a seeded random stand-in. The numbers are not
//! rental data and every consumer must label them as synthetic.

use crate::error::{DashboardError, Result};
use crate::models::Table;
use crate::utils::constants::RENTALS_COLUMN;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Draw `count` integers uniformly from `[low, high)` with a seeded generator.
pub fn synthetic_rentals(count: usize, seed: u64, low: i64, high: i64) -> Result<Vec<i64>> {
    if low >= high {
        return Err(DashboardError::InvalidRange { low, high });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..count).map(|_| rng.random_range(low..high)).collect())
}

/// Append (or overwrite) the `rentals` column with one synthetic value per row.
pub fn attach_synthetic_rentals(mut weather: Table, seed: u64, low: i64, high: i64) -> Result<Table> {
    let values = synthetic_rentals(weather.len(), seed, low, high)?;
    weather.set_column(
        RENTALS_COLUMN,
        values.iter().map(|v| v.to_string()).collect(),
    )?;

    debug!(rows = weather.len(), seed, low, high, "Attached synthetic rentals");
    Ok(weather)
}
