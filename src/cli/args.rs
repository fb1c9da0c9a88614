use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::WeatherFactor;

#[derive(Parser)]
#[command(name = "cycle-dashboard")]
#[command(about = "London cycle hire and weather dashboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide the loading spinner")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Settings file [default: ./cycle-dashboard.toml if present]"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Directory holding cycle_stations.csv, bike_rentals.csv and weather_london.csv"
    )]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Preview the first rows of each dataset
    Explore {
        #[arg(short = 'n', long, help = "Rows to show per dataset")]
        rows: Option<usize>,
    },

    /// Station metrics and map markers
    Stations {
        #[arg(long, help = "Write the station map as GeoJSON")]
        geojson: Option<PathBuf>,
    },

    /// Regress synthetic rentals on a weather factor and show the correlation matrix
    Weather {
        #[arg(short, long, value_enum, default_value_t = WeatherFactor::Tavg)]
        factor: WeatherFactor,

        #[arg(long, help = "Seed for the synthetic rental counts")]
        seed: Option<u64>,

        #[arg(long, help = "Write the regression and correlation matrix as JSON")]
        json: Option<PathBuf>,
    },

    /// Render all three views from one data load
    Dashboard {
        #[arg(short, long, value_enum, default_value_t = WeatherFactor::Tavg)]
        factor: WeatherFactor,

        #[arg(long, help = "Seed for the synthetic rental counts")]
        seed: Option<u64>,

        #[arg(long, help = "Write the station map as GeoJSON")]
        geojson: Option<PathBuf>,

        #[arg(long, help = "Write the regression and correlation matrix as JSON")]
        json: Option<PathBuf>,
    },
}
