use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::readers::Session;
use crate::settings::DashboardSettings;
use crate::utils::logging::init_logging;
use crate::utils::progress::ProgressReporter;
use crate::views::{ExploreView, StationView, WeatherView};
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let mut settings = DashboardSettings::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        settings = settings.with_data_dir(dir);
    }
    debug!(data_dir = %settings.data_dir.display(), "Using data directory");

    match cli.command {
        Commands::Explore { rows } => {
            if let Some(rows) = rows {
                settings = settings.with_preview_rows(rows);
            }
            let session = open_session(settings, cli.quiet)?;
            println!("{}", ExploreView::build(&session).render());
        }

        Commands::Stations { geojson } => {
            let session = open_session(settings, cli.quiet)?;
            let view = StationView::build(&session.stations, &session.settings.bike_column);
            println!("{}", view.render());

            if let Some(path) = geojson {
                view.write_geojson(&path)?;
                println!("Station map written to {}", path.display());
            }
        }

        Commands::Weather { factor, seed, json } => {
            if let Some(seed) = seed {
                settings = settings.with_seed(seed);
            }
            let session = open_session(settings, cli.quiet)?;
            let view = WeatherView::build(&session.weather, factor, &session.settings.synthetic)?;
            println!("{}", view.render());

            if let Some(path) = json {
                view.write_json(&path)?;
                println!("Weather analysis written to {}", path.display());
            }
        }

        Commands::Dashboard {
            factor,
            seed,
            geojson,
            json,
        } => {
            if let Some(seed) = seed {
                settings = settings.with_seed(seed);
            }
            let session = open_session(settings, cli.quiet)?;

            println!("{}", ExploreView::build(&session).render());

            let stations = StationView::build(&session.stations, &session.settings.bike_column);
            println!("{}", stations.render());
            if let Some(path) = geojson {
                stations.write_geojson(&path)?;
                println!("Station map written to {}", path.display());
            }

            let weather =
                WeatherView::build(&session.weather, factor, &session.settings.synthetic)?;
            println!("{}", weather.render());
            if let Some(path) = json {
                weather.write_json(&path)?;
                println!("Weather analysis written to {}", path.display());
            }
        }
    }

    Ok(())
}

fn open_session(settings: DashboardSettings, quiet: bool) -> Result<Session> {
    let progress = ProgressReporter::new_spinner("Loading data...", quiet);
    Session::load(settings, &progress)
}
