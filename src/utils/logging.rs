use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

use crate::error::Result;

/// Install the global fmt subscriber.
///
/// `verbose` lowers the threshold from WARN to DEBUG. With a log file the
/// events are appended there without ANSI colouring instead of going to stderr.
/// A subscriber that is already installed is left in place.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    if installed.is_err() {
        tracing::debug!("Logging subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_logging_with_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dashboard.log");
        assert!(init_logging(true, Some(&path)).is_ok());
        assert!(path.exists());

        // A second installation must not fail
        assert!(init_logging(false, None).is_ok());
    }
}
