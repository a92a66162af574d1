use std::fs::{self, File};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LibrarySettings, LoggingSettings};
use crate::library;
use crate::store::{MetadataStore, StoreError};

/// Install the global `tracing` subscriber, writing plain text to the log file.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), Box<dyn std::error::Error>> {
    if !settings.enabled {
        return Ok(());
    }

    if let Some(parent) = settings.file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&settings.file)?;

    let filter = EnvFilter::try_from_env("JUKEBOX_LOG")
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_target(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok(())
}

/// Load the metadata store and bring it in line with the tracks directory.
pub fn open_library(
    settings: &LibrarySettings,
) -> Result<(MetadataStore, Vec<String>), StoreError> {
    let mut store = MetadataStore::load(&settings.data_file)?;
    let catalog = library::sync(&mut store, &settings.tracks_dir, settings)?;
    Ok((store, catalog))
}
