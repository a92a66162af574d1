use std::path::PathBuf;

use crate::audio::EngineError;
use crate::store::StoreError;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("ID not found. Please enter a valid ID.")]
    IdNotFound(String),

    #[error("Playlist is empty!")]
    EmptyPlaylist,

    #[error("Track file not found!")]
    TrackFileNotFound(PathBuf),

    #[error("Could not play track: {0}")]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
