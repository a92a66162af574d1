use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("no audio output device: {0}")]
    NoOutputDevice(String),

    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
}

/// One audio output channel that holds at most one loaded file.
///
/// Transport calls made while nothing is loaded are ignored.
pub trait PlaybackEngine {
    /// Load `path`, replacing any previously loaded file. Playback does not
    /// start until `play` is called.
    fn load(&mut self, path: &Path) -> Result<(), EngineError>;

    fn play(&mut self);

    fn pause(&mut self);

    fn unpause(&mut self);

    /// Stop and unload the current file.
    fn stop(&mut self);

    /// Playback position of the loaded file, excluding paused time.
    fn elapsed(&self) -> Duration;

    /// Total length of the file at `path`, or zero when it cannot be determined.
    fn track_duration(&self, path: &Path) -> Duration;
}
