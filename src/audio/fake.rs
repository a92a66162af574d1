//! Recording `PlaybackEngine` for unit tests.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::engine::{EngineError, PlaybackEngine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Load(PathBuf),
    Play,
    Pause,
    Unpause,
    Stop,
}

/// Engine that records every call and reports a fixed elapsed time.
#[derive(Debug, Default)]
pub(crate) struct FakeEngine {
    pub(crate) calls: Vec<Call>,
    pub(crate) elapsed: Duration,
    pub(crate) length: Duration,
    pub(crate) fail_load: bool,
}

impl FakeEngine {
    pub(crate) fn with_length(length: Duration) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }
}

impl PlaybackEngine for FakeEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        if self.fail_load {
            return Err(EngineError::Decode {
                path: path.to_path_buf(),
                reason: "bad frame".into(),
            });
        }
        self.calls.push(Call::Load(path.to_path_buf()));
        Ok(())
    }

    fn play(&mut self) {
        self.calls.push(Call::Play);
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn unpause(&mut self) {
        self.calls.push(Call::Unpause);
    }

    fn stop(&mut self) {
        self.calls.push(Call::Stop);
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn track_duration(&self, _path: &Path) -> Duration {
        self.length
    }
}
