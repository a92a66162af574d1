use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::{debug, info};

use super::engine::{EngineError, PlaybackEngine};
use super::probe_duration;

/// `PlaybackEngine` backed by the default `rodio` output device.
pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
    /// Length reported by the decoder for the loaded file, used when the
    /// file's properties cannot be probed.
    decoded_length: Option<Duration>,
}

impl RodioEngine {
    pub fn open_default() -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| EngineError::NoOutputDevice(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);
        info!("audio output opened");

        Ok(Self {
            stream,
            sink: None,
            decoded_length: None,
        })
    }
}

impl PlaybackEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        let file = File::open(path).map_err(|source| EngineError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| EngineError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if let Some(old) = self.sink.take() {
            old.stop();
        }

        self.decoded_length = source.total_duration();
        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.append(source);
        self.sink = Some(sink);

        debug!(path = %path.display(), "loaded");
        Ok(())
    }

    fn play(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.play();
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.pause();
        }
    }

    fn unpause(&mut self) {
        self.play();
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.decoded_length = None;
    }

    fn elapsed(&self) -> Duration {
        self.sink
            .as_ref()
            .map_or(Duration::ZERO, |sink| sink.get_pos())
    }

    fn track_duration(&self, path: &Path) -> Duration {
        probe_duration(path)
            .or(self.decoded_length)
            .unwrap_or(Duration::ZERO)
    }
}
