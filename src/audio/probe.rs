use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;
use tracing::debug;

/// Read the total duration of `path` from its audio properties.
pub fn probe_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => {
            let duration = tagged.properties().duration();
            (!duration.is_zero()).then_some(duration)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "could not read audio properties");
            None
        }
    }
}
