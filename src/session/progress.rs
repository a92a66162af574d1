use std::time::Duration;

/// Format a `Duration` as `MM:SS`.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// The timer readout published by `PlaylistSession::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Progress {
    /// Whole seconds played so far.
    pub elapsed: Duration,
    pub total: Duration,
    /// `elapsed / total`, 0 when the total is unknown, never above 1.
    pub ratio: f64,
}

impl Progress {
    pub(super) fn new(elapsed: Duration, total: Duration) -> Self {
        // The readout works in whole seconds.
        let elapsed = Duration::from_secs(elapsed.as_secs());
        let ratio = if total.is_zero() {
            0.0
        } else {
            (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
        };
        Self {
            elapsed,
            total,
            ratio,
        }
    }

    pub fn elapsed_text(&self) -> String {
        format_mmss(self.elapsed)
    }

    pub fn total_text(&self) -> String {
        format_mmss(self.total)
    }
}
