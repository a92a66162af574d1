//! Audio output: the `PlaybackEngine` seam and its `rodio` implementation.
//!
//! A single engine instance is the one exclusive audio channel of the app.
//! Loading a new file supersedes whatever was loaded before.

mod engine;
mod probe;
mod rodio_engine;

pub use engine::{EngineError, PlaybackEngine};
pub use probe::probe_duration;
pub use rodio_engine::RodioEngine;

#[cfg(test)]
pub(crate) mod fake;
#[cfg(test)]
mod tests;
