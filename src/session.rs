//! Playlist session: an ordered queue of tracks chosen by id, a cursor into
//! it, and the transport commands that drive a `PlaybackEngine`.
//!
//! The session does not own the metadata store; callers pass it in for the
//! operations that read or bump track metadata.

mod error;
mod model;
mod progress;

pub use error::SessionError;
pub use model::*;
pub use progress::Progress;
