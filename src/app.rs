//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model`. It owns the metadata store, the
//! catalog listing and the playlist session, and moves between the menu,
//! playlist and track-editing views.

mod form;
mod model;

pub use form::*;
pub use model::*;
