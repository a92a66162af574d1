//! Metadata store: filename -> track record, persisted as one JSON object.
//!
//! The store is loaded wholesale at startup and rewritten wholesale after
//! every mutation. There is no locking; a single thread owns it.

mod error;
mod model;
mod persist;

pub use error::StoreError;
pub use model::*;

#[cfg(test)]
mod tests;
