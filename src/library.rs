//! Track catalog: the playable files on disk, reconciled against the store.

mod scan;

pub use scan::*;

#[cfg(test)]
mod tests;
