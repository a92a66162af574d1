use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    #[error("no track named {0} in the library")]
    UnknownTrack(String),

    #[error("The ID is already used.")]
    DuplicateId(String),

    #[error("Rating must be between 0 and {max}.", max = crate::store::MAX_RATING)]
    InvalidRating(u8),
}

impl StoreError {
    /// Rejected edits, as opposed to I/O or format failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownTrack(_) | Self::DuplicateId(_) | Self::InvalidRating(_)
        )
    }
}
