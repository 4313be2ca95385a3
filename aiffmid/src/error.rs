use aiffmid_common::read::ReadError;

use crate::ChunkId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fewer bytes than required were available, or the source failed
    #[error("Truncated stream: {0}")]
    Truncated(#[from] ReadError),
    /// A structural check on data that was read completely failed
    #[error("Invalid format: {0}")]
    Format(#[from] FormatError),
}

impl Error {
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("missing outer tag, found {0}")]
    MissingOuterTag(ChunkId),
    #[error("missing format tag, found {0}")]
    MissingFormatTag(ChunkId),
}

/// Failure of [`extract_midi_to`](crate::extract_midi_to)
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error(transparent)]
    Decode(#[from] Error),
    #[error("Failed to write payload: {0}")]
    Write(std::io::Error),
}
