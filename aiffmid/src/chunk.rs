use std::io::Read;

use aiffmid_common::read::ReadExt;

use crate::{ChunkId, Error};

/// Size of identifier and length field in front of every chunk body
pub const CHUNK_HEADER_LEN: u64 = 8;
/// Size of `FORM`, container size, and `AIFF`
pub const CONTAINER_HEADER_LEN: u64 = 12;

/// Identifier and declared body length of a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub(crate) id: ChunkId,
    pub(crate) length: u32,
}

impl ChunkHeader {
    pub fn new(id: ChunkId, length: u32) -> Self {
        Self { id, length }
    }

    /// Reads identifier and big endian length
    pub fn read(source: &mut impl Read) -> Result<Self, Error> {
        let id = ChunkId::read(source)?;
        let length = source.read_u32_be()?;

        Ok(Self { id, length })
    }

    pub fn id(&self) -> ChunkId {
        self.id
    }

    /// Length of the chunk body as declared in the header
    ///
    /// The value is not checked against the remaining data.
    pub fn length(&self) -> u32 {
        self.length
    }
}

/// The start of the file that identifies it as AIFF
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub(crate) body_size: u32,
}

impl ContainerHeader {
    /// Reads and checks `FORM`, the container size, and `AIFF`
    ///
    /// Afterwards, `source` is positioned at the first chunk header.
    pub fn read(source: &mut impl Read) -> Result<Self, Error> {
        let outer = ChunkId::read(source)?;
        if outer != ChunkId::FORM {
            return Err(crate::FormatError::MissingOuterTag(outer).into());
        }

        let body_size = source.read_u32_be()?;

        let format = ChunkId::read(source)?;
        if format != ChunkId::AIFF {
            return Err(crate::FormatError::MissingFormatTag(format).into());
        }

        Ok(Self { body_size })
    }

    /// Size of the container as declared after `FORM`
    ///
    /// Includes the `AIFF` tag. It is not validated.
    pub fn body_size(&self) -> u32 {
        self.body_size
    }
}
