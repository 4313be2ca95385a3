use std::fmt::{Debug, Display};
use std::io::Read;

use aiffmid_common::read::ReadExt;

use crate::Error;

aiffmid_common::utils::convertible_enum!(
    #[repr(u32)]
    #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[non_exhaustive]
    #[allow(non_camel_case_types)]
    /// Identifier of a chunk
    ///
    /// The value is stored as big endian [`u32`] of the original byte string.
    /// Two identifiers are equal exactly if all four bytes are equal.
    pub enum ChunkId {
        /// Outer container
        FORM = b(b"FORM"),
        /// Form type of uncompressed files
        AIFF = b(b"AIFF"),
        /// Form type of compressed files
        AIFC = b(b"AIFC"),

        /// Common parameters like channels and sample rate
        COMM = b(b"COMM"),
        /// Sound data
        SSND = b(b"SSND"),
        /// Positions in the sound data
        MARK = b(b"MARK"),
        /// Instrument parameters for samplers
        INST = b(b"INST"),
        /// MIDI system exclusive data
        MIDI = b(b"MIDI"),
        /// Audio recording information
        AESD = b(b"AESD"),
        /// Application specific
        APPL = b(b"APPL"),
        /// Comments
        COMT = b(b"COMT"),
        /// Name of the sampled sound
        NAME = b(b"NAME"),
        /// Author
        AUTH = b(b"AUTH"),
        /// Copyright notice
        Copyright = b(b"(c) "),
        /// Annotation
        ANNO = b(b"ANNO"),
        /// Format version of AIFC files
        FVER = b(b"FVER"),

        /// Complete standard MIDI file
        Mid = b(b".mid"),
    }
);

impl ChunkId {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::from(u32::from_be_bytes(bytes))
    }

    /// Returns the byte string of the chunk
    pub fn bytes(self) -> [u8; 4] {
        u32::to_be_bytes(self.into())
    }

    /// Reads the next four bytes as identifier
    ///
    /// Any four bytes are a valid identifier.
    pub fn read(source: &mut impl Read) -> Result<Self, Error> {
        Ok(Self::from_bytes(source.read_array()?))
    }
}

impl Display for ChunkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.bytes();

        if bytes.iter().all(|x| x.is_ascii_graphic() || *x == b' ') {
            f.write_str(&String::from_utf8_lossy(&bytes))
        } else {
            write!(f, "0x{}", hex::encode(bytes))
        }
    }
}

impl Debug for ChunkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(_) => write!(f, "Unknown({:?})", self.to_string()),
            _ => write!(f, "{self}"),
        }
    }
}

/// Convert bytes to u32
const fn b(d: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*d)
}
