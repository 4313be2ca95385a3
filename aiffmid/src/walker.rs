use std::io::Write;

use aiffmid_common::math::SafeAdd;
use aiffmid_common::read::{ReadExt, Skip};

use crate::*;

/// Chunk identifier of the embedded MIDI data
pub const TARGET_CHUNK: ChunkId = ChunkId::Mid;

/// Forward-only scan over the chunks of an AIFF file
///
/// The walker is the only reader of `source` while it exists. It keeps track
/// of how many bytes it consumed, which is the offset in the file if `source`
/// started at the beginning.
#[derive(Debug)]
pub struct ChunkWalker<R> {
    source: R,
    position: u64,
}

impl<R: Skip> ChunkWalker<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn into_inner(self) -> R {
        self.source
    }

    /// Validates the container header
    ///
    /// Must be called once, before any chunk is read.
    pub fn read_container_header(&mut self) -> Result<ContainerHeader, Error> {
        let header = ContainerHeader::read(&mut self.source)?;
        self.advance(CONTAINER_HEADER_LEN)?;

        tracing::info!("Loaded AIFF file ({} bytes)", header.body_size());

        Ok(header)
    }

    /// Reads the next chunk header
    ///
    /// Afterwards, the walker is positioned at the start of the chunk body. The
    /// body has to be consumed via [`Self::skip_body`] or
    /// [`Self::extract_payload`] before the next header can be read.
    pub fn next_header(&mut self) -> Result<ChunkHeader, Error> {
        let header = ChunkHeader::read(&mut self.source)?;
        self.advance(CHUNK_HEADER_LEN)?;
        Ok(header)
    }

    /// Skips exactly the declared length of the chunk's body
    pub fn skip_body(&mut self, header: &ChunkHeader) -> Result<(), Error> {
        let length = u64::from(header.length());
        self.source.skip(length)?;
        self.advance(length)
    }

    /// Skips all chunks until one with identifier `target` is found
    ///
    /// Returns the header of the found chunk with the walker positioned at the
    /// start of its body. If the stream ends first, the error is the one of the
    /// failed read.
    pub fn find(&mut self, target: ChunkId) -> Result<ChunkHeader, Error> {
        loop {
            let header = self.next_header()?;

            if header.id() == target {
                tracing::info!("Found {target} chunk ({} bytes)", header.length());
                return Ok(header);
            }

            tracing::info!(
                "Skipping over {} chunk ({} bytes) while looking for {target}",
                header.id(),
                header.length()
            );
            self.skip_body(&header)?;
        }
    }

    /// Skips all chunks up to the `.mid` chunk and returns its declared length
    pub fn find_target_chunk(&mut self) -> Result<u32, Error> {
        Ok(self.find(TARGET_CHUNK)?.length())
    }

    /// Reads exactly `length` bytes of chunk body
    pub fn extract_payload(&mut self, length: u32) -> Result<Vec<u8>, Error> {
        let length = u64::from(length);
        let payload = self.source.read_vec(length)?;
        self.advance(length)?;
        Ok(payload)
    }

    fn advance(&mut self, len: u64) -> Result<(), Error> {
        self.position = self
            .position
            .safe_add(len)
            .map_err(aiffmid_common::read::ReadError::from)?;
        Ok(())
    }
}

/// Returns the content of the first `.mid` chunk
///
/// Either the complete payload is returned or an error. Nothing after the
/// `.mid` chunk is read.
///
/// ```
/// let mut data = Vec::new();
/// data.extend_from_slice(b"FORM\0\0\0\x19AIFF");
/// data.extend_from_slice(b"COMT\0\0\0\x02hi");
/// data.extend_from_slice(b".mid\0\0\0\x03MTh");
///
/// let payload = aiffmid::extract_midi(data.as_slice()).unwrap();
/// assert_eq!(payload, b"MTh");
/// ```
pub fn extract_midi<R: Skip>(source: R) -> Result<Vec<u8>, Error> {
    let mut walker = ChunkWalker::new(source);

    walker.read_container_header()?;
    let length = walker.find_target_chunk()?;
    walker.extract_payload(length)
}

/// Writes the content of the first `.mid` chunk to `sink`
///
/// The payload is written unmodified and only after it has been read
/// completely. If decoding fails, nothing is written.
///
/// Returns the number of bytes written.
pub fn extract_midi_to<R: Skip>(source: R, mut sink: impl Write) -> Result<usize, ExtractError> {
    let payload = extract_midi(source)?;

    sink.write_all(&payload).map_err(ExtractError::Write)?;
    sink.flush().map_err(ExtractError::Write)?;

    Ok(payload.len())
}
