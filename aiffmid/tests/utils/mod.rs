#![allow(dead_code)]

pub use aiffmid::*;

/// Assembles AIFF files in memory
#[derive(Debug, Clone)]
pub struct AiffBuilder {
    outer: [u8; 4],
    format: [u8; 4],
    chunks: Vec<u8>,
}

impl Default for AiffBuilder {
    fn default() -> Self {
        Self {
            outer: *b"FORM",
            format: *b"AIFF",
            chunks: Vec::new(),
        }
    }
}

impl AiffBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outer(mut self, tag: &[u8; 4]) -> Self {
        self.outer = *tag;
        self
    }

    pub fn format(mut self, tag: &[u8; 4]) -> Self {
        self.format = *tag;
        self
    }

    pub fn chunk(self, id: &[u8; 4], body: &[u8]) -> Self {
        let length = body.len().try_into().unwrap();
        self.chunk_with_length(id, length, body)
    }

    /// Adds a chunk whose declared length does not have to match the body
    pub fn chunk_with_length(mut self, id: &[u8; 4], length: u32, body: &[u8]) -> Self {
        self.chunks.extend_from_slice(id);
        self.chunks.extend_from_slice(&length.to_be_bytes());
        self.chunks.extend_from_slice(body);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let body_size = u32::try_from(self.chunks.len() + 4).unwrap();

        let mut data = Vec::new();
        data.extend_from_slice(&self.outer);
        data.extend_from_slice(&body_size.to_be_bytes());
        data.extend_from_slice(&self.format);
        data.extend_from_slice(&self.chunks);
        data
    }
}

/// A header chunk as written by most applications
pub fn comm_body() -> Vec<u8> {
    vec![0, 1, 0, 0, 0, 0, 0, 16, 0x40, 0x0E, 0xAC, 0x44, 0, 0, 0, 0, 0, 0]
}

/// Start of a standard MIDI file
pub fn smf_payload() -> Vec<u8> {
    let mut smf = b"MThd\0\0\0\x06\0\0\0\x01\0\x60".to_vec();
    smf.extend_from_slice(b"MTrk\0\0\0\x04\0\xFF\x2F\0");
    smf
}
