use std::io::{Cursor, Read, Seek, SeekFrom};

use crate::math::*;

/// Exact-length reads on top of [`Read`]
///
/// All methods either return the complete requested data or an error. Data
/// that was read before the failure is dropped.
pub trait ReadExt: Read {
    fn read_array<const T: usize>(&mut self) -> Result<[u8; T], ReadError> {
        let data = self.read_vec(T.u64()?)?;
        let mut buf = [0; T];
        buf.copy_from_slice(&data);
        Ok(buf)
    }

    /// Reads a big endian [`u32`]
    ///
    /// The first byte in the stream is the most significant one, independent
    /// of the host.
    ///
    /// ```
    /// # use aiffmid_common::read::ReadExt;
    /// let mut s = [0x00, 0x00, 0x01, 0x2C].as_slice();
    /// assert_eq!(s.read_u32_be().unwrap(), 300);
    /// ```
    fn read_u32_be(&mut self) -> Result<u32, ReadError> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    /// Reads exactly `len` bytes into a new buffer
    ///
    /// The buffer only grows with the data that is actually available, so a
    /// bogus `len` fails with [`ReadError::UnexpectedEof`] instead of
    /// allocating.
    ///
    /// ```
    /// # use aiffmid_common::read::{ReadExt, ReadError};
    /// let mut s = b"MThd".as_slice();
    /// assert_eq!(s.read_vec(3).unwrap(), b"MTh");
    /// assert!(matches!(
    ///     s.read_vec(10),
    ///     Err(ReadError::UnexpectedEof { requested: 10, available: 1 })
    /// ));
    /// ```
    fn read_vec(&mut self, len: u64) -> Result<Vec<u8>, ReadError> {
        let mut buf = Vec::new();
        Read::take(&mut *self, len).read_to_end(&mut buf)?;

        let available = buf.len().u64()?;
        if available != len {
            return Err(ReadError::UnexpectedEof {
                requested: len,
                available,
            });
        }

        Ok(buf)
    }
}

impl<T: Read + ?Sized> ReadExt for T {}

/// Advance a stream without keeping the data
///
/// Skipping shares the failure contract of [`ReadExt::read_vec`]: if fewer
/// than `len` bytes remain, the result is [`ReadError::UnexpectedEof`].
pub trait Skip: Read {
    fn skip(&mut self, len: u64) -> Result<(), ReadError>;
}

impl<T: AsRef<[u8]>> Skip for Cursor<T> {
    /// ```
    /// # use std::io::Cursor;
    /// # use aiffmid_common::read::*;
    /// let mut s = Cursor::new(b"COMT\0\0\0\x02hi.mid");
    /// s.skip(4).unwrap();
    /// assert_eq!(s.read_u32_be().unwrap(), 2);
    /// s.skip(2).unwrap();
    /// assert_eq!(&s.read_array::<4>().unwrap(), b".mid");
    /// assert!(s.skip(1).is_err());
    /// ```
    fn skip(&mut self, len: u64) -> Result<(), ReadError> {
        let total = self.get_ref().as_ref().len().u64()?;
        let position = self.position();
        let available = total.saturating_sub(position);

        if len > available {
            self.set_position(total);
            return Err(ReadError::UnexpectedEof {
                requested: len,
                available,
            });
        }

        self.set_position(position.safe_add(len)?);
        Ok(())
    }
}

impl Skip for &[u8] {
    fn skip(&mut self, len: u64) -> Result<(), ReadError> {
        let available = self.len().u64()?;

        if len > available {
            *self = &[];
            return Err(ReadError::UnexpectedEof {
                requested: len,
                available,
            });
        }

        let data: &[u8] = *self;
        *self = data.get(len.usize()?..).unwrap_or_default();
        Ok(())
    }
}

/// Skips by seeking
///
/// Seeking beyond the end is not an error for most sources. Therefore the
/// length of the stream is determined once and every skip is checked against
/// it before seeking.
#[derive(Debug)]
pub struct Seekable<R> {
    inner: R,
    position: u64,
    len: u64,
}

impl<R: Read + Seek> Seekable<R> {
    pub fn new(mut inner: R) -> Result<Self, ReadError> {
        let position = inner.stream_position()?;
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(position))?;

        Ok(Self {
            inner,
            position,
            len,
        })
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for Seekable<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.position = self
            .position
            .saturating_add(n.u64().map_err(std::io::Error::other)?);
        Ok(n)
    }
}

impl<R: Read + Seek> Skip for Seekable<R> {
    fn skip(&mut self, len: u64) -> Result<(), ReadError> {
        let available = self.len.saturating_sub(self.position);

        if len > available {
            tracing::debug!("Cannot seek {len} bytes, only {available} bytes left");
            self.inner.seek(SeekFrom::End(0))?;
            self.position = self.len;
            return Err(ReadError::UnexpectedEof {
                requested: len,
                available,
            });
        }

        self.inner.seek_relative(len.i64()?)?;
        self.position = self.position.safe_add(len)?;
        Ok(())
    }
}

/// Skips by reading and discarding
///
/// For sources that can't seek, like pipes.
///
/// ```
/// # use aiffmid_common::read::*;
/// let mut s = Streamed::new(b"ANNO\0\0\0\x01x.mid".as_slice());
/// s.skip(8).unwrap();
/// s.skip(1).unwrap();
/// assert_eq!(&s.read_array::<4>().unwrap(), b".mid");
/// ```
#[derive(Debug)]
pub struct Streamed<R> {
    inner: R,
}

impl<R: Read> Streamed<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for Streamed<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read> Skip for Streamed<R> {
    fn skip(&mut self, len: u64) -> Result<(), ReadError> {
        let available = std::io::copy(&mut self.inner.by_ref().take(len), &mut std::io::sink())?;

        if available != len {
            tracing::debug!("Discarded {available} of {len} bytes before end of stream");
            return Err(ReadError::UnexpectedEof {
                requested: len,
                available,
            });
        }

        Ok(())
    }
}

impl<S: Skip + ?Sized> Skip for &mut S {
    fn skip(&mut self, len: u64) -> Result<(), ReadError> {
        (**self).skip(len)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unexpected end of stream: {requested} bytes requested, {available} available")]
    UnexpectedEof { requested: u64, available: u64 },
}
