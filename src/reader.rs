//! Buffered line-oriented reader over the server connection
//!
//! NNTP is a line protocol; everything the framer and body stream do is
//! built on three operations: read one line (up to and including LF), peek
//! at upcoming bytes without consuming them, and read a line decoded as
//! text. The write side of the stream is exposed for command transmission.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::error::Result;

/// Marker trait unifying the plain-TCP and TLS stream types behind one
/// object-safe interface.
pub(crate) trait NntpIo: AsyncRead + AsyncWrite + Send + Unpin {}

impl<T> NntpIo for T where T: AsyncRead + AsyncWrite + Send + Unpin {}

/// Initial buffer capacity; typical NNTP lines are well under 512 octets
const INITIAL_CAPACITY: usize = 4 * 1024;

/// Per-read chunk size from the underlying stream
const READ_CHUNK: usize = 4 * 1024;

/// Consumed-prefix size beyond which the buffer is compacted
const COMPACT_THRESHOLD: usize = 16 * 1024;

/// Buffered reader with single-line reads and bounded look-ahead
///
/// The buffer grows to accommodate arbitrarily long lines; no data is lost
/// on lines longer than the initial capacity.
pub(crate) struct LineReader {
    stream: Box<dyn NntpIo>,
    buf: Vec<u8>,
    pos: usize,
}

impl LineReader {
    pub(crate) fn new(stream: Box<dyn NntpIo>) -> Self {
        Self {
            stream,
            buf: Vec::with_capacity(INITIAL_CAPACITY),
            pos: 0,
        }
    }

    /// Write access to the underlying stream for command transmission
    pub(crate) fn get_mut(&mut self) -> &mut Box<dyn NntpIo> {
        &mut self.stream
    }

    /// Read one chunk from the stream into the buffer; 0 means EOF
    async fn fill(&mut self) -> Result<usize> {
        let mut chunk = [0u8; READ_CHUNK];
        let n = self.stream.read(&mut chunk).await?;
        self.buf.extend_from_slice(&chunk[..n]);
        Ok(n)
    }

    fn compact(&mut self) {
        if self.pos == self.buf.len() {
            self.buf.clear();
            self.pos = 0;
        } else if self.pos >= COMPACT_THRESHOLD {
            self.buf.drain(..self.pos);
            self.pos = 0;
        }
    }

    /// Read bytes up to and including the next LF
    ///
    /// At end-of-stream the unterminated remainder is returned; an empty
    /// vector means the stream ended cleanly on a line boundary.
    pub(crate) async fn read_line(&mut self) -> Result<Vec<u8>> {
        loop {
            if let Some(idx) = self.buf[self.pos..].iter().position(|&b| b == b'\n') {
                let end = self.pos + idx + 1;
                let line = self.buf[self.pos..end].to_vec();
                self.pos = end;
                self.compact();
                return Ok(line);
            }
            if self.fill().await? == 0 {
                let line = self.buf[self.pos..].to_vec();
                self.pos = self.buf.len();
                self.compact();
                return Ok(line);
            }
        }
    }

    /// Return up to `n` upcoming bytes without consuming them
    ///
    /// Fewer than `n` bytes are returned only at end-of-stream.
    pub(crate) async fn peek(&mut self, n: usize) -> Result<&[u8]> {
        while self.buf.len() - self.pos < n {
            if self.fill().await? == 0 {
                break;
            }
        }
        let end = (self.pos + n).min(self.buf.len());
        Ok(&self.buf[self.pos..end])
    }

    /// Read one line decoded as text (lossy UTF-8), line ending included
    pub(crate) async fn read_string(&mut self) -> Result<String> {
        let line = self.read_line().await?;
        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}
