//! Lazy multi-line data block stream (RFC 3977 §3.1.1)
//!
//! A [`BodyReader`] pulls one wire line per call, undoes dot-stuffing, and
//! stops exactly at the `.<CRLF>` terminator. Nothing is read ahead of
//! caller demand — the same TCP connection carries the next response, so
//! the stream must not consume bytes that belong to it. While a
//! `BodyReader` is alive it mutably borrows the client; no command can be
//! issued until it is dropped, and the client auto-drains any body that was
//! dropped before reaching the terminator.

use std::time::Duration;

use tokio::time::timeout;

use crate::client::NntpClient;
use crate::error::{NntpError, Result};

/// Timeout for a single body line pull; large bodies from slow peers renew
/// it on every line
const BODY_PULL_TIMEOUT: Duration = Duration::from_secs(180);

/// Lazy byte stream over one response's multi-line data block
pub struct BodyReader<'a> {
    client: &'a mut NntpClient,
    done: bool,
}

impl<'a> BodyReader<'a> {
    pub(crate) fn new(client: &'a mut NntpClient) -> Self {
        Self {
            client,
            done: false,
        }
    }

    /// Pull the next content line, dot-stuffing undone, CRLF included
    ///
    /// Returns `None` once the terminator line has been consumed. The
    /// terminator itself is never emitted, and a wire line of `..X` is
    /// emitted as `.X`.
    pub async fn next_line(&mut self) -> Result<Option<Vec<u8>>> {
        if self.done {
            return Ok(None);
        }

        let line = match timeout(BODY_PULL_TIMEOUT, self.client.reader.read_line()).await {
            Ok(result) => result?,
            Err(_) => {
                self.client.closed = true;
                return Err(NntpError::Timeout);
            }
        };

        if line.is_empty() {
            // Terminator never arrived; response alignment is lost
            self.client.closed = true;
            return Err(NntpError::UnexpectedEof);
        }

        // Some broken servers terminate with a bare LF
        if line == b".\r\n" || line == b".\n" {
            self.done = true;
            self.client.body_pending = false;
            return Ok(None);
        }

        if line.first() == Some(&b'.') {
            return Ok(Some(line[1..].to_vec()));
        }
        Ok(Some(line))
    }

    /// Drain the remainder of the block into memory
    pub async fn read_to_end(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(4 * 1024);
        while let Some(line) = self.next_line().await? {
            data.extend_from_slice(&line);
        }
        Ok(data)
    }

    /// Drain the remainder of the block decoded as text (lossy UTF-8)
    pub async fn read_to_string(&mut self) -> Result<String> {
        let data = self.read_to_end().await?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }

    /// Discard the remainder of the block without keeping it
    pub async fn discard(&mut self) -> Result<()> {
        while self.next_line().await?.is_some() {}
        Ok(())
    }

    /// Whether the terminator has been consumed
    pub fn is_drained(&self) -> bool {
        self.done
    }
}
