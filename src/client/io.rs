//! Command transmission and response dispatch
//!
//! Two operations reach the wire: [`NntpClient::command`] writes a single
//! command line and frames the reply, and `send_article` copies an encoded
//! article straight to the socket (used by POST/IHAVE after the server's
//! go-ahead). Transport and framing failures poison the connection — once
//! response alignment is lost there is no way to resynchronize a shared
//! TCP stream.

use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::time::timeout;
use tracing::{trace, warn};

use super::NntpClient;
use crate::article::Article;
use crate::body::BodyReader;
use crate::commands::{self, Command};
use crate::error::{NntpError, Result};
use crate::framer::{self, ResponseHead};
use crate::response::NntpResponse;

/// Timeout for reading a response head (status line + 220/221 headers)
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(60);

impl NntpClient {
    pub(crate) fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(NntpError::ConnectionClosed)
        } else {
            Ok(())
        }
    }

    /// Write one already-formatted line to the socket
    pub(crate) async fn send_line(&mut self, line: &str) -> Result<()> {
        trace!("C: {}", line.trim_end());
        let stream = self.reader.get_mut();
        let result = async {
            stream.write_all(line.as_bytes()).await?;
            stream.flush().await
        }
        .await;
        if result.is_err() {
            self.closed = true;
        }
        result.map_err(Into::into)
    }

    /// Copy an encoded article straight to the socket
    pub(crate) async fn send_article(&mut self, article: Article) -> Result<()> {
        let result = article.write_to(self.reader.get_mut()).await;
        if result.is_err() {
            self.closed = true;
        }
        result
    }

    /// Read and frame the next response head, owning the result
    ///
    /// Fatal outcomes (I/O failure, malformed status line, timeout) poison
    /// the connection. On success `body_pending` records whether a
    /// multi-line block is now owed on the wire.
    pub(crate) async fn read_head(&mut self, hint: Option<Command>) -> Result<ResponseHead> {
        match timeout(
            RESPONSE_TIMEOUT,
            framer::read_response_head(&mut self.reader, hint),
        )
        .await
        {
            Ok(Ok(head)) => {
                trace!("S: {} {}", head.status, head.status_text);
                self.body_pending = head.multiline;
                Ok(head)
            }
            Ok(Err(err)) => {
                self.closed = true;
                Err(err)
            }
            Err(_) => {
                self.closed = true;
                Err(NntpError::Timeout)
            }
        }
    }

    /// Attach the lazy body stream (if owed) and hand the response out
    pub(crate) fn into_response(&mut self, head: ResponseHead) -> NntpResponse<'_> {
        let multiline = head.multiline;
        let mut response = NntpResponse {
            status: head.status,
            status_text: head.status_text,
            headers: head.headers,
            body: None,
        };
        if multiline {
            response.body = Some(BodyReader::new(self));
        }
        response
    }

    /// Discard a body the caller dropped without draining
    pub(crate) async fn drain_pending_body(&mut self) -> Result<()> {
        if !self.body_pending {
            return Ok(());
        }
        warn!("previous response body left undrained; discarding");
        BodyReader::new(self).discard().await
    }

    /// Send a command line and frame the reply head, owning the result
    pub(crate) async fn dispatch(
        &mut self,
        command: Command,
        args: &[&str],
    ) -> Result<ResponseHead> {
        self.ensure_open()?;
        self.drain_pending_body().await?;
        let line = commands::build_command_line(command, args)?;
        self.send_line(&line).await?;
        self.read_head(Some(command)).await
    }

    /// Issue a command and return the framed response
    ///
    /// The command keyword is written uppercase, arguments whitespace-joined,
    /// the line CRLF-terminated; a line over 512 octets (or an argument over
    /// 497) fails locally without touching the wire. The response's body, if
    /// any, borrows this client until dropped; a body dropped undrained is
    /// discarded before the next command goes out.
    ///
    /// 4xx/5xx statuses are returned as normal responses — the only errors
    /// are transport failures, framing failures, and oversized commands.
    pub async fn command(&mut self, command: Command, args: &[&str]) -> Result<NntpResponse<'_>> {
        let head = self.dispatch(command, args).await?;
        Ok(self.into_response(head))
    }
}
