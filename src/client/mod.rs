//! NNTP client implementation
//!
//! One [`NntpClient`] exclusively owns one TCP (or TLS) connection. NNTP
//! requires strict request/response alternation over that connection, which
//! Rust expresses directly: every command takes `&mut self`, and a response
//! body borrows the client until it is dropped, so only one exchange can be
//! in flight. Callers needing concurrent access wrap the client in their
//! own mutex or request queue.

mod articles;
mod auth;
mod connection;
mod group_ops;
mod io;
mod listing;
mod metadata;
mod posting;
mod server;

use tracing::debug;

use crate::config::ConnectOptions;
use crate::reader::LineReader;
use crate::response::{codes, NntpResponse};

/// Async NNTP client (RFC 3977 + RFC 4643)
///
/// # Example
///
/// ```no_run
/// use nntp_client::{ConnectOptions, NntpClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let options = ConnectOptions::tls("news.example.com");
/// let mut client = NntpClient::connect(options).await?;
/// client.authinfo("user", Some("pass")).await?;
///
/// let response = client.group("misc.test").await?;
/// println!("{} {}", response.status, response.status_text);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct NntpClient {
    /// Buffered reader over the connection; writes go through its stream
    pub(crate) reader: LineReader,
    /// True only after a 281 response to an AUTHINFO exchange
    pub(crate) authenticated: bool,
    /// A multi-line body is still owed on the wire
    pub(crate) body_pending: bool,
    /// Connection closed or poisoned; no further commands accepted
    pub(crate) closed: bool,
    options: ConnectOptions,
    greeting_status: u16,
    greeting_text: String,
    current_group: Option<String>,
}

impl NntpClient {
    /// The server greeting read at connect time
    ///
    /// Status 200 means posting is allowed, 201 read-only; 400 and 502 mean
    /// the server refused service (returned as data, not an error).
    pub fn greeting(&self) -> NntpResponse<'static> {
        NntpResponse::single_line(self.greeting_status, self.greeting_text.clone())
    }

    /// Whether the greeting advertised posting permission (status 200)
    pub fn posting_allowed(&self) -> bool {
        self.greeting_status == codes::READY_POSTING_ALLOWED
    }

    /// Check if the client is currently authenticated
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Whether the connection has been closed or poisoned
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The newsgroup selected by the last successful GROUP command, if any
    ///
    /// The selected group is server-side state; this mirrors it for
    /// convenience only.
    pub fn current_group(&self) -> Option<&str> {
        self.current_group.as_deref()
    }

    /// The options this client was connected with
    pub fn options(&self) -> &ConnectOptions {
        &self.options
    }

    #[cfg(test)]
    pub(crate) fn test_with_stream(stream: Box<dyn crate::reader::NntpIo>) -> Self {
        Self {
            reader: LineReader::new(stream),
            authenticated: false,
            body_pending: false,
            closed: false,
            options: ConnectOptions::plain("test.invalid"),
            greeting_status: codes::READY_POSTING_ALLOWED,
            greeting_text: "test server ready".to_string(),
            current_group: None,
        }
    }
}

impl Drop for NntpClient {
    fn drop(&mut self) {
        debug!("NntpClient dropped");
    }
}
