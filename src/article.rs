//! Article representation and wire encoding (RFC 3977 §3.1.1, RFC 5536)
//!
//! An article is an ordered header multimap plus a body, which is either a
//! finite byte sequence or a lazy byte stream. [`Article::write_to`]
//! produces the wire form sent after a 340 (POST) or 335 (IHAVE) response:
//! headers, a blank separator line, the dot-stuffed body, and the
//! terminator line.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::Result;

/// Ordered multimap of article or response headers
///
/// Insertion order is preserved and repeated names are allowed, matching
/// how servers emit them. Lookups are case-insensitive; names keep the
/// capitalization they were read with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Create an empty header map
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header, preserving insertion order
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value for a header name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// All values for a header name, in insertion order
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether a header is present (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over all (name, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of header entries (repeats counted)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.append(name, value);
        }
        headers
    }
}

/// Article body: a finite byte sequence or a lazy byte stream
pub enum Body {
    /// No body
    Empty,
    /// Complete in-memory body
    Bytes(Vec<u8>),
    /// Lazily pulled body; read to EOF during transmission
    Stream(Box<dyn AsyncRead + Send + Unpin>),
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Empty => f.write_str("Empty"),
            Body::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Body::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// An article to transmit via POST or IHAVE
///
/// # Example
///
/// ```
/// use nntp_client::{Article, Headers};
///
/// let mut headers = Headers::new();
/// headers.append("From", "poster@example.com");
/// headers.append("Newsgroups", "misc.test");
/// headers.append("Subject", "Test");
///
/// let article = Article::with_headers(headers).body_bytes("Hello.\r\n");
/// ```
#[derive(Debug)]
pub struct Article {
    /// Ordered article headers
    pub headers: Headers,
    /// Advisory article number; never transmitted
    pub number: Option<u64>,
    /// Article body
    pub body: Body,
}

impl Article {
    /// Create an article with no headers and no body
    pub fn new() -> Self {
        Self {
            headers: Headers::new(),
            number: None,
            body: Body::Empty,
        }
    }

    /// Create an article with the given headers and no body
    pub fn with_headers(headers: Headers) -> Self {
        Self {
            headers,
            number: None,
            body: Body::Empty,
        }
    }

    /// Set a complete in-memory body
    pub fn body_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.body = Body::Bytes(bytes.into());
        self
    }

    /// Set a streaming body, pulled chunk by chunk during transmission
    pub fn body_stream(mut self, reader: impl AsyncRead + Send + Unpin + 'static) -> Self {
        self.body = Body::Stream(Box::new(reader));
        self
    }

    /// Write the wire form of this article, dot-stuffed and terminated
    ///
    /// Emission order: each header as `Name: Value\r\n` in insertion order,
    /// one blank line if both headers and a body are present, the body with
    /// dot-stuffing applied on the fly, then `.\r\n` (preceded by `\r\n`
    /// when the body does not already end on a line boundary). Chunk
    /// boundaries of stream bodies never corrupt stuffing; the encoder
    /// carries its line-start state across pulls.
    pub async fn write_to<W>(mut self, writer: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut out = Vec::with_capacity(1024);
        for (name, value) in self.headers.iter() {
            out.extend_from_slice(name.as_bytes());
            out.extend_from_slice(b": ");
            out.extend_from_slice(value.as_bytes());
            out.extend_from_slice(b"\r\n");
        }

        let have_headers = !self.headers.is_empty();
        let mut stuffer = DotStuffer::new();

        match &mut self.body {
            Body::Empty => {}
            Body::Bytes(bytes) => {
                if have_headers && !bytes.is_empty() {
                    out.extend_from_slice(b"\r\n");
                }
                stuffer.stuff_into(bytes, &mut out);
            }
            Body::Stream(reader) => {
                writer.write_all(&out).await?;
                out.clear();

                let mut separator_sent = !have_headers;
                let mut chunk = [0u8; 8192];
                loop {
                    let n = reader.read(&mut chunk).await?;
                    if n == 0 {
                        break;
                    }
                    if !separator_sent {
                        writer.write_all(b"\r\n").await?;
                        separator_sent = true;
                    }
                    out.clear();
                    stuffer.stuff_into(&chunk[..n], &mut out);
                    writer.write_all(&out).await?;
                }
                out.clear();
            }
        }

        if stuffer.at_line_start() {
            out.extend_from_slice(b".\r\n");
        } else {
            out.extend_from_slice(b"\r\n.\r\n");
        }
        writer.write_all(&out).await?;
        writer.flush().await?;
        Ok(())
    }
}

impl Default for Article {
    fn default() -> Self {
        Self::new()
    }
}

/// Incremental dot-stuffing state
///
/// Tracks whether the next input byte begins a line, surviving chunk
/// boundaries; the start of the body counts as a line start.
struct DotStuffer {
    at_line_start: bool,
}

impl DotStuffer {
    fn new() -> Self {
        Self {
            at_line_start: true,
        }
    }

    /// Whether the output so far ends on a line boundary
    fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Append `chunk` to `out`, doubling any line-leading dot
    fn stuff_into(&mut self, chunk: &[u8], out: &mut Vec<u8>) {
        for &byte in chunk {
            if self.at_line_start && byte == b'.' {
                out.push(b'.');
            }
            out.push(byte);
            self.at_line_start = byte == b'\n';
        }
    }
}

/// Dot-stuff a complete body (RFC 3977 §3.1.1), terminator not included
pub fn stuff(body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + 8);
    DotStuffer::new().stuff_into(body, &mut out);
    out
}

/// Undo dot-stuffing from a received block (terminator already stripped)
pub fn unstuff(block: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(block.len());
    let mut at_line_start = true;
    for &byte in block {
        if at_line_start && byte == b'.' {
            // Drop the stuffed dot; the rest of the line follows
            at_line_start = false;
            continue;
        }
        out.push(byte);
        at_line_start = byte == b'\n';
    }
    out
}
