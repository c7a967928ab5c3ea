//! NNTP error types

use thiserror::Error;

/// NNTP protocol and connection errors
///
/// NNTP status codes in the 4xx/5xx ranges are *not* errors at this layer;
/// they are returned inside [`NntpResponse`](crate::NntpResponse) for the
/// caller to interpret. Only transport failures, malformed protocol data,
/// and local misuse (oversized commands) raise.
#[derive(Error, Debug)]
pub enum NntpError {
    /// IO error during network operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TLS error during secure connection
    #[error("TLS error: {0}")]
    Tls(String),

    /// Connection timeout
    #[error("Connection timeout")]
    Timeout,

    /// Connection closed unexpectedly
    #[error("Connection closed")]
    ConnectionClosed,

    /// Invalid response from server (malformed status line or header region)
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Stream ended before the multi-line terminator arrived
    #[error("Unexpected EOF inside multi-line data block")]
    UnexpectedEof,

    /// Command line would exceed the 512-octet limit (RFC 3977 Section 3.1)
    #[error("Command line is {octets} octets, limit is 512")]
    CommandTooLong {
        /// Octet count of the offending line, CRLF included
        octets: usize,
    },

    /// A single command argument exceeds the 497-octet limit
    #[error("Command argument is {octets} octets, limit is 497")]
    ArgumentTooLong {
        /// Octet count of the offending argument
        octets: usize,
    },

    /// SASL exchange failed locally (bad base64, mechanism misuse)
    #[error("SASL error: {0}")]
    Sasl(String),
}

/// Result type alias using NntpError
pub type Result<T> = std::result::Result<T, NntpError>;
