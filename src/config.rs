//! NNTP connection options

use tracing::level_filters::LevelFilter;

/// Log verbosity for a connection
///
/// The crate emits all diagnostics through [`tracing`]; there is no global
/// logger registry. Callers map this level onto their subscriber with
/// [`LogLevel::filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum LogLevel {
    /// Per-line wire traces and internal state changes
    Debug,
    /// Connection lifecycle and command summaries
    #[default]
    Info,
    /// Defensive-parsing fallbacks and degraded behavior
    Warning,
    /// Transport and protocol failures only
    Error,
}

impl LogLevel {
    /// Convert to a `tracing` level filter for subscriber configuration
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::TRACE,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// NNTP connection options
///
/// Immutable for the lifetime of a client. Credentials are not part of the
/// options; pass them to [`authinfo`](crate::NntpClient::authinfo) after
/// connecting.
///
/// # Example
///
/// ```
/// use nntp_client::ConnectOptions;
///
/// // Recommended: use the constructor methods
/// let options = ConnectOptions::tls("news.example.com");
///
/// // Or construct manually
/// let options = ConnectOptions {
///     host: "news.example.com".to_string(),
///     port: 563,
///     tls: true,
///     allow_insecure_tls: false,
///     log_level: Default::default(),
/// };
/// ```
#[must_use]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectOptions {
    /// Server hostname (e.g., "news.example.com")
    pub host: String,

    /// Server port (119 for plain, 563 for TLS)
    pub port: u16,

    /// Use TLS encryption
    #[cfg_attr(feature = "serde", serde(default))]
    pub tls: bool,

    /// Allow insecure TLS connections (self-signed or expired certificates)
    ///
    /// **Security Warning:** Setting this to `true` disables certificate
    /// validation, making your connection vulnerable to man-in-the-middle
    /// attacks. Only use this for testing or with servers you trust on a
    /// secure network.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow_insecure_tls: bool,

    /// Log verbosity for this connection
    #[cfg_attr(feature = "serde", serde(default))]
    pub log_level: LogLevel,
}

/// Standard NNTP port for plain connections
pub const PLAIN_PORT: u16 = 119;

/// Standard NNTP port for TLS connections
pub const TLS_PORT: u16 = 563;

impl ConnectOptions {
    /// Create options with an explicit host, port, and TLS flag
    pub fn new(host: impl Into<String>, port: u16, tls: bool) -> Self {
        Self {
            host: host.into(),
            port,
            tls,
            allow_insecure_tls: false,
            log_level: LogLevel::default(),
        }
    }

    /// Options for a plain connection on the standard port (119)
    ///
    /// **Warning:** Plain connections transmit credentials in clear text.
    /// Use TLS connections whenever possible.
    pub fn plain(host: impl Into<String>) -> Self {
        Self::new(host, PLAIN_PORT, false)
    }

    /// Options for a TLS connection on the standard secure port (563)
    pub fn tls(host: impl Into<String>) -> Self {
        Self::new(host, TLS_PORT, true)
    }

    /// Options for a TLS connection that accepts self-signed certificates
    ///
    /// **Security Warning:** This disables certificate validation. Only use
    /// it for testing or with servers you trust on a secure network.
    pub fn tls_insecure(host: impl Into<String>) -> Self {
        let mut options = Self::tls(host);
        options.allow_insecure_tls = true;
        options
    }

    /// Set the log verbosity
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}
