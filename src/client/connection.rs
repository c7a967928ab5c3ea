//! Connection management: TCP/TLS dialing, greeting, close
//!
//! TCP establishment goes through socket2 so TCP_NODELAY and the receive
//! buffer are configured before the stream reaches tokio. TLS uses rustls
//! with the webpki root store, or an accept-anything verifier when the
//! caller opted into insecure mode.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_rustls::rustls::client::danger::{
    HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier,
};
use tokio_rustls::rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use tokio_rustls::rustls::{ClientConfig, DigitallySignedStruct, RootCertStore, SignatureScheme};
use tokio_rustls::TlsConnector;
use tracing::{debug, warn};

use super::NntpClient;
use crate::config::ConnectOptions;
use crate::error::{NntpError, Result};
use crate::reader::{LineReader, NntpIo};

/// TCP connection timeout in seconds
const TCP_CONNECT_TIMEOUT_SECS: u64 = 120;

/// TLS handshake timeout in seconds
const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 60;

/// TCP receive buffer requested for article downloads (4MB)
const RECV_BUFFER_SIZE: usize = 4 * 1024 * 1024;

/// Dangerous certificate verifier that accepts all certificates
///
/// **Security Warning:** This verifier disables all certificate validation,
/// making connections vulnerable to man-in-the-middle attacks. Only used
/// when `allow_insecure_tls` is set.
#[derive(Debug)]
pub(super) struct DangerousAcceptAnyCertificate;

impl ServerCertVerifier for DangerousAcceptAnyCertificate {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> std::result::Result<ServerCertVerified, tokio_rustls::rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, tokio_rustls::rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, tokio_rustls::rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
            SignatureScheme::ED448,
        ]
    }
}

/// Dial the TCP connection with tuned socket options
async fn dial(options: &ConnectOptions) -> Result<TcpStream> {
    use std::net::ToSocketAddrs;

    let addr = format!("{}:{}", options.host, options.port);
    let socket_addr = addr
        .to_socket_addrs()
        .map_err(|e| {
            NntpError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Failed to resolve address: {}", e),
            ))
        })?
        .next()
        .ok_or_else(|| {
            NntpError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "No address resolved",
            ))
        })?;

    use socket2::{Domain, Protocol, Socket, Type};
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP)).map_err(NntpError::Io)?;

    // Low-latency request/response pattern
    socket.set_nodelay(true).map_err(NntpError::Io)?;

    // Large receive buffer so the OS can absorb article bodies on
    // high-latency links; the OS may adjust the requested size
    if let Err(e) = socket.set_recv_buffer_size(RECV_BUFFER_SIZE) {
        warn!(
            "Failed to set receive buffer size to {} bytes: {}",
            RECV_BUFFER_SIZE, e
        );
    }

    // socket2's connect is blocking; run it off the runtime and switch the
    // socket to non-blocking only after the connect succeeds
    let tcp_stream = timeout(
        Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
        tokio::task::spawn_blocking(move || -> std::io::Result<std::net::TcpStream> {
            socket.connect(&socket_addr.into())?;
            socket.set_nonblocking(true)?;
            Ok(socket.into())
        }),
    )
    .await
    .map_err(|_| NntpError::Timeout)?
    .map_err(|e| NntpError::Io(std::io::Error::other(format!("Task join error: {}", e))))?
    .map_err(NntpError::Io)?;

    TcpStream::from_std(tcp_stream).map_err(NntpError::Io)
}

/// Perform the TLS handshake over an established TCP stream
async fn tls_handshake(
    tcp_stream: TcpStream,
    options: &ConnectOptions,
) -> Result<tokio_rustls::client::TlsStream<TcpStream>> {
    use tokio_rustls::rustls::crypto::{ring, CryptoProvider};
    let _ = CryptoProvider::install_default(ring::default_provider());

    let tls_config = if options.allow_insecure_tls {
        warn!("TLS certificate validation disabled - connection vulnerable to MITM attacks");
        ClientConfig::builder()
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(DangerousAcceptAnyCertificate))
            .with_no_client_auth()
    } else {
        let mut root_store = RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth()
    };

    let connector = TlsConnector::from(Arc::new(tls_config));
    let server_name = ServerName::try_from(options.host.as_str())
        .map_err(|e| NntpError::Tls(format!("Invalid domain: {}", e)))?
        .to_owned();

    timeout(
        Duration::from_secs(TLS_HANDSHAKE_TIMEOUT_SECS),
        connector.connect(server_name, tcp_stream),
    )
    .await
    .map_err(|_| NntpError::Timeout)?
    .map_err(|e| NntpError::Tls(format!("TLS handshake failed: {}", e)))
}

impl NntpClient {
    /// Connect to an NNTP server and read the greeting
    ///
    /// The greeting is retained and available via
    /// [`greeting`](Self::greeting); 400/502 refusals are data, so the
    /// connection itself still succeeds and the caller inspects the status.
    /// Authentication state starts cleared — connect again after a drop and
    /// the new client must re-authenticate.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::Io`] - TCP connection fails (DNS, network unreachable)
    /// - [`NntpError::Tls`] - TLS handshake fails
    /// - [`NntpError::Timeout`] - Connection or handshake times out
    /// - [`NntpError::InvalidResponse`] - The greeting line is malformed
    pub async fn connect(options: ConnectOptions) -> Result<Self> {
        debug!("Connecting to NNTP server {}:{}", options.host, options.port);

        let tcp_stream = dial(&options).await?;
        let stream: Box<dyn NntpIo> = if options.tls {
            Box::new(tls_handshake(tcp_stream, &options).await?)
        } else {
            Box::new(tcp_stream)
        };

        let mut client = Self {
            reader: LineReader::new(stream),
            authenticated: false,
            body_pending: false,
            closed: false,
            options,
            greeting_status: 0,
            greeting_text: String::new(),
            current_group: None,
        };

        let greeting = client.read_head(None).await?;
        debug!("Server greeting: {} {}", greeting.status, greeting.status_text);
        client.greeting_status = greeting.status;
        client.greeting_text = greeting.status_text;

        Ok(client)
    }

    /// Close the connection. Idempotent; errors from the socket shutdown
    /// are logged and swallowed.
    pub async fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        if let Err(e) = self.reader.get_mut().shutdown().await {
            debug!("Socket shutdown failed: {}", e);
        }
        Ok(())
    }
}
