//! SASL (Simple Authentication and Security Layer) support for NNTP
//!
//! Implements the framing side of RFC 4643 AUTHINFO SASL: base64 payload
//! encoding and the [`SaslMechanism`] trait the client's challenge loop
//! drives. Only PLAIN ships with the crate; other mechanisms can be
//! supplied by implementing the trait.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{NntpError, Result};

/// Trait for SASL authentication mechanisms
pub trait SaslMechanism: Send {
    /// Name of the SASL mechanism (e.g., "PLAIN")
    fn mechanism_name(&self) -> &str;

    /// Generate the initial client response
    ///
    /// Returns `None` if the mechanism doesn't support initial responses;
    /// returned data is base64-encoded by the framework.
    fn initial_response(&self) -> Result<Option<Vec<u8>>>;

    /// Process a server challenge (383 response, base64-decoded) and
    /// produce the client response, which the framework base64-encodes
    fn process_challenge(&mut self, challenge: &[u8]) -> Result<Vec<u8>>;

    /// Whether the mechanism should only run over an encrypted connection
    fn requires_tls(&self) -> bool {
        false
    }
}

/// Base64-encode data for a SASL exchange
///
/// Empty data is encoded as "=" per RFC 4643.
pub fn encode_sasl_data(data: &[u8]) -> String {
    if data.is_empty() {
        "=".to_string()
    } else {
        STANDARD.encode(data)
    }
}

/// Base64-decode data from a SASL exchange
///
/// "=" is decoded as empty data per RFC 4643.
pub fn decode_sasl_data(encoded: &str) -> Result<Vec<u8>> {
    if encoded == "=" {
        return Ok(Vec::new());
    }

    STANDARD
        .decode(encoded)
        .map_err(|e| NntpError::Sasl(format!("invalid base64 in SASL exchange: {e}")))
}

/// SASL PLAIN mechanism (credentials as `\0username\0password`)
///
/// # Security Warning
///
/// PLAIN sends credentials in cleartext (albeit base64-encoded). It must
/// only be used over TLS-encrypted connections; [`requires_tls`]
/// (SaslMechanism::requires_tls) reports that requirement.
#[derive(Debug, Clone)]
pub struct SaslPlain {
    username: String,
    password: String,
}

impl SaslPlain {
    /// Create a new SASL PLAIN mechanism with the given credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl SaslMechanism for SaslPlain {
    fn mechanism_name(&self) -> &str {
        "PLAIN"
    }

    fn initial_response(&self) -> Result<Option<Vec<u8>>> {
        // \0authzid\0authcid\0password with an empty authorization identity
        let mut response = Vec::new();
        response.push(0);
        response.extend_from_slice(self.username.as_bytes());
        response.push(0);
        response.extend_from_slice(self.password.as_bytes());
        Ok(Some(response))
    }

    fn process_challenge(&mut self, _challenge: &[u8]) -> Result<Vec<u8>> {
        Err(NntpError::Sasl(
            "PLAIN mechanism does not support challenge-response".to_string(),
        ))
    }

    fn requires_tls(&self) -> bool {
        true
    }
}
