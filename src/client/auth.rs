//! AUTHINFO authentication (RFC 4643): USER/PASS and SASL

use tracing::{debug, warn};

use super::NntpClient;
use crate::commands::Command;
use crate::error::Result;
use crate::response::{codes, NntpResponse};
use crate::sasl::{decode_sasl_data, encode_sasl_data, SaslMechanism};

impl NntpClient {
    /// Authenticate with AUTHINFO USER and, if the server asks, AUTHINFO PASS
    ///
    /// State machine (RFC 4643 §2.3):
    /// - 281 after USER: done, no password needed
    /// - 381 after USER: PASS is sent (if a password was supplied), then
    ///   281 marks success and 481/482 failure
    /// - 481 (rejected) and 483 (TLS required) after USER: returned as-is
    ///
    /// All outcomes are reported through the returned response's status;
    /// only transport problems raise. Once authenticated, further calls
    /// send nothing and return a synthesized 281. A fresh connection always
    /// starts unauthenticated.
    pub async fn authinfo(
        &mut self,
        username: &str,
        password: Option<&str>,
    ) -> Result<NntpResponse<'_>> {
        if self.authenticated {
            debug!("Already authenticated; AUTHINFO suppressed");
            return Ok(NntpResponse::single_line(
                codes::AUTH_ACCEPTED,
                "Already authenticated",
            ));
        }

        debug!("Authenticating as {}", username);

        let head = self.dispatch(Command::AuthinfoUser, &[username]).await?;
        match head.status {
            codes::AUTH_ACCEPTED => {
                self.authenticated = true;
                debug!("Authentication successful");
                Ok(self.into_response(head))
            }
            codes::AUTH_CONTINUE => {
                let Some(password) = password else {
                    warn!("Server requested a password but none was supplied");
                    return Ok(self.into_response(head));
                };

                let head = self.dispatch(Command::AuthinfoPass, &[password]).await?;
                if head.status == codes::AUTH_ACCEPTED {
                    self.authenticated = true;
                    debug!("Authentication successful");
                }
                Ok(self.into_response(head))
            }
            _ => Ok(self.into_response(head)),
        }
    }

    /// Authenticate via AUTHINFO SASL (RFC 4643 §2.4)
    ///
    /// Sends the mechanism name with its base64 initial response if it has
    /// one, then answers 383 challenges until the server concludes with a
    /// final status. 281 marks success; everything else is returned as data.
    pub async fn authinfo_sasl(
        &mut self,
        mut mechanism: impl SaslMechanism,
    ) -> Result<NntpResponse<'_>> {
        if self.authenticated {
            debug!("Already authenticated; AUTHINFO SASL suppressed");
            return Ok(NntpResponse::single_line(
                codes::AUTH_ACCEPTED,
                "Already authenticated",
            ));
        }

        debug!(
            "Authenticating with SASL mechanism: {}",
            mechanism.mechanism_name()
        );

        if mechanism.requires_tls() && !self.options().tls {
            warn!(
                "SASL mechanism {} should only be used over TLS",
                mechanism.mechanism_name()
            );
        }

        let initial = mechanism.initial_response()?;
        let mut head = match initial {
            Some(data) => {
                let encoded = encode_sasl_data(&data);
                let name = mechanism.mechanism_name().to_string();
                self.dispatch(Command::AuthinfoSasl, &[name.as_str(), encoded.as_str()])
                    .await?
            }
            None => {
                let name = mechanism.mechanism_name().to_string();
                self.dispatch(Command::AuthinfoSasl, &[name.as_str()]).await?
            }
        };

        while head.status == codes::SASL_CONTINUE {
            debug!("SASL challenge received");
            let challenge = decode_sasl_data(head.status_text.trim())?;
            let client_response = mechanism.process_challenge(&challenge)?;
            let encoded = encode_sasl_data(&client_response);

            // Challenge responses are bare base64 lines, not commands
            self.send_line(&format!("{encoded}\r\n")).await?;
            head = self.read_head(Some(Command::AuthinfoSasl)).await?;
        }

        if head.status == codes::AUTH_ACCEPTED {
            self.authenticated = true;
            debug!("SASL authentication successful");
        }
        Ok(self.into_response(head))
    }
}
