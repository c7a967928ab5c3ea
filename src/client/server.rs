//! Session-level commands: CAPABILITIES, MODE READER, DATE, HELP

use super::NntpClient;
use crate::commands::Command;
use crate::error::Result;
use crate::response::NntpResponse;

impl NntpClient {
    /// Request the server capability list (RFC 3977 §5.2)
    ///
    /// The 101 response carries a multi-line block, one capability per
    /// line; feed the drained body to
    /// [`Capabilities::parse`](crate::Capabilities::parse).
    ///
    /// ```no_run
    /// # use nntp_client::{Capabilities, ConnectOptions, NntpClient};
    /// # async fn example() -> nntp_client::Result<()> {
    /// # let mut client = NntpClient::connect(ConnectOptions::plain("news.example.com")).await?;
    /// let mut response = client.capabilities().await?;
    /// let caps = Capabilities::parse(&response.read_body_string().await?);
    /// if caps.has("POST") {
    ///     println!("posting supported");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn capabilities(&mut self) -> Result<NntpResponse<'_>> {
        self.command(Command::Capabilities, &[]).await
    }

    /// Switch the server to reader mode (RFC 3977 §5.3)
    pub async fn mode_reader(&mut self) -> Result<NntpResponse<'_>> {
        self.command(Command::ModeReader, &[]).await
    }

    /// Request the server date and time (RFC 3977 §7.1)
    ///
    /// Response: `111 yyyymmddhhmmss`
    pub async fn date(&mut self) -> Result<NntpResponse<'_>> {
        self.command(Command::Date, &[]).await
    }

    /// Request help text (RFC 3977 §7.2); 100 with a multi-line block
    pub async fn help(&mut self) -> Result<NntpResponse<'_>> {
        self.command(Command::Help, &[]).await
    }
}
