//! Article metadata retrieval: OVER and HDR
//!
//! These commands fetch per-article metadata without downloading content,
//! which is how newsreaders build index views cheaply.

use tracing::trace;

use super::NntpClient;
use crate::commands::{Command, QueryTarget};
use crate::error::Result;
use crate::response::NntpResponse;

impl NntpClient {
    /// Fetch overview data (RFC 3977 §8.3)
    ///
    /// 224 carries one tab-separated line per article; parse each with
    /// [`parse_over_line`](crate::commands::parse_over_line).
    ///
    /// ```no_run
    /// # use nntp_client::{commands::{parse_over_line, ArticleRange, QueryTarget}, ConnectOptions, NntpClient};
    /// # async fn example() -> nntp_client::Result<()> {
    /// # let mut client = NntpClient::connect(ConnectOptions::plain("news.example.com")).await?;
    /// client.group("misc.test").await?;
    /// let mut response = client
    ///     .over(QueryTarget::Range(ArticleRange::Bounded(1, 100)))
    ///     .await?;
    /// let block = response.read_body_string().await?;
    /// for line in block.lines() {
    ///     if let Ok(entry) = parse_over_line(line) {
    ///         println!("{}: {}", entry.article_number, entry.subject);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn over(&mut self, target: QueryTarget<'_>) -> Result<NntpResponse<'_>> {
        trace!("OVER {:?}", target);
        let arg = target.to_arg();
        let args: Vec<&str> = arg.as_deref().into_iter().collect();
        let head = self.dispatch(Command::Over, &args).await?;
        Ok(self.into_response(head))
    }

    /// Fetch one header field's values (RFC 3977 §8.5)
    ///
    /// 225 carries one "number value" line per article; parse each with
    /// [`parse_hdr_line`](crate::commands::parse_hdr_line).
    pub async fn hdr(&mut self, field: &str, target: QueryTarget<'_>) -> Result<NntpResponse<'_>> {
        trace!("HDR {} {:?}", field, target);
        let arg = target.to_arg();
        let mut args: Vec<&str> = vec![field];
        if let Some(ref arg) = arg {
            args.push(arg);
        }
        let head = self.dispatch(Command::Hdr, &args).await?;
        Ok(self.into_response(head))
    }
}
