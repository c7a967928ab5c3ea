//! Article retrieval: ARTICLE, HEAD, BODY, STAT (RFC 3977 §6.2)

use tracing::trace;

use super::NntpClient;
use crate::commands::{ArticleRef, Command};
use crate::error::Result;
use crate::response::NntpResponse;

impl NntpClient {
    async fn article_command(
        &mut self,
        command: Command,
        target: ArticleRef<'_>,
    ) -> Result<NntpResponse<'_>> {
        trace!("{} {:?}", command, target);
        let arg = target.to_arg();
        let args: Vec<&str> = arg.as_deref().into_iter().collect();
        let head = self.dispatch(command, &args).await?;
        Ok(self.into_response(head))
    }

    /// Fetch a full article (RFC 3977 §6.2.1)
    ///
    /// On 220 the response carries the parsed article headers and the body
    /// as a lazy stream:
    ///
    /// ```no_run
    /// # use nntp_client::{commands::ArticleRef, ConnectOptions, NntpClient};
    /// # async fn example() -> nntp_client::Result<()> {
    /// # let mut client = NntpClient::connect(ConnectOptions::plain("news.example.com")).await?;
    /// let mut response = client.article(ArticleRef::MessageId("x@example.com")).await?;
    /// if response.status == 220 {
    ///     println!("From: {:?}", response.headers.get("From"));
    ///     let body = response.read_body().await?;
    ///     println!("{} body bytes", body.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn article(&mut self, target: ArticleRef<'_>) -> Result<NntpResponse<'_>> {
        self.article_command(Command::Article, target).await
    }

    /// Fetch article headers only (RFC 3977 §6.2.2); 221 with the header
    /// region parsed into `response.headers`
    pub async fn head(&mut self, target: ArticleRef<'_>) -> Result<NntpResponse<'_>> {
        self.article_command(Command::Head, target).await
    }

    /// Fetch the article body only (RFC 3977 §6.2.3); 222 with a lazy body
    pub async fn body(&mut self, target: ArticleRef<'_>) -> Result<NntpResponse<'_>> {
        self.article_command(Command::Body, target).await
    }

    /// Check article existence without retrieving content (RFC 3977 §6.2.4)
    ///
    /// 223 carries "number message-id" in the status text.
    pub async fn stat(&mut self, target: ArticleRef<'_>) -> Result<NntpResponse<'_>> {
        self.article_command(Command::Stat, target).await
    }
}
