//! Article transmission: POST, IHAVE, QUIT

use tracing::debug;

use super::NntpClient;
use crate::article::Article;
use crate::commands::{ensure_message_id, Command};
use crate::error::Result;
use crate::response::{codes, NntpResponse};

impl NntpClient {
    /// Post a new article (RFC 3977 §6.3.1)
    ///
    /// Two-phase exchange: POST is sent first, and the article goes out
    /// only on a 340 go-ahead. Any other intermediate status (440 posting
    /// prohibited, 480 auth required, ...) is returned as-is without
    /// transmitting anything. After a 340 the final status is returned:
    /// 240 accepted, 441 failed.
    ///
    /// The article is dot-stuffed and terminated by the encoder; stream
    /// bodies are pulled chunk by chunk, never buffered whole.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nntp_client::{Article, ConnectOptions, Headers, NntpClient};
    /// # async fn example() -> nntp_client::Result<()> {
    /// # let mut client = NntpClient::connect(ConnectOptions::plain("news.example.com")).await?;
    /// let mut headers = Headers::new();
    /// headers.append("From", "poster@example.com");
    /// headers.append("Newsgroups", "misc.test");
    /// headers.append("Subject", "Test");
    ///
    /// let article = Article::with_headers(headers).body_bytes("Hello.\r\n");
    /// let response = client.post(article).await?;
    /// println!("{} {}", response.status, response.status_text);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn post(&mut self, article: Article) -> Result<NntpResponse<'_>> {
        debug!("Posting article");

        let initial = self.dispatch(Command::Post, &[]).await?;
        if initial.status != codes::SEND_ARTICLE {
            debug!("POST refused with {}", initial.status);
            return Ok(self.into_response(initial));
        }

        self.send_article(article).await?;

        let head = self.read_head(Some(Command::Post)).await?;
        debug!("POST result: {}", head.status);
        Ok(self.into_response(head))
    }

    /// Offer an article for server-to-server transfer (RFC 3977 §6.3.2)
    ///
    /// Two-phase exchange keyed on the message-id: the article goes out
    /// only on a 335 go-ahead. 435 (duplicate) and 436 (retry later) before
    /// the send, or 235/436/437 after it, are all returned as-is.
    pub async fn ihave(&mut self, message_id: &str, article: Article) -> Result<NntpResponse<'_>> {
        let message_id = ensure_message_id(message_id);
        debug!("IHAVE: offering article {}", message_id);

        let initial = self.dispatch(Command::Ihave, &[&message_id]).await?;
        if initial.status != codes::SEND_ARTICLE_TRANSFER {
            debug!("IHAVE refused with {}", initial.status);
            return Ok(self.into_response(initial));
        }

        self.send_article(article).await?;

        let head = self.read_head(Some(Command::Ihave)).await?;
        debug!("IHAVE result: {}", head.status);
        Ok(self.into_response(head))
    }

    /// Close the session gracefully (RFC 3977 §5.4)
    ///
    /// Sends QUIT, reads the 205 acknowledgement, and closes the socket.
    pub async fn quit(&mut self) -> Result<NntpResponse<'_>> {
        debug!("Closing NNTP connection");

        let head = self.dispatch(Command::Quit, &[]).await?;
        self.close().await?;
        Ok(self.into_response(head))
    }
}
