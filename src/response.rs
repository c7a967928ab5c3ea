//! NNTP response type and status codes

use crate::article::Headers;
use crate::body::BodyReader;
use crate::error::Result;

/// A framed NNTP response
///
/// The status code is preserved verbatim (1xx codes are meaningful in NNTP).
/// `headers` is populated only for 220 (ARTICLE) and 221 (HEAD) responses;
/// `body` is present exactly when the status carries a multi-line data
/// block, and borrows the connection's read side until drained. At most one
/// response is live per client at a time — the borrow checker enforces it.
///
/// 4xx/5xx statuses are data, not errors: the server said no, and this type
/// carries its answer.
pub struct NntpResponse<'a> {
    /// 3-digit NNTP status code, 100–599
    pub status: u16,
    /// Status line remainder after the code, CRLF stripped
    pub status_text: String,
    /// Article headers (220/221 responses only; empty otherwise)
    pub headers: Headers,
    pub(crate) body: Option<BodyReader<'a>>,
}

impl<'a> NntpResponse<'a> {
    /// A bodiless response (greetings, synthesized statuses)
    pub(crate) fn single_line(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Check if the response indicates success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response indicates continuation (3xx)
    pub fn is_continuation(&self) -> bool {
        (300..400).contains(&self.status)
    }

    /// Check if the response indicates an error (4xx or 5xx)
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// Whether this response carries a multi-line data block
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// The lazy body stream, for callers draining at their own pace
    pub fn body(&mut self) -> Option<&mut BodyReader<'a>> {
        self.body.as_mut()
    }

    /// Drain the whole body into memory (empty for single-line responses)
    ///
    /// Lines keep their CRLFs; dot-stuffing is already undone and the
    /// terminator is never included.
    pub async fn read_body(&mut self) -> Result<Vec<u8>> {
        match self.body.as_mut() {
            Some(body) => body.read_to_end().await,
            None => Ok(Vec::new()),
        }
    }

    /// Drain the whole body decoded as text (lossy UTF-8)
    ///
    /// The final content line keeps its CRLF; strip one trailing CRLF if a
    /// clean payload is wanted.
    pub async fn read_body_string(&mut self) -> Result<String> {
        let bytes = self.read_body().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Discard any remaining body bytes up to the terminator
    pub async fn discard_body(&mut self) -> Result<()> {
        match self.body.as_mut() {
            Some(body) => body.discard().await,
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for NntpResponse<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NntpResponse")
            .field("status", &self.status)
            .field("status_text", &self.status_text)
            .field("headers", &self.headers)
            .field("body", &self.body.is_some())
            .finish()
    }
}

/// NNTP status codes (RFC 3977 + RFC 4643)
#[allow(dead_code)]
pub mod codes {
    // 1xx - Informational
    /// Help text follows
    pub const HELP_TEXT_FOLLOWS: u16 = 100;
    /// Capability list follows (RFC 3977 Section 5.2)
    pub const CAPABILITY_LIST: u16 = 101;
    /// Server date/time (RFC 3977 Section 7.1)
    pub const SERVER_DATE: u16 = 111;

    // 2xx - Success
    /// Server ready, posting allowed
    pub const READY_POSTING_ALLOWED: u16 = 200;
    /// Server ready, no posting
    pub const READY_NO_POSTING: u16 = 201;
    /// Closing connection
    pub const CLOSING_CONNECTION: u16 = 205;
    /// Group selected
    pub const GROUP_SELECTED: u16 = 211;
    /// List of newsgroups follows (RFC 3977 Section 7.6)
    pub const LIST_INFORMATION_FOLLOWS: u16 = 215;
    /// Article follows
    pub const ARTICLE_FOLLOWS: u16 = 220;
    /// Head follows
    pub const HEAD_FOLLOWS: u16 = 221;
    /// Body follows
    pub const BODY_FOLLOWS: u16 = 222;
    /// Article exists (STAT/LAST/NEXT)
    pub const ARTICLE_STAT: u16 = 223;
    /// Overview information follows
    pub const OVERVIEW_INFO_FOLLOWS: u16 = 224;
    /// Headers follow
    pub const HEADERS_FOLLOW: u16 = 225;
    /// List of new articles follows (RFC 3977 Section 7.4)
    pub const NEW_ARTICLE_LIST_FOLLOWS: u16 = 230;
    /// List of new newsgroups follows (RFC 3977 Section 7.3)
    pub const NEW_NEWSGROUPS_FOLLOW: u16 = 231;
    /// Article transferred OK (RFC 3977 Section 6.3.2)
    pub const ARTICLE_TRANSFERRED: u16 = 235;
    /// Article posted successfully (RFC 3977 Section 6.3.1)
    pub const ARTICLE_POSTED: u16 = 240;
    /// Authentication accepted
    pub const AUTH_ACCEPTED: u16 = 281;

    // 3xx - Continuation
    /// Send article to be transferred (RFC 3977 Section 6.3.2)
    pub const SEND_ARTICLE_TRANSFER: u16 = 335;
    /// Send article to be posted
    pub const SEND_ARTICLE: u16 = 340;
    /// Continue with authentication
    pub const AUTH_CONTINUE: u16 = 381;
    /// SASL challenge (RFC 4643 Section 2.4)
    pub const SASL_CONTINUE: u16 = 383;

    // 4xx - Temporary errors
    /// Service temporarily unavailable
    pub const SERVICE_UNAVAILABLE: u16 = 400;
    /// No such newsgroup
    pub const NO_SUCH_GROUP: u16 = 411;
    /// No newsgroup selected
    pub const NO_GROUP_SELECTED: u16 = 412;
    /// No current article
    pub const NO_CURRENT_ARTICLE: u16 = 420;
    /// No next article
    pub const NO_NEXT_ARTICLE: u16 = 421;
    /// No previous article
    pub const NO_PREV_ARTICLE: u16 = 422;
    /// No article with that number
    pub const NO_SUCH_ARTICLE_NUMBER: u16 = 423;
    /// No article with that message-id
    pub const NO_SUCH_ARTICLE_ID: u16 = 430;
    /// Article not wanted (RFC 3977 Section 6.3.2)
    pub const ARTICLE_NOT_WANTED: u16 = 435;
    /// Transfer not possible; try again later (RFC 3977 Section 6.3.2)
    pub const TRANSFER_NOT_POSSIBLE: u16 = 436;
    /// Transfer rejected; do not retry (RFC 3977 Section 6.3.2)
    pub const TRANSFER_REJECTED: u16 = 437;
    /// Posting not permitted (RFC 3977 Section 6.3.1)
    pub const POSTING_NOT_PERMITTED: u16 = 440;
    /// Posting failed (RFC 3977 Section 6.3.1)
    pub const POSTING_FAILED: u16 = 441;
    /// Authentication required (RFC 4643)
    pub const AUTH_REQUIRED: u16 = 480;
    /// Authentication rejected
    pub const AUTH_REJECTED: u16 = 481;
    /// Authentication out of sequence
    pub const AUTH_OUT_OF_SEQUENCE: u16 = 482;
    /// Encryption or authentication required (RFC 4643)
    pub const ENCRYPTION_REQUIRED: u16 = 483;

    // 5xx - Permanent errors
    /// Command not recognized
    pub const COMMAND_NOT_RECOGNIZED: u16 = 500;
    /// Command syntax error
    pub const COMMAND_SYNTAX_ERROR: u16 = 501;
    /// Access denied / command unavailable
    pub const ACCESS_DENIED: u16 = 502;
    /// Feature not supported / optional functionality absent (RFC 3977)
    pub const FEATURE_NOT_SUPPORTED: u16 = 503;
}
