//! NNTP command surface: keywords, line building, and typed payload parsers

pub mod group;
pub mod hdr;
pub mod list;
pub mod over;

pub use group::{parse_article_numbers, parse_group_status, GroupInfo};
pub use hdr::{parse_hdr_line, HdrEntry};
pub use list::{parse_active_line, parse_newsgroups_line, ActiveGroup, NewsgroupInfo};
pub use over::{parse_over_line, OverEntry};

use crate::error::{NntpError, Result};

/// Maximum octets in a command line, terminating CRLF included (RFC 3977 §3.1)
pub const MAX_COMMAND_OCTETS: usize = 512;

/// Maximum octets in a single command argument (RFC 3977 §3.1)
pub const MAX_ARGUMENT_OCTETS: usize = 497;

/// The closed set of commands this client speaks (RFC 3977 + RFC 4643)
///
/// Keywords are case-insensitive on input and uppercased on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// ARTICLE - full article, headers and body (220)
    Article,
    /// BODY - article body only (222)
    Body,
    /// CAPABILITIES - server capability list (101)
    Capabilities,
    /// DATE - server date/time (111)
    Date,
    /// GROUP - select a newsgroup (211, single-line)
    Group,
    /// HDR - header field values over a range (225)
    Hdr,
    /// HEAD - article headers only (221)
    Head,
    /// HELP - help text (100)
    Help,
    /// IHAVE - offer an article for transfer (335 then 235/436/437)
    Ihave,
    /// LAST - move to the previous article (223)
    Last,
    /// LIST - newsgroup and metadata listings (215)
    List,
    /// LISTGROUP - article numbers in a group (211, multi-line)
    Listgroup,
    /// MODE READER - switch the server to reader mode
    ModeReader,
    /// NEWGROUPS - newsgroups created since a date (231)
    Newgroups,
    /// NEWNEWS - message-ids of new articles (230)
    Newnews,
    /// NEXT - move to the next article (223)
    Next,
    /// OVER - overview data over a range (224)
    Over,
    /// POST - post a new article (340 then 240/441)
    Post,
    /// QUIT - close the session (205)
    Quit,
    /// STAT - article existence check (223)
    Stat,
    /// AUTHINFO USER - begin username/password authentication (RFC 4643)
    AuthinfoUser,
    /// AUTHINFO PASS - supply the password (RFC 4643)
    AuthinfoPass,
    /// AUTHINFO SASL - SASL exchange (RFC 4643 §2.4)
    AuthinfoSasl,
}

impl Command {
    /// Wire keyword, uppercase
    pub fn keyword(self) -> &'static str {
        match self {
            Command::Article => "ARTICLE",
            Command::Body => "BODY",
            Command::Capabilities => "CAPABILITIES",
            Command::Date => "DATE",
            Command::Group => "GROUP",
            Command::Hdr => "HDR",
            Command::Head => "HEAD",
            Command::Help => "HELP",
            Command::Ihave => "IHAVE",
            Command::Last => "LAST",
            Command::List => "LIST",
            Command::Listgroup => "LISTGROUP",
            Command::ModeReader => "MODE READER",
            Command::Newgroups => "NEWGROUPS",
            Command::Newnews => "NEWNEWS",
            Command::Next => "NEXT",
            Command::Over => "OVER",
            Command::Post => "POST",
            Command::Quit => "QUIT",
            Command::Stat => "STAT",
            Command::AuthinfoUser => "AUTHINFO USER",
            Command::AuthinfoPass => "AUTHINFO PASS",
            Command::AuthinfoSasl => "AUTHINFO SASL",
        }
    }

    /// Whether a response with this status carries a multi-line data block
    ///
    /// Classification is by status code alone except for 211, which is
    /// single-line for GROUP and multi-line for LISTGROUP (RFC 3977 §6.1.2).
    pub fn expects_multiline(self, status: u16) -> bool {
        match status {
            100 | 101 | 215 | 220 | 221 | 222 | 224 | 225 | 230 | 231 => true,
            211 => matches!(self, Command::Listgroup),
            _ => false,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

impl std::str::FromStr for Command {
    type Err = NntpError;

    fn from_str(s: &str) -> Result<Self> {
        // Case-insensitive, inner whitespace collapsed ("mode  reader" is fine)
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();
        let command = match normalized.as_str() {
            "ARTICLE" => Command::Article,
            "BODY" => Command::Body,
            "CAPABILITIES" => Command::Capabilities,
            "DATE" => Command::Date,
            "GROUP" => Command::Group,
            "HDR" => Command::Hdr,
            "HEAD" => Command::Head,
            "HELP" => Command::Help,
            "IHAVE" => Command::Ihave,
            "LAST" => Command::Last,
            "LIST" => Command::List,
            "LISTGROUP" => Command::Listgroup,
            "MODE READER" => Command::ModeReader,
            "NEWGROUPS" => Command::Newgroups,
            "NEWNEWS" => Command::Newnews,
            "NEXT" => Command::Next,
            "OVER" => Command::Over,
            "POST" => Command::Post,
            "QUIT" => Command::Quit,
            "STAT" => Command::Stat,
            "AUTHINFO USER" => Command::AuthinfoUser,
            "AUTHINFO PASS" => Command::AuthinfoPass,
            "AUTHINFO SASL" => Command::AuthinfoSasl,
            _ => return Err(NntpError::InvalidResponse(format!("unknown command: {s}"))),
        };
        Ok(command)
    }
}

/// Build a complete command line: `KEYWORD arg1 arg2 ...\r\n`
///
/// Empty arguments are skipped. Enforces the RFC 3977 octet limits locally
/// so an oversized command never reaches the wire.
pub fn build_command_line(command: Command, args: &[&str]) -> Result<String> {
    let mut line = String::with_capacity(64);
    line.push_str(command.keyword());
    for arg in args {
        if arg.is_empty() {
            continue;
        }
        if arg.len() > MAX_ARGUMENT_OCTETS {
            return Err(NntpError::ArgumentTooLong { octets: arg.len() });
        }
        line.push(' ');
        line.push_str(arg);
    }
    line.push_str("\r\n");
    if line.len() > MAX_COMMAND_OCTETS {
        return Err(NntpError::CommandTooLong { octets: line.len() });
    }
    Ok(line)
}

/// Wrap a message-id in angle brackets if the caller left them off
pub fn ensure_message_id(id: &str) -> String {
    if id.starts_with('<') && id.ends_with('>') {
        id.to_string()
    } else {
        format!("<{id}>")
    }
}

/// How an article is addressed in ARTICLE/HEAD/BODY/STAT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleRef<'a> {
    /// The server's current article (no argument on the wire)
    Current,
    /// An article number in the selected group
    Number(u64),
    /// A message-id; angle brackets added if missing
    MessageId(&'a str),
}

impl ArticleRef<'_> {
    /// Wire argument, `None` for the current article
    pub fn to_arg(self) -> Option<String> {
        match self {
            ArticleRef::Current => None,
            ArticleRef::Number(n) => Some(n.to_string()),
            ArticleRef::MessageId(id) => Some(ensure_message_id(id)),
        }
    }
}

/// An article number range (RFC 3977 §6.1.2, `range` syntax)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleRange {
    /// A single article number
    Single(u64),
    /// From a number to the end of the group ("n-")
    From(u64),
    /// A closed range ("n-m")
    Bounded(u64, u64),
}

impl std::fmt::Display for ArticleRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            ArticleRange::Single(n) => write!(f, "{n}"),
            ArticleRange::From(n) => write!(f, "{n}-"),
            ArticleRange::Bounded(first, last) => write!(f, "{first}-{last}"),
        }
    }
}

/// Target of an OVER or HDR query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTarget<'a> {
    /// The server's current article (no argument on the wire)
    Current,
    /// An article number range in the selected group
    Range(ArticleRange),
    /// A specific article by message-id
    MessageId(&'a str),
}

impl QueryTarget<'_> {
    /// Wire argument, `None` for the current article
    pub fn to_arg(self) -> Option<String> {
        match self {
            QueryTarget::Current => None,
            QueryTarget::Range(range) => Some(range.to_string()),
            QueryTarget::MessageId(id) => Some(ensure_message_id(id)),
        }
    }
}
