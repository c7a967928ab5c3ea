//! Listing commands: LIST and its keywords, NEWGROUPS, NEWNEWS

use chrono::{NaiveDate, NaiveTime};

use super::NntpClient;
use crate::commands::Command;
use crate::error::Result;
use crate::response::NntpResponse;

fn date_args(date: NaiveDate, time: NaiveTime, gmt: bool) -> [String; 3] {
    [
        date.format("%Y%m%d").to_string(),
        time.format("%H%M%S").to_string(),
        if gmt { "GMT".to_string() } else { String::new() },
    ]
}

impl NntpClient {
    /// Bare LIST: the server's default listing, usually LIST ACTIVE
    /// (RFC 3977 §7.6.1); 215 with one "group high low status" line each,
    /// parsed by [`parse_active_line`](crate::commands::parse_active_line)
    pub async fn list(&mut self) -> Result<NntpResponse<'_>> {
        self.command(Command::List, &[]).await
    }

    /// LIST ACTIVE with an optional wildmat (RFC 3977 §7.6.3)
    pub async fn list_active(&mut self, wildmat: Option<&str>) -> Result<NntpResponse<'_>> {
        let args: Vec<&str> = std::iter::once("ACTIVE").chain(wildmat).collect();
        self.command(Command::List, &args).await
    }

    /// LIST ACTIVE.TIMES: group creation times (RFC 3977 §7.6.4)
    pub async fn list_active_times(&mut self) -> Result<NntpResponse<'_>> {
        self.command(Command::List, &["ACTIVE.TIMES"]).await
    }

    /// LIST NEWSGROUPS with an optional wildmat (RFC 3977 §7.6.6); one
    /// "group description" line each, parsed by
    /// [`parse_newsgroups_line`](crate::commands::parse_newsgroups_line)
    pub async fn list_newsgroups(&mut self, wildmat: Option<&str>) -> Result<NntpResponse<'_>> {
        let args: Vec<&str> = std::iter::once("NEWSGROUPS").chain(wildmat).collect();
        self.command(Command::List, &args).await
    }

    /// LIST OVERVIEW.FMT: the field order of OVER output (RFC 3977 §8.4)
    pub async fn list_overview_fmt(&mut self) -> Result<NntpResponse<'_>> {
        self.command(Command::List, &["OVERVIEW.FMT"]).await
    }

    /// Newsgroups created since the given date and time (RFC 3977 §7.3)
    ///
    /// Sends `NEWGROUPS yyyymmdd hhmmss [GMT]`; the literal `GMT` token is
    /// appended when `gmt` is set. 231 carries LIST ACTIVE-style lines.
    pub async fn newgroups(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        gmt: bool,
    ) -> Result<NntpResponse<'_>> {
        let args = date_args(date, time, gmt);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.command(Command::Newgroups, &args).await
    }

    /// Message-ids of articles posted since the given date and time in
    /// groups matching `wildmat` (RFC 3977 §7.4); 230 with one id per line
    pub async fn newnews(
        &mut self,
        wildmat: &str,
        date: NaiveDate,
        time: NaiveTime,
        gmt: bool,
    ) -> Result<NntpResponse<'_>> {
        let when = date_args(date, time, gmt);
        let mut args: Vec<&str> = vec![wildmat];
        args.extend(when.iter().map(String::as_str));
        self.command(Command::Newnews, &args).await
    }
}
