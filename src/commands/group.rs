//! Group selection payload parsing (GROUP / LISTGROUP, status 211)

use crate::error::{NntpError, Result};

/// Group information from a 211 status line
///
/// Response format: "211 count first last group-name"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfo {
    /// Estimated number of articles in the group
    pub count: u64,
    /// Number of the first article
    pub first: u64,
    /// Number of the last article
    pub last: u64,
    /// Newsgroup name as echoed by the server
    pub name: String,
}

/// Parse the status text of a 211 response into [`GroupInfo`]
///
/// Works for both GROUP and LISTGROUP; LISTGROUP servers may append extra
/// text ("list follows") after the group name, which is ignored.
pub fn parse_group_status(status_text: &str) -> Result<GroupInfo> {
    let parts: Vec<&str> = status_text.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(NntpError::InvalidResponse(status_text.to_string()));
    }

    let count = parts[0]
        .parse()
        .map_err(|_| NntpError::InvalidResponse(status_text.to_string()))?;
    let first = parts[1]
        .parse()
        .map_err(|_| NntpError::InvalidResponse(status_text.to_string()))?;
    let last = parts[2]
        .parse()
        .map_err(|_| NntpError::InvalidResponse(status_text.to_string()))?;

    Ok(GroupInfo {
        count,
        first,
        last,
        name: parts[3].to_string(),
    })
}

/// Parse a drained LISTGROUP body into article numbers
///
/// Malformed lines are skipped.
pub fn parse_article_numbers(body: &[u8]) -> Vec<u64> {
    body.split(|&b| b == b'\n')
        .filter_map(|line| {
            let line = std::str::from_utf8(line).ok()?;
            line.trim().parse().ok()
        })
        .collect()
}
