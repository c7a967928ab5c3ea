//! HDR payload parsing (status 225)

use crate::error::{NntpError, Result};

/// One article's value for the requested header field (RFC 3977 §8.5)
#[derive(Debug, Clone)]
pub struct HdrEntry {
    /// Article number, or 0 when the query was by message-id
    pub article_number: u64,
    /// Header field value with internal tabs/linebreaks collapsed by the server
    pub value: String,
}

/// Parse one "number value" line from an HDR block
pub fn parse_hdr_line(line: &str) -> Result<HdrEntry> {
    let line = line.trim_end();
    let (number, value) = match line.split_once(' ') {
        Some((number, value)) => (number, value),
        None => (line, ""),
    };

    let article_number = number
        .parse()
        .map_err(|_| NntpError::InvalidResponse(line.to_string()))?;

    Ok(HdrEntry {
        article_number,
        value: value.to_string(),
    })
}
