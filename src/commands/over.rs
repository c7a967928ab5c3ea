//! OVER payload parsing (status 224)

use crate::error::{NntpError, Result};

/// Overview entry containing article metadata (RFC 3977 §8.3)
#[derive(Debug, Clone)]
pub struct OverEntry {
    /// Article number within the newsgroup (0 when queried by message-id)
    pub article_number: u64,
    /// Article subject line
    pub subject: String,
    /// Article author (From header)
    pub author: String,
    /// Article date string
    pub date: String,
    /// Unique message ID
    pub message_id: String,
    /// References to parent articles (for threading)
    pub references: String,
    /// Article size in bytes
    pub bytes: usize,
    /// Number of lines in the article
    pub lines: usize,
}

/// Parse one tab-separated overview line
///
/// Format: "number\tsubject\tauthor\tdate\tmessage-id\treferences\tbytes\tlines[\textra...]"
pub fn parse_over_line(line: &str) -> Result<OverEntry> {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 8 {
        return Err(NntpError::InvalidResponse(line.to_string()));
    }

    Ok(OverEntry {
        article_number: parts[0].parse().unwrap_or(0),
        subject: parts[1].to_string(),
        author: parts[2].to_string(),
        date: parts[3].to_string(),
        message_id: parts[4].to_string(),
        references: parts[5].to_string(),
        bytes: parts[6].parse().unwrap_or(0),
        lines: parts[7].parse().unwrap_or(0),
    })
}
