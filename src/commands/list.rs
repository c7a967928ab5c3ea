//! LIST and NEWGROUPS payload parsing (status 215 / 231)

/// Active newsgroup entry from LIST ACTIVE or NEWGROUPS
/// (RFC 3977 §7.6.3 and §7.3)
#[derive(Debug, Clone)]
pub struct ActiveGroup {
    /// Newsgroup name
    pub name: String,
    /// Highest article number
    pub high: u64,
    /// Lowest article number
    pub low: u64,
    /// Posting status:
    /// - "y" = posting allowed
    /// - "n" = posting not allowed
    /// - "m" = moderated
    /// - "=group.name" = alias to another group (RFC 6048)
    pub status: String,
}

/// Parse one "group high low status" line; `None` for malformed lines
pub fn parse_active_line(line: &str) -> Option<ActiveGroup> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return None;
    }

    Some(ActiveGroup {
        name: parts[0].to_string(),
        high: parts[1].parse().unwrap_or(0),
        low: parts[2].parse().unwrap_or(0),
        status: parts[3].to_string(),
    })
}

/// Newsgroup description entry from LIST NEWSGROUPS (RFC 3977 §7.6.6)
#[derive(Debug, Clone)]
pub struct NewsgroupInfo {
    /// Newsgroup name
    pub name: String,
    /// Human-readable description (may be empty)
    pub description: String,
}

/// Parse one "group<TAB-or-space>description" line; `None` for blank lines
pub fn parse_newsgroups_line(line: &str) -> Option<NewsgroupInfo> {
    let line = line.trim_end();
    if line.is_empty() {
        return None;
    }

    match line.split_once(|c: char| c == '\t' || c == ' ') {
        Some((name, description)) => Some(NewsgroupInfo {
            name: name.to_string(),
            description: description.trim_start().to_string(),
        }),
        None => Some(NewsgroupInfo {
            name: line.to_string(),
            description: String::new(),
        }),
    }
}
