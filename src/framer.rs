//! Response framing: status-line parsing and multi-line classification
//!
//! A response is framed in three steps: parse the status line, decide from
//! the status code (and the command that was issued) whether a multi-line
//! data block follows, and for 220/221 parse the article header region
//! inline. The framer consumes nothing past the end of the current
//! response; the body, if any, is left in the reader for the body stream.

use tracing::warn;

use crate::article::Headers;
use crate::commands::Command;
use crate::error::{NntpError, Result};
use crate::reader::LineReader;

/// A framed response: everything except the (lazy) body
pub(crate) struct ResponseHead {
    pub(crate) status: u16,
    pub(crate) status_text: String,
    pub(crate) headers: Headers,
    pub(crate) multiline: bool,
}

/// Read and frame the next response from the connection
pub(crate) async fn read_response_head(
    reader: &mut LineReader,
    hint: Option<Command>,
) -> Result<ResponseHead> {
    let line = reader.read_string().await?;
    if line.is_empty() {
        return Err(NntpError::ConnectionClosed);
    }

    let (status, status_text) = parse_status_line(line.trim_end())?;
    let multiline = classify(status, hint, &status_text);

    let headers = if multiline && (status == 220 || status == 221) {
        read_article_headers(reader).await?
    } else {
        Headers::new()
    };

    Ok(ResponseHead {
        status,
        status_text,
        headers,
        multiline,
    })
}

/// Parse an NNTP status line into code and text
///
/// Strict on the code (three digits, 100–599) and forgiving elsewhere:
/// a UTF-8 BOM from broken proxies is stripped, and a missing space after
/// the code does not lose the text.
pub(crate) fn parse_status_line(line: &str) -> Result<(u16, String)> {
    let line = line.trim_start_matches('\u{FEFF}');

    let bytes = line.as_bytes();
    if bytes.len() < 3
        || !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || !bytes[2].is_ascii_digit()
    {
        return Err(NntpError::InvalidResponse(line.chars().take(100).collect()));
    }

    // A fourth digit means a malformed code like "99999", not a long message
    if bytes.len() > 3 && bytes[3].is_ascii_digit() {
        return Err(NntpError::InvalidResponse(line.chars().take(100).collect()));
    }

    if !(b'1'..=b'5').contains(&bytes[0]) {
        return Err(NntpError::InvalidResponse(line.chars().take(100).collect()));
    }

    // Safe to slice since we verified ASCII digits
    let status = line[0..3]
        .parse::<u16>()
        .map_err(|_| NntpError::InvalidResponse(line.chars().take(100).collect()))?;

    let status_text = if line.len() > 3 {
        if bytes[3] == b' ' {
            line[4..].to_string()
        } else {
            line[3..].to_string()
        }
    } else {
        String::new()
    };

    Ok((status, status_text))
}

/// Decide whether a multi-line data block follows this status
///
/// With a command hint the decision is structural ([`Command::expects_multiline`]).
/// Without one, 211 is ambiguous between GROUP (single-line) and LISTGROUP
/// (multi-line); the fallback scans the status text for "list" or "follow".
/// RFC 3977 warns clients not to base decisions on the text, so the hint
/// should always be preferred — the heuristic exists only for callers that
/// frame responses outside a command exchange.
pub(crate) fn classify(status: u16, hint: Option<Command>, status_text: &str) -> bool {
    if let Some(command) = hint {
        return command.expects_multiline(status);
    }

    match status {
        100 | 101 | 215 | 220 | 221 | 222 | 224 | 225 | 230 | 231 => true,
        211 => {
            let lower = status_text.to_ascii_lowercase();
            lower.contains("list") || lower.contains("follow")
        }
        _ => false,
    }
}

/// Parse the article header region of a 220/221 response
///
/// Peeks ahead of every line: a blank CRLF separates headers from the body
/// (consumed here, not part of the body), a leading terminator octet means
/// headers-only (left for the body stream to consume), anything else must
/// be a header line. A line that fails header syntax terminates header
/// parsing rather than failing the response.
async fn read_article_headers(reader: &mut LineReader) -> Result<Headers> {
    let mut headers = Headers::new();
    loop {
        let ahead = reader.peek(2).await?;
        if ahead.is_empty() {
            return Err(NntpError::UnexpectedEof);
        }
        if ahead[0] == b'.' {
            break;
        }
        if ahead == b"\r\n" || ahead[0] == b'\n' {
            reader.read_line().await?;
            break;
        }

        let line = reader.read_line().await?;
        match parse_header_line(&line) {
            Some((name, value)) => headers.append(name, value),
            None => {
                warn!(
                    "malformed header line inside article header region: {:?}",
                    String::from_utf8_lossy(&line)
                );
                break;
            }
        }
    }
    Ok(headers)
}

/// Parse one `Name: value` header line; `None` if the syntax does not hold
///
/// Names accept the RFC 3977 field-name charset (printable ASCII except
/// the colon) and preserve their capitalization; exactly one whitespace
/// octet must follow the colon.
fn parse_header_line(line: &[u8]) -> Option<(String, String)> {
    let line = match line {
        [rest @ .., b'\r', b'\n'] | [rest @ .., b'\n'] => rest,
        other => other,
    };

    let colon = line.iter().position(|&b| b == b':')?;
    let (name, rest) = line.split_at(colon);
    if name.is_empty() || !name.iter().all(|&b| (0x21..=0x7E).contains(&b) && b != b':') {
        return None;
    }

    // rest[0] is the colon; exactly one space or tab must follow
    let value = match rest.get(1) {
        Some(b' ') | Some(b'\t') => &rest[2..],
        _ => return None,
    };

    Some((
        String::from_utf8_lossy(name).into_owned(),
        String::from_utf8_lossy(value).into_owned(),
    ))
}
