use crate::error::{ParseError, Result};

/// Split `line` on `delimiter`, expecting exactly one occurrence.
///
/// The log format uses fixed prefixes, so a duplicate delimiter means a
/// corrupted or unanticipated line. Zero occurrences and repeated occurrences
/// fail with distinct variants rather than silently yielding a wrong field.
pub fn split_once_exact<'a>(line: &'a str, delimiter: &str) -> Result<(&'a str, &'a str)> {
    let Some((left, right)) = line.split_once(delimiter) else {
        return Err(ParseError::DelimiterMissing {
            line: line.to_string(),
            delimiter: delimiter.to_string(),
        });
    };
    if right.contains(delimiter) {
        return Err(ParseError::DelimiterRepeated {
            line: line.to_string(),
            delimiter: delimiter.to_string(),
        });
    }
    Ok((left, right))
}

/// Strip chat framing from a raw log line and return the payload.
///
/// Trims surrounding whitespace first, then requires exactly one occurrence
/// of the chat marker.
pub fn chat_payload<'a>(line: &'a str, marker: &str) -> Result<&'a str> {
    let (_, payload) = split_once_exact(line.trim(), marker)?;
    Ok(payload)
}
