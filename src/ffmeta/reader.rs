use crate::error::{FFMetaError, Result};
use crate::ffmeta::document::Document;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// First line of every ffmetadata file
pub const HEADER: &str = ";FFMETADATA1";

/// Check the header line and return the input as text.
///
/// The first line must be exactly [`HEADER`], followed by `\n`, `\r\n`, or
/// the end of input.
pub fn validate(input: &[u8]) -> Result<&str> {
    let text = std::str::from_utf8(input)
        .map_err(|e| FFMetaError::invalid(format!("not valid UTF-8: {}", e)))?;

    let first = match text.find('\n') {
        Some(end) => &text[..end],
        None => text,
    };
    let first = first.strip_suffix('\r').unwrap_or(first);

    if first != HEADER {
        return Err(FFMetaError::invalid(format!(
            "first line must be {:?}",
            HEADER
        )));
    }

    Ok(text)
}

/// Parse a complete ffmetadata buffer into a [`Document`]
pub fn parse(input: &[u8]) -> Result<Document> {
    let text = validate(input)?;
    let mut doc = Document::new();
    let mut current: Option<usize> = None;

    // Line 1 is the header; numbering below is 1-based for error messages.
    let mut lines = text.lines().enumerate().skip(1).map(|(i, l)| (i + 1, l));

    while let Some((line_no, raw)) = lines.next() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('[') {
            let name = rest.strip_suffix(']').map(str::trim).ok_or_else(|| {
                FFMetaError::invalid(format!("line {}: unterminated section header", line_no))
            })?;
            if name.is_empty() {
                return Err(FFMetaError::invalid(format!(
                    "line {}: empty section name",
                    line_no
                )));
            }
            doc.push_section(name);
            current = Some(doc.sections.len() - 1);
            continue;
        }

        // A trailing backslash escapes the newline and continues the value
        let mut logical = raw.to_string();
        while ends_with_escape(&logical) {
            logical.push('\n');
            match lines.next() {
                Some((_, next)) => logical.push_str(next),
                None => break,
            }
        }

        let (key, value) = split_key_value(&logical).ok_or_else(|| {
            FFMetaError::invalid(format!("line {}: expected key=value", line_no))
        })?;
        let key = unescape(key);
        if key.is_empty() {
            return Err(FFMetaError::invalid(format!("line {}: empty key", line_no)));
        }
        let value = unescape(value);

        let fields = match current {
            Some(i) => &mut doc.sections[i].fields,
            None => &mut doc.global,
        };
        fields.insert(key, value);
    }

    debug!(
        keys = doc.global.len(),
        sections = doc.sections.len(),
        "parsed ffmetadata"
    );
    Ok(doc)
}

/// Read a whole stream and parse it
pub fn read_document<R: Read>(mut reader: R) -> Result<Document> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse(&buf)
}

/// Read and parse an ffmetadata file from disk
pub fn read_ffmeta(path: &Path) -> Result<Document> {
    let buf = std::fs::read(path).map_err(|e| {
        FFMetaError::invalid(format!("unreadable stream {}: {}", path.display(), e))
    })?;
    parse(&buf)
}

fn ends_with_escape(s: &str) -> bool {
    s.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split on the first `=` that is not backslash-escaped
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '=' => return Some((&line[..i], &line[i + 1..])),
            _ => {}
        }
    }
    None
}

/// Resolve backslash escapes and trim surrounding whitespace, keeping any
/// whitespace that was escaped
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut keep = 0;
    let mut chars = s.trim_start().chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
                keep = out.len();
            }
        } else {
            out.push(c);
            if !c.is_whitespace() {
                keep = out.len();
            }
        }
    }
    out.truncate(keep);
    out
}
