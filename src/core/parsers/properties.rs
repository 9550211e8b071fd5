//! Parser for `.properties` translation files.
//!
//! Parses line by line so that keys keep the order in which they are first
//! declared. Supports the usual properties syntax: `#`/`!` comments, `=`, `:`
//! or whitespace separators, backslash line continuations, and `\t \n \r \f`
//! and `\uXXXX` escapes.

use std::{fs, path::Path};

use crate::core::{GenerationError, GenerationResult, TranslationEntry, TranslationFile};

/// A malformed line, reported with its 1-indexed line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertiesSyntaxError {
    pub line: usize,
    pub message: String,
}

pub fn parse_properties_file(path: &Path) -> GenerationResult<TranslationFile> {
    let bytes = fs::read(path).map_err(|source| GenerationError::io(path, source))?;
    let content = decode(bytes);

    parse_properties(&content).map_err(|err| GenerationError::Parse {
        path: path.to_path_buf(),
        line: err.line,
        message: err.message,
    })
}

/// Decode file contents as UTF-8, falling back to ISO-8859-1.
///
/// A leading byte order mark is dropped from UTF-8 input.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(content) => match content.strip_prefix('\u{FEFF}') {
            Some(stripped) => stripped.to_string(),
            None => content,
        },
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    }
}

pub fn parse_properties(content: &str) -> Result<TranslationFile, PropertiesSyntaxError> {
    let mut file = TranslationFile::new();

    for (line, logical) in logical_lines(content) {
        let (raw_key, raw_value) = split_key_value(&logical);
        let key = unescape(raw_key, line)?;
        let value = unescape(raw_value, line)?;
        file.insert(TranslationEntry::new(key, value, line));
    }

    Ok(file)
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Join continued lines and drop comments and blank lines.
///
/// Returns `(first_line_number, logical_line)` pairs. Leading whitespace is
/// stripped from every natural line, including continuations.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (idx, natural) in normalized.split('\n').enumerate() {
        let part = natural.trim_start_matches(is_whitespace);

        // Comments cannot start inside a continuation
        if pending.is_none() && (part.is_empty() || part.starts_with(['#', '!'])) {
            continue;
        }

        let (start, mut buf) = pending.take().unwrap_or_else(|| (idx + 1, String::new()));
        if ends_with_continuation(part) {
            buf.push_str(&part[..part.len() - 1]);
            pending = Some((start, buf));
        } else {
            buf.push_str(part);
            lines.push((start, buf));
        }
    }

    if let Some(last) = pending {
        lines.push(last);
    }

    lines
}

/// A line continues when it ends with an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
    trailing % 2 == 1
}

/// Split a logical line into its raw (still escaped) key and value.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;

    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                let value = line[idx + 1..].trim_start_matches(is_whitespace);
                return (&line[..idx], value);
            }
            c if is_whitespace(c) => {
                let rest = line[idx..].trim_start_matches(is_whitespace);
                let rest = rest.strip_prefix(['=', ':']).unwrap_or(rest);
                return (&line[..idx], rest.trim_start_matches(is_whitespace));
            }
            _ => {}
        }
    }

    (line, "")
}

fn unescape(raw: &str, line: usize) -> Result<String, PropertiesSyntaxError> {
    // \uXXXX escapes may encode surrogate pairs, so decode through UTF-16
    let mut units: Vec<u16> = Vec::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            push_char(&mut units, c);
            continue;
        }
        match chars.next() {
            Some('t') => push_char(&mut units, '\t'),
            Some('n') => push_char(&mut units, '\n'),
            Some('r') => push_char(&mut units, '\r'),
            Some('f') => push_char(&mut units, '\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.chars().count() != 4 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
                    return Err(PropertiesSyntaxError {
                        line,
                        message: format!("malformed \\uXXXX escape: \\u{}", hex),
                    });
                }
                let unit = u16::from_str_radix(&hex, 16).map_err(|e| PropertiesSyntaxError {
                    line,
                    message: format!("malformed \\uXXXX escape: {}", e),
                })?;
                units.push(unit);
            }
            Some(other) => push_char(&mut units, other),
            None => {}
        }
    }

    Ok(String::from_utf16_lossy(&units))
}

fn push_char(units: &mut Vec<u16>, c: char) {
    let mut buf = [0u16; 2];
    units.extend_from_slice(c.encode_utf16(&mut buf));
}
