// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for `.properties` files.
//!
//! Reads the line-oriented format understood by `java.util.Properties`:
//! - `#` and `!` start comment lines
//! - keys and values are separated by `=`, `:` or whitespace
//! - a trailing odd run of backslashes continues the entry on the next line
//! - `\t`, `\n`, `\r`, `\f` and `\uXXXX` escapes are decoded
//! - a leading byte order mark is skipped

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::Chars;

/// Parsed configuration: key to value.
pub type Properties = BTreeMap<String, String>;

/// Malformed input, with the natural line on which the entry began.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("malformed \\uxxxx encoding")]
    MalformedUnicodeEscape,
}

/// Parse properties text into a fresh map.
pub fn parse(text: &str) -> Result<Properties, ParseError> {
    let mut properties = Properties::new();
    load_into(&mut properties, text)?;
    Ok(properties)
}

/// Parse properties text into `properties`.
///
/// Entries before a malformed line stay in the map when an error is returned.
pub fn load_into(properties: &mut Properties, text: &str) -> Result<(), ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = natural_lines(text).into_iter().enumerate();

    while let Some((index, line)) = lines.next() {
        let first = trim_leading(line);
        if first.is_empty() || first.starts_with(['#', '!']) {
            continue;
        }

        let mut logical = String::with_capacity(first.len());
        let mut current = first;
        loop {
            if !continues(current) {
                logical.push_str(current);
                break;
            }
            logical.push_str(&current[..current.len() - 1]);
            match lines.next() {
                Some((_, next)) => current = trim_leading(next),
                None => break,
            }
        }

        let line = index + 1;
        let (raw_key, raw_value) = split_entry(&logical);
        let key = unescape(raw_key).map_err(|kind| ParseError { line, kind })?;
        let value = unescape(raw_value).map_err(|kind| ParseError { line, kind })?;
        properties.insert(key, value);
    }

    Ok(())
}

/// Decode file bytes as UTF-8, falling back to ISO-8859-1.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

fn trim_leading(line: &str) -> &str {
    line.trim_start_matches(is_blank)
}

/// Split on `\n`, `\r\n` and lone `\r`.
fn natural_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// An odd number of trailing backslashes continues the line.
fn continues(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Split a logical line into its still-escaped key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let bytes = line.as_bytes();
    let mut key_end = bytes.len();
    let mut value_start = bytes.len();
    let mut has_separator = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
        if !escaped {
            if b == b'=' || b == b':' {
                key_end = i;
                value_start = i + 1;
                has_separator = true;
                break;
            }
            if matches!(b, b' ' | b'\t' | b'\x0c') {
                key_end = i;
                value_start = i + 1;
                break;
            }
        }
        escaped = b == b'\\' && !escaped;
    }

    while value_start < bytes.len() {
        let b = bytes[value_start];
        if !matches!(b, b' ' | b'\t' | b'\x0c') {
            if !has_separator && (b == b'=' || b == b':') {
                has_separator = true;
            } else {
                break;
            }
        }
        value_start += 1;
    }

    (&line[..key_end], &line[value_start..])
}

fn unescape(raw: &str) -> Result<String, ParseErrorKind> {
    if !raw.contains('\\') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut high_surrogate = None;
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_surrogate(&mut out, &mut high_surrogate);
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            break;
        };
        if escaped == 'u' {
            let unit = read_code_unit(&mut chars)?;
            push_code_unit(&mut out, &mut high_surrogate, unit);
            continue;
        }
        flush_surrogate(&mut out, &mut high_surrogate);
        out.push(match escaped {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\x0c',
            other => other,
        });
    }
    flush_surrogate(&mut out, &mut high_surrogate);

    Ok(out)
}

fn read_code_unit(chars: &mut Chars<'_>) -> Result<u16, ParseErrorKind> {
    let mut unit: u16 = 0;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or(ParseErrorKind::MalformedUnicodeEscape)?;
        unit = (unit << 4) | digit as u16;
    }
    Ok(unit)
}

/// `\u` escapes are UTF-16 code units; pair surrogates, replace strays.
fn push_code_unit(out: &mut String, high_surrogate: &mut Option<u16>, unit: u16) {
    if let Some(high) = high_surrogate.take() {
        if (0xDC00..=0xDFFF).contains(&unit) {
            let code = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(unit) - 0xDC00);
            out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
            return;
        }
        out.push(char::REPLACEMENT_CHARACTER);
    }
    if (0xD800..=0xDBFF).contains(&unit) {
        *high_surrogate = Some(unit);
        return;
    }
    out.push(char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER));
}

fn flush_surrogate(out: &mut String, high_surrogate: &mut Option<u16>) {
    if high_surrogate.take().is_some() {
        out.push(char::REPLACEMENT_CHARACTER);
    }
}

#[cfg(test)]
#[path = "properties_tests.rs"]
mod tests;
