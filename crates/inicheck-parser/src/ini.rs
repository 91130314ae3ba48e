use crate::error::IniError;
use inicheck_domain::RawSetting;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse a flat `key = value` settings file (php.ini style).
///
/// - `;` and `#` start comment lines; `;` also ends an unquoted value
/// - `[section]` headers are accepted and flattened away
/// - values may be wrapped in single or double quotes (`\"` escapes a double quote)
/// - values are otherwise returned verbatim; `On`/`Off` are not rewritten
///
/// Every assignment is returned in file order, duplicates included.
pub fn parse_settings(text: &str) -> Result<Vec<RawSetting>, IniError> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut out = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        let trimmed = raw_line.trim();

        if trimmed.is_empty()
            || trimmed.starts_with(';')
            || trimmed.starts_with('#')
            || trimmed.starts_with('[')
        {
            continue;
        }

        let Some((key, rest)) = trimmed.split_once('=') else {
            return Err(IniError::MissingAssignment { line });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(IniError::EmptyKey { line });
        }

        let value = parse_value(rest.trim(), line)?;
        out.push(RawSetting::new(key, value).at_line(line));
    }

    Ok(out)
}

fn parse_value(raw: &str, line: u32) -> Result<String, IniError> {
    let quote = match raw.chars().next() {
        Some(q @ ('"' | '\'')) => q,
        _ => return Ok(strip_inline_comment(raw).trim_end().to_string()),
    };

    let body = &raw[quote.len_utf8()..];
    let Some(end) = closing_quote(body, quote) else {
        return Err(IniError::UnterminatedQuote { line });
    };

    let tail = body[end + quote.len_utf8()..].trim_start();
    if !(tail.is_empty() || tail.starts_with(';') || tail.starts_with('#')) {
        return Err(IniError::TrailingText { line });
    }

    let inner = &body[..end];
    Ok(if quote == '"' {
        inner.replace("\\\"", "\"")
    } else {
        inner.to_string()
    })
}

fn closing_quote(body: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (idx, c) in body.char_indices() {
        if escaped {
            escaped = false;
        } else if quote == '"' && c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some(idx);
        }
    }
    None
}

fn strip_inline_comment(raw: &str) -> &str {
    match raw.find(';') {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}
