//! Escaping applied to every parsed key and value before it is stored, compared, or echoed
//! into a report.
//!
//! Markup-significant characters become HTML entities, control characters become numeric
//! entities, and numeric entities that were already escaped in the input pass through as-is.

const NO_BREAK_SPACE: char = '\u{a0}';

pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        if c == '&'
            && let Some(len) = numeric_entity_len(rest)
        {
            out.push_str(&rest[..len]);
            rest = &rest[len..];
            continue;
        }
        push_escaped(&mut out, c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// Normalize a setting key (or a rule's target key) so both sides of a lookup agree.
pub fn normalize_key(raw: &str) -> String {
    sanitize(raw.trim()).to_lowercase()
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        NO_BREAK_SPACE | '\r' => {}
        '&' => out.push_str("&amp;"),
        '%' => out.push_str("&#37;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        '(' => out.push_str("&#40;"),
        ')' => out.push_str("&#41;"),
        '+' => out.push_str("&#43;"),
        '-' => out.push_str("&#45;"),
        c if c.is_control() => {
            out.push_str(&format!("&#{};", u32::from(c)));
        }
        c => out.push(c),
    }
}

/// Length in bytes of a `&#NN;` entity at the start of `s`, if there is one.
fn numeric_entity_len(s: &str) -> Option<usize> {
    let digits = s.strip_prefix("&#")?;
    let count = digits.bytes().take_while(u8::is_ascii_digit).count();
    if count == 0 || digits.as_bytes().get(count) != Some(&b';') {
        return None;
    }
    Some(2 + count + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_are_untouched() {
        assert_eq!(sanitize("On"), "On");
        assert_eq!(sanitize("/var/log/php_errors.log"), "/var/log/php_errors.log");
        assert_eq!(sanitize("C:\\php\\ext"), "C:\\php\\ext");
    }

    #[test]
    fn markup_characters_become_entities() {
        assert_eq!(
            sanitize("<a href=\"x\">'(1+2)-3%'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&#39;&#40;1&#43;2&#41;&#45;3&#37;&#39;&lt;/a&gt;"
        );
        assert_eq!(sanitize("E_ALL & ~E_NOTICE"), "E_ALL &amp; ~E_NOTICE");
    }

    #[test]
    fn existing_numeric_entities_pass_through() {
        assert_eq!(sanitize("a&#39;b"), "a&#39;b");
        assert_eq!(sanitize("&#;"), "&amp;#;");
        assert_eq!(sanitize("&#12"), "&amp;#12");
    }

    #[test]
    fn control_characters_are_removed_or_encoded() {
        assert_eq!(sanitize("a\r\nb"), "a&#10;b");
        assert_eq!(sanitize("tab\there"), "tab&#9;here");
        assert_eq!(sanitize("x\u{a0}y"), "xy");
        assert_eq!(sanitize("nul\u{0}"), "nul&#0;");
    }

    #[test]
    fn keys_are_trimmed_and_lowercased() {
        assert_eq!(normalize_key("  Display_Errors "), "display_errors");
        assert_eq!(normalize_key("session.save-path"), "session.save&#45;path");
    }
}
