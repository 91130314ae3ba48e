use crate::error::RulesError;
use inicheck_domain::{is_on, Rule};
use inicheck_types::{ids, Severity};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse an XML rule document into rules, in document order.
///
/// The root element is a container. Every other element is a rule whose lower-cased tag
/// is the target key, except nested `configuration` elements, which only group rules.
/// Attribute names are matched case-insensitively.
pub fn parse_rules(text: &str) -> Result<Vec<Rule>, RulesError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut rules = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut seen_root = false;

    loop {
        let position = byte_offset(reader.buffer_position());
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(err) => {
                return Err(RulesError::Malformed {
                    position: byte_offset(reader.buffer_position()),
                    message: err.to_string(),
                });
            }
        };

        match event {
            Event::Start(start) => {
                let name = element_name(&start, position)?;
                visit(&name, &start, open.is_empty(), position, &mut seen_root, &mut rules)?;
                open.push(name);
            }
            Event::Empty(start) => {
                let name = element_name(&start, position)?;
                visit(&name, &start, open.is_empty(), position, &mut seen_root, &mut rules)?;
            }
            Event::End(_) => {
                open.pop();
            }
            Event::Text(text) => {
                if open.is_empty() {
                    return Err(RulesError::Malformed {
                        position,
                        message: "text outside the root element".to_string(),
                    });
                }
                text.unescape().map_err(|err| malformed(position, err))?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(element) = open.pop() {
        return Err(RulesError::Unclosed { element });
    }
    if !seen_root {
        return Err(RulesError::MissingRoot);
    }
    Ok(rules)
}

fn visit(
    name: &str,
    start: &BytesStart<'_>,
    is_root: bool,
    position: u64,
    seen_root: &mut bool,
    rules: &mut Vec<Rule>,
) -> Result<(), RulesError> {
    if is_root {
        if *seen_root {
            return Err(RulesError::MultipleRoots { position });
        }
        *seen_root = true;
        return Ok(());
    }
    if name != ids::CONTAINER_ELEMENT {
        rules.push(rule_from_element(name, start, position)?);
    }
    Ok(())
}

fn rule_from_element(
    name: &str,
    start: &BytesStart<'_>,
    position: u64,
) -> Result<Rule, RulesError> {
    let mut message = String::new();
    let mut value = String::new();
    let mut level: Option<String> = None;
    let mut if_safe_mode: Option<String> = None;

    for attr in start.attributes() {
        let attr = attr.map_err(|err| malformed(position, err))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| malformed(position, err))?
            .to_ascii_uppercase();
        let text = attr
            .unescape_value()
            .map_err(|err| malformed(position, err))?
            .into_owned();

        match key.as_str() {
            ids::ATTR_MESSAGE => message = text,
            ids::ATTR_VALUE => value = text,
            ids::ATTR_LEVEL => level = Some(text),
            ids::ATTR_IF_SAFE_MODE => if_safe_mode = Some(text),
            _ => {}
        }
    }

    let severity = match level.as_deref().map(str::trim) {
        None | Some("") => Severity::Info,
        Some(raw) => {
            let level: i64 = raw.parse().map_err(|_| RulesError::InvalidLevel {
                element: name.to_string(),
                value: raw.to_string(),
            })?;
            Severity::from_level(level)
        }
    };

    let mut rule = Rule::new(name, value, severity).with_message(message);
    if let Some(flag) = if_safe_mode {
        rule = rule.when_restricted(is_on(&flag));
    }
    Ok(rule)
}

fn element_name(start: &BytesStart<'_>, position: u64) -> Result<String, RulesError> {
    let name = start.name();
    let name = std::str::from_utf8(name.as_ref()).map_err(|err| malformed(position, err))?;
    Ok(name.to_lowercase())
}

fn malformed(position: u64, err: impl std::fmt::Display) -> RulesError {
    RulesError::Malformed {
        position,
        message: err.to_string(),
    }
}

fn byte_offset<T: TryInto<u64>>(position: T) -> u64 {
    position.try_into().unwrap_or(u64::MAX)
}
