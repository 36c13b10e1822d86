//! Front matter parsing
//!
//! Two fences are recognized:
//! - `+++` wraps a TOML table
//! - `---` wraps flat `key: value` lines (YAML scalars, optionally quoted)
//!
//! A document without a fence has no metadata and its whole text is the body.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::models::Metadata;

/// Splits `source` into metadata and body. Errors carry a human readable reason.
pub fn parse(source: &str) -> Result<(Metadata, &str), String> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let trimmed = source.trim_start();

    if let Some((block, body)) = split_fenced(trimmed, "+++")? {
        let table: toml::Table =
            toml::from_str(block).map_err(|e| format!("invalid TOML: {}", e))?;
        let value = serde_json::to_value(table).map_err(|e| e.to_string())?;
        let Value::Object(map) = value else {
            return Err("front matter is not a table".to_string());
        };
        return Ok((Metadata::new(map), body));
    }

    if let Some((block, body)) = split_fenced(trimmed, "---")? {
        return Ok((Metadata::new(parse_flat_yaml(block)), body));
    }

    Ok((Metadata::default(), source))
}

/// Returns the text between an opening fence line and the next closing fence line.
fn split_fenced<'a>(input: &'a str, fence: &str) -> Result<Option<(&'a str, &'a str)>, String> {
    let Some(after_open) = input.strip_prefix(fence) else {
        return Ok(None);
    };
    let Some(after_open) = after_open
        .strip_prefix("\r\n")
        .or_else(|| after_open.strip_prefix('\n'))
    else {
        return Ok(None);
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == fence {
            let block = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return Ok(Some((block, body)));
        }
        offset += line.len();
    }

    Err(format!("unclosed front matter (missing closing {})", fence))
}

fn scalar_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_-]+)\s*:\s*(.*?)\s*$").expect("front matter line pattern")
    })
}

fn parse_flat_yaml(block: &str) -> Map<String, Value> {
    let mut map = Map::new();
    for line in block.lines() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        // nested mappings and list items are not card metadata
        if line.starts_with(char::is_whitespace) {
            debug!("skipping nested front matter line: {}", line);
            continue;
        }
        let Some(caps) = scalar_line().captures(line) else {
            debug!("skipping front matter line: {}", line);
            continue;
        };
        map.insert(caps[1].to_string(), Value::String(yaml_scalar(&caps[2])));
    }
    map
}

/// Reads one YAML scalar: double-quoted with escapes, single-quoted with `''`,
/// or plain with a trailing ` # comment` removed.
fn yaml_scalar(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix('"') {
        double_quoted(rest).unwrap_or_else(|| raw.to_string())
    } else if let Some(rest) = raw.strip_prefix('\'') {
        single_quoted(rest).unwrap_or_else(|| raw.to_string())
    } else {
        strip_comment(raw).to_string()
    }
}

/// Content up to the closing quote, escapes resolved. `None` if unterminated.
fn double_quoted(rest: &str) -> Option<String> {
    let mut out = String::with_capacity(rest.len());
    let mut chars = rest.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Some(out),
            '\\' => {
                let escaped = match chars.next()? {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '0' => '\0',
                    ' ' => ' ',
                    '/' => '/',
                    '"' => '"',
                    '\\' => '\\',
                    'x' => hex_char(&mut chars, 2)?,
                    'u' => hex_char(&mut chars, 4)?,
                    'U' => hex_char(&mut chars, 8)?,
                    other => other,
                };
                out.push(escaped);
            }
            _ => out.push(c),
        }
    }
    None
}

fn hex_char(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<char> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.len() != digits {
        return None;
    }
    char::from_u32(u32::from_str_radix(&hex, 16).ok()?)
}

/// Content up to the closing quote, `''` collapsed. `None` if unterminated.
fn single_quoted(rest: &str) -> Option<String> {
    let mut out = String::with_capacity(rest.len());
    let mut chars = rest.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                out.push('\'');
            } else {
                return Some(out);
            }
        } else {
            out.push(c);
        }
    }
    None
}

/// A `#` starts a comment only at the start or after whitespace.
fn strip_comment(plain: &str) -> &str {
    if plain.starts_with('#') {
        return "";
    }
    let cut = plain
        .char_indices()
        .zip(plain.chars().skip(1))
        .find(|((_, c), next)| c.is_whitespace() && *next == '#')
        .map(|((i, _), _)| i);
    match cut {
        Some(i) => plain[..i].trim_end(),
        None => plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_style_front_matter() {
        let src = "---\ntitle: \"Hello World\"\nauthor: Ann Lee\nauthoravatar: 'ann.jpg'\nhero: hero.jpg\ntags:\n  - notes\n---\nBody text here.\n";
        let (meta, body) = parse(src).unwrap();
        assert_eq!(meta.get_str("title").as_deref(), Some("Hello World"));
        assert_eq!(meta.get_str("author").as_deref(), Some("Ann Lee"));
        assert_eq!(meta.get_str("authoravatar").as_deref(), Some("ann.jpg"));
        assert_eq!(meta.get_str("hero").as_deref(), Some("hero.jpg"));
        assert_eq!(meta.get_str("tags").as_deref(), Some(""));
        assert_eq!(body, "Body text here.\n");
    }

    #[test]
    fn toml_front_matter() {
        let src = "+++\ntitle = \"Hello\"\nauthor = \"Ann\"\ndraft = false\n+++\n\nBody";
        let (meta, body) = parse(src).unwrap();
        assert_eq!(meta.get_str("title").as_deref(), Some("Hello"));
        assert_eq!(meta.get_str("draft").as_deref(), Some("false"));
        assert_eq!(body, "\nBody");
    }

    #[test]
    fn no_front_matter_keeps_whole_body() {
        let (meta, body) = parse("Just words.").unwrap();
        assert!(meta.is_empty());
        assert_eq!(body, "Just words.");
    }

    #[test]
    fn unclosed_fence_is_an_error() {
        let err = parse("---\ntitle: x\nno closing fence").unwrap_err();
        assert!(err.contains("unclosed"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = parse("+++\ntitle = \n+++\n").unwrap_err();
        assert!(err.starts_with("invalid TOML"));
    }

    #[test]
    fn crlf_fences() {
        let (meta, body) = parse("---\r\ntitle: Win\r\n---\r\nbody").unwrap();
        assert_eq!(meta.get_str("title").as_deref(), Some("Win"));
        assert_eq!(body, "body");
    }

    #[test]
    fn double_quoted_escapes_are_resolved() {
        let src = "---\ntitle: \"Say \\\"hi\\\" now\"\nauthor: \"Tab\\there \\u00e9\\\\\" # quoted\n---\n";
        let (meta, _) = parse(src).unwrap();
        assert_eq!(meta.get_str("title").as_deref(), Some("Say \"hi\" now"));
        assert_eq!(meta.get_str("author").as_deref(), Some("Tab\there é\\"));
    }

    #[test]
    fn single_quoted_doubled_quote_collapses() {
        let (meta, _) = parse("---\nauthor: 'Don''t Panic'\n---\n").unwrap();
        assert_eq!(meta.get_str("author").as_deref(), Some("Don't Panic"));
    }

    #[test]
    fn plain_values_drop_trailing_comments() {
        let src = "---\nhero: hero.jpg # banner\ntitle: C# in depth\nauthor: # nobody yet\n---\n";
        let (meta, _) = parse(src).unwrap();
        assert_eq!(meta.get_str("hero").as_deref(), Some("hero.jpg"));
        assert_eq!(meta.get_str("title").as_deref(), Some("C# in depth"));
        assert_eq!(meta.get_str("author").as_deref(), Some(""));
    }
}
