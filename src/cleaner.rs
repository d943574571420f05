//! Heuristic cleanup of raw model responses.
//!
//! Models routinely wrap code in markdown fences and conversational filler
//! even when told not to. Each step here is a best-effort text transform;
//! none of them can fail the request.

use crate::languages;
use crate::types::CleanedResult;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// Matches lines that are nothing but a fence marker, with or without a
// trailing language tag
static FENCE_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^```.*$").expect("Should compile: FENCE_LINE_RE"));

/// Conversational scaffolding stripped from responses. Only the first
/// occurrence of each phrase is cut; everything before it is discarded.
const INTRO_PHRASES: &[&str] = &[
    "Here is the code:",
    "Here is the Python code:",
    "Here is the Java code:",
    "Here is the JavaScript code:",
    "Here's the code:",
    "Here's the solution:",
    "The code is:",
    "Sure, here is the",
    "Certainly! Here is the",
];

/// Pull the generation text out of an inference-server payload.
///
/// Structured payloads carry the text in a `response` (or `text`) field;
/// anything else is stringified as-is.
pub fn extract_text(payload: &Value) -> String {
    match payload {
        Value::Object(map) => map
            .get("response")
            .or_else(|| map.get("text"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Transform a raw model response into presentable code.
///
/// Uses `language` to pick cleaning heuristics when given, otherwise runs
/// detection on the text itself. Returns the cleaned text together with the
/// language label used.
pub fn clean(raw: &str, language: Option<&str>) -> CleanedResult {
    let mut text = raw.trim().to_string();

    let language = match language {
        Some(lang) if !lang.trim().is_empty() => lang.to_lowercase(),
        _ => languages::detect(&text).to_string(),
    };

    if let Some(unescaped) = unescape_literals(&text) {
        text = unescaped;
    }

    text = extract_fenced_block(&text);
    text = strip_intro_phrases(&text);
    text = skip_to_code_start(&text, &language);
    text = FENCE_LINE_RE.replace_all(&text, "").trim().to_string();
    text = reindent(&text);

    CleanedResult { text, language }
}

/// Best-effort decoding of backslash-escaped sequences (a literal `\n`
/// becomes a newline). Unknown escapes are kept verbatim; a trailing lone
/// backslash aborts the whole step and the caller keeps the original text.
fn unescape_literals(text: &str) -> Option<String> {
    if !text.contains('\\') {
        return None;
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => return None,
        }
    }
    Some(out)
}

/// Take the content of the first triple-backtick fenced block, stripping a
/// leading bare language-name token when it matches a known profile key.
fn extract_fenced_block(text: &str) -> String {
    if !text.contains("```") {
        return text.to_string();
    }

    let Some(block) = text.split("```").nth(1) else {
        return text.to_string();
    };

    let mut block = block.to_string();
    for profile in languages::LANGUAGE_PROFILES {
        if block.starts_with(profile.name) {
            block = block[profile.name.len()..].trim().to_string();
            break;
        }
    }
    block
}

fn strip_intro_phrases(text: &str) -> String {
    let mut text = text.to_string();
    for phrase in INTRO_PHRASES {
        if let Some(idx) = text.find(phrase) {
            text = text[idx + phrase.len()..].trim().to_string();
        }
    }
    text
}

/// Discard everything before the first line that starts with one of the
/// language's start patterns. No match keeps the text untouched.
fn skip_to_code_start(text: &str, language: &str) -> String {
    let patterns = languages::start_patterns(language);
    let lines: Vec<&str> = text.split('\n').collect();

    let code_start = lines
        .iter()
        .position(|line| {
            let trimmed = line.trim_start();
            patterns.iter().any(|pattern| trimmed.starts_with(pattern))
        })
        .unwrap_or(0);

    lines[code_start..].join("\n")
}

/// Strip the minimum leading-whitespace width shared by all non-blank lines,
/// preserving blank lines and relative indentation.
fn reindent(text: &str) -> String {
    let min_indent = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    if min_indent == 0 {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                line.chars().skip(min_indent).collect()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_known_sequences() {
        assert_eq!(
            unescape_literals(r"def f():\n    pass").as_deref(),
            Some("def f():\n    pass")
        );
    }

    #[test]
    fn test_unescape_keeps_unknown_escapes() {
        assert_eq!(unescape_literals(r"a\qb").as_deref(), Some(r"a\qb"));
    }

    #[test]
    fn test_unescape_trailing_backslash_is_a_no_op() {
        assert!(unescape_literals("broken\\").is_none());
    }

    #[test]
    fn test_reindent_preserves_blank_lines() {
        let text = "    a\n\n    b";
        assert_eq!(reindent(text), "a\n\nb");
    }
}
