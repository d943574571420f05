use codeforge::cleaner::{clean, extract_text};
use serde_json::json;

#[test]
fn test_fence_stripping_golden_case() {
    let raw = "Here is the code:\n```python\ndef f():\n    return 1\n```";
    let result = clean(raw, Some("python"));
    assert_eq!(result.text, "def f():\n    return 1");
    assert_eq!(result.language, "python");
}

#[test]
fn test_fenced_block_language_token_is_stripped() {
    let raw = "```rust\nfn main() {}\n```";
    let result = clean(raw, None);
    assert_eq!(result.text, "fn main() {}");
    assert_eq!(result.language, "rust");
}

#[test]
fn test_intro_phrase_is_stripped() {
    let raw = "Sure, here is the function you asked for:\ndef f():\n    return 1";
    let result = clean(raw, Some("python"));
    assert_eq!(result.text, "def f():\n    return 1");
}

#[test]
fn test_lines_before_code_start_are_discarded() {
    let raw = "The model thought out loud first.\nMore chatter.\ndef f():\n    return 1";
    let result = clean(raw, Some("python"));
    assert_eq!(result.text, "def f():\n    return 1");
}

#[test]
fn test_no_code_start_keeps_text_as_is() {
    let raw = "SELECT * FROM users;";
    let result = clean(raw, Some("sql"));
    // sql has no patterns of its own; the fallback patterns do not match
    // either, so the text survives untouched
    assert_eq!(result.text, "SELECT * FROM users;");
    assert_eq!(result.language, "sql");
}

#[test]
fn test_escaped_newlines_are_normalized() {
    let raw = r"def f():\n    return 1";
    let result = clean(raw, Some("python"));
    assert_eq!(result.text, "def f():\n    return 1");
}

#[test]
fn test_unclosed_fence_still_yields_the_code() {
    let raw = "Some chatter first.\n```\ndef f():\n    return 1";
    let result = clean(raw, Some("python"));
    assert_eq!(result.text, "def f():\n    return 1");
}

#[test]
fn test_cleaning_is_idempotent_on_clean_output() {
    let raw = "Here is the code:\n```python\ndef f():\n    x = 1\n    return x\n```";
    let first = clean(raw, Some("python"));
    let second = clean(&first.text, Some("python"));
    assert_eq!(first, second);
}

#[test]
fn test_detection_runs_when_no_language_is_supplied() {
    let result = clean("fun greet() = 42", None);
    assert_eq!(result.language, "kotlin");
}

#[test]
fn test_supplied_language_is_normalized_to_lowercase() {
    let result = clean("def f():\n    return 1", Some("Python"));
    assert_eq!(result.language, "python");
}

#[test]
fn test_extract_text_prefers_response_field() {
    let payload = json!({"response": "hello", "text": "ignored"});
    assert_eq!(extract_text(&payload), "hello");
}

#[test]
fn test_extract_text_falls_back_to_text_field() {
    let payload = json!({"text": "hello"});
    assert_eq!(extract_text(&payload), "hello");
}

#[test]
fn test_extract_text_passes_strings_through() {
    let payload = json!("raw body");
    assert_eq!(extract_text(&payload), "raw body");
}

#[test]
fn test_extract_text_on_missing_fields_is_empty() {
    let payload = json!({"done": true});
    assert_eq!(extract_text(&payload), "");
}

#[test]
fn test_relative_indentation_is_preserved() {
    let raw = "Here is the code:\n```python\ndef f():\n    if True:\n        return 1\n```";
    let result = clean(raw, Some("python"));
    assert_eq!(result.text, "def f():\n    if True:\n        return 1");
}
