use codeforge::languages::{DEFAULT_LANGUAGE, LANGUAGE_PROFILES, detect, start_patterns};

#[test]
fn test_every_pattern_bearing_language_is_detectable() {
    // A text consisting of just a language's start pattern must map back to
    // that language, unless an earlier entry also claims the pattern
    // (enumeration order is the documented tie-break).
    for (idx, profile) in LANGUAGE_PROFILES.iter().enumerate() {
        for pattern in profile.start_patterns {
            let claimed_earlier = LANGUAGE_PROFILES[..idx].iter().any(|earlier| {
                earlier
                    .start_patterns
                    .iter()
                    .any(|other| pattern.contains(other))
            });
            if claimed_earlier {
                continue;
            }

            assert_eq!(
                detect(pattern),
                profile.name,
                "pattern {pattern:?} should detect as {}",
                profile.name
            );
        }
    }
}

#[test]
fn test_detection_is_first_match_wins() {
    // "class " belongs to python (first) and java (second); python wins
    assert_eq!(detect("class Widget:"), "python");
    // "import " is shared by python, java, javascript...; python wins
    assert_eq!(detect("import java.util.List;"), "python");
}

#[test]
fn test_detects_distinctive_patterns() {
    assert_eq!(detect("fn main() {\n    println!(\"hi\");\n}"), "rust");
    assert_eq!(detect("fun main() = greet()"), "kotlin");
    assert_eq!(detect("public static void main(String[] args)"), "java");
    assert_eq!(detect("#include <stdio.h>"), "c");
    assert_eq!(detect("package main\nfunc run() {}"), "go");
    assert_eq!(detect("<?php echo 'hi';"), "php");
}

#[test]
fn test_detection_is_case_insensitive_on_the_haystack() {
    assert_eq!(detect("DEF shout():"), "python");
    assert_eq!(detect("FN MAIN() {}"), "rust");
}

#[test]
fn test_extension_fallback() {
    assert_eq!(detect("open the file notes.kt please"), "kotlin");
    assert_eq!(detect("something about app.rb here"), "ruby");
}

#[test]
fn test_extension_scan_is_substring_based() {
    // ".c" is enumerated before ".css" and the scan looks for substrings,
    // so C claims stylesheet file names. Kept behavior; the tie-break order
    // is part of the contract.
    assert_eq!(detect("styles live in theme.css"), "c");
}

#[test]
fn test_default_is_python() {
    assert_eq!(detect("nothing recognizable here"), DEFAULT_LANGUAGE);
    assert_eq!(detect(""), DEFAULT_LANGUAGE);
}

#[test]
fn test_unknown_language_uses_default_patterns() {
    assert_eq!(start_patterns("brainfuck"), start_patterns(DEFAULT_LANGUAGE));
}
