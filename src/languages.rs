//! Static language knowledge: the profile table and the detection heuristic.
//!
//! The table is an explicitly ordered sequence, not a map. Detection is
//! first-match-wins over this order, so a text containing patterns from two
//! languages resolves to whichever is listed first. That tie-break is a
//! deliberate policy choice and test expectations depend on it.

/// Per-language lookup data: file extension plus line-start patterns that
/// heuristically indicate the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    pub name: &'static str,
    pub extension: &'static str,
    pub start_patterns: &'static [&'static str],
}

/// Language assumed when detection finds nothing
pub const DEFAULT_LANGUAGE: &str = "python";

/// The closed set of languages this crate knows about, in enumeration order.
///
/// Entries with no start patterns (markup, query, and shell languages, plus
/// the `c++` spelling alias) participate only in the extension scan.
pub static LANGUAGE_PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        name: "python",
        extension: "py",
        start_patterns: &["def ", "class ", "import ", "from ", "async def ", "@", "print("],
    },
    LanguageProfile {
        name: "java",
        extension: "java",
        start_patterns: &["public class ", "class ", "import ", "public static void", "private "],
    },
    LanguageProfile {
        name: "javascript",
        extension: "js",
        start_patterns: &["function ", "const ", "let ", "var ", "export ", "import ", "console."],
    },
    LanguageProfile {
        name: "typescript",
        extension: "ts",
        start_patterns: &[
            "function ",
            "const ",
            "let ",
            "var ",
            "export ",
            "import ",
            "interface ",
            "type ",
        ],
    },
    LanguageProfile {
        name: "c",
        extension: "c",
        start_patterns: &["#include", "int main", "void ", "struct ", "typedef "],
    },
    LanguageProfile {
        name: "cpp",
        extension: "cpp",
        start_patterns: &["#include", "int main", "void ", "class ", "namespace ", "template<"],
    },
    LanguageProfile {
        name: "c++",
        extension: "cpp",
        start_patterns: &[],
    },
    LanguageProfile {
        name: "go",
        extension: "go",
        start_patterns: &["package ", "func ", "import ", "var ", "const ", "type "],
    },
    LanguageProfile {
        name: "rust",
        extension: "rs",
        start_patterns: &["fn ", "struct ", "enum ", "impl ", "use ", "mod ", "pub "],
    },
    LanguageProfile {
        name: "ruby",
        extension: "rb",
        start_patterns: &["def ", "class ", "module ", "require ", "include "],
    },
    LanguageProfile {
        name: "php",
        extension: "php",
        start_patterns: &["<?php", "function ", "class ", "namespace ", "use "],
    },
    LanguageProfile {
        name: "swift",
        extension: "swift",
        start_patterns: &["func ", "class ", "struct ", "enum ", "import ", "var ", "let "],
    },
    LanguageProfile {
        name: "kotlin",
        extension: "kt",
        start_patterns: &["fun ", "class ", "import ", "val ", "var ", "object "],
    },
    LanguageProfile {
        name: "scala",
        extension: "scala",
        start_patterns: &["def ", "class ", "object ", "import ", "val ", "var "],
    },
    LanguageProfile {
        name: "html",
        extension: "html",
        start_patterns: &[],
    },
    LanguageProfile {
        name: "css",
        extension: "css",
        start_patterns: &[],
    },
    LanguageProfile {
        name: "sql",
        extension: "sql",
        start_patterns: &[],
    },
    LanguageProfile {
        name: "bash",
        extension: "sh",
        start_patterns: &[],
    },
    LanguageProfile {
        name: "shell",
        extension: "sh",
        start_patterns: &[],
    },
];

/// Look up a profile by name, case-insensitively
pub fn profile(name: &str) -> Option<&'static LanguageProfile> {
    let lower = name.to_lowercase();
    LANGUAGE_PROFILES.iter().find(|p| p.name == lower)
}

/// Whether a language name is in the known set
pub fn is_known(name: &str) -> bool {
    profile(name).is_some()
}

/// Start patterns for a language, falling back to the default heuristic
/// profile when the language is unknown or has no patterns of its own
pub fn start_patterns(language: &str) -> &'static [&'static str] {
    match profile(language) {
        Some(p) if !p.start_patterns.is_empty() => p.start_patterns,
        _ => default_patterns(),
    }
}

fn default_patterns() -> &'static [&'static str] {
    LANGUAGE_PROFILES
        .iter()
        .find(|p| p.name == DEFAULT_LANGUAGE)
        .map_or(&[], |p| p.start_patterns)
}

/// Guess which programming language a text most likely represents.
///
/// Scans start patterns in table order, then literal dot-extension tokens,
/// and defaults to python. Case-insensitive on the haystack.
pub fn detect(text: &str) -> &'static str {
    let haystack = text.to_lowercase();

    for profile in LANGUAGE_PROFILES {
        if profile
            .start_patterns
            .iter()
            .any(|pattern| haystack.contains(pattern))
        {
            return profile.name;
        }
    }

    for profile in LANGUAGE_PROFILES {
        if haystack.contains(&format!(".{}", profile.extension)) {
            return profile.name;
        }
    }

    DEFAULT_LANGUAGE
}

/// Language names offered by the interactive surface
pub fn selectable_names() -> Vec<&'static str> {
    LANGUAGE_PROFILES.iter().map(|p| p.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lookup_is_case_insensitive() {
        assert!(profile("Python").is_some());
        assert!(profile("RUST").is_some());
        assert!(profile("cobol").is_none());
    }

    #[test]
    fn test_unknown_language_falls_back_to_python_patterns() {
        assert_eq!(start_patterns("cobol"), start_patterns("python"));
    }

    #[test]
    fn test_pattern_free_language_falls_back_to_python_patterns() {
        assert_eq!(start_patterns("sql"), start_patterns("python"));
    }

    #[test]
    fn test_cpp_alias_shares_extension() {
        let alias = profile("c++").expect("c++ alias should exist");
        let canonical = profile("cpp").expect("cpp should exist");
        assert_eq!(alias.extension, canonical.extension);
    }
}
