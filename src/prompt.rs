//! Prompt construction for each assistance task.
//!
//! Pure functions of the request plus the static instruction tables; the
//! exact string sent to the inference server is deterministic.

use crate::types::{GenerationRequest, Task};

/// Language-specific convention hint appended to the system instruction
fn convention_hint(language: &str) -> &'static str {
    match language.to_lowercase().as_str() {
        "python" => "Ensure the code has proper Python indentation (4 spaces).",
        "java" => "Ensure the code follows Java conventions with proper braces and indentation.",
        "javascript" => "Ensure the code follows JavaScript/ES6+ conventions.",
        "typescript" => {
            "Ensure the code follows TypeScript conventions with proper type annotations."
        }
        "c" => "Ensure the code follows C programming conventions.",
        "cpp" | "c++" => {
            "Ensure the code follows C++ conventions with proper includes and namespaces."
        }
        "go" => "Ensure the code follows Go conventions with proper package declaration.",
        "rust" => "Ensure the code follows Rust conventions with proper ownership patterns.",
        "ruby" => "Ensure the code follows Ruby conventions with proper indentation.",
        "php" => "Ensure the code follows PHP conventions with proper <?php tags.",
        "swift" => "Ensure the code follows Swift conventions.",
        "kotlin" => "Ensure the code follows Kotlin conventions.",
        "scala" => "Ensure the code follows Scala conventions.",
        _ => "Ensure the code has proper indentation and follows language conventions.",
    }
}

/// Strict raw-code-only framing used by every code-producing task
fn system_instruction(language: &str) -> String {
    format!(
        "IMPORTANT: You are a {language} coding assistant. \
         You MUST return ONLY the complete raw code without any explanation, comments, or markdown fences. \
         DO NOT add any introductory text like 'Here is the code'. \
         DO NOT use ``` markers. \
         JUST output the raw code and nothing else. \
         {hint}",
        hint = convention_hint(language)
    )
}

/// Build the exact prompt string for a request.
///
/// Explain requests ask for prose and get no anti-markdown framing; the
/// other tasks demand raw code and carry the language convention hint.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let language = &request.language;
    let input = &request.input;

    match request.task {
        Task::GenerateCode => format!(
            "{}\n\nWrite {language} code for: {input}",
            system_instruction(language)
        ),
        Task::ExplainCode => {
            format!("Explain the following {language} code step by step:\n\n{input}")
        }
        Task::FixCode => format!(
            "{}\n\nFix bugs in the following {language} code and return the corrected version only:\n\n{input}",
            system_instruction(language)
        ),
        Task::GenerateTests => format!(
            "{}\n\nGenerate unit tests in {language} for the following code:\n\n{input}",
            system_instruction(language)
        ),
    }
}
