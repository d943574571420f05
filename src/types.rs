//! Core request/response types shared across the crate.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The kinds of assistance a user can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "title_case")]
pub enum Task {
    /// Write new code from a natural-language description
    GenerateCode,
    /// Explain pasted code step by step (prose output, not cleaned)
    ExplainCode,
    /// Fix bugs in pasted code and return the corrected version
    FixCode,
    /// Generate unit tests for pasted code
    GenerateTests,
}

impl Task {
    /// Whether the model output should be post-processed as code
    pub const fn expects_code(self) -> bool {
        !matches!(self, Self::ExplainCode)
    }
}

/// A single user interaction, immutable for its request/response cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Model identifier understood by the inference server
    pub model: String,
    /// What to do with the input
    pub task: Task,
    /// Target programming language (validated against the known set upstream)
    pub language: String,
    /// Free-text prompt or pasted source code
    pub input: String,
}

impl GenerationRequest {
    pub fn new(
        model: impl Into<String>,
        task: Task,
        language: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            task,
            language: language.into(),
            input: input.into(),
        }
    }
}

/// Cleaned model output ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedResult {
    /// Presentable text or code
    pub text: String,
    /// Language label for syntax highlighting
    pub language: String,
}

/// JSON body POSTed to the inference server's generate endpoint
///
/// `stream` is always false: the non-streaming endpoint returns a single
/// JSON object with a `response` field instead of NDJSON chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePayload {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

impl GeneratePayload {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_display() {
        assert_eq!(Task::GenerateCode.to_string(), "Generate Code");
        assert_eq!(Task::ExplainCode.to_string(), "Explain Code");
        assert_eq!(Task::FixCode.to_string(), "Fix Code");
        assert_eq!(Task::GenerateTests.to_string(), "Generate Tests");
    }

    #[test]
    fn test_expects_code() {
        assert!(Task::GenerateCode.expects_code());
        assert!(Task::FixCode.expects_code());
        assert!(Task::GenerateTests.expects_code());
        assert!(!Task::ExplainCode.expects_code());
    }

    #[test]
    fn test_generate_payload_never_streams() {
        let payload = GeneratePayload::new("mistral", "hello");
        assert!(!payload.stream);
        let json = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(json["model"], "mistral");
        assert_eq!(json["prompt"], "hello");
        assert_eq!(json["stream"], false);
    }
}
