//! CodeForge - AI-powered multi-language code assistant
//!
//! This library talks to a locally-running Ollama server to generate, explain,
//! fix, and test code, then heuristically cleans the model's output (markdown
//! fences, filler phrases, stray indentation) before display.

// Allow certain clippy warnings that are either stylistic or from external dependencies
#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::format_push_string)] // Performance improvement but stylistic
#![allow(clippy::items_after_statements)] // Locally-scoped use statements are fine

pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod languages;
pub mod llm;
pub mod logger;
pub mod prompt;
pub mod transport;
pub mod types;
pub mod ui;

// Re-export important structs and functions for easier testing
pub use config::Config;
pub use transport::{InferenceTransport, OllamaTransport, TransportMode};
pub use types::{CleanedResult, GenerationRequest, Task};
