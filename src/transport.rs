//! Delivery of prompts to the local inference server.
//!
//! Two integration modes: the native `llm` crate client (preferred) and a
//! direct HTTP POST to the generate endpoint. Which one runs is decided by
//! a process-wide probe recorded once at startup, overridable via config.

use crate::log_debug;
use crate::types::GeneratePayload;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use llm::{
    builder::{LLMBackend, LLMBuilder},
    chat::ChatMessage,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Base URL of the local inference server
pub const DEFAULT_API_BASE: &str = "http://localhost:11434";
/// Model used when the user does not name one
pub const DEFAULT_MODEL: &str = "mistral";

/// Transport selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Probe for the native client once at startup and use it if available
    #[default]
    Auto,
    /// Always use the native client
    Native,
    /// Always POST directly to the HTTP endpoint
    Http,
}

impl TransportMode {
    pub const ALL: &'static [TransportMode] =
        &[TransportMode::Auto, TransportMode::Native, TransportMode::Http];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Native => "native",
            Self::Http => "http",
        }
    }
}

impl FromStr for TransportMode {
    type Err = TransportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .find(|m| m.name() == lower)
            .copied()
            .ok_or_else(|| TransportError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Transport configuration error
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Unknown transport mode: {0}. Supported: auto, native, http")]
    UnknownMode(String),
}

static NATIVE_CLIENT_AVAILABLE: OnceLock<bool> = OnceLock::new();

/// Whether the native client can be constructed in this environment.
///
/// Probed once per process; the result is read-only afterwards.
pub fn native_client_available() -> bool {
    *NATIVE_CLIENT_AVAILABLE.get_or_init(|| {
        let available = LLMBuilder::new()
            .backend(LLMBackend::Ollama)
            .model(DEFAULT_MODEL.to_string())
            .build()
            .is_ok();
        log_debug!("Native client probe: available={}", available);
        available
    })
}

/// Seam between the orchestrator and the inference collaborator.
///
/// The orchestrator only needs one entry point; tests substitute canned or
/// failing implementations through this trait.
#[async_trait]
pub trait InferenceTransport: Send + Sync {
    /// Deliver a prompt and return the raw payload: either the server's JSON
    /// object (carrying a `response` field) or a plain string body.
    async fn generate(&self, model: &str, prompt: &str) -> Result<Value>;
}

/// Production transport speaking to a local Ollama server
pub struct OllamaTransport {
    api_base: String,
    mode: TransportMode,
}

impl OllamaTransport {
    pub fn new(api_base: impl Into<String>, mode: TransportMode) -> Self {
        Self {
            api_base: api_base.into(),
            mode,
        }
    }

    fn use_native(&self) -> bool {
        match self.mode {
            TransportMode::Native => true,
            TransportMode::Http => false,
            TransportMode::Auto => native_client_available(),
        }
    }

    /// Call the generation entry point of the native client library
    async fn native_generate(&self, model: &str, prompt: &str) -> Result<Value> {
        let provider = LLMBuilder::new()
            .backend(LLMBackend::Ollama)
            .base_url(self.api_base.clone())
            .model(model.to_string())
            .build()
            .map_err(|e| anyhow!("Failed to build native client: {}", e))?;

        let messages = vec![ChatMessage::user().content(prompt.to_string()).build()];

        match provider.chat(&messages).await {
            Ok(response) => Ok(Value::String(response.text().unwrap_or_default())),
            Err(e) => Err(anyhow!("Native client error: {}", e)),
        }
    }

    /// Fallback: POST directly to the generate endpoint
    async fn http_generate(&self, model: &str, prompt: &str) -> Result<Value> {
        let url = format!("{}/api/generate", self.api_base);
        let payload = GeneratePayload::new(model, prompt);

        log_debug!("POST {} model={}", url, model);

        let response = reqwest::Client::new()
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| anyhow!("HTTP request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Inference server returned {}", status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read response body: {}", e))?;

        // The server normally answers with JSON; keep a non-JSON body as-is
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok(value),
            Err(_) => Ok(Value::String(body)),
        }
    }
}

#[async_trait]
impl InferenceTransport for OllamaTransport {
    async fn generate(&self, model: &str, prompt: &str) -> Result<Value> {
        if self.use_native() {
            log_debug!("Dispatching via native client");
            self.native_generate(model, prompt).await
        } else {
            log_debug!("Dispatching via HTTP fallback");
            self.http_generate(model, prompt).await
        }
    }
}
