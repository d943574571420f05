//! Generation orchestration: prompt assembly, transport dispatch, cleanup.
//!
//! This is the only place transport failures are absorbed. The UI always
//! receives a well-formed result, even when the inference server is down.

use crate::cleaner;
use crate::config::Config;
use crate::log_debug;
use crate::prompt;
use crate::transport::{InferenceTransport, OllamaTransport};
use crate::types::{CleanedResult, GenerationRequest};

/// Prefix on synthesized output when the inference call fails
pub const ERROR_PREFIX: &str = "[Error calling inference]";

/// Run one request/response cycle against the configured transport
pub async fn generate_assistance(config: &Config, request: &GenerationRequest) -> CleanedResult {
    let transport = OllamaTransport::new(config.api_base.clone(), config.transport);
    generate_with_transport(&transport, request).await
}

/// Run one request/response cycle with the given transport (mainly for
/// testing purposes).
///
/// Code-producing tasks go through the response cleaner; explain requests
/// return the model's prose untouched. A transport failure becomes a
/// labeled error string paired with the originally requested language.
pub async fn generate_with_transport(
    transport: &dyn InferenceTransport,
    request: &GenerationRequest,
) -> CleanedResult {
    let final_prompt = prompt::build_prompt(request);
    log_debug!("Task: {}", request.task);
    log_debug!("Prompt: {}", final_prompt);

    match transport.generate(&request.model, &final_prompt).await {
        Ok(payload) => {
            let text = cleaner::extract_text(&payload);
            if request.task.expects_code() {
                cleaner::clean(&text, Some(&request.language))
            } else {
                CleanedResult {
                    text,
                    language: request.language.clone(),
                }
            }
        }
        Err(e) => {
            log_debug!("Inference call failed: {}", e);
            CleanedResult {
                text: format!("{ERROR_PREFIX}: {e}"),
                language: request.language.clone(),
            }
        }
    }
}
