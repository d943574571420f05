use crate::common::CommonParams;
use crate::config::Config;
use crate::languages;
use crate::llm;
use crate::log_debug;
use crate::types::{GenerationRequest, Task};
use crate::ui;
use anyhow::Result;
use colored::Colorize;

/// Run a single generation task: collect input, validate, call the
/// orchestrator, render the result.
pub async fn handle_task_command(
    common: CommonParams,
    task: Task,
    input: Option<String>,
) -> Result<()> {
    let user_input = read_input(input)?;

    // Empty input never reaches the orchestrator
    if user_input.trim().is_empty() {
        ui::print_warning("Please enter a prompt or code");
        return Ok(());
    }

    let mut config = Config::load()?;
    common.apply_to_config(&mut config);

    let request = GenerationRequest::new(
        config.default_model.clone(),
        task,
        config.default_language.clone(),
        user_input,
    );

    log_debug!(
        "Handling task {} (model={}, language={})",
        task,
        request.model,
        request.language
    );
    ui::print_info(&format!(
        "Running {} with model {} for {}...",
        task, request.model, request.language
    ));

    let spinner = ui::create_spinner("Waiting for the model...");
    let result = llm::generate_assistance(&config, &request).await;
    spinner.finish_and_clear();

    ui::render_result(&result, task);
    Ok(())
}

/// Display or update the persisted configuration
pub fn handle_config_command(common: &CommonParams, print: bool) -> Result<()> {
    let mut config = Config::load()?;

    if print || common.is_empty() {
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    config.update(
        common.model.clone(),
        common.api_base.clone(),
        common.language.clone(),
        common.transport,
    )?;
    config.save()?;

    ui::print_success("Configuration updated");
    Ok(())
}

/// List the known languages with their file extensions
pub fn handle_languages_command() {
    for profile in languages::LANGUAGE_PROFILES {
        println!("{} (.{})", profile.name.bold(), profile.extension);
    }
}

/// Take the input from the argument, or read it from stdin
fn read_input(input: Option<String>) -> Result<String> {
    match input {
        Some(text) => Ok(text),
        None => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}
