use codeforge::commands::handle_task_command;
use codeforge::common::CommonParams;
use codeforge::types::Task;

#[tokio::test]
async fn test_empty_input_short_circuits_before_the_orchestrator() {
    // Whitespace-only input takes the warning path; no config is loaded and
    // no network call is attempted, so this returns immediately.
    let result = handle_task_command(
        CommonParams::default(),
        Task::GenerateCode,
        Some("   \n\t".to_string()),
    )
    .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_empty_input_short_circuits_for_every_task() {
    for task in [
        Task::GenerateCode,
        Task::ExplainCode,
        Task::FixCode,
        Task::GenerateTests,
    ] {
        let result =
            handle_task_command(CommonParams::default(), task, Some(String::new())).await;
        assert!(result.is_ok());
    }
}
