use crate::commands;
use crate::common::CommonParams;
use crate::languages;
use crate::log_debug;
use crate::types::Task;
use crate::ui;
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, crate_version};
use colored::Colorize;

const LOG_FILE: &str = "codeforge-debug.log";

/// CLI structure defining the available commands and global arguments
#[derive(Parser)]
#[command(
    author,
    version = crate_version!(),
    about = "CodeForge: AI-powered multi-language code assistant",
    long_about = "CodeForge talks to a locally-running Ollama server to generate, explain, fix, and test code in a range of programming languages.",
    disable_version_flag = true,
    after_help = get_dynamic_help(),
    styles = get_styles(),
)]
pub struct Cli {
    /// Subcommands available for the CLI
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log debug messages to a file
    #[arg(
        short = 'l',
        long = "log",
        global = true,
        help = "Log debug messages to a file"
    )]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(
        long = "log-file",
        global = true,
        help = "Specify a custom log file path"
    )]
    pub log_file: Option<String>,

    /// Suppress non-essential output (spinners, status messages, etc.)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress non-essential output"
    )]
    pub quiet: bool,

    /// Display the version
    #[arg(
        short = 'v',
        long = "version",
        global = true,
        help = "Display the version"
    )]
    pub version: bool,
}

/// Enumeration of available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate code from a natural-language description
    #[command(
        about = "Generate code from a description",
        long_about = "Generate code in the target language from a natural-language description. Reads the description from the argument or stdin."
    )]
    Generate {
        #[command(flatten)]
        common: CommonParams,

        /// Description of the code to generate (stdin when omitted)
        input: Option<String>,
    },

    /// Explain pasted code step by step
    #[command(
        about = "Explain code step by step",
        long_about = "Ask the model for a step-by-step explanation of the given code. Output is rendered as prose."
    )]
    Explain {
        #[command(flatten)]
        common: CommonParams,

        /// Code to explain (stdin when omitted)
        input: Option<String>,
    },

    /// Fix bugs in pasted code
    #[command(
        about = "Fix bugs in code",
        long_about = "Ask the model to fix bugs in the given code and return the corrected version only."
    )]
    Fix {
        #[command(flatten)]
        common: CommonParams,

        /// Code to fix (stdin when omitted)
        input: Option<String>,
    },

    /// Generate unit tests for pasted code
    #[command(
        about = "Generate unit tests for code",
        long_about = "Ask the model to generate unit tests in the target language for the given code."
    )]
    Tests {
        #[command(flatten)]
        common: CommonParams,

        /// Code to write tests for (stdin when omitted)
        input: Option<String>,
    },

    /// Display or update the configuration
    #[command(about = "Display or update the configuration")]
    Config {
        #[command(flatten)]
        common: CommonParams,

        /// Print the current configuration
        #[arg(short, long, help = "Print the current configuration")]
        print: bool,
    },

    /// List the known languages
    #[command(about = "List the known languages")]
    Languages,
}

/// Define custom styles for Clap
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Generate dynamic help including the known languages
fn get_dynamic_help() -> String {
    let languages_list = languages::selectable_names()
        .iter()
        .map(|l| format!("{}", l.bold()))
        .collect::<Vec<_>>()
        .join(" • ");

    format!("\nKnown languages: {languages_list}")
}

/// Main function to parse arguments and handle the command
pub async fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    if cli.version {
        ui::print_version(crate_version!());
        return Ok(());
    }

    let _ = crate::logger::init();

    if cli.log {
        crate::logger::enable_logging();
        let log_file = cli.log_file.as_deref().unwrap_or(LOG_FILE);
        crate::logger::set_log_file(log_file)?;
        log_debug!("Debug logging enabled");
    } else {
        crate::logger::disable_logging();
    }

    if cli.quiet {
        ui::set_quiet_mode(true);
    }

    if let Some(command) = cli.command {
        handle_command(command).await
    } else {
        // If no subcommand is provided, print the help
        let _ = Cli::parse_from(["codeforge", "--help"]);
        Ok(())
    }
}

/// Handle the command based on parsed arguments
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Generate { common, input } => {
            commands::handle_task_command(common, Task::GenerateCode, input).await
        }
        Commands::Explain { common, input } => {
            commands::handle_task_command(common, Task::ExplainCode, input).await
        }
        Commands::Fix { common, input } => {
            commands::handle_task_command(common, Task::FixCode, input).await
        }
        Commands::Tests { common, input } => {
            commands::handle_task_command(common, Task::GenerateTests, input).await
        }
        Commands::Config { common, print } => commands::handle_config_command(&common, print),
        Commands::Languages => {
            commands::handle_languages_command();
            Ok(())
        }
    }
}
