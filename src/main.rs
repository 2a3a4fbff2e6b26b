//! coolover - a command-line client for JIRA.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use clap::{error::ErrorKind, Parser};
use tracing::error;

use coolover::api::JiraClient;
use coolover::cli::{self, Cli, Command};
use coolover::commands;
use coolover::config::Configuration;
use coolover::error::AppError;
use coolover::logging;
use coolover::ui::Theme;

/// Exit status for usage errors.
const USAGE_EXIT_CODE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("{}", cli::usage(Some(&e.to_string())));
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    let Some(command) = cli.command else {
        eprintln!("{}", cli::usage(None));
        return ExitCode::from(USAGE_EXIT_CODE);
    };

    let _log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    };

    let theme = Theme::for_stdout(cli.no_color);
    match run(&command, cli.config.as_deref(), &theme).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, mode = command.name(), "Command failed");
            eprintln!("error: {}", e.user_message());
            if let Some(hint) = e.suggested_action() {
                eprintln!("hint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

/// Load the configuration, build the client and run the mode.
async fn run(command: &Command, config_path: Option<&Path>, theme: &Theme) -> Result<(), AppError> {
    let config = Configuration::load(config_path)?;
    let client = JiraClient::new(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(command, &client, theme, &mut out).await?;
    out.flush()?;
    Ok(())
}
