//! Command-line surface.
//!
//! Each mode is a variant of [`Command`] and carries its options as named
//! fields, so dispatch is a plain `match`.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

/// Option summary appended to the help text.
const MODES_HELP: &str = "\
Modes:
  list-projects
  list-issues           -p <project> [-o <field>] [-m <number>]
  show-issue            -i <issue-key>
  download-attachments  -p <project> [-o <field>] [-m <number>] [-d <dir>]

Options:
  -p, --project <project>       project key (list-issues, download-attachments)
  -o, --order-by <field>        ordering field, default \"created\"
  -m, --max-results <number>    maximum number of issues, default 10
  -i, --issue-key <issue-key>   issue key (show-issue)
  -d, --dir <dir>               download directory, default \".\"";

/// A command-line client for JIRA.
#[derive(Debug, Parser)]
#[command(name = "coolover", version, about, after_help = MODES_HELP)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The mode to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// The available modes.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List all projects
    ListProjects,

    /// List issues of a project
    ListIssues(IssueQuery),

    /// Show a single issue
    ShowIssue {
        /// Issue key, e.g. ABC-123
        #[arg(short = 'i', long, value_name = "ISSUE-KEY")]
        issue_key: String,
    },

    /// Download the attachments of a project's issues
    DownloadAttachments {
        #[command(flatten)]
        query: IssueQuery,

        /// Directory to write attachments to
        #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
}

/// Options selecting the issues of a project.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct IssueQuery {
    /// Project key
    #[arg(short = 'p', long, value_name = "PROJECT")]
    pub project: String,

    /// Field to order issues by
    #[arg(short = 'o', long, value_name = "FIELD", default_value = "created")]
    pub order_by: String,

    /// Maximum number of issues to return
    #[arg(short = 'm', long, value_name = "NUMBER", default_value_t = 10)]
    pub max_results: u32,
}

impl Command {
    /// The mode name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::ListProjects => "list-projects",
            Command::ListIssues(_) => "list-issues",
            Command::ShowIssue { .. } => "show-issue",
            Command::DownloadAttachments { .. } => "download-attachments",
        }
    }
}

/// Usage text: modes, option summary and, if given, the error that led here.
///
/// A rendered clap error carries its own `Usage:` and `--help` lines; only
/// the message above them is kept.
pub fn usage(error: Option<&str>) -> String {
    let help = Cli::command().render_help().to_string();
    match error.map(error_message) {
        Some(error) if !error.is_empty() => format!("{}\n\n{}", help.trim_end(), error),
        _ => help.trim_end().to_string(),
    }
}

/// The part of a rendered clap error before its usage section.
fn error_message(rendered: &str) -> String {
    rendered
        .lines()
        .take_while(|line| !line.starts_with("Usage:") && !line.starts_with("For more information"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}
