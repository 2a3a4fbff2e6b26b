//! Mode handlers.
//!
//! [`execute`] maps a parsed [`Command`] to its handler. Handlers write to
//! the given writer and share one client; they never retry.

mod download;
mod issues;
mod projects;

use std::io::Write;

use tracing::{info, instrument};

use crate::api::JiraClient;
use crate::cli::Command;
use crate::error::Result;
use crate::ui::Theme;

/// Run `command` against `client`, writing its output to `out`.
#[instrument(skip_all, fields(mode = command.name()))]
pub async fn execute(
    command: &Command,
    client: &JiraClient,
    theme: &Theme,
    out: &mut dyn Write,
) -> Result<()> {
    info!("Running mode");
    match command {
        Command::ListProjects => projects::list_projects(client, theme, out).await,
        Command::ListIssues(query) => issues::list_issues(client, query, theme, out).await,
        Command::ShowIssue { issue_key } => {
            issues::show_issue(client, issue_key, theme, out).await
        }
        Command::DownloadAttachments { query, dir } => {
            download::download_attachments(client, query, dir, out).await
        }
    }
}
