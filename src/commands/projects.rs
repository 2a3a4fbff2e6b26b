//! `list-projects`.

use std::io::Write;

use crate::api::JiraClient;
use crate::error::Result;
use crate::ui::Theme;

/// Print every visible project as `KEY name`, one per line.
pub async fn list_projects(client: &JiraClient, theme: &Theme, out: &mut dyn Write) -> Result<()> {
    for project in client.list_projects().await? {
        writeln!(out, "{} {}", theme.title.apply_to(&project.key), project)?;
    }
    Ok(())
}
