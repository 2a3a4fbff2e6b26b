//! `download-attachments`.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::api::{build_query, JiraClient};
use crate::attachments;
use crate::cli::IssueQuery;
use crate::error::Result;

/// Search a project's issues and save their attachments under `dir`.
///
/// Prints each written path.
pub async fn download_attachments(
    client: &JiraClient,
    query: &IssueQuery,
    dir: &Path,
    out: &mut dyn Write,
) -> Result<()> {
    let jql = build_query(&[("project", query.project.as_str())], &query.order_by);
    let result = client.search_issues(&jql, query.max_results).await?;

    let written = attachments::download_attachments(client, &result.issues, dir).await?;
    for path in &written {
        writeln!(out, "{}", path.display())?;
    }

    info!(files = written.len(), "Download finished");
    Ok(())
}
