//! Downloading issue attachments to a local directory.
//!
//! Downloads run strictly one after another, in the order of the input
//! issues and then of the attachments within each issue. The first failure
//! aborts the remaining downloads; files already written are left in place.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::api::{Issue, JiraClient};
use crate::error::Result;

/// Collect the content URLs of an issue's attachments.
pub fn extract_attachment_links(issue: &Issue) -> Vec<String> {
    issue
        .attachments()
        .iter()
        .map(|attachment| attachment.content.clone())
        .collect()
}

/// The part of `url` after its last `/`, or the whole string if it has none.
pub fn basename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Download the attachments of `issues` into `dir`.
///
/// Search results carry incomplete attachment metadata, so each issue is
/// fetched again by key first. Returns the paths written, in download order.
///
/// # Errors
///
/// Returns an error if an issue or attachment cannot be fetched, or if a
/// file cannot be written.
#[instrument(skip_all, fields(issues = issues.len(), dir = %dir.display()))]
pub async fn download_attachments(
    client: &JiraClient,
    issues: &[Issue],
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut links = Vec::new();
    for summary in issues {
        let issue = client.get_issue(&summary.key).await?;
        let issue_links = extract_attachment_links(&issue);
        if issue_links.is_empty() {
            debug!(issue_key = %issue.key, "No attachments");
            continue;
        }
        links.extend(issue_links);
    }

    if links.is_empty() {
        info!("Nothing to download");
        return Ok(Vec::new());
    }

    tokio::fs::create_dir_all(dir).await?;

    let mut written = Vec::with_capacity(links.len());
    for link in &links {
        let target = dir.join(basename(link));
        let bytes = client.download(link).await?;
        tokio::fs::write(&target, &bytes).await?;

        info!(url = %link, path = %target.display(), bytes = bytes.len(), "Attachment saved");
        written.push(target);
    }

    Ok(written)
}
