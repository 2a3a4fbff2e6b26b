//! `list-issues` and `show-issue`.

use std::io::Write;

use tracing::debug;

use crate::api::{build_query, JiraClient};
use crate::cli::IssueQuery;
use crate::error::Result;
use crate::ui::{DisplayIssue, Theme};

/// Search a project's issues and print one block per issue, in server order.
pub async fn list_issues(
    client: &JiraClient,
    query: &IssueQuery,
    theme: &Theme,
    out: &mut dyn Write,
) -> Result<()> {
    let jql = build_query(&[("project", query.project.as_str())], &query.order_by);
    debug!(%jql, "Built query");

    let result = client.search_issues(&jql, query.max_results).await?;
    let issues = result
        .issues
        .iter()
        .map(|issue| DisplayIssue::project(issue, client.base_url()))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    for (i, issue) in issues.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", issue.render(theme))?;
    }
    Ok(())
}

/// Fetch one issue and print its block.
pub async fn show_issue(
    client: &JiraClient,
    issue_key: &str,
    theme: &Theme,
    out: &mut dyn Write,
) -> Result<()> {
    let issue = client.get_issue(issue_key).await?;
    let display = DisplayIssue::project(&issue, client.base_url())?;
    writeln!(out, "{}", display.render(theme))?;
    Ok(())
}
