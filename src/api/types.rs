//! JIRA API request and response types.
//!
//! These types model the subset of the JIRA REST API v2 that coolover
//! consumes. Optional fields deserialize to `None` or empty collections
//! instead of failing, so every lookup downstream is a plain field access.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A JIRA project.
///
/// Returned as a list by `GET /rest/api/2/project`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// The project ID.
    #[serde(default)]
    pub id: String,
    /// The project key (e.g., "ABC").
    pub key: String,
    /// The project name.
    pub name: String,
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Body of `POST /rest/api/2/search`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// The JQL query.
    pub jql: String,
    /// Maximum number of issues to return.
    pub max_results: u32,
}

/// Search result from a JQL query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matching issues.
    #[serde(default)]
    pub total: u32,
    /// The returned issues, in server order.
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// A JIRA issue.
///
/// Returned by `GET /rest/api/2/issue/{issueKey}` or as part of search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// The issue ID.
    #[serde(default)]
    pub id: String,
    /// The issue key (e.g., "ABC-123").
    pub key: String,
    /// The issue fields.
    #[serde(default)]
    pub fields: IssueFields,
}

impl Issue {
    /// Get the issue summary.
    pub fn summary(&self) -> &str {
        &self.fields.summary
    }

    /// Get the description, or an empty string if not set.
    pub fn description(&self) -> &str {
        self.fields.description.as_deref().unwrap_or_default()
    }

    /// Get the issue attachments.
    pub fn attachments(&self) -> &[Attachment] {
        &self.fields.attachment
    }
}

/// Issue fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueFields {
    /// The issue summary/title.
    #[serde(default)]
    pub summary: String,
    /// The issue description (plain text in API v2).
    #[serde(default)]
    pub description: Option<String>,
    /// When the issue was created.
    #[serde(default)]
    pub created: Option<String>,
    /// When the issue was last updated.
    #[serde(default)]
    pub updated: Option<String>,
    /// Files attached to the issue.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attachment: Vec<Attachment>,
}

/// An issue attachment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    /// URL of the attachment content.
    pub content: String,
}

/// JIRA sends `null` for some list fields; treat it as an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issue_deserialize_full() {
        let issue: Issue = serde_json::from_value(json!({
            "id": "10001",
            "key": "ABC-1",
            "fields": {
                "summary": "Crash on start",
                "description": "It crashes",
                "created": "2015-01-02T10:20:30.000+0000",
                "updated": "2015-01-03T11:00:00.000+0000",
                "attachment": [
                    {"content": "http://host/secure/attachment/1/log.txt", "filename": "log.txt", "size": 12}
                ]
            }
        }))
        .unwrap();

        assert_eq!(issue.key, "ABC-1");
        assert_eq!(issue.summary(), "Crash on start");
        assert_eq!(issue.description(), "It crashes");
        assert_eq!(issue.attachments().len(), 1);
        assert_eq!(
            issue.attachments()[0].content,
            "http://host/secure/attachment/1/log.txt"
        );
    }

    #[test]
    fn test_issue_deserialize_sparse() {
        let issue: Issue = serde_json::from_value(json!({
            "key": "ABC-2",
            "fields": {"summary": "Sparse", "description": null, "attachment": null}
        }))
        .unwrap();

        assert_eq!(issue.description(), "");
        assert!(issue.fields.created.is_none());
        assert!(issue.attachments().is_empty());
    }

    #[test]
    fn test_issue_without_fields() {
        let issue: Issue = serde_json::from_value(json!({"key": "ABC-3"})).unwrap();
        assert_eq!(issue.summary(), "");
        assert!(issue.attachments().is_empty());
    }

    #[test]
    fn test_search_request_serialization() {
        let request = SearchRequest {
            jql: "project = ABC".to_string(),
            max_results: 5,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"jql": "project = ABC", "maxResults": 5})
        );
    }

    #[test]
    fn test_search_result_deserialize() {
        let result: SearchResult = serde_json::from_value(json!({
            "startAt": 0,
            "maxResults": 2,
            "total": 7,
            "issues": [{"key": "ABC-1", "fields": {}}, {"key": "ABC-2", "fields": {}}]
        }))
        .unwrap();

        assert_eq!(result.total, 7);
        let keys: Vec<&str> = result.issues.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["ABC-1", "ABC-2"]);
    }

    #[test]
    fn test_project_list_deserialize() {
        let projects: Vec<Project> = serde_json::from_value(json!([
            {"id": "1", "key": "ABC", "name": "Alphabet"},
            {"key": "XYZ", "name": "Last Letters"}
        ]))
        .unwrap();

        assert_eq!(projects[1].id, "");
        assert_eq!(projects[0].to_string(), "Alphabet");
    }
}
