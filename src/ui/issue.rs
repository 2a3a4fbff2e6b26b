//! Display projection and rendering of issues.

use chrono::DateTime;
use thiserror::Error;

use super::theme::Theme;
use crate::api::Issue;

/// Timestamp format used by the JIRA REST API (`2015-01-02T10:20:30.000+0000`).
const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Timestamp format shown to the user.
const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors raised while projecting an issue for display.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A timestamp did not match the API format.
    #[error("cannot parse {field} timestamp '{value}': {source}")]
    Date {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// The display-ready view of an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayIssue {
    /// The issue key.
    pub title: String,
    /// The issue summary.
    pub summary: String,
    /// The description, empty if unset.
    pub description: String,
    /// Creation time in display format, empty if unknown.
    pub created: String,
    /// Last update time in display format, empty if unknown.
    pub updated: String,
    /// `{service url}/browse/{key}`.
    pub browse_url: String,
}

impl DisplayIssue {
    /// Project an API issue into its display form.
    ///
    /// `base_url` is the service URL without trailing slash.
    pub fn project(issue: &Issue, base_url: &str) -> Result<Self, FormatError> {
        Ok(Self {
            title: issue.key.clone(),
            summary: issue.summary().to_string(),
            description: issue.description().to_string(),
            created: reformat_optional("created", issue.fields.created.as_deref())?,
            updated: reformat_optional("updated", issue.fields.updated.as_deref())?,
            browse_url: browse_url(base_url, &issue.key),
        })
    }

    /// Render the three-line issue block.
    pub fn render(&self, theme: &Theme) -> String {
        format!(
            "{}: {} [{}]\n<{} - {}>\n{}",
            theme.title.apply_to(&self.title),
            theme.summary.apply_to(&self.summary),
            theme.description.apply_to(&self.description),
            theme.timestamp.apply_to(&self.created),
            theme.timestamp.apply_to(&self.updated),
            theme.link.apply_to(&self.browse_url),
        )
    }
}

/// The web URL of an issue.
pub fn browse_url(base_url: &str, key: &str) -> String {
    format!("{}/browse/{}", base_url, key)
}

/// Convert an API timestamp to display format, keeping its own offset.
pub fn reformat_timestamp(field: &'static str, value: &str) -> Result<String, FormatError> {
    DateTime::parse_from_str(value, API_TIMESTAMP_FORMAT)
        .map(|dt| dt.format(DISPLAY_TIMESTAMP_FORMAT).to_string())
        .map_err(|source| FormatError::Date {
            field,
            value: value.to_string(),
            source,
        })
}

fn reformat_optional(field: &'static str, value: Option<&str>) -> Result<String, FormatError> {
    value
        .map(|v| reformat_timestamp(field, v))
        .transpose()
        .map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn issue(fields: serde_json::Value) -> Issue {
        serde_json::from_value(json!({"key": "ABC-7", "fields": fields})).unwrap()
    }

    #[test]
    fn test_reformat_timestamp() {
        assert_eq!(
            reformat_timestamp("created", "2015-01-02T10:20:30.000+0000").unwrap(),
            "2015-01-02 10:20:30"
        );
    }

    #[test]
    fn test_reformat_timestamp_keeps_source_offset() {
        assert_eq!(
            reformat_timestamp("updated", "2021-06-30T23:59:01.123+0200").unwrap(),
            "2021-06-30 23:59:01"
        );
    }

    #[test]
    fn test_reformat_timestamp_rejects_other_formats() {
        let err = reformat_timestamp("created", "02/01/2015 10:20").unwrap_err();
        let FormatError::Date { field, value, .. } = err;
        assert_eq!(field, "created");
        assert_eq!(value, "02/01/2015 10:20");
    }

    #[test]
    fn test_project_issue() {
        let raw = issue(json!({
            "summary": "Crash on start",
            "description": "Stack trace attached",
            "created": "2015-01-02T10:20:30.000+0000",
            "updated": "2015-01-05T08:00:00.000+0000"
        }));

        let display = DisplayIssue::project(&raw, "https://jira.example.com").unwrap();
        assert_eq!(
            display,
            DisplayIssue {
                title: "ABC-7".to_string(),
                summary: "Crash on start".to_string(),
                description: "Stack trace attached".to_string(),
                created: "2015-01-02 10:20:30".to_string(),
                updated: "2015-01-05 08:00:00".to_string(),
                browse_url: "https://jira.example.com/browse/ABC-7".to_string(),
            }
        );
    }

    #[test]
    fn test_project_issue_without_timestamps() {
        let display = DisplayIssue::project(&issue(json!({"summary": "s"})), "http://j").unwrap();
        assert_eq!(display.created, "");
        assert_eq!(display.updated, "");
        assert_eq!(display.description, "");
    }

    #[test]
    fn test_project_issue_bad_timestamp() {
        let raw = issue(json!({"summary": "s", "created": "yesterday"}));
        assert!(DisplayIssue::project(&raw, "http://j").is_err());
    }

    #[test]
    fn test_render_plain_layout() {
        let display = DisplayIssue {
            title: "ABC-7".to_string(),
            summary: "Crash".to_string(),
            description: "details".to_string(),
            created: "2015-01-02 10:20:30".to_string(),
            updated: "2015-01-05 08:00:00".to_string(),
            browse_url: "https://jira.example.com/browse/ABC-7".to_string(),
        };

        assert_eq!(
            display.render(&Theme::plain()),
            "ABC-7: Crash [details]\n<2015-01-02 10:20:30 - 2015-01-05 08:00:00>\nhttps://jira.example.com/browse/ABC-7"
        );
    }

    #[test]
    fn test_render_colored_keeps_text() {
        let display = DisplayIssue::project(&issue(json!({"summary": "Crash"})), "http://j").unwrap();
        let rendered = display.render(&Theme::colored());
        assert!(rendered.contains("ABC-7"));
        assert!(rendered.contains("Crash"));
        assert_ne!(rendered, display.render(&Theme::plain()));
    }
}
