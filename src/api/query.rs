//! JQL query and request construction.

use super::types::SearchRequest;

/// Path of the REST API relative to the service URL.
pub const API_SUFFIX: &str = "rest/api/2";

/// Build a JQL filter from `field = value` pairs and an ordering.
///
/// Pairs are joined with `and` in the order given.
///
/// ```
/// use coolover::api::build_query;
///
/// assert_eq!(
///     build_query(&[("project", "ABC")], "created"),
///     "project = ABC order by created"
/// );
/// ```
pub fn build_query(fields: &[(&str, &str)], order_by: &str) -> String {
    let filter = fields
        .iter()
        .map(|(field, value)| format!("{} = {}", field, value))
        .collect::<Vec<_>>()
        .join(" and ");

    if filter.is_empty() {
        format!("order by {}", order_by)
    } else {
        format!("{} order by {}", filter, order_by)
    }
}

/// Build the JSON body of a search request.
pub fn build_search_body(query: &str, max_results: u32) -> String {
    let request = SearchRequest {
        jql: query.to_string(),
        max_results,
    };
    serde_json::json!(request).to_string()
}

/// Join the service URL, API suffix and resource name.
pub fn resource_url(base: &str, api_suffix: &str, resource: &str) -> String {
    format!("{}/{}/{}", base, api_suffix, resource)
}
