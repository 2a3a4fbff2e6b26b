//! JIRA API client and types.
//!
//! This module provides the interface for communicating with the JIRA REST API.

mod auth;
mod client;
pub mod error;
mod query;
pub mod types;

pub use client::{JiraClient, RawResponse};
pub use error::ApiError;
pub use query::{build_query, build_search_body, resource_url, API_SUFFIX};
pub use types::{Attachment, Issue, Project, SearchResult};
