//! coolover - a command-line client for JIRA.
//!
//! Lists projects, searches a project's issues, shows single issues and
//! downloads issue attachments through the JIRA REST API v2.

pub mod api;
pub mod attachments;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;
