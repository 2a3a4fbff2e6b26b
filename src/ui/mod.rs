//! Terminal output: issue projection, rendering and styling.

mod issue;
mod theme;

pub use issue::{browse_url, reformat_timestamp, DisplayIssue, FormatError};
pub use theme::Theme;
