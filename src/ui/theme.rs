//! Theme and styling configuration.

use console::Style;

/// Terminal styles for the parts of an issue block.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Issue key.
    pub title: Style,
    /// Issue summary.
    pub summary: Style,
    /// Issue description.
    pub description: Style,
    /// Created and updated timestamps.
    pub timestamp: Style,
    /// Browse URL.
    pub link: Style,
}

impl Theme {
    /// The colored theme, styled regardless of terminal detection.
    pub fn colored() -> Self {
        Self {
            title: Style::new().green().force_styling(true),
            summary: Style::new().yellow().force_styling(true),
            description: Style::new(),
            timestamp: Style::new().cyan().force_styling(true),
            link: Style::new().magenta().force_styling(true),
        }
    }

    /// A theme that emits no escape sequences.
    pub fn plain() -> Self {
        let plain = Style::new().force_styling(false);
        Self {
            title: plain.clone(),
            summary: plain.clone(),
            description: plain.clone(),
            timestamp: plain.clone(),
            link: plain,
        }
    }

    /// Pick a theme for stdout: colored unless disabled or unsupported.
    pub fn for_stdout(no_color: bool) -> Self {
        if no_color || !console::colors_enabled() {
            Self::plain()
        } else {
            Self::colored()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}
