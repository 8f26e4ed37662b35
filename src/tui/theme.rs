// Color theme for the TUI
//
// One built-in dark palette. The success/warning pair backs the form note's
// two indicator states; the rest is chrome.

use ratatui::style::Color;

/// Colors used across the TUI
pub struct Theme {
    /// Panel borders
    pub border: Color,
    /// Panel titles and field labels
    pub title: Color,
    /// The animated hero word and the focused field
    pub accent: Color,
    /// Timestamps and secondary text
    pub muted: Color,
    /// Form note after a successful submission
    pub success: Color,
    /// Form note after a rejected submission
    pub warning: Color,
    /// Status bar text
    pub status_bar: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            title: Color::White,
            accent: Color::Magenta,
            muted: Color::Gray,
            success: Color::Green,
            warning: Color::LightRed,
            status_bar: Color::DarkGray,
        }
    }
}
