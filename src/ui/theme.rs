//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Probe crosshair color.
    pub crosshair: Color,
    /// Slice curve color.
    pub slice_line: Color,
    /// Marker color for non-finite samples.
    pub missing: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            // #383838 chrome, limegreen highlights, dark-cyan slice curves.
            Theme::Dark => Self {
                bg: Color::Rgb(56, 56, 56),
                text: Color::Rgb(229, 229, 229),
                heading: Color::Rgb(50, 205, 50),
                label: Color::Rgb(160, 160, 160),
                value: Color::Rgb(142, 192, 124),
                border: Color::Rgb(120, 120, 120),
                crosshair: Color::Rgb(50, 205, 50),
                slice_line: Color::Rgb(0, 139, 139),
                missing: Color::Rgb(110, 110, 110),
                status_fg: Color::Rgb(229, 229, 229),
                status_bg: Color::Rgb(74, 74, 74),
            },
            Theme::Light => Self {
                bg: Color::Rgb(250, 250, 250),
                text: Color::Rgb(46, 46, 46),
                heading: Color::Rgb(0, 120, 0),
                label: Color::Rgb(110, 110, 110),
                value: Color::Rgb(0, 100, 80),
                border: Color::Rgb(176, 176, 176),
                crosshair: Color::Rgb(0, 120, 0),
                slice_line: Color::Rgb(0, 139, 139),
                missing: Color::Rgb(170, 170, 170),
                status_fg: Color::Rgb(46, 46, 46),
                status_bg: Color::Rgb(226, 226, 226),
            },
        }
    }
}
