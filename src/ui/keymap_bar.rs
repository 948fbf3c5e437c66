//! Keymap help bar UI component.

use super::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    help_open: bool,
    input_active: bool,
    colors: &ThemeColors,
) {
    let keymap_text = if help_open {
        "jk:scroll | i/q/Esc:close"
    } else if input_active {
        "Enter:plot | Esc:cancel | Type expression"
    } else {
        "q:quit | hjkl/↑↓←→:probe | /:edit | i:info | c:palette | T:theme | y/Y:copy | Esc:close"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
