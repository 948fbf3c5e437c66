//! User interface rendering.

mod formatters;
mod help;
mod keymap_bar;
mod slices;
mod status_bar;
mod surface;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI: surface view left, the two slice charts stacked right,
/// status and keymap strips at the bottom, info panel on top of it all.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[0]);

    surface::draw_surface(f, content[0], app, &colors);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content[1]);

    slices::draw_slice(f, right[0], &app.x_slice, app.surface.z_range, &colors);
    slices::draw_slice(f, right[1], &app.y_slice, app.surface.z_range, &colors);

    status_bar::draw_status(f, chunks[1], app, &colors);
    keymap_bar::draw_keymap(
        f,
        chunks[2],
        app.help.is_open(),
        app.input.is_active(),
        &colors,
    );

    help::draw_help(f, &app.help, &colors);
}
