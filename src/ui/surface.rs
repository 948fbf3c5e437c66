//! Surface view: colormapped grid, colorbar, probe crosshair, input line.

use super::formatters::format_stat_value;
use super::ThemeColors;
use crate::app::App;
use crate::field::{self, GRID_SIZE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

// Terminal cells are roughly 2:1 (height:width); two characters per
// sample keeps the surface square-ish.
const PIXEL_WIDTH: usize = 2;

/// Draw the surface view.
pub(super) fn draw_surface(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let title = format!(" f(x, y) = {} ", app.surface.source);
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(colors.heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 6 || inner.height < 5 {
        return;
    }

    let editing = app.input.is_active();
    let constraints = if editing {
        vec![
            Constraint::Length(1), // Input line
            Constraint::Length(1), // Colorbar
            Constraint::Min(3),    // Surface cells
            Constraint::Length(1), // Probe readout
        ]
    } else {
        vec![
            Constraint::Length(1), // Colorbar
            Constraint::Min(3),    // Surface cells
            Constraint::Length(1), // Probe readout
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut idx = 0;
    if editing {
        draw_input_line(f, chunks[idx], app, colors);
        idx += 1;
    }
    draw_colorbar(f, chunks[idx], app, colors);
    draw_cells(f, chunks[idx + 1], app, colors);
    draw_readout(f, chunks[idx + 2], app, colors);
}

fn draw_input_line(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let prompt = "f(x,y) = ";
    let buffer = app.input.buffer();

    // Keep the tail visible when the buffer outgrows the line.
    let avail = (area.width as usize).saturating_sub(prompt.len() + 1);
    let mut shown = buffer;
    while shown.width() > avail && !shown.is_empty() {
        let mut chars = shown.chars();
        chars.next();
        shown = chars.as_str();
    }

    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(colors.label)),
        Span::styled(shown.to_string(), Style::default().fg(colors.text)),
        Span::styled(
            "█",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

fn draw_colorbar(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let Some((z_min, z_max)) = app.surface.z_range else {
        let para = Paragraph::new("no finite values on the grid")
            .style(Style::default().fg(colors.label));
        f.render_widget(para, area);
        return;
    };

    let min_label = format_stat_value(z_min);
    let max_label = format_stat_value(z_max);

    for (i, ch) in min_label.chars().enumerate() {
        let x = area.x + i as u16;
        if x < area.x + area.width {
            if let Some(cell) = f.buffer_mut().cell_mut((x, area.y)) {
                cell.set_char(ch).set_fg(colors.value);
            }
        }
    }

    let bar_width = 40.min(area.width as usize / 2);
    let bar_start = area.x + ((area.width as usize).saturating_sub(bar_width) / 2) as u16;
    for i in 0..bar_width {
        let t = i as f64 / bar_width.max(1) as f64;
        let x = bar_start + i as u16;
        if x < area.x + area.width {
            if let Some(cell) = f.buffer_mut().cell_mut((x, area.y)) {
                cell.set_char('█').set_fg(app.palette.color(t));
            }
        }
    }

    if area.width as usize > max_label.len() {
        let max_x_start = area.x + area.width - max_label.len() as u16;
        for (i, ch) in max_label.chars().enumerate() {
            let x = max_x_start + i as u16;
            if x < area.x + area.width {
                if let Some(cell) = f.buffer_mut().cell_mut((x, area.y)) {
                    cell.set_char(ch).set_fg(colors.value);
                }
            }
        }
    }
}

fn draw_cells(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let surface = &app.surface;
    let (z_min, z_max) = surface.z_range.unwrap_or((0.0, 0.0));
    let range = if (z_max - z_min).abs() < 1e-10 {
        1.0
    } else {
        z_max - z_min
    };

    let height = area.height as usize;
    let display_cols = (area.width as usize / PIXEL_WIDTH).max(1);

    let row_step = (GRID_SIZE as f64 / height as f64).max(1.0);
    let col_step = (GRID_SIZE as f64 / display_cols as f64).max(1.0);

    for sy in 0..height {
        let sampled = ((sy as f64) * row_step) as usize;
        if sampled >= GRID_SIZE {
            break;
        }
        // Screen rows run top-down; the y axis points up.
        let row_idx = GRID_SIZE - 1 - sampled;

        for px in 0..display_cols {
            let col_idx = ((px as f64) * col_step) as usize;
            if col_idx >= GRID_SIZE {
                break;
            }

            let val = surface.value_at(row_idx, col_idx);
            let (ch, color) = if val.is_finite() {
                let normalized = ((val - z_min) / range).clamp(0.0, 1.0);
                ('█', app.palette.color(normalized))
            } else {
                ('?', colors.missing)
            };

            for i in 0..PIXEL_WIDTH {
                let screen_x = area.x + (px * PIXEL_WIDTH + i) as u16;
                let screen_y = area.y + sy as u16;
                if screen_x >= area.x + area.width {
                    break;
                }
                if let Some(cell) = f.buffer_mut().cell_mut((screen_x, screen_y)) {
                    cell.set_char(ch).set_fg(color);
                }
            }
        }
    }

    // Probe crosshair on top of the cells.
    let probe_sy = ((GRID_SIZE - 1 - app.probe.row) as f64 / row_step) as usize;
    let probe_px = (app.probe.col as f64 / col_step) as usize;
    if probe_sy < height {
        for i in 0..PIXEL_WIDTH {
            let screen_x = area.x + (probe_px * PIXEL_WIDTH + i) as u16;
            let screen_y = area.y + probe_sy as u16;
            if screen_x >= area.x + area.width {
                break;
            }
            if let Some(cell) = f.buffer_mut().cell_mut((screen_x, screen_y)) {
                cell.set_char(if i == 0 { '╬' } else { '═' })
                    .set_fg(colors.crosshair)
                    .set_bg(colors.bg);
            }
        }
    }
}

fn draw_readout(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let x0 = field::round_coord(app.probe_x());
    let y0 = field::round_coord(app.probe_y());
    let line = Line::from(vec![
        Span::styled("probe ", Style::default().fg(colors.label)),
        Span::styled(
            format!("f({}, {}) = {}", x0, y0, format_stat_value(app.probe_value())),
            Style::default().fg(colors.value),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
