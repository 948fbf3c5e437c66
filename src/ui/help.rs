//! Info panel overlay with the expression gallery.

use super::ThemeColors;
use crate::help::{HelpState, GALLERY, INTRO};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Draw the info panel overlay.
pub(super) fn draw_help(f: &mut Frame<'_>, state: &HelpState, colors: &ThemeColors) {
    if !state.is_open() {
        return;
    }

    let area = centered_rect(60, 80, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Info ")
        .title_style(Style::default().fg(colors.heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let mut lines = vec![Line::from(Span::styled(
        INTRO,
        Style::default().fg(colors.text),
    ))];

    for card in GALLERY {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            card.blurb,
            Style::default().fg(colors.label),
        )));
        for expr in card.expressions {
            lines.push(Line::from(Span::styled(
                format!("    {}", expr),
                Style::default()
                    .fg(colors.value)
                    .add_modifier(Modifier::BOLD),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((state.scroll, 0));
    f.render_widget(paragraph, chunks[0]);

    let footer = Paragraph::new("j/k: scroll | i/Esc: close")
        .style(Style::default().fg(colors.label))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(footer, chunks[1]);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
