//! Slice charts: the function along one axis with the other held fixed.

use super::formatters::format_stat_value;
use super::ThemeColors;
use crate::field::{SliceCurve, DOMAIN_MAX, DOMAIN_MIN};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw one slice chart. The value range is clamped to the finite min/max
/// of the full surface so both slices share a scale with the surface view.
pub(super) fn draw_slice(
    f: &mut Frame<'_>,
    area: Rect,
    slice: &SliceCurve,
    z_range: Option<(f64, f64)>,
    colors: &ThemeColors,
) {
    let title = format!(" {} = {} ", slice.fixed_var, slice.fixed);
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(colors.heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let chart_data = slice.finite_points();

    let Some((z_min, z_max)) = z_range else {
        let para = Paragraph::new("no finite values to plot")
            .style(Style::default().fg(colors.label))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    };

    if chart_data.is_empty() {
        let para = Paragraph::new("slice has no finite values")
            .style(Style::default().fg(colors.label))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let (y_min, y_max) = if (z_max - z_min).abs() < 1e-10 {
        (z_min - 0.5, z_max + 0.5)
    } else {
        (z_min, z_max)
    };

    let datasets = vec![Dataset::default()
        .marker(ratatui::symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(colors.slice_line))
        .data(&chart_data)];

    let x_labels = vec![
        format!("{}", DOMAIN_MIN),
        "0".to_string(),
        format!("{}", DOMAIN_MAX),
    ];
    let x_axis = Axis::default()
        .title(slice.axis_label)
        .style(Style::default().fg(colors.text))
        .bounds([DOMAIN_MIN, DOMAIN_MAX])
        .labels(x_labels);

    let y_labels = vec![
        format_stat_value(y_min),
        format_stat_value((y_min + y_max) / 2.0),
        format_stat_value(y_max),
    ];
    let y_axis = Axis::default()
        .style(Style::default().fg(colors.text))
        .bounds([y_min, y_max])
        .labels(y_labels);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}
