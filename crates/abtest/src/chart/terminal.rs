//! Terminal rendering of a [`DaysChart`] with the ratatui Chart widget.
//!
//! ratatui charts have no grid option, so grid lines are drawn as faint
//! two-point line datasets underneath the data.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use super::DaysChart;

/// Render the chart with its two-line header into `area`.
pub fn render_chart(frame: &mut Frame, area: Rect, chart: &DaysChart) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            chart.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(chart.subtitle.clone().dark_gray()).centered(),
    ]);
    frame.render_widget(header, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" q: quit ".dark_gray());

    if chart.points.is_empty() {
        let paragraph = Paragraph::new("  No data to display.").block(block);
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    let x_bounds = chart.x_bounds();
    let y_bounds = chart.y_bounds();
    let x_ticks = DaysChart::ticks(x_bounds);
    let y_ticks = DaysChart::ticks(y_bounds);

    let grid_lines: Vec<[(f64, f64); 2]> = if chart.grid {
        x_ticks
            .iter()
            .map(|&x| [(x, y_bounds[0]), (x, y_bounds[1])])
            .chain(
                y_ticks
                    .iter()
                    .map(|&y| [(x_bounds[0], y), (x_bounds[1], y)]),
            )
            .collect()
    } else {
        Vec::new()
    };

    let mut datasets: Vec<Dataset> = grid_lines
        .iter()
        .map(|line| {
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(line)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&chart.points),
    );
    datasets.push(
        Dataset::default()
            .name("days")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&chart.points),
    );

    let x_labels: Vec<Span> = [x_ticks[0], x_ticks[2], x_ticks[4]]
        .iter()
        .map(|x| Span::raw(format!("{x:.1}%")))
        .collect();
    let y_labels: Vec<Span> = [y_ticks[0], y_ticks[2], y_ticks[4]]
        .iter()
        .map(|y| Span::raw(format!("{y:.0}")))
        .collect();

    let x_axis = Axis::default()
        .title(chart.x_label.clone().dark_gray())
        .bounds(x_bounds)
        .labels(x_labels);

    let y_axis = Axis::default()
        .title(chart.y_label.clone().dark_gray())
        .bounds(y_bounds)
        .labels(y_labels);

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(widget, chunks[1]);
}
