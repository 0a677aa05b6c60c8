// Chart panel component
//
// Horizontal bar per algorithm, length = steps taken, labelled "{n}s".
// The value axis runs to one past the longest bar.

use crate::metrics::{bar_label, ChartScale, MetricsSink};
use crate::search::Algorithm;
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Evenly spaced tick values from 0 to the domain end
pub fn axis_ticks(scale: ChartScale) -> Vec<u32> {
    let count = scale.ticks.max(1);
    let mut ticks: Vec<u32> = (0..=count)
        .map(|i| i * scale.domain_max / count)
        .collect();
    ticks.dedup();
    ticks
}

fn axis_text(scale: ChartScale) -> String {
    let ticks: Vec<String> = axis_ticks(scale).iter().map(u32::to_string).collect();
    format!("steps: {}", ticks.join(" ┼ "))
}

pub fn render(f: &mut Frame, area: Rect, metrics: &MetricsSink, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title(" Comparison (fewer steps is faster) ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [bars_area, axis_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(inner);

    let scale = metrics.scale();
    let bars = [
        (Algorithm::Linear, theme.bar_linear),
        (Algorithm::Binary, theme.bar_binary),
    ]
    .map(|(algorithm, color)| {
        let steps = metrics.get(algorithm).step_count;
        Bar::default()
            .label(Line::from(algorithm.name()))
            .value(u64::from(steps))
            .text_value(bar_label(steps))
            .style(Style::default().fg(color))
            .value_style(Style::default().fg(theme.background).bg(color))
    });

    let chart = BarChart::default()
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .max(u64::from(scale.domain_max))
        .label_style(Style::default().fg(theme.foreground))
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, bars_area);

    let axis = Paragraph::new(axis_text(scale)).style(Style::default().fg(theme.chart_axis));
    f.render_widget(axis, axis_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chart_still_has_an_axis() {
        let scale = MetricsSink::new().scale();
        assert_eq!(axis_ticks(scale), vec![0, 1]);
    }

    #[test]
    fn ticks_reach_one_past_longest_bar() {
        let mut sink = MetricsSink::new();
        sink.update(4, 3);
        let ticks = axis_ticks(sink.scale());
        assert_eq!(ticks.first(), Some(&0));
        assert_eq!(ticks.last(), Some(&5));
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn axis_text_lists_ticks() {
        let mut sink = MetricsSink::new();
        sink.update(2, 1);
        assert_eq!(axis_text(sink.scale()), "steps: 0 ┼ 1 ┼ 3");
    }
}
