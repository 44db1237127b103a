//! Bar chart rendering of an array snapshot
//!
//! Each element is one bar. Bar color encodes the snapshot's highlight sets in
//! priority order: found, swapped, comparing, pivot, active, sorted, merge range.
//! Binary search dims every bar outside the current window.

use crate::snapshot::ArraySnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Resolution bar heights are scaled to before they reach the chart
const BAR_SCALE: u128 = 1000;

/// Scaled height of every bar, each in `1..=1000`.
///
/// Heights are measured from just below `min(smallest, 1)`, so all-positive
/// data keeps its proportions and the smallest bar is still visible. The
/// arithmetic is done in 128 bits since any two `i64` values may be compared.
pub fn bar_heights(values: &[i64]) -> Vec<u64> {
    let Some(&min) = values.iter().min() else {
        return Vec::new();
    };
    let base = i128::from(min.min(1)) - 1;
    let lift = |v: i64| (i128::from(v) - base) as u128;
    let top = values.iter().map(|&v| lift(v)).max().unwrap_or(1);

    values
        .iter()
        .map(|&v| (lift(v) * BAR_SCALE / top).max(1) as u64)
        .collect()
}

/// Pick the color of the bar at `index`
pub fn bar_color(snapshot: &ArraySnapshot, index: usize) -> Color {
    if snapshot.found == Some(index) {
        return DEFAULT_THEME.success;
    }
    if let Some((lo, hi)) = snapshot.range {
        if index < lo || index > hi {
            return DEFAULT_THEME.out_of_range;
        }
    }
    if snapshot.swapped && snapshot.active.contains(&index) {
        DEFAULT_THEME.swapped
    } else if snapshot.comparing.contains(&index) {
        DEFAULT_THEME.comparing
    } else if snapshot.pivot == Some(index) {
        DEFAULT_THEME.pivot
    } else if snapshot.active.contains(&index) {
        DEFAULT_THEME.secondary
    } else if snapshot.sorted.contains(&index) {
        DEFAULT_THEME.primary
    } else if snapshot
        .merging
        .is_some_and(|(lo, hi)| (lo..=hi).contains(&index))
    {
        DEFAULT_THEME.merging
    } else {
        DEFAULT_THEME.bar
    }
}

/// Render `snapshot` as vertical bars with values and indices
pub fn render_bars_pane(frame: &mut Frame, area: Rect, title: &str, snapshot: &ArraySnapshot) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if snapshot.array.is_empty() {
        let paragraph = Paragraph::new("(empty dataset)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let n = u16::try_from(snapshot.array.len()).unwrap_or(u16::MAX);
    let inner_width = area.width.saturating_sub(2);
    let gap = if inner_width >= n.saturating_mul(4) { 1 } else { 0 };
    let bar_width = (inner_width.saturating_sub(gap * n) / n).max(1);

    let heights = bar_heights(&snapshot.array);

    let bars: Vec<Bar> = snapshot
        .array
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(i, (&value, height))| {
            let color = bar_color(snapshot, i);
            Bar::default()
                .value(height)
                .text_value(value.to_string())
                .label(Line::from(i.to_string()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(gap)
        .max(BAR_SCALE as u64)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
