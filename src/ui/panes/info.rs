//! Side panel: algorithm details, live metrics, legend and dataset strip

use crate::playback::Playback;
use crate::tracer::{Algorithm, AlgorithmKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the info pane
pub struct InfoRenderData<'a> {
    pub algorithm: Algorithm,
    pub playback: &'a Playback,
    pub target: &'a str,
    pub show_complexity: bool,
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<12}", name),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

fn swatch(color: Color, text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("██ ", Style::default().fg(color)),
        Span::styled(text.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Build the info pane's lines
pub fn info_lines(data: &InfoRenderData) -> Vec<Line<'static>> {
    let mut lines = vec![heading(data.algorithm.label()), Line::raw("")];

    if data.show_complexity {
        let c = data.algorithm.complexity();
        lines.push(field("Time", c.time.to_string()));
        lines.push(field("Space", c.space.to_string()));
        lines.push(field("Best", c.best.to_string()));
        lines.push(field("Worst", c.worst.to_string()));
        lines.push(Line::from(Span::styled(
            c.description.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::raw(""));
    }

    let metrics = data.playback.metrics();
    lines.push(heading("Metrics"));
    lines.push(field("Comparisons", metrics.comparisons.to_string()));
    if data.algorithm.kind() == AlgorithmKind::Sort {
        lines.push(field("Swaps", metrics.swaps.to_string()));
    }
    lines.push(field("Speed", format!("{} ms", data.playback.speed_ms())));
    if data.algorithm.needs_target() {
        let target = if data.target.is_empty() {
            "(press /)".to_string()
        } else {
            data.target.to_string()
        };
        lines.push(field("Target", target));
    }
    if let Some(snapshot) = data.playback.current_array() {
        if data.algorithm.needs_target() && data.playback.is_at_end() {
            let result = match snapshot.found {
                Some(i) => format!("index {}", i),
                None => "not found".to_string(),
            };
            lines.push(field("Result", result));
        }
    }
    lines.push(Line::raw(""));

    lines.push(heading("Legend"));
    match data.algorithm.kind() {
        AlgorithmKind::Tree => {
            lines.push(swatch(DEFAULT_THEME.success, "inserting"));
            lines.push(swatch(DEFAULT_THEME.primary, "search path"));
            lines.push(swatch(DEFAULT_THEME.error, "duplicate (skipped)"));
        }
        AlgorithmKind::Search => {
            lines.push(swatch(DEFAULT_THEME.comparing, "comparing"));
            lines.push(swatch(DEFAULT_THEME.success, "found"));
            if data.algorithm == Algorithm::Binary {
                lines.push(swatch(DEFAULT_THEME.out_of_range, "outside window"));
            }
        }
        AlgorithmKind::Sort => {
            lines.push(swatch(DEFAULT_THEME.comparing, "comparing"));
            lines.push(swatch(DEFAULT_THEME.swapped, "swapped"));
            lines.push(swatch(DEFAULT_THEME.secondary, "active"));
            lines.push(swatch(DEFAULT_THEME.primary, "sorted"));
            if data.algorithm == Algorithm::Quick {
                lines.push(swatch(DEFAULT_THEME.pivot, "pivot"));
            }
            if data.algorithm == Algorithm::Merge {
                lines.push(swatch(DEFAULT_THEME.merging, "merging"));
            }
        }
    }

    lines
}

pub fn render_info_pane(frame: &mut Frame, area: Rect, data: InfoRenderData) {
    let block = Block::default()
        .title(" Algorithm ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let paragraph = Paragraph::new(info_lines(&data))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Render the dataset strip with the edit cursor
pub fn render_dataset_pane(frame: &mut Frame, area: Rect, values: &[i64], cursor: usize) {
    let block = Block::default()
        .title(format!(" Dataset ({}) ", values.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if values.is_empty() {
        let paragraph = Paragraph::new("(empty, press a to add)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let mut spans = Vec::with_capacity(values.len() * 2);
    for (i, value) in values.iter().enumerate() {
        let style = if i == cursor {
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        spans.push(Span::styled(format!(" {} ", value), style));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
