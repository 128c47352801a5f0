use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Sparkline};

use crate::format::format_percent;
use crate::presentation::PresentationState;
use crate::stats::snapshot::StatisticsSnapshot;
use crate::ui::placeholder::{self, Placeholder};
use crate::ui::regions::RegionMap;
use crate::ui::theme::Theme;
use crate::usage::{FULL_SCALE, Utilization, normalize};

pub const NO_HISTORY_TITLE: &str = "No Historic Data";
pub const NO_HISTORY_MESSAGE: &str = "Historic utilization is not available yet.";

// Sparkline bars are integers; keep two decimals of a percentage.
const SPARKLINE_SCALE: f64 = 100.0;

/// Everything the card needs for one draw.
pub struct CardProps<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub unavailable_message: &'a str,
    pub snapshot: &'a StatisticsSnapshot,
    pub is_running: bool,
}

/// Draws the utilization card and returns the state it was drawn in.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    props: &CardProps,
    theme: &Theme,
    regions: &mut RegionMap,
) -> PresentationState {
    regions.register(props.id, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.card_border))
        .title(Span::styled(
            format!(" {} ", props.title),
            Style::default()
                .fg(theme.card_title)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let state = PresentationState::from_snapshot(props.snapshot, props.is_running);
    let no_live_data_id = format!("{}-no-live-data", props.id);

    match state {
        PresentationState::NotRunning => {
            let placeholder = Placeholder::new(no_live_data_id);
            placeholder::render(frame, inner, &placeholder, theme, regions);
        }
        PresentationState::RunningNoData => {
            let placeholder =
                Placeholder::new(no_live_data_id).message(Some(props.unavailable_message));
            placeholder::render(frame, inner, &placeholder, theme, regions);
        }
        PresentationState::RunningWithData => {
            let usage = normalize(props.snapshot);
            render_charts(frame, inner, props.id, &usage, theme, regions);
        }
    }

    state
}

fn render_charts(
    frame: &mut Frame,
    area: Rect,
    id: &str,
    usage: &Utilization,
    theme: &Theme,
    regions: &mut RegionMap,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(8)])
        .split(rows[0]);

    render_available(frame, top[0], id, usage, theme, regions);
    render_used_gauge(frame, top[1], id, usage, theme, regions);

    if usage.shows_history_placeholder() {
        let placeholder = Placeholder::new(format!("{id}-no-historic-data"))
            .title(Some(NO_HISTORY_TITLE))
            .message(Some(NO_HISTORY_MESSAGE));
        placeholder::render(frame, rows[1], &placeholder, theme, regions);
    } else {
        render_history(frame, rows[1], id, &usage.history, theme, regions);
    }
}

fn render_available(
    frame: &mut Frame,
    area: Rect,
    id: &str,
    usage: &Utilization,
    theme: &Theme,
    regions: &mut RegionMap,
) {
    regions.register(format!("{id}-available"), area);

    let lines = vec![
        Line::from(Span::styled(
            format!("{}%", format_percent(usage.available)),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Available",
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(Span::styled(
            format!("of {}%", format_percent(FULL_SCALE)),
            Style::default().fg(theme.text_secondary),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), area);
}

fn render_used_gauge(
    frame: &mut Frame,
    area: Rect,
    id: &str,
    usage: &Utilization,
    theme: &Theme,
    regions: &mut RegionMap,
) {
    regions.register(format!("{id}-donut-chart"), area);

    // Only the drawn proportion is clamped; the label keeps the raw value.
    let ratio = (usage.used / FULL_SCALE).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.gauge_filled)
                .bg(theme.gauge_unfilled),
        )
        .ratio(ratio)
        .label(format!("{}% Used", format_percent(usage.used)));

    frame.render_widget(gauge, area);
}

fn render_history(
    frame: &mut Frame,
    area: Rect,
    id: &str,
    history: &[f64],
    theme: &Theme,
    regions: &mut RegionMap,
) {
    regions.register(format!("{id}-line-chart"), area);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.card_border))
        .title(Span::styled(
            " % ",
            Style::default().fg(theme.text_secondary),
        ));
    let width = block.inner(area).width as usize;

    let data = sparkline_data(history, width);
    let sparkline = Sparkline::default()
        .block(block)
        .data(&data)
        .max((FULL_SCALE * SPARKLINE_SCALE) as u64)
        .style(Style::default().fg(theme.sparkline_color));

    frame.render_widget(sparkline, area);
}

/// Converts the oldest-first series to sparkline bars, keeping the newest
/// samples when the series is wider than the chart.
fn sparkline_data(history: &[f64], width: usize) -> Vec<u64> {
    let start = history.len().saturating_sub(width);
    history[start..]
        .iter()
        .map(|v| (v * SPARKLINE_SCALE).round().max(0.0) as u64)
        .collect()
}
