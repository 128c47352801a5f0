use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::presentation::PresentationState;
use crate::ui::theme::Theme;

/// A status message paired with whether it reports a failure.
pub type StatusMessage<'a> = (&'a str, bool);

pub fn render(
    frame: &mut Frame,
    area: Rect,
    status_message: Option<StatusMessage>,
    state: PresentationState,
    key_hints: &[(String, &str)],
    theme: &Theme,
) {
    let bg_style = Style::default().bg(theme.statusbar_bg);

    // Status message takes priority
    if let Some((msg, is_error)) = status_message {
        let color = if is_error {
            theme.status_err
        } else {
            theme.status_ok
        };
        let line = Line::from(Span::styled(
            format!(" {msg}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line).style(bg_style), area);
        return;
    }

    let mut spans = vec![Span::styled(
        format!(" {} ", state.label()),
        Style::default()
            .fg(theme.pill_key_bg)
            .add_modifier(Modifier::BOLD),
    )];
    for (key, desc) in key_hints {
        spans.extend(pill_spans(key, desc, theme));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), area);
}

fn pill_spans<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.pill_desc_fg).bg(theme.surface_bg),
        ),
    ]
}
