use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::format::truncate_unicode;
use crate::ui::regions::RegionMap;
use crate::ui::theme::Theme;

pub const DEFAULT_TITLE: &str = "No Data Available";
pub const DEFAULT_MESSAGE: &str = "Utilization data is only available when the VM is running.";

const ICON: &str = "\u{2581}\u{2583}\u{2585}\u{2587}";

/// Stand-in drawn where a chart would be when its data is missing. Title
/// and message fall back to the defaults when absent or empty.
#[derive(Debug, Clone)]
pub struct Placeholder<'a> {
    id: String,
    title: Option<&'a str>,
    message: Option<&'a str>,
}

impl<'a> Placeholder<'a> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            message: None,
        }
    }

    pub fn title(mut self, title: Option<&'a str>) -> Self {
        self.title = title;
        self
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn resolved_title(&self) -> &'a str {
        self.title.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TITLE)
    }

    pub fn resolved_message(&self) -> &'a str {
        self.message
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MESSAGE)
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    placeholder: &Placeholder,
    theme: &Theme,
    regions: &mut RegionMap,
) {
    regions.register(placeholder.id(), area);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let width = area.width as usize;
    let message = placeholder.resolved_message();
    let message_rows = wrapped_rows(message, width);

    let lines = vec![
        Line::from(Span::styled(
            ICON,
            Style::default().fg(theme.placeholder_icon),
        )),
        Line::from(Span::styled(
            truncate_unicode(placeholder.resolved_title(), width),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            message,
            Style::default().fg(theme.text_secondary),
        )),
    ];

    let height = (2 + message_rows).min(area.height);
    let [body] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
}

/// Rows `text` takes when word-wrapped to `width`. Words wider than a row
/// are split across rows.
fn wrapped_rows(text: &str, width: usize) -> u16 {
    if width == 0 {
        return 1;
    }
    let mut rows: usize = 1;
    let mut line = 0;
    for word in text.split_whitespace() {
        let word_width = word.width();
        if line == 0 {
            line = word_width;
        } else if line + 1 + word_width <= width {
            line += 1 + word_width;
        } else {
            rows += 1;
            line = word_width;
        }
        while line > width {
            rows += 1;
            line -= width;
        }
    }
    u16::try_from(rows).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_overrides() {
        let placeholder = Placeholder::new("vm-no-live-data");
        assert_eq!(placeholder.resolved_title(), DEFAULT_TITLE);
        assert_eq!(placeholder.resolved_message(), DEFAULT_MESSAGE);
        assert_eq!(placeholder.id(), "vm-no-live-data");
    }

    #[test]
    fn overrides_replace_defaults() {
        let placeholder = Placeholder::new("x")
            .title(Some("Offline"))
            .message(Some("Network utilization is not currently available for this VM."));
        assert_eq!(placeholder.resolved_title(), "Offline");
        assert_eq!(
            placeholder.resolved_message(),
            "Network utilization is not currently available for this VM."
        );
    }

    #[test]
    fn wrapped_rows_follow_word_breaks() {
        // 23 columns of text, but whole words only fit one per 8-wide row.
        assert_eq!(wrapped_rows("aaaaa bbbbb ccccc ddddd", 8), 4);
        assert_eq!(wrapped_rows("aaa bbb", 7), 1);
        assert_eq!(wrapped_rows("", 10), 1);
        assert_eq!(wrapped_rows("abcdefghijkl", 5), 3);
    }

    #[test]
    fn empty_override_uses_default() {
        let placeholder = Placeholder::new("x").title(Some("")).message(Some(""));
        assert_eq!(placeholder.resolved_title(), DEFAULT_TITLE);
        assert_eq!(placeholder.resolved_message(), DEFAULT_MESSAGE);
    }
}
