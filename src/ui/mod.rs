pub mod card;
pub mod placeholder;
pub mod regions;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

use crate::app::App;

const CARD_MAX_WIDTH: u16 = 64;
const CARD_MAX_HEIGHT: u16 = 16;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    app.regions.clear();
    let props = card::CardProps {
        id: &app.card_id,
        title: &app.card_title,
        unavailable_message: &app.unavailable_message,
        snapshot: &app.snapshot,
        is_running: app.vm_running,
    };
    let state = card::render(
        frame,
        card_area(chunks[0]),
        &props,
        &app.theme,
        &mut app.regions,
    );
    app.record_state(state);

    let status = app
        .status_message
        .as_ref()
        .map(|(msg, is_error, _)| (msg.as_str(), *is_error));
    statusbar::render(
        frame,
        chunks[1],
        status,
        state,
        &app.keybinds.hints(),
        &app.theme,
    );
}

fn card_area(area: Rect) -> Rect {
    let [vert] = Layout::vertical([Constraint::Max(CARD_MAX_HEIGHT)])
        .flex(Flex::Center)
        .areas(area);
    let [horiz] = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(vert);
    horiz
}
