use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, KeybindsConfig, parse_key};
use crate::presentation::PresentationState;
use crate::stats::loader::load_snapshot;
use crate::stats::snapshot::StatisticsSnapshot;
use crate::ui::regions::RegionMap;
use crate::ui::theme::Theme;

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub reload: KeyCode,
    pub toggle_running: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            reload: parse_key(&kb.reload).unwrap_or(KeyCode::Char('r')),
            toggle_running: parse_key(&kb.toggle_running).unwrap_or(KeyCode::Char('p')),
        }
    }

    /// Returns (key_label, description) pairs for the status bar.
    pub fn hints(&self) -> Vec<(String, &'static str)> {
        vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.reload), "Reload"),
            (key_label(self.toggle_running), "Power"),
        ]
    }
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        _ => "?".to_string(),
    }
}

pub struct App {
    pub running: bool,
    pub vm_running: bool,
    pub snapshot: StatisticsSnapshot,
    pub stats_path: Option<PathBuf>,
    pub card_id: String,
    pub card_title: String,
    pub unavailable_message: String,
    pub theme: Theme,
    pub regions: RegionMap,
    pub status_message: Option<(String, bool, Instant)>,
    pub keybinds: ResolvedKeybinds,
    last_state: Option<PresentationState>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let snapshot = config
            .general
            .stats_path
            .as_deref()
            .map(load_snapshot)
            .unwrap_or_default();
        Self::with_snapshot(config, snapshot)
    }

    pub fn with_snapshot(config: Config, snapshot: StatisticsSnapshot) -> Self {
        let theme = Theme::from_config(&config.colors.theme);
        let keybinds = ResolvedKeybinds::from_config(&config.keybinds);
        let vm_running = config.general.is_running();

        App {
            running: true,
            vm_running,
            snapshot,
            stats_path: config.general.stats_path,
            card_id: config.general.card_id,
            card_title: config.card.title,
            unavailable_message: config.card.unavailable_message,
            theme,
            regions: RegionMap::default(),
            status_message: None,
            keybinds,
            last_state: None,
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        match key.code {
            code if code == self.keybinds.quit => Action::Quit,
            code if code == self.keybinds.reload => Action::Reload,
            code if code == self.keybinds.toggle_running => Action::ToggleRunning,
            _ => Action::None,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Reload => self.reload(),
            Action::ToggleRunning => {
                self.vm_running = !self.vm_running;
                tracing::info!(vm_running = self.vm_running, "toggled VM running flag");
                let msg = if self.vm_running {
                    "VM marked as running"
                } else {
                    "VM marked as down"
                };
                self.set_status(msg, false);
            }
            Action::None => {}
        }
    }

    /// Re-reads the snapshot file. Without a configured file the snapshot
    /// stays as it is.
    pub fn reload(&mut self) {
        let Some(path) = self.stats_path.clone() else {
            self.set_status("No statistics file configured", true);
            return;
        };
        self.snapshot = load_snapshot(&path);
        let msg = format!("Reloaded {} metrics", self.snapshot.len());
        self.set_status(&msg, false);
    }

    pub fn presentation_state(&self) -> PresentationState {
        PresentationState::from_snapshot(&self.snapshot, self.vm_running)
    }

    /// Remembers the state of the last draw, logging when it changes.
    pub fn record_state(&mut self, state: PresentationState) {
        if self.last_state != Some(state) {
            tracing::info!(card = %self.card_id, state = state.label(), "card state changed");
            self.last_state = Some(state);
        }
    }

    /// Clears an expired status message. Returns true when a redraw is needed.
    pub fn on_tick(&mut self) -> bool {
        let expired = matches!(
            &self.status_message,
            Some((_, _, at)) if at.elapsed() >= STATUS_TTL
        );
        if expired {
            self.status_message = None;
        }
        expired
    }

    fn set_status(&mut self, msg: &str, is_error: bool) {
        self.status_message = Some((msg.to_string(), is_error, Instant::now()));
    }
}
