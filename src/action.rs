#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Reload,
    ToggleRunning,
    None,
}
