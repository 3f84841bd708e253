//! Backend commands queued from UI to backend worker.

use shared::domain::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    LoadTheme,
    ToggleTheme,
    SaveTheme(ThemeMode),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadTheme => "load_theme",
            BackendCommand::ToggleTheme => "toggle_theme",
            BackendCommand::SaveTheme(_) => "save_theme",
        }
    }
}
